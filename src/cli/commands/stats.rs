use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pager::{self, Pager};
use crate::core::{filter, loader, stats};
use crate::errors::AppResult;
use crate::models::filter::FilterSelection;
use crate::ui::messages::{header, info};
use std::io::{self, Write};

/// Handle the `stats` subcommand: one non-interactive analysis run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        raw,
    } = cmd
    {
        let selection = FilterSelection::new(*city, *month, *day);
        let table = loader::load_city(cfg, selection.city)?;
        let view = filter::apply_selection(&table, &selection);

        header(selection);
        info(format!("{} of {} trips selected", view.len(), table.len()));

        let mut out = io::stdout().lock();
        stats::write_all(&mut out, &view, &cfg.separator())?;

        if let Some(pages) = raw {
            let mut paging = Pager::new(view.len(), cfg.raw_page_size);
            for _ in 0..*pages {
                let Some(page) = paging.next_page() else {
                    break;
                };
                pager::write_page(&mut out, &view, &page)?;
                if page.exhausted {
                    writeln!(out, "{}", pager::NO_MORE_DATA)?;
                    break;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
