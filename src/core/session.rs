//! Interactive controller: collect filters, load, report, page, restart.

use crate::config::Config;
use crate::core::pager::{self, Pager};
use crate::core::{filter, loader, stats};
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::models::table::{TripTable, TripView};
use crate::ui::messages::{Level, line};
use crate::ui::prompt::{ask_choice, ask_yes};
use std::io::{BufRead, Write};

pub const CITY_PROMPT: &str = "Choose a city (Chicago, New York City, Washington): ";
pub const MONTH_PROMPT: &str = "Select a month (January to June) or 'all': ";
pub const DAY_PROMPT: &str = "Pick a day (Monday to Sunday) or 'all': ";
pub const RESTART_PROMPT: &str = "\nWould you like to restart the analysis? Enter yes or no.\n";

/// A loaded table and the rows the filters kept.
struct Run {
    selection: FilterSelection,
    table: TripTable,
    rows: Vec<usize>,
}

impl Run {
    fn view(&self) -> TripView<'_> {
        TripView::new(&self.table, self.rows.as_slice())
    }
}

enum State {
    CollectFilters,
    Load(FilterSelection),
    Report(Run),
    Page(Run),
    AskRestart,
    Done,
}

pub struct Session<'c, R, W> {
    cfg: &'c Config,
    input: R,
    out: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(cfg: &'c Config, input: R, out: W) -> Self {
        Self { cfg, input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Loop until the user declines a restart or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = State::CollectFilters;

        while !matches!(state, State::Done) {
            state = match self.step(state) {
                Ok(next) => next,
                Err(AppError::InputClosed) => {
                    log::debug!("input closed, ending session");
                    writeln!(self.out)?;
                    State::Done
                }
                Err(e) => return Err(e),
            };
        }

        Ok(())
    }

    fn step(&mut self, state: State) -> AppResult<State> {
        match state {
            State::CollectFilters => Ok(State::Load(self.collect_filters()?)),
            State::Load(selection) => self.load(selection),
            State::Report(run) => {
                log::debug!("reporting {}", run.selection);
                stats::write_all(&mut self.out, &run.view(), &self.cfg.separator())?;
                Ok(State::Page(run))
            }
            State::Page(run) => {
                self.page(&run.view())?;
                Ok(State::AskRestart)
            }
            State::AskRestart => {
                if ask_yes(&mut self.input, &mut self.out, RESTART_PROMPT)? {
                    Ok(State::CollectFilters)
                } else {
                    Ok(State::Done)
                }
            }
            State::Done => Ok(State::Done),
        }
    }

    fn collect_filters(&mut self) -> AppResult<FilterSelection> {
        writeln!(self.out, "\nHello! Let's explore some US bikeshare data!\n")?;

        let city = ask_choice(&mut self.input, &mut self.out, CITY_PROMPT, City::from_input)?;
        let month = ask_choice(
            &mut self.input,
            &mut self.out,
            MONTH_PROMPT,
            MonthFilter::from_input,
        )?;
        let day = ask_choice(&mut self.input, &mut self.out, DAY_PROMPT, DayFilter::from_input)?;

        let selection = FilterSelection::new(city, month, day);
        writeln!(self.out, "{}", self.cfg.separator())?;
        Ok(selection)
    }

    fn load(&mut self, selection: FilterSelection) -> AppResult<State> {
        let table = match loader::load_city(self.cfg, selection.city) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("load failed for {}: {e}", selection.city);
                writeln!(
                    self.out,
                    "{}",
                    line(
                        Level::Error,
                        format!("Could not load data for {}: {e}", selection.city)
                    )
                )?;
                return Ok(State::AskRestart);
            }
        };

        let rows = filter::apply_selection(&table, &selection).into_rows();
        writeln!(
            self.out,
            "{}",
            line(
                Level::Info,
                format!("{selection} | {} of {} trips", rows.len(), table.len())
            )
        )?;

        Ok(State::Report(Run {
            selection,
            table,
            rows,
        }))
    }

    fn page(&mut self, view: &TripView<'_>) -> AppResult<()> {
        let prompt = format!(
            "Would you like to view {} rows of raw data? Enter yes or no: ",
            self.cfg.raw_page_size
        );
        let mut paging = Pager::new(view.len(), self.cfg.raw_page_size);

        while ask_yes(&mut self.input, &mut self.out, &prompt)? {
            let Some(page) = paging.next_page() else {
                break;
            };
            pager::write_page(&mut self.out, view, &page)?;
            if page.exhausted {
                writeln!(self.out, "{}", pager::NO_MORE_DATA)?;
                break;
            }
        }

        Ok(())
    }
}
