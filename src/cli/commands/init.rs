use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes `~/.rbikeshare/rbikeshare.conf` with default values. In test mode
/// nothing is written; the paths are only reported.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rBikeshare…");

    let path = Config::init_all(cli.test)?;
    let cfg = Config::default();

    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir    : {}", cfg.data_path().display());

    if cli.test {
        info("Test mode: configuration file not written");
    } else {
        success(format!("Configuration written to {}", path.display()));
    }
    Ok(())
}
