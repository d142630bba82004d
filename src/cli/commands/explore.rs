use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use std::io;

/// Run the interactive session on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(cfg, stdin.lock(), stdout.lock()).run()
}
