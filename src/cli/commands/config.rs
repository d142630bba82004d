use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::ui::messages::{error, success, warning};
use crate::utils::path::city_file;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            check_data_files(cfg);
        }

        if *edit_config {
            edit(editor.as_deref());
        }
    }

    Ok(())
}

fn check_data_files(cfg: &Config) {
    let dir = cfg.data_path();
    println!("🗂️  Data dir: {}\n", dir.display());

    for city in City::all() {
        let path = city_file(&dir, city);
        if path.is_file() {
            success(format!("{:<14} {}", city.display_name(), path.display()));
        } else {
            warning(format!("{:<14} missing: {}", city.display_name(), path.display()));
        }
    }
}

fn edit(requested: Option<&str>) {
    let path = Config::config_file();

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{default_editor}'"));
                }
                _ => error(format!("Failed to edit configuration file with '{default_editor}'")),
            }
        }
        _ => error(format!("Failed to edit configuration file with '{editor_to_use}'")),
    }
}
