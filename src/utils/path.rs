//! Path utilities: expand ~, resolve city files inside the data directory.

use crate::models::city::City;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn city_file(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}
