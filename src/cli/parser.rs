use crate::models::city::City;
use crate::models::filter::{ALL, DAYS, DayFilter, MONTHS, MonthFilter};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBikeshare
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter trips by month and day, print travel statistics and raw rows",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive explorer starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check which city files are present in the data directory"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the interactive explorer (same as running without a subcommand)
    Explore,

    /// Print statistics for one city and filter selection, without prompts
    Stats {
        /// City: chicago, "new york city", washington
        #[arg(long, short = 'c', value_parser = parse_city)]
        city: City,

        /// Month: january..june, or all
        #[arg(long, short = 'm', default_value = ALL, value_parser = parse_month)]
        month: MonthFilter,

        /// Day of week: monday..sunday, or all
        #[arg(long, short = 'd', default_value = ALL, value_parser = parse_day)]
        day: DayFilter,

        /// Also print up to PAGES pages of raw rows
        #[arg(long, value_name = "PAGES")]
        raw: Option<usize>,
    },
}

fn parse_city(s: &str) -> Result<City, String> {
    City::from_input(s).ok_or_else(|| {
        let names: Vec<&str> = City::all().map(|c| c.key()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_month(s: &str) -> Result<MonthFilter, String> {
    MonthFilter::from_input(s)
        .ok_or_else(|| format!("expected one of: {}, {ALL}", MONTHS.join(", ")))
}

fn parse_day(s: &str) -> Result<DayFilter, String> {
    DayFilter::from_input(s).ok_or_else(|| {
        let names: Vec<&str> = DAYS.iter().map(|(name, _)| *name).collect();
        format!("expected one of: {}, {ALL}", names.join(", "))
    })
}
