#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbikeshare::config::Config;
use rbikeshare::core::loader::load_from_reader;
use rbikeshare::models::city::City;
use rbikeshare::models::table::TripTable;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbikeshare")
}

/// Seven Chicago trips: four in March, three on Mondays.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:05:00,2017-01-02 08:10:00,300,Canal St,Clark St,Subscriber,Male,1980.0
2,2017-03-06 08:10:00,2017-03-06 08:20:00,600,Canal St,Clark St,Subscriber,Female,1990.0
3,2017-03-06 17:20:00,2017-03-06 17:35:00,900,Lake Shore Dr,Canal St,Customer,,
4,2017-03-07 08:30:00,2017-03-07 08:50:00,1200,Clark St,Canal St,Subscriber,Male,1990.0
5,2017-03-11 12:00:00,2017-03-11 12:25:00,1500,Lake Shore Dr,Clark St,Customer,Female,1985.0
6,2017-06-04 17:45:00,2017-06-04 18:15:00,1800,Canal St,Lake Shore Dr,Subscriber,Male,1975.0
7,2017-02-14 08:00:00,2017-02-14 08:07:00,420,Clark St,Clark St,Subscriber,Female,1990.0
";

/// Twelve Washington trips in April, no gender or birth-year columns,
/// durations written as decimals.
pub fn washington_csv() -> String {
    let mut csv = String::from(",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n");
    for i in 0..12 {
        let day = i + 1;
        let user = if i % 2 == 0 { "Subscriber" } else { "Customer" };
        csv.push_str(&format!(
            "{i},2017-04-{day:02} 09:00:00,2017-04-{day:02} 09:30:00,{}.0,Station {},Station Z,{user}\n",
            60 * (i + 1),
            i % 3
        ));
    }
    csv
}

pub fn chicago_table() -> TripTable {
    load_from_reader(City::Chicago, "chicago fixture", CHICAGO_CSV.as_bytes()).expect("load chicago")
}

pub fn washington_table() -> TripTable {
    let csv = washington_csv();
    load_from_reader(City::Washington, "washington fixture", csv.as_bytes())
        .expect("load washington")
}

/// Fresh data dir under the system temp dir with chicago.csv and
/// washington.csv (new_york_city.csv is left out on purpose).
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(path.join("washington.csv"), washington_csv()).expect("write washington.csv");
    path
}

pub fn config_for(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}
