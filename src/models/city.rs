use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// Supported cities with their lowercase input name and source file.
pub static CITY_DATA: [(City, &str, &str); 3] = [
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    pub fn all() -> impl Iterator<Item = City> {
        CITY_DATA.iter().map(|(c, _, _)| *c)
    }

    /// Lowercase name, as typed at the prompt
    pub fn key(&self) -> &'static str {
        Self::entry(*self).1
    }

    /// CSV file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        Self::entry(*self).2
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Case-insensitive lookup: "Chicago", " new york city " → Some(..)
    pub fn from_input(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        CITY_DATA
            .iter()
            .find(|(_, name, _)| *name == key)
            .map(|(c, _, _)| *c)
    }

    fn entry(city: City) -> &'static (City, &'static str, &'static str) {
        // every variant has exactly one row in CITY_DATA
        match city {
            City::Chicago => &CITY_DATA[0],
            City::NewYorkCity => &CITY_DATA[1],
            City::Washington => &CITY_DATA[2],
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
