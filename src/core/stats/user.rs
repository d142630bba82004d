use super::{NO_TRIPS, Report, mode::{mode, value_counts}};
use crate::models::table::TripView;
use crate::utils::formatting::{pad_left, pad_right};
use std::fmt;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider demographics.
///
/// `genders` and `birth_years` are `None` when the city source has no such
/// column; rows with an empty cell are left out of every count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub trips: usize,
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl Report for UserStats {
    const TITLE: &'static str = "Analyzing User Demographics...";

    fn compute(view: &TripView<'_>) -> Self {
        let columns = view.columns();

        let user_types = owned_counts(view.iter().filter_map(|t| t.user_type.as_deref()));

        let genders = columns
            .gender
            .then(|| owned_counts(view.iter().filter_map(|t| t.gender.as_deref())));

        let birth_years = if columns.birth_year {
            let years: Vec<i32> = view.iter().filter_map(|t| t.birth_year).collect();
            match (years.iter().min(), years.iter().max(), mode(years.iter().copied())) {
                (Some(&earliest), Some(&latest), Some(most_common)) => Some(BirthYearStats {
                    earliest,
                    latest,
                    most_common,
                }),
                _ => None,
            }
        } else {
            None
        };

        Self {
            trips: view.len(),
            user_types,
            genders,
            birth_years,
        }
    }
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

fn write_counts(f: &mut fmt::Formatter<'_>, title: &str, counts: &[(String, usize)]) -> fmt::Result {
    writeln!(f, "{title}:")?;
    let width = counts.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let digits = counts.iter().map(|(_, n)| n.to_string().len()).max().unwrap_or(0);
    for (k, n) in counts {
        writeln!(f, "  {} {}", pad_right(k, width), pad_left(&n.to_string(), digits))?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trips == 0 {
            return writeln!(f, "{NO_TRIPS}");
        }

        write_counts(f, "User Types Count", &self.user_types)?;

        if let Some(genders) = &self.genders {
            write_counts(f, "Gender Count", genders)?;
        }

        if let Some(years) = &self.birth_years {
            writeln!(f, "Earliest Birth Year: {}", years.earliest)?;
            writeln!(f, "Latest Birth Year: {}", years.latest)?;
            writeln!(f, "Most Frequent Birth Year: {}", years.most_common)?;
        }

        Ok(())
    }
}
