//! Age computation and age-category bucketing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Birth date format used in the roster file (`dd.mm.yyyy`).
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Age bucket of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeCategory {
    YoungerThan18,
    From18To45,
    From45To70,
    OlderThan70,
}

impl AgeCategory {
    /// All categories, youngest first.
    pub const ALL: [AgeCategory; 4] = [
        AgeCategory::YoungerThan18,
        AgeCategory::From18To45,
        AgeCategory::From45To70,
        AgeCategory::OlderThan70,
    ];

    /// Position in [`AgeCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            AgeCategory::YoungerThan18 => 0,
            AgeCategory::From18To45 => 1,
            AgeCategory::From45To70 => 2,
            AgeCategory::OlderThan70 => 3,
        }
    }

    /// Workbook sheet name for the category.
    pub fn sheet_name(self) -> &'static str {
        match self {
            AgeCategory::YoungerThan18 => "younger_18",
            AgeCategory::From18To45 => "18-45",
            AgeCategory::From45To70 => "45-70",
            AgeCategory::OlderThan70 => "older_70",
        }
    }

    /// Human-readable name used in reports and chart titles.
    pub fn display_name(self) -> &'static str {
        match self {
            AgeCategory::YoungerThan18 => "До 18 років",
            AgeCategory::From18To45 => "18-45 років",
            AgeCategory::From45To70 => "45-70 років",
            AgeCategory::OlderThan70 => "Старше 70 років",
        }
    }

    /// Short axis label for bar charts.
    pub fn short_label(self) -> &'static str {
        match self {
            AgeCategory::YoungerThan18 => "До 18",
            AgeCategory::From18To45 => "18-45",
            AgeCategory::From45To70 => "45-70",
            AgeCategory::OlderThan70 => "Старше 70",
        }
    }
}

/// Inclusive upper bounds of the first three age buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBands {
    /// Oldest age still counted as younger than 18.
    pub minor_max: i32,
    /// Oldest age in the 18-45 bucket.
    pub adult_max: i32,
    /// Oldest age in the 45-70 bucket.
    pub middle_max: i32,
}

impl Default for AgeBands {
    fn default() -> Self {
        Self {
            minor_max: 17,
            adult_max: 45,
            middle_max: 70,
        }
    }
}

impl AgeBands {
    /// Map an age to its bucket.
    pub fn categorize(&self, age: i32) -> AgeCategory {
        if age <= self.minor_max {
            AgeCategory::YoungerThan18
        } else if age <= self.adult_max {
            AgeCategory::From18To45
        } else if age <= self.middle_max {
            AgeCategory::From45To70
        } else {
            AgeCategory::OlderThan70
        }
    }

    /// Bounds must be strictly increasing.
    pub fn is_ordered(&self) -> bool {
        self.minor_max < self.adult_max && self.adult_max < self.middle_max
    }
}

/// Age and category derived from a stored birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAge {
    pub age: i32,
    pub category: AgeCategory,
    /// `false` when the birth date could not be parsed and the age fell back to 0.
    pub birth_date_valid: bool,
}

/// Why a stored birth date could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("unexpected whitespace")]
    Whitespace,

    #[error(transparent)]
    Format(#[from] chrono::ParseError),
}

/// Parse a `dd.mm.yyyy` birth date.
///
/// Whitespace anywhere is rejected; chrono alone would skip it before numbers.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, BirthDateError> {
    if value.chars().any(char::is_whitespace) {
        return Err(BirthDateError::Whitespace);
    }
    Ok(NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)?)
}

/// Full years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Derive age and category from the raw birth date text.
///
/// An unparseable date is logged and treated as age 0.
pub fn derive_age(birth_date: &str, today: NaiveDate, bands: &AgeBands) -> DerivedAge {
    let (age, birth_date_valid) = match parse_birth_date(birth_date) {
        Ok(birth) => (age_on(birth, today), true),
        Err(e) => {
            warn!("Cannot compute age for birth date {birth_date:?}: {e}");
            (0, false)
        }
    };

    DerivedAge {
        age,
        category: bands.categorize(age),
        birth_date_valid,
    }
}
