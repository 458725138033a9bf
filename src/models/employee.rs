//! Employee roster record and its derived view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::age::{AgeBands, AgeCategory, derive_age};

/// Column headers of the roster file, in file order.
pub const ROSTER_HEADERS: [&str; 10] = [
    "Прізвище",
    "Імя",
    "По бат",
    "Стать",
    "Дата народження",
    "Посада",
    "Місто проживання",
    "Адреса прож",
    "Телефон",
    "Email",
];

/// Employee gender, stored as a one-letter label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Ч")]
    Male,
    #[serde(rename = "Ж")]
    Female,
}

impl Gender {
    /// Both genders, male first.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Label written to the roster file.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Ч",
            Gender::Female => "Ж",
        }
    }

    /// Plural name used in reports and chart legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Male => "Чоловіки",
            Gender::Female => "Жінки",
        }
    }
}

/// One row of the shared roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Прізвище")]
    pub surname: String,
    #[serde(rename = "Імя")]
    pub first_name: String,
    #[serde(rename = "По бат")]
    pub patronymic: String,
    #[serde(rename = "Стать")]
    pub gender: Gender,
    /// Raw `dd.mm.yyyy` text; may be malformed in hand-edited files.
    #[serde(rename = "Дата народження")]
    pub birth_date: String,
    #[serde(rename = "Посада")]
    pub position: String,
    #[serde(rename = "Місто проживання")]
    pub city: String,
    #[serde(rename = "Адреса прож")]
    pub address: String,
    #[serde(rename = "Телефон")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl EmployeeRecord {
    /// Field values in [`ROSTER_HEADERS`] order.
    pub fn fields(&self) -> [&str; 10] {
        [
            &self.surname,
            &self.first_name,
            &self.patronymic,
            self.gender.label(),
            &self.birth_date,
            &self.position,
            &self.city,
            &self.address,
            &self.phone,
            &self.email,
        ]
    }
}

/// Roster record with age and category computed for the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEmployee {
    pub record: EmployeeRecord,
    pub age: i32,
    pub category: AgeCategory,
    pub birth_date_valid: bool,
}

impl EnrichedEmployee {
    /// Derive age fields for a record as of `today`.
    pub fn new(record: EmployeeRecord, today: NaiveDate, bands: &AgeBands) -> Self {
        let derived = derive_age(&record.birth_date, today, bands);
        Self {
            record,
            age: derived.age,
            category: derived.category,
            birth_date_valid: derived.birth_date_valid,
        }
    }
}

/// Enrich a whole roster, keeping source order.
pub fn enrich(records: Vec<EmployeeRecord>, today: NaiveDate, bands: &AgeBands) -> Vec<EnrichedEmployee> {
    records
        .into_iter()
        .map(|record| EnrichedEmployee::new(record, today, bands))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a record with placeholder descriptive fields.
    pub fn record(surname: &str, gender: Gender, birth_date: &str) -> EmployeeRecord {
        EmployeeRecord {
            surname: surname.to_string(),
            first_name: "Олена".to_string(),
            patronymic: "Іванівна".to_string(),
            gender,
            birth_date: birth_date.to_string(),
            position: "Бухгалтер".to_string(),
            city: "Київ".to_string(),
            address: "вул. Шевченка, 1, Київ".to_string(),
            phone: "+380 44 123 45 67".to_string(),
            email: "olena@example.com".to_string(),
        }
    }
}
