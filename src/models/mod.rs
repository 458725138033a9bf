//! Roster data model and the age derivation shared by every job.

pub mod age;
pub mod employee;

pub use age::{AgeBands, AgeCategory, BirthDateError, DerivedAge, age_on, derive_age, parse_birth_date};
pub use employee::{EmployeeRecord, EnrichedEmployee, Gender, ROSTER_HEADERS, enrich};
