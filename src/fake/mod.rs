//! Fake personal data providers used by the roster generator.

mod uk;

use chrono::NaiveDate;

use crate::models::Gender;

pub use uk::UkrainianFaker;

/// Source of random personal data.
///
/// The generator depends only on this trait, so tests can plug in fixed data.
pub trait PersonSource {
    fn first_name(&mut self, gender: Gender) -> String;
    fn last_name(&mut self, gender: Gender) -> String;
    fn job(&mut self) -> String;
    fn city(&mut self) -> String;
    /// Postal address, possibly spanning several lines.
    fn address(&mut self) -> String;
    fn phone_number(&mut self) -> String;
    fn email(&mut self) -> String;
    /// Birth date giving an age within `min_age..=max_age` on `today`.
    fn date_of_birth(&mut self, today: NaiveDate, min_age: u32, max_age: u32) -> NaiveDate;
}
