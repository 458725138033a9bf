//! Roster generation job.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{AppError, Result};
use crate::fake::PersonSource;
use crate::models::{EmployeeRecord, Gender};
use crate::models::age::BIRTH_DATE_FORMAT;
use crate::roster::RosterWriter;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub requested: usize,
    pub written: usize,
    pub male: usize,
    pub female: usize,
}

impl GenerateResult {
    /// Get summary message.
    pub fn summary(&self) -> String {
        format!(
            "Created '{}' with {} records\n   - Чоловіків: {} ({:.1}%)\n   - Жінок: {} ({:.1}%)",
            self.path.display(),
            self.written,
            self.male,
            share(self.male, self.requested),
            self.female,
            share(self.female, self.requested),
        )
    }
}

fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Fixed-ratio gender labels for `count` records, in random order.
///
/// Both counts are floored, so the plan can be shorter than `count`.
pub fn gender_plan<R: Rng + ?Sized>(count: usize, male_percent: u32, rng: &mut R) -> Vec<Gender> {
    let male_percent = male_percent.min(100) as usize;
    let male = count * male_percent / 100;
    let female = count * (100 - male_percent) / 100;

    let mut plan = Vec::with_capacity(male + female);
    plan.extend(std::iter::repeat_n(Gender::Male, male));
    plan.extend(std::iter::repeat_n(Gender::Female, female));
    plan.shuffle(rng);
    plan
}

/// Generates roster records from a [`PersonSource`].
pub struct RosterGenerator<'a, S, R> {
    config: &'a GeneratorConfig,
    source: S,
    rng: R,
    today: NaiveDate,
}

impl<'a, S: PersonSource, R: Rng> RosterGenerator<'a, S, R> {
    /// Create a generator; `rng` drives the gender plan and patronymic choice.
    pub fn new(config: &'a GeneratorConfig, source: S, rng: R, today: NaiveDate) -> Self {
        Self {
            config,
            source,
            rng,
            today,
        }
    }

    /// Produce one record of the given gender.
    pub fn record(&mut self, gender: Gender) -> Result<EmployeeRecord> {
        let patronymics = match gender {
            Gender::Male => &self.config.male_patronymics,
            Gender::Female => &self.config.female_patronymics,
        };
        let patronymic = patronymics
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| AppError::validation("Patronymic list is empty"))?;

        let birth_date = self
            .source
            .date_of_birth(self.today, self.config.min_age, self.config.max_age);

        Ok(EmployeeRecord {
            surname: self.source.last_name(gender),
            first_name: self.source.first_name(gender),
            patronymic,
            gender,
            birth_date: birth_date.format(BIRTH_DATE_FORMAT).to_string(),
            position: self.source.job(),
            city: self.source.city(),
            address: self.source.address().replace('\n', ", "),
            phone: self.source.phone_number(),
            email: self.source.email(),
        })
    }

    /// Generate `count` records and stream them to `path`.
    pub fn write_roster(&mut self, path: &Path, count: usize) -> Result<GenerateResult> {
        let plan = gender_plan(count, self.config.male_percent, &mut self.rng);
        let male = plan.iter().filter(|g| **g == Gender::Male).count();
        let female = plan.len() - male;

        info!(
            "Generating {} records ({male} male, {female} female) into {}",
            plan.len(),
            path.display()
        );

        let progress_every = self.config.progress_every.max(1);
        let mut writer = RosterWriter::create(path)?;
        for (i, gender) in plan.into_iter().enumerate() {
            let record = self.record(gender)?;
            writer.write(&record)?;

            let done = i + 1;
            if done % progress_every == 0 {
                info!("Generated {done} records...");
            }
        }
        let written = writer.written();
        writer.finish()?;

        info!("Roster written: {written} records");

        Ok(GenerateResult {
            path: path.to_path_buf(),
            requested: count,
            written,
            male,
            female,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_gender_plan_default_split() {
        let mut rng = StdRng::seed_from_u64(9);
        let plan = gender_plan(500, 60, &mut rng);
        assert_eq!(plan.len(), 500);
        assert_eq!(plan.iter().filter(|g| **g == Gender::Male).count(), 300);
        assert_eq!(plan.iter().filter(|g| **g == Gender::Female).count(), 200);
    }

    #[test]
    fn test_gender_plan_drops_remainder() {
        let mut rng = StdRng::seed_from_u64(9);
        let plan = gender_plan(7, 60, &mut rng);
        // floor(4.2) + floor(2.8)
        assert_eq!(plan.len(), 6);
    }

    #[test]
    fn test_gender_plan_is_shuffled() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = gender_plan(100, 60, &mut rng);
        let sorted = plan.windows(2).all(|w| !(w[0] == Gender::Female && w[1] == Gender::Male));
        assert!(!sorted);
    }

    #[test]
    fn test_summary_percentages() {
        let result = GenerateResult {
            path: PathBuf::from("employees.csv"),
            requested: 500,
            written: 500,
            male: 300,
            female: 200,
        };
        let summary = result.summary();
        assert!(summary.contains("Чоловіків: 300 (60.0%)"));
        assert!(summary.contains("Жінок: 200 (40.0%)"));
    }

    proptest! {
        #[test]
        fn gender_plan_counts_are_floored(count in 0usize..2000, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = gender_plan(count, 60, &mut rng);
            let male = plan.iter().filter(|g| **g == Gender::Male).count();
            let female = plan.iter().filter(|g| **g == Gender::Female).count();
            prop_assert_eq!(male, count * 6 / 10);
            prop_assert_eq!(female, count * 4 / 10);
            prop_assert!(male + female <= count);
        }
    }
}
