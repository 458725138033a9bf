//! Roster statistics: counts by gender, by age category, and both combined.

use std::fmt;

use crate::models::{AgeCategory, EnrichedEmployee, Gender};

const RULE: &str = "======================================================================";
const NO_DATA: &str = "Немає даних";

/// Number of employees per gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

impl GenderCounts {
    pub fn add(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    pub fn get(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

/// Aggregated view of a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub gender: GenderCounts,
    /// Count per category, indexed like [`AgeCategory::ALL`].
    pub by_category: [usize; 4],
    /// Gender split inside each category.
    pub gender_by_category: [GenderCounts; 4],
    /// Records whose birth date could not be parsed.
    pub undated: usize,
}

impl RosterStats {
    /// Aggregate enriched records.
    pub fn from_employees(employees: &[EnrichedEmployee]) -> Self {
        let mut stats = Self::default();
        for employee in employees {
            let idx = employee.category.index();
            stats.gender.add(employee.record.gender);
            stats.by_category[idx] += 1;
            stats.gender_by_category[idx].add(employee.record.gender);
            if !employee.birth_date_valid {
                stats.undated += 1;
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.gender.total()
    }

    pub fn category_count(&self, category: AgeCategory) -> usize {
        self.by_category[category.index()]
    }

    pub fn category_genders(&self, category: AgeCategory) -> GenderCounts {
        self.gender_by_category[category.index()]
    }
}

/// `part` as a percentage of `whole`; `None` for an empty whole.
pub fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// Three-section text report over [`RosterStats`], written through `Display`.
pub struct Report<'a>(&'a RosterStats);

impl RosterStats {
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

fn count_line(f: &mut fmt::Formatter<'_>, indent: &str, label: &str, part: usize, whole: usize) -> fmt::Result {
    match percent(part, whole) {
        Some(p) => writeln!(f, "{indent}- {label}: {part} ({p:.1}%)"),
        None => writeln!(f, "{indent}- {label}: {part}"),
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}\n{title}\n{RULE}")
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        let total = stats.total();

        section(f, "1. СТАТИСТИКА ЗА СТАТТЮ")?;
        if total == 0 {
            writeln!(f, "   - {NO_DATA}")?;
        } else {
            count_line(f, "   ", "Чоловіків", stats.gender.male, total)?;
            count_line(f, "   ", "Жінок", stats.gender.female, total)?;
        }
        writeln!(f, "   - Всього: {total}\n")?;

        section(f, "2. СТАТИСТИКА ЗА ВІКОВИМИ КАТЕГОРІЯМИ")?;
        if total == 0 {
            writeln!(f, "   - {NO_DATA}")?;
        } else {
            for category in AgeCategory::ALL {
                count_line(f, "   ", category.display_name(), stats.category_count(category), total)?;
            }
        }
        writeln!(f, "   - Всього: {total}")?;
        if stats.undated > 0 {
            writeln!(f, "   - З них без коректної дати народження (вік 0): {}", stats.undated)?;
        }
        writeln!(f)?;

        section(f, "3. СТАТИСТИКА ЗА СТАТТЮ В КОЖНІЙ ВІКОВІЙ КАТЕГОРІЇ")?;
        for category in AgeCategory::ALL {
            let counts = stats.category_genders(category);
            let subtotal = counts.total();
            writeln!(f, "\n   {}:", category.display_name())?;
            if subtotal == 0 {
                writeln!(f, "      - {NO_DATA}")?;
                continue;
            }
            count_line(f, "      ", "Чоловіків", counts.male, subtotal)?;
            count_line(f, "      ", "Жінок", counts.female, subtotal)?;
            writeln!(f, "      - Всього: {subtotal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::fixtures::record;
    use crate::models::{AgeBands, enrich};
    use chrono::NaiveDate;

    fn stats() -> RosterStats {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let employees = enrich(
            vec![
                record("А", Gender::Male, "01.01.1990"),
                record("Б", Gender::Female, "01.01.1991"),
                record("В", Gender::Male, "01.01.1992"),
                record("Г", Gender::Female, "01.01.1950"),
                record("Д", Gender::Male, "01.01.1940"),
                record("Е", Gender::Female, "??"),
            ],
            today,
            &AgeBands::default(),
        );
        RosterStats::from_employees(&employees)
    }

    #[test]
    fn test_counts() {
        let stats = stats();
        assert_eq!(stats.gender, GenderCounts { male: 3, female: 3 });
        assert_eq!(stats.by_category, [1, 3, 0, 2]);
        assert_eq!(stats.category_genders(AgeCategory::From18To45), GenderCounts { male: 2, female: 1 });
        assert_eq!(stats.category_genders(AgeCategory::YoungerThan18), GenderCounts { male: 0, female: 1 });
        assert_eq!(stats.undated, 1);
    }

    #[test]
    fn test_aggregations_agree() {
        let stats = stats();
        assert_eq!(stats.by_category.iter().sum::<usize>(), stats.total());
        for category in AgeCategory::ALL {
            assert_eq!(stats.category_genders(category).total(), stats.category_count(category));
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), Some(25.0));
        assert_eq!(percent(0, 0), None);
    }

    #[test]
    fn test_report_percentages_and_no_data() {
        let report = stats().report().to_string();
        assert!(report.contains("- Чоловіків: 3 (50.0%)"));
        assert!(report.contains("- 18-45 років: 3 (50.0%)"));
        assert!(report.contains("- Чоловіків: 2 (66.7%)"));
        assert!(report.contains("45-70 років:\n      - Немає даних"));
        assert!(report.contains("вік 0): 1"));
    }

    #[test]
    fn test_report_for_empty_roster() {
        let report = RosterStats::default().report().to_string();
        assert!(report.contains("- Всього: 0"));
        assert!(!report.contains("NaN"));
        assert_eq!(report.matches(NO_DATA).count(), 6);
    }
}
