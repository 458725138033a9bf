//! Roster-to-workbook conversion job.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::export::{CellValue, SheetData, write_workbook};
use crate::models::{AgeBands, AgeCategory, EnrichedEmployee, ROSTER_HEADERS, enrich};
use crate::roster::read_roster;

/// Name of the sheet listing every employee.
pub const ALL_SHEET: &str = "all";

/// Columns of the per-category sheets.
pub const CATEGORY_HEADERS: [&str; 6] = ["№", "Прізвище", "Імя", "По бат", "Дата народження", "Вік"];

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub output: PathBuf,
    pub total: usize,
    /// Row count per category, indexed like [`AgeCategory::ALL`].
    pub per_category: [usize; 4],
}

impl ConvertResult {
    /// Get summary message.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Workbook '{}' created from {} records",
            self.output.display(),
            self.total
        )];
        for category in AgeCategory::ALL {
            lines.push(format!(
                "   • {} ({}): {} осіб",
                category.display_name(),
                category.sheet_name(),
                self.per_category[category.index()]
            ));
        }
        lines.join("\n")
    }
}

/// Lay out the five workbook sheets: the full listing, then one per age category.
///
/// Rows keep source order; the `№` column restarts at 1 on each category sheet.
pub fn build_sheets(employees: &[EnrichedEmployee]) -> Vec<SheetData> {
    let mut all = SheetData::new(ALL_SHEET, &ROSTER_HEADERS);
    let mut by_category: Vec<SheetData> = AgeCategory::ALL
        .iter()
        .map(|category| SheetData::new(category.sheet_name(), &CATEGORY_HEADERS))
        .collect();

    for employee in employees {
        let record = &employee.record;
        all.push_row(record.fields().iter().map(|f| CellValue::from(*f)).collect());

        let sheet = &mut by_category[employee.category.index()];
        let seq = sheet.rows.len() + 1;
        sheet.push_row(vec![
            seq.into(),
            record.surname.as_str().into(),
            record.first_name.as_str().into(),
            record.patronymic.as_str().into(),
            record.birth_date.as_str().into(),
            employee.age.into(),
        ]);
    }

    let mut sheets = Vec::with_capacity(1 + by_category.len());
    sheets.push(all);
    sheets.extend(by_category);
    sheets
}

/// Read the roster at `input` and write the categorized workbook to `output`.
///
/// Nothing is written when the roster cannot be read.
pub fn convert(
    input: &Path,
    output: &Path,
    today: NaiveDate,
    bands: &AgeBands,
    max_column_width: usize,
) -> Result<ConvertResult> {
    info!("Reading roster from {}", input.display());
    let employees = enrich(read_roster(input)?, today, bands);
    info!("Read {} records", employees.len());

    let sheets = build_sheets(&employees);
    let mut per_category = [0usize; 4];
    for (slot, sheet) in per_category.iter_mut().zip(&sheets[1..]) {
        *slot = sheet.rows.len();
    }

    info!("Writing workbook {}", output.display());
    write_workbook(&sheets, output, max_column_width)?;

    Ok(ConvertResult {
        output: output.to_path_buf(),
        total: employees.len(),
        per_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::models::employee::fixtures::record;

    fn employees() -> Vec<EnrichedEmployee> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        enrich(
            vec![
                record("Перший", Gender::Male, "15.03.2000"),
                record("Другий", Gender::Female, "16.03.2006"),
                record("Третій", Gender::Male, "01.01.1990"),
                record("Четвертий", Gender::Female, "01.01.1940"),
                record("П'ятий", Gender::Male, "31.13.1990"),
            ],
            today,
            &AgeBands::default(),
        )
    }

    #[test]
    fn test_sheet_names_and_order() {
        let sheets = build_sheets(&employees());
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["all", "younger_18", "18-45", "45-70", "older_70"]);
    }

    #[test]
    fn test_all_sheet_lists_every_record() {
        let sheets = build_sheets(&employees());
        let all = &sheets[0];
        assert_eq!(all.headers.len(), 10);
        assert_eq!(all.rows.len(), 5);
        assert_eq!(all.rows[0][0], CellValue::from("Перший"));
        assert_eq!(all.rows[1][3], CellValue::from("Ж"));
    }

    #[test]
    fn test_category_sheets_number_rows_independently() {
        let sheets = build_sheets(&employees());

        let younger = &sheets[1];
        // 17-year-old and the malformed date
        assert_eq!(younger.rows.len(), 2);
        assert_eq!(younger.rows[0][0], CellValue::Number(1.0));
        assert_eq!(younger.rows[0][1], CellValue::from("Другий"));
        assert_eq!(younger.rows[0][5], CellValue::Number(17.0));
        assert_eq!(younger.rows[1][0], CellValue::Number(2.0));
        assert_eq!(younger.rows[1][1], CellValue::from("П'ятий"));
        assert_eq!(younger.rows[1][5], CellValue::Number(0.0));

        let adults = &sheets[2];
        assert_eq!(adults.rows.len(), 2);
        assert_eq!(adults.rows[0][0], CellValue::Number(1.0));
        assert_eq!(adults.rows[0][1], CellValue::from("Перший"));
        assert_eq!(adults.rows[0][5], CellValue::Number(24.0));
        assert_eq!(adults.rows[1][0], CellValue::Number(2.0));

        assert!(sheets[3].rows.is_empty());
        assert_eq!(sheets[4].rows.len(), 1);
        assert_eq!(sheets[4].rows[0][0], CellValue::Number(1.0));
    }

    #[test]
    fn test_summary_lists_categories() {
        let result = ConvertResult {
            output: PathBuf::from("employees.xlsx"),
            total: 5,
            per_category: [2, 2, 0, 1],
        };
        let summary = result.summary();
        assert!(summary.contains("До 18 років (younger_18): 2 осіб"));
        assert!(summary.contains("45-70 років (45-70): 0 осіб"));
    }
}
