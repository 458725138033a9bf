//! Excel export functionality.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

/// Single cell value in an exported sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Text as it appears in the cell, used for width estimation.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

/// Contents of one worksheet: a header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Column widths fitted to the longest text (plus padding), capped at `max_width`.
    pub fn column_widths(&self, max_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let len = cell.display_text().chars().count();
                match widths.get_mut(col) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths.into_iter().map(|w| (w + 2).min(max_width)).collect()
    }
}

/// Write sheets into a new workbook at `path`.
///
/// Every sheet gets a styled, frozen header row and auto-sized columns.
pub fn write_workbook(sheets: &[SheetData], path: &Path, max_column_width: usize) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }

        for (idx, row) in sheet.rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    CellValue::Text(text) => worksheet.write_string(row_num, col as u16, text)?,
                    CellValue::Number(n) => worksheet.write_number(row_num, col as u16, *n)?,
                };
            }
        }

        for (col, width) in sheet.column_widths(max_column_width).into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        // Freeze top row
        worksheet.set_freeze_panes(1, 0)?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> SheetData {
        let mut sheet = SheetData::new("all", &["№", "Прізвище"]);
        sheet.push_row(vec![1usize.into(), "Коваленко".into()]);
        sheet.push_row(vec![2usize.into(), "Шевченко-Бондаренко-Кравченко-Литвиненко-Кириленко-Ткаченко".into()]);
        sheet
    }

    #[test]
    fn test_column_widths_fit_and_cap() {
        let widths = sample_sheet().column_widths(50);
        // "№" vs "1"/"2": one character plus padding
        assert_eq!(widths[0], 3);
        assert_eq!(widths[1], 50);
    }

    #[test]
    fn test_column_widths_count_characters_not_bytes() {
        let mut sheet = SheetData::new("s", &["Вік"]);
        sheet.push_row(vec!["Київ".into()]);
        assert_eq!(sheet.column_widths(50), vec![6]);
    }

    #[test]
    fn test_number_display_text() {
        assert_eq!(CellValue::from(42).display_text(), "42");
        assert_eq!(CellValue::from(7usize).display_text(), "7");
    }

    #[test]
    fn test_write_workbook_creates_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.xlsx");

        write_workbook(&[sample_sheet(), SheetData::new("empty", &["A"])], &path, 50).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_invalid_sheet_name_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let result = write_workbook(&[SheetData::new("bad[name]", &["A"])], &path, 50);

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
