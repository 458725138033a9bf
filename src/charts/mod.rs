//! Chart descriptions built from roster statistics, and the renderer seam.
//!
//! Charts are plain data; drawing them is left to a [`ChartRenderer`].

mod bitmap;

use std::path::Path;

use crate::error::Result;
use crate::models::{AgeCategory, Gender};
use crate::stats::{GenderCounts, RosterStats};

pub use bitmap::BitmapRenderer;

/// Placeholder shown for a panel without data.
pub const NO_DATA_LABEL: &str = "Немає даних";

/// RGB color of a chart element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One bar with its value label.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// A grid cell: a pie, or a "no data" placeholder when `pie` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PiePanel {
    pub title: String,
    pub pie: Option<PieChart>,
}

/// Panels laid out row by row in a `rows` x `cols` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PieGrid {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<PiePanel>,
}

/// Draws chart descriptions into image files.
pub trait ChartRenderer {
    fn render_pie(&self, chart: &PieChart, size: ChartSize, path: &Path) -> Result<()>;
    fn render_bar(&self, chart: &BarChart, size: ChartSize, path: &Path) -> Result<()>;
    fn render_pie_grid(&self, grid: &PieGrid, size: ChartSize, path: &Path) -> Result<()>;
}

fn gender_color(gender: Gender) -> Rgb {
    match gender {
        Gender::Male => Rgb::hex(0x3498db),
        Gender::Female => Rgb::hex(0xe74c3c),
    }
}

fn category_color(category: AgeCategory) -> Rgb {
    match category {
        AgeCategory::YoungerThan18 => Rgb::hex(0x9b59b6),
        AgeCategory::From18To45 => Rgb::hex(0x3498db),
        AgeCategory::From45To70 => Rgb::hex(0x2ecc71),
        AgeCategory::OlderThan70 => Rgb::hex(0xf39c12),
    }
}

fn gender_slices(counts: GenderCounts) -> Vec<Slice> {
    Gender::ALL
        .iter()
        .map(|&gender| Slice {
            label: gender.display_name().to_string(),
            value: counts.get(gender) as f64,
            color: gender_color(gender),
        })
        .collect()
}

/// Pie of the overall gender split.
pub fn gender_pie(stats: &RosterStats) -> PieChart {
    PieChart {
        title: "Розподіл співробітників за статтю".to_string(),
        slices: gender_slices(stats.gender),
    }
}

/// Bar chart of employees per age category.
pub fn category_bars(stats: &RosterStats) -> BarChart {
    BarChart {
        title: "Розподіл співробітників за віковими категоріями".to_string(),
        x_label: "Вікові категорії".to_string(),
        y_label: "Кількість співробітників".to_string(),
        bars: AgeCategory::ALL
            .iter()
            .map(|&category| Bar {
                label: category.short_label().to_string(),
                value: stats.category_count(category),
                color: category_color(category),
            })
            .collect(),
    }
}

/// 2x2 grid with the gender split of each age category.
pub fn gender_by_category_grid(stats: &RosterStats) -> PieGrid {
    let panels = AgeCategory::ALL
        .iter()
        .map(|&category| {
            let counts = stats.category_genders(category);
            let name = category.display_name();
            if counts.total() == 0 {
                PiePanel {
                    title: name.to_string(),
                    pie: None,
                }
            } else {
                let title = format!("{name}\n(Всього: {})", counts.total());
                PiePanel {
                    title: title.clone(),
                    pie: Some(PieChart {
                        title,
                        slices: gender_slices(counts),
                    }),
                }
            }
        })
        .collect();

    PieGrid {
        title: "Розподіл за статтю в кожній віковій категорії".to_string(),
        rows: 2,
        cols: 2,
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> RosterStats {
        RosterStats {
            gender: GenderCounts { male: 6, female: 4 },
            by_category: [0, 5, 3, 2],
            gender_by_category: [
                GenderCounts::default(),
                GenderCounts { male: 3, female: 2 },
                GenderCounts { male: 2, female: 1 },
                GenderCounts { male: 1, female: 1 },
            ],
            undated: 0,
        }
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(Rgb::hex(0x3498db), Rgb(0x34, 0x98, 0xdb));
    }

    #[test]
    fn test_gender_pie() {
        let pie = gender_pie(&stats());
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "Чоловіки");
        assert_eq!(pie.slices[0].value, 6.0);
        assert_eq!(pie.total(), 10.0);
    }

    #[test]
    fn test_category_bars_in_order() {
        let chart = category_bars(&stats());
        let values: Vec<usize> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, [0, 5, 3, 2]);
        assert_eq!(chart.bars[3].label, "Старше 70");
    }

    #[test]
    fn test_empty_category_gets_placeholder_panel() {
        let grid = gender_by_category_grid(&stats());
        assert_eq!(grid.panels.len(), grid.rows * grid.cols);
        assert!(grid.panels[0].pie.is_none());
        assert_eq!(grid.panels[0].title, "До 18 років");

        let adults = grid.panels[1].pie.as_ref().unwrap();
        assert_eq!(adults.total(), 5.0);
        assert!(grid.panels[1].title.contains("(Всього: 5)"));
    }
}
