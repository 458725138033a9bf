//! PNG chart rendering with plotters.

use std::path::Path;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use super::{BarChart, ChartRenderer, ChartSize, NO_DATA_LABEL, PieChart, PieGrid, Rgb};
use crate::error::{AppError, Result};

fn chart_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::chart(e.to_string())
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// [`ChartRenderer`] that writes bitmap images through plotters.
#[derive(Debug, Clone)]
pub struct BitmapRenderer {
    font: String,
}

impl BitmapRenderer {
    /// Renderer drawing text in the given font family.
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    /// Draw a bold, possibly multi-line heading and return the area below it.
    fn heading<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        text: &str,
        size: u32,
    ) -> Result<DrawingArea<DB, Shift>> {
        let lines: Vec<&str> = text.lines().collect();
        let line_height = size + size / 3;
        let head_height = (line_height * lines.len() as u32 + size / 2) as i32;
        let (head, body) = area.split_vertically(head_height);
        let (width, _) = head.dim_in_pixel();
        let style = TextStyle::from((self.font.as_str(), size).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Top));

        for (i, line) in lines.iter().enumerate() {
            let y = size / 4 + i as u32 * line_height;
            head.draw(&Text::new(line.to_string(), ((width / 2) as i32, y as i32), style.clone()))
                .map_err(chart_error)?;
        }
        Ok(body)
    }

    fn placeholder<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let (width, height) = area.dim_in_pixel();
        let style = TextStyle::from((self.font.as_str(), 28).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(
            NO_DATA_LABEL,
            ((width / 2) as i32, (height / 2) as i32),
            style,
        ))
        .map_err(chart_error)
    }

    fn pie<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>, chart: &PieChart) -> Result<()> {
        if chart.total() <= 0.0 {
            return self.placeholder(area);
        }

        // Pie draws in backend pixels, not relative to the area.
        let (x0, y0) = area.get_base_pixel();
        let (width, height) = area.dim_in_pixel();
        let center = (x0 + (width / 2) as i32, y0 + (height / 2) as i32);
        let radius = f64::from(width.min(height)) * 0.35;
        let sizes: Vec<f64> = chart.slices.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = chart.slices.iter().map(|s| color(s.color)).collect();
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        let label_size = (radius * 0.12).max(12.0);

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((self.font.as_str(), label_size).into_font().color(&BLACK));
        pie.percentages((self.font.as_str(), label_size * 0.9).into_font().color(&WHITE));
        area.draw(&pie).map_err(chart_error)
    }

    fn draw_pie<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, chart: &PieChart) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;
        let body = self.heading(root, &chart.title, 36)?;
        self.pie(&body, chart)
    }

    fn draw_bar<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, chart: &BarChart) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;
        let body = self.heading(root, &chart.title, 36)?;
        let Some(last) = chart.bars.len().checked_sub(1) else {
            return self.placeholder(&body);
        };

        let max = chart.bars.iter().map(|b| b.value).max().unwrap_or(0);
        let y_top = max + max / 10 + 1;
        let font = self.font.as_str();

        // Integer ranges are inclusive here: `0..last` gives one segment per bar.
        let mut ctx = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d((0..last).into_segmented(), 0..y_top)
            .map_err(chart_error)?;

        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        let x_formatter = |x: &SegmentValue<usize>| match x {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        };

        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(BLACK.mix(0.3))
            .light_line_style(TRANSPARENT)
            .x_labels(chart.bars.len())
            .x_label_formatter(&x_formatter)
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style((font, 26).into_font().style(FontStyle::Bold))
            .label_style((font, 22))
            .draw()
            .map_err(chart_error)?;

        let span = |i: usize, value: usize| {
            let right = if i < last {
                SegmentValue::Exact(i + 1)
            } else {
                SegmentValue::Last
            };
            [(SegmentValue::Exact(i), 0), (right, value)]
        };

        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            let mut rect = Rectangle::new(span(i, bar.value), color(bar.color).filled());
            rect.set_margin(0, 0, 25, 25);
            rect
        }))
        .map_err(chart_error)?;

        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            let mut rect = Rectangle::new(span(i, bar.value), BLACK.stroke_width(2));
            rect.set_margin(0, 0, 25, 25);
            rect
        }))
        .map_err(chart_error)?;

        let value_style =
            TextStyle::from((font, 24).into_font().style(FontStyle::Bold)).pos(Pos::new(HPos::Center, VPos::Bottom));
        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            Text::new(
                bar.value.to_string(),
                (SegmentValue::CenterOf(i), bar.value),
                value_style.clone(),
            )
        }))
        .map_err(chart_error)?;

        Ok(())
    }

    fn draw_pie_grid<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, grid: &PieGrid) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;
        let body = self.heading(root, &grid.title, 40)?;

        let cells = body.split_evenly((grid.rows, grid.cols));
        for (cell, panel) in cells.iter().zip(&grid.panels) {
            let inner = self.heading(cell, &panel.title, 28)?;
            match &panel.pie {
                Some(pie) => self.pie(&inner, pie)?,
                None => self.placeholder(&inner)?,
            }
        }
        Ok(())
    }
}

impl ChartRenderer for BitmapRenderer {
    fn render_pie(&self, chart: &PieChart, size: ChartSize, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
        self.draw_pie(&root, chart)?;
        root.present().map_err(chart_error)?;
        debug!("Rendered pie chart {}", path.display());
        Ok(())
    }

    fn render_bar(&self, chart: &BarChart, size: ChartSize, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
        self.draw_bar(&root, chart)?;
        root.present().map_err(chart_error)?;
        debug!("Rendered bar chart {}", path.display());
        Ok(())
    }

    fn render_pie_grid(&self, grid: &PieGrid, size: ChartSize, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
        self.draw_pie_grid(&root, grid)?;
        root.present().map_err(chart_error)?;
        debug!("Rendered pie grid {}", path.display());
        Ok(())
    }
}
