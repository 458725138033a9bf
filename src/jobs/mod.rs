//! The three batch jobs: generate, convert and analyze.
//!
//! Jobs share nothing but the roster file on disk.

pub mod analyze;
pub mod convert;
pub mod generate;

pub use analyze::{AnalyzeResult, analyze};
pub use convert::{ConvertResult, build_sheets, convert};
pub use generate::{GenerateResult, RosterGenerator, gender_plan};
