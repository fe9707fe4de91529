//! Command implementations

pub mod analyze;
pub mod check;
pub mod text;

pub use analyze::{AnalysisResult, analyze_guess};
pub use check::{CheckResult, check_guess};
pub use text::{TextView, run_text};
