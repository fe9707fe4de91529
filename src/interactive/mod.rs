//! Full-screen terminal interface

pub mod app;
pub mod rendering;

pub use app::{App, TuiView, run_tui};
