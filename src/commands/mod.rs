// src/commands/mod.rs
//
// Commands module - the operations the CLI exposes, organized by feature.

mod dtos;
pub mod books;
pub mod dashboard;

pub use books::*;
pub use dashboard::*;
pub use dtos::*;
