pub mod chart;
pub mod report;
pub mod templates;

pub use chart::*;
pub use report::*;
