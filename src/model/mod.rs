pub mod regime;

pub use regime::*;
