//! Report views
//!
//! Presentation-ready renderings of an `EstimationResult`: localized labels,
//! a shelf-life comparison series for charts, markdown and JSON output.
//! Rendering never feeds back into the estimate.

pub mod view;
pub mod markdown;
pub mod json;

pub use view::{material_summaries, ComparisonBar, MaterialSummary, ResultView, ShelfLifeComparison};
pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
