//! Generates HealthTrack's downloadable student resources as PDF documents.
//!
//! The pipeline has three stages: a static [Document](crate::Document) from
//! [content], the pure paginated formatter in [layout], and the PDF output
//! sink in [render]. Formatting shares no state across calls, so independent
//! documents can be generated concurrently.

mod colour;
pub use colour::*;

/// The static resource definitions (workout chart, meal plan, placeholders)
pub mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod info;
pub use info::*;

/// The paginated document formatter
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

pub(crate) mod refs;

/// The PDF output sink
pub mod render;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export pdf-writer, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
