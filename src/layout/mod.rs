//! The paginated document formatter.
//!
//! [format](crate::layout::format) converts a [Document](crate::Document)
//! into an ordered sequence of [Page](crate::Page)s of positioned text runs,
//! paginating with a vertical cursor that resets to the top margin whenever
//! a fresh page is started. Line wrapping is delegated to [wrap], which
//! breaks at word boundaries only and measures text through the [Measure]
//! trait so that the formatter never depends on the rendering surface.

mod format;
mod wrap;

pub use format::*;
pub use wrap::*;
