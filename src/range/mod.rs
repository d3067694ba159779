//! Interval and range algebra
//!
//! - [`interval`]: one contiguous span with independent bound inclusivity
//! - [`version_range`]: union of intervals minus excluded versions

pub mod interval;
pub mod version_range;

pub use interval::Interval;
pub use version_range::Range;
