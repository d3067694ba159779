//! Version model: parsing and scheme-specific ordering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Scheme    │────▶│ Comparator  │◀────│    Cache    │
//! │  (npm, ...) │     │  (ordering) │     │ (memoized)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!           ┌────────────────┼────────────────┐
//!           ▼                ▼                ▼
//!    ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//!    │   semver    │  │    maven    │  │    nuget    │
//!    │  (generic)  │  │ (qualifiers)│  │  (4-part)   │
//!    └─────────────┘  └─────────────┘  └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: Injectable store for parsed versions with wipe-when-full eviction
//! - [`comparator`]: Scheme-aware comparison used by intervals and ranges
//! - [`error`]: Error type shared by every parser in the crate
//! - [`maven`]: Maven qualifier and sublist ordering
//! - [`nuget`]: NuGet four-component, case-insensitive ordering
//! - [`scheme`]: Closed set of supported schemes
//! - [`semver`]: Generic version structure and ordering

pub mod cache;
pub mod comparator;
pub mod error;
pub mod maven;
pub mod nuget;
pub mod scheme;
pub mod semver;
