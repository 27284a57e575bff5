//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides the project model, filtering rules,
//! theme preference, static portfolio content, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Projects (`project`)
//! - [`Project`] - A showcased project record
//! - [`LoadStatus`] - Loading / loaded / failed state of the dataset
//!
//! ### Filtering (`filter`)
//! - [`FilterState`] - Search text plus tag and year facets
//! - [`available_tags()`], [`available_years()`] - Derived facet options
//!
//! ### Content (`portfolio`, `theme`)
//! - [`Theme`] - Light/dark preference
//! - [`ExternalLink`], [`LinkTarget`] - Contact and social links
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod portfolio;
pub mod project;
pub mod theme;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{available_tags, available_years, FilterState};
pub use portfolio::{
    CurrentRole, ExternalLink, Identity, LinkTarget, CONTACT_LINKS, CURRENT_ROLE, IDENTITY,
    SOCIAL_LINKS, TECH_STACK,
};
pub use project::{parse_projects, LoadStatus, Project};
pub use theme::Theme;
