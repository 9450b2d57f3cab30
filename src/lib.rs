//! # search-path
//!
//! Canonical listing paths for a home-services marketplace.
//!
//! A search is a service category plus a location: a city, optionally an area
//! with its pincode, optionally a finer sub-area. This crate turns those fields
//! into a deterministic path that a router can map to a listing screen.
//!
//! ## Features
//!
//! - **Slug Normalization**: lower-case, trimmed, hyphen-joined tokens
//! - **Path Building**: fixed segment order with optional area and sub-area
//! - **Validation**: opt-in checks for inputs that would give a malformed path
//! - **serde** (feature): (de)serialize [`SearchCriteria`] from UI form state
//!
//! ## Examples
//!
//! ### Building Paths
//!
//! ```rust
//! use search_path::{build_path, normalize_slug};
//!
//! assert_eq!(normalize_slug("  New   Delhi  "), "new-delhi");
//!
//! let path = build_path("cleaning", "Hyderabad", Some("Madhapur"), Some("500081"), Some("Phase 2"));
//! assert_eq!(path, "/cleaning/hyderabad/madhapur-500081/phase-2");
//!
//! // Area is dropped without a pincode, sub-area is kept
//! let path = build_path("cleaning", "Hyderabad", Some("Madhapur"), None, Some("Phase 2"));
//! assert_eq!(path, "/cleaning/hyderabad/phase-2");
//! ```
//!
//! ### From Search Criteria
//!
//! ```rust
//! use search_path::{try_build_path, SearchCriteria};
//!
//! let criteria = SearchCriteria::new("plumbing", "Pune", "Maharashtra").with_sub_area("Baner");
//! assert_eq!(criteria.to_path(), "/plumbing/pune/baner");
//!
//! // Category must already be a slug when validating
//! let criteria = SearchCriteria::new("Plumbing", "Pune", "Maharashtra");
//! assert!(try_build_path(&criteria).is_err());
//! ```

mod criteria;
mod error;
mod path;
mod slug;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use criteria::SearchCriteria;
pub use error::{Result, SearchPathError};
pub use path::{build_path, path_segments, try_build_path};
pub use slug::{is_normalized_slug, normalize_slug};
pub use validate::{is_routable, validate_criteria};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
