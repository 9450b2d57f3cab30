//! Listing path construction
//!
//! Segment order is fixed: `category / city / area-pincode / sub-area`, where the
//! last two are optional. Category is used verbatim; every other free-form field
//! goes through [`normalize_slug`].

use crate::criteria::SearchCriteria;
use crate::error::Result;
use crate::slug::normalize_slug;
use crate::validate::validate_criteria;
use tracing::{debug, trace};

/// Treat `None`, empty and whitespace-only values alike
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build the ordered segment list for a listing path
///
/// # Examples
/// ```
/// use search_path::path_segments;
///
/// let segments = path_segments("cleaning", "Hyderabad", Some("Madhapur"), Some("500081"), None);
/// assert_eq!(segments, vec!["cleaning", "hyderabad", "madhapur-500081"]);
/// ```
pub fn path_segments(
    category_slug: &str,
    city: &str,
    area_name: Option<&str>,
    pincode: Option<&str>,
    sub_area_name: Option<&str>,
) -> Vec<String> {
    let mut segments = vec![category_slug.to_string(), normalize_slug(city)];

    match (present(area_name), present(pincode)) {
        (Some(area), Some(pincode)) => {
            segments.push(format!("{}-{}", normalize_slug(area), pincode));
        }
        (Some(area), None) => {
            trace!(area, "Area given without pincode, omitting area segment");
        }
        (None, Some(pincode)) => {
            trace!(pincode, "Pincode given without area, omitting area segment");
        }
        (None, None) => {}
    }

    if let Some(sub_area) = present(sub_area_name) {
        segments.push(normalize_slug(sub_area));
    }

    segments
}

/// Build a listing path from category and location fields
///
/// The category is inserted as-is and is expected to be a slug already. City,
/// area and sub-area are normalized. The area segment is `area-pincode` and is
/// only emitted when both are present; the pincode is inserted verbatim. The
/// sub-area is emitted whenever present.
///
/// Empty and whitespace-only optionals count as absent, so a blank pincode drops
/// the area segment.
///
/// # Examples
/// ```
/// use search_path::build_path;
///
/// assert_eq!(build_path("cleaning", "Hyderabad", None, None, None), "/cleaning/hyderabad");
/// assert_eq!(
///     build_path("cleaning", "Hyderabad", Some("Madhapur"), Some("500081"), Some("Phase 2")),
///     "/cleaning/hyderabad/madhapur-500081/phase-2"
/// );
/// // No pincode, no area segment
/// assert_eq!(build_path("cleaning", "Hyderabad", Some("Madhapur"), None, None), "/cleaning/hyderabad");
/// ```
pub fn build_path(
    category_slug: &str,
    city: &str,
    area_name: Option<&str>,
    pincode: Option<&str>,
    sub_area_name: Option<&str>,
) -> String {
    let segments = path_segments(category_slug, city, area_name, pincode, sub_area_name);
    format!("/{}", segments.join("/"))
}

/// Validate criteria, then build its listing path
///
/// # Examples
/// ```
/// use search_path::{try_build_path, SearchCriteria};
///
/// let criteria = SearchCriteria::new("cleaning", "Hyderabad", "Telangana").with_sub_area("Phase 2");
/// assert_eq!(try_build_path(&criteria).unwrap(), "/cleaning/hyderabad/phase-2");
///
/// let criteria = SearchCriteria::new("cleaning", "   ", "Telangana");
/// assert!(try_build_path(&criteria).is_err());
/// ```
pub fn try_build_path(criteria: &SearchCriteria) -> Result<String> {
    validate_criteria(criteria)?;
    let path = criteria.to_path();
    debug!(%path, "Built listing path");
    Ok(path)
}
