//! Search criteria validation
//!
//! [`build_path`](crate::build_path) accepts anything. These checks reject the
//! inputs that would give a malformed listing path.

use crate::criteria::SearchCriteria;
use crate::error::{Result, SearchPathError};
use crate::path::present;
use crate::slug::{is_normalized_slug, normalize_slug};
use tracing::debug;

/// Check if criteria produce a well-formed listing path
///
/// # Examples
/// ```
/// use search_path::{is_routable, SearchCriteria};
///
/// assert!(is_routable(&SearchCriteria::new("cleaning", "Hyderabad", "Telangana")));
/// assert!(!is_routable(&SearchCriteria::new("Deep Cleaning", "Hyderabad", "Telangana")));
/// assert!(!is_routable(&SearchCriteria::new("cleaning", "", "Telangana")));
/// ```
pub fn is_routable(criteria: &SearchCriteria) -> bool {
    validate_criteria(criteria).is_ok()
}

/// Validate criteria and return the first problem found
///
/// Missing or partial optional fields are not errors, they only drop segments.
///
/// # Examples
/// ```
/// use search_path::{validate_criteria, SearchCriteria, SearchPathError};
///
/// let criteria = SearchCriteria::new("cleaning", "Hyderabad", "Telangana").with_area("Madhapur");
/// assert!(validate_criteria(&criteria).is_ok());
///
/// let criteria = SearchCriteria::new("cleaning", "Hyderabad/Secunderabad", "Telangana");
/// assert!(matches!(
///     validate_criteria(&criteria),
///     Err(SearchPathError::InvalidSegment { field: "city", .. })
/// ));
/// ```
pub fn validate_criteria(criteria: &SearchCriteria) -> Result<()> {
    check(criteria).inspect_err(|err| debug!(%err, "Rejected search criteria"))
}

fn check(criteria: &SearchCriteria) -> Result<()> {
    let category = criteria.category.as_str();
    if category.is_empty() {
        return Err(SearchPathError::EmptySegment { field: "category" });
    }
    if !is_normalized_slug(category) {
        return Err(SearchPathError::UnnormalizedCategory {
            category: category.to_string(),
        });
    }
    check_separator("category", category)?;

    let city = normalize_slug(&criteria.city);
    if city.is_empty() {
        return Err(SearchPathError::EmptySegment { field: "city" });
    }
    check_separator("city", &city)?;

    if let (Some(area), Some(pincode)) = (
        present(criteria.area_name.as_deref()),
        present(criteria.pincode.as_deref()),
    ) {
        check_separator("area", area)?;
        if pincode.chars().any(char::is_whitespace) {
            return Err(SearchPathError::InvalidPincode {
                pincode: pincode.to_string(),
            });
        }
        check_separator("pincode", pincode)?;
    }

    if let Some(sub_area) = present(criteria.sub_area_name.as_deref()) {
        check_separator("sub_area", sub_area)?;
    }

    Ok(())
}

fn check_separator(field: &'static str, value: &str) -> Result<()> {
    if value.contains('/') {
        return Err(SearchPathError::InvalidSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
