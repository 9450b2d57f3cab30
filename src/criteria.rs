//! Search criteria collected from a single user search action

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::path::{build_path, path_segments};

/// Category and location fields of one search
///
/// `state` is carried along for the caller but does not take part in path
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchCriteria {
    pub category: String,
    pub city: String,
    pub state: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pincode: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_area_name: Option<String>,
}

impl SearchCriteria {
    /// Create criteria for a city-level search
    ///
    /// # Examples
    /// ```
    /// use search_path::SearchCriteria;
    ///
    /// let criteria = SearchCriteria::new("cleaning", "Hyderabad", "Telangana")
    ///     .with_area("Madhapur")
    ///     .with_pincode("500081");
    /// assert_eq!(criteria.to_path(), "/cleaning/hyderabad/madhapur-500081");
    /// ```
    pub fn new(
        category: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            city: city.into(),
            state: state.into(),
            ..Self::default()
        }
    }

    pub fn with_area(mut self, area_name: impl Into<String>) -> Self {
        self.area_name = Some(area_name.into());
        self
    }

    pub fn with_pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = Some(pincode.into());
        self
    }

    pub fn with_sub_area(mut self, sub_area_name: impl Into<String>) -> Self {
        self.sub_area_name = Some(sub_area_name.into());
        self
    }

    /// Ordered path segments for these criteria
    pub fn segments(&self) -> Vec<String> {
        path_segments(
            &self.category,
            &self.city,
            self.area_name.as_deref(),
            self.pincode.as_deref(),
            self.sub_area_name.as_deref(),
        )
    }

    /// Listing path for these criteria
    ///
    /// Never fails; see [`crate::try_build_path`] for the validating variant.
    pub fn to_path(&self) -> String {
        build_path(
            &self.category,
            &self.city,
            self.area_name.as_deref(),
            self.pincode.as_deref(),
            self.sub_area_name.as_deref(),
        )
    }
}
