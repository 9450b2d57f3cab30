//! Property test generators for search paths
//!
//! Strategies for free-form location text, category slugs and pincodes, plus
//! whole [`SearchCriteria`] records with any combination of optional fields.

use crate::criteria::SearchCriteria;
use proptest::prelude::*;

/// Generators for slug and location inputs
pub struct SlugGenerators;

impl SlugGenerators {
    /// Generate a single word of a place name, mixed case
    pub fn word() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9.]{0,12}"
    }

    /// Generate runs of whitespace, including tabs and newlines
    pub fn whitespace() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Just(" ".to_string()),
            1 => Just("   ".to_string()),
            1 => Just("\t".to_string()),
            1 => Just(" \n ".to_string()),
            1 => Just("\u{00A0}".to_string()),
        ]
    }

    /// Generate a free-form place name with irregular spacing
    pub fn place_name() -> impl Strategy<Value = String> {
        (
            Self::whitespace(),
            prop::collection::vec((Self::word(), Self::whitespace()), 1..=4),
            Self::whitespace(),
        )
            .prop_map(|(lead, words, trail)| {
                let mut result = lead;
                let last = words.len() - 1;
                for (i, (word, gap)) in words.into_iter().enumerate() {
                    result.push_str(&word);
                    if i < last {
                        result.push_str(&gap);
                    }
                }
                result.push_str(&trail);
                result
            })
    }

    /// Generate a category slug as the caller would pass it
    pub fn category_slug() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("cleaning".to_string()),
            Just("plumbing".to_string()),
            Just("ac-repair".to_string()),
            Just("pest-control".to_string()),
            "[a-z][a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,2}",
        ]
    }

    /// Generate a six digit pincode
    pub fn pincode() -> impl Strategy<Value = String> {
        "[1-9][0-9]{5}"
    }

    /// Generate values that count as absent for optional fields
    pub fn blank() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            Just(Some("   ".to_string())),
            Just(Some("\t".to_string())),
        ]
    }

    /// Generate an optional place name, absent or blank about half the time
    pub fn optional_place() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Self::blank(), Self::place_name().prop_map(Some)]
    }

    /// Generate an optional pincode, absent or blank about half the time
    pub fn optional_pincode() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Self::blank(), Self::pincode().prop_map(Some)]
    }

    /// Generate arbitrary text, including unicode and control characters
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::place_name(),
            1 => Self::blank().prop_map(Option::unwrap_or_default),
            1 => any::<String>(),
        ]
    }
}

/// Generators for whole search criteria
pub struct CriteriaGenerators;

impl CriteriaGenerators {
    /// Generate routable criteria with any combination of optional fields
    pub fn routable() -> impl Strategy<Value = SearchCriteria> {
        (
            SlugGenerators::category_slug(),
            SlugGenerators::place_name(),
            SlugGenerators::place_name(),
            SlugGenerators::optional_pincode(),
            SlugGenerators::optional_place(),
            SlugGenerators::optional_place(),
        )
            .prop_map(
                |(category, city, state, pincode, area_name, sub_area_name)| SearchCriteria {
                    category,
                    city,
                    state,
                    pincode,
                    area_name,
                    sub_area_name,
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_normalized_slug, is_routable};

    proptest! {
        #[test]
        fn place_names_are_not_blank(name in SlugGenerators::place_name()) {
            prop_assert!(!name.trim().is_empty());
        }

        #[test]
        fn category_slugs_are_normalized(category in SlugGenerators::category_slug()) {
            prop_assert!(is_normalized_slug(&category));
        }

        #[test]
        fn routable_criteria_are_routable(criteria in CriteriaGenerators::routable()) {
            prop_assert!(is_routable(&criteria), "Should be routable: {:?}", criteria);
        }

        #[test]
        fn generators_dont_panic(_text in SlugGenerators::any_text()) {
        }
    }
}
