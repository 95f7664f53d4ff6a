//! Learning resource recommendations.
//!
//! A resource is recommended when its type is one the user's learning style
//! prefers, or when one of the user's interest keywords appears in its name.

use std::collections::{BTreeSet, HashSet};

use crate::profile::LearningStyle;
use crate::types::DbId;

/// Keywords shorter than this are ignored ("ai", "ux" and the like are too
/// noisy as substrings).
pub const MIN_KEYWORD_LEN: usize = 3;

/// A resource as seen by the recommender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCandidate {
    pub resource_id: DbId,
    pub name: String,
    pub resource_type: Option<String>,
}

/// Resource types each learning style prefers. Matching is exact.
pub fn preferred_resource_types(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &["Video", "Project", "Course", "Guide", "Platform"],
        LearningStyle::Auditory => &["Video", "Course"],
        LearningStyle::ReadingWriting => &["Article", "Documentation", "Guide", "Tutorial", "Resource"],
        LearningStyle::KinestheticPractical => &["Project", "Practice", "Course", "Tool", "Tutorial"],
    }
}

/// Split free-text interests into lower-cased keywords.
///
/// Commas count as whitespace; tokens shorter than [`MIN_KEYWORD_LEN`] are
/// dropped.
pub fn interest_keywords(interests: Option<&str>) -> HashSet<String> {
    let Some(text) = interests else {
        return HashSet::new();
    };
    text.replace(',', " ")
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .map(str::to_lowercase)
        .collect()
}

/// Return the ids of the recommended resources.
pub fn recommend_resources(
    resources: &[ResourceCandidate],
    style: Option<LearningStyle>,
    interests: Option<&str>,
) -> BTreeSet<DbId> {
    let preferred: &[&str] = style.map(preferred_resource_types).unwrap_or(&[]);
    let keywords = interest_keywords(interests);

    resources
        .iter()
        .filter(|resource| {
            let type_match = resource
                .resource_type
                .as_deref()
                .is_some_and(|t| preferred.contains(&t));
            type_match || matches_keyword(&resource.name, &keywords)
        })
        .map(|resource| resource.resource_id)
        .collect()
}

fn matches_keyword(name: &str, keywords: &HashSet<String>) -> bool {
    if name.is_empty() || keywords.is_empty() {
        return false;
    }
    let name = name.to_lowercase();
    keywords.iter().any(|k| name.contains(k.as_str()))
}
