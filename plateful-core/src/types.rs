use serde::{Deserialize, Serialize};

/// A single recipe as the rest of the crate consumes it.
///
/// Every field is present on every record; the catalogue carries no
/// optional fields. Values arrive verbatim from the wire representation
/// and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique within a result set.
    pub id: String,
    pub name: String,
    pub description: String,
    pub headline: String,
    /// ISO-8601 duration, e.g. "PT35M".
    pub time: String,
    pub difficulty: String,
    pub calories: String,
    pub carbos: String,
    pub fats: String,
    pub proteins: String,
    /// Full-size image URL.
    pub image: String,
    /// Thumbnail URL.
    pub thumb: String,
}
