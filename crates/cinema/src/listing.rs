//! Catalog listings for display and JSON export.

use cinema_composer::focal_length_label;
use cinema_core::{Catalog, FocalLength, SpecSheet};
use serde::Serialize;

/// One catalog member with its tooltip text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: String,
    /// Short description
    pub description: &'static str,
    /// Look it produces
    pub detail: &'static str,
    /// When to use it
    pub usage: &'static str,
    /// Prompt fragment, for lenses and angles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
    /// Framing label, for focal lengths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl CatalogEntry {
    /// Entry for a single member.
    pub fn of<C: Catalog + std::fmt::Display>(member: C) -> Self {
        let spec = member.spec();
        Self {
            id: member.id(),
            name: member.to_string(),
            description: spec.description(),
            detail: spec.detail(),
            usage: spec.usage(),
            prompt: spec.prompt(),
            label: None,
        }
    }
}

/// Entries for every member of a catalog, in declaration order.
///
/// # Examples
///
/// ```
/// use cinema::{CameraAngle, catalog_entries};
///
/// let angles = catalog_entries::<CameraAngle>();
/// assert_eq!(angles.len(), 8);
/// assert_eq!(angles[0].id, "TOP_DOWN");
/// assert!(angles[0].prompt.is_some());
/// ```
pub fn catalog_entries<C: Catalog + std::fmt::Display>() -> Vec<CatalogEntry> {
    C::all().into_iter().map(CatalogEntry::of).collect()
}

/// Focal length entries, each carrying its framing label.
pub fn focal_entries() -> Vec<CatalogEntry> {
    FocalLength::all()
        .into_iter()
        .map(|focal| CatalogEntry {
            label: Some(focal_length_label(focal)),
            ..CatalogEntry::of(focal)
        })
        .collect()
}
