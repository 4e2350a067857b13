//! Gallery configuration.

use crate::MediaFilter;

/// Configuration for a gallery session, built once at startup and passed to
/// each component.
///
/// The historical reduced variants of the gallery map onto these fields:
/// images-only rendering and a hidden fact panel are configuration, not
/// separate behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Which media kinds the gallery renders
    pub filter: MediaFilter,
    /// Whether the "did you know" fact panel is shown
    pub show_facts: bool,
}

impl GalleryConfig {
    /// Create a new configuration.
    pub fn new(filter: MediaFilter, show_facts: bool) -> Self {
        Self { filter, show_facts }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            filter: MediaFilter::default(),
            show_facts: true,
        }
    }
}
