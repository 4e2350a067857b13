//! Gallery filter policy.

use crate::{MediaItem, MediaKind};

/// Which media kinds the gallery renders.
///
/// The default supports both images and videos, the most capable behavior;
/// `ImagesOnly` is a strict subset for callers that want the reduced
/// gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaFilter {
    /// Render image and video records
    #[default]
    ImagesAndVideos,
    /// Render image records only
    ImagesOnly,
}

impl MediaFilter {
    /// Whether a media kind is supported under this policy.
    pub fn supports(&self, kind: &MediaKind) -> bool {
        match self {
            Self::ImagesAndVideos => {
                matches!(kind, MediaKind::Image | MediaKind::Video)
            }
            Self::ImagesOnly => matches!(kind, MediaKind::Image),
        }
    }

    /// Keep only supported items, preserving feed order.
    pub fn apply(&self, items: Vec<MediaItem>) -> Vec<MediaItem> {
        items
            .into_iter()
            .filter(|item| self.supports(&item.media_type))
            .collect()
    }

    /// Placeholder text shown when filtering leaves nothing to render.
    pub fn empty_notice(&self) -> &'static str {
        match self {
            Self::ImagesAndVideos => "No image or video items found in the dataset.",
            Self::ImagesOnly => "No image items found in the dataset.",
        }
    }
}
