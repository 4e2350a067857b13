//! Feed record types.

use serde::{Deserialize, Serialize};

/// Display default for records without a title.
pub const UNTITLED: &str = "Untitled";

/// Media kind of a feed record.
///
/// The feed enumerates `"image"` and `"video"`; anything else (or a missing
/// field) is preserved verbatim as `Other` so the gallery can surface an
/// unsupported-media notice instead of dropping the record silently at parse
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image record
    Image,
    /// Video record
    Video,
    /// Any other media type string
    #[serde(untagged)]
    Other(String),
}

impl Default for MediaKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A single picture-of-the-day record from the feed.
///
/// Every field is optional: the feed is externally controlled and records
/// with missing fields still render, falling back to display defaults.
/// Unknown fields are ignored. Records have no identity beyond their
/// position in the feed array and are replaced wholesale on each fetch.
///
/// # Examples
///
/// ```
/// use stargaze_core::{MediaItem, MediaKind};
///
/// let item = MediaItem {
///     title: Some("Eagle Nebula".to_string()),
///     date: Some("2024-01-01".to_string()),
///     media_type: MediaKind::Image,
///     url: Some("https://x/img.jpg".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(item.caption(), "Eagle Nebula — 2024-01-01");
/// assert_eq!(item.image_source(), Some("https://x/img.jpg"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Record title
    #[serde(default)]
    pub title: Option<String>,
    /// Publication date, display-only text (never parsed or validated)
    #[serde(default)]
    pub date: Option<String>,
    /// Media kind
    #[serde(default)]
    pub media_type: MediaKind,
    /// Primary media location
    #[serde(default)]
    pub url: Option<String>,
    /// Preferred high-resolution image location
    #[serde(default)]
    pub hdurl: Option<String>,
    /// Video preview image; some feed revisions spell this `thumbnail`
    #[serde(default, alias = "thumbnail")]
    pub thumbnail_url: Option<String>,
    /// Long-form description
    #[serde(default)]
    pub explanation: Option<String>,
}

impl MediaItem {
    /// Title for display, falling back to [`UNTITLED`].
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(UNTITLED)
    }

    /// Date for display, falling back to the empty string.
    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    /// Explanation for display, falling back to the empty string.
    pub fn display_explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Gallery caption: `"{title or 'Untitled'} — {date or ''}"`.
    pub fn caption(&self) -> String {
        format!("{} — {}", self.display_title(), self.display_date())
    }

    /// Preferred image source: `hdurl` when present, else `url`.
    pub fn image_source(&self) -> Option<&str> {
        self.hdurl.as_deref().or(self.url.as_deref())
    }

    /// Video preview image, when the feed supplies one.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_with_defaults() {
        let item = MediaItem::default();
        assert_eq!(item.caption(), "Untitled — ");
    }

    #[test]
    fn test_caption_full() {
        let item = MediaItem {
            title: Some("Eagle Nebula".to_string()),
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert_eq!(item.caption(), "Eagle Nebula — 2024-01-01");
    }

    #[test]
    fn test_image_source_prefers_hdurl() {
        let item = MediaItem {
            url: Some("https://x/img.jpg".to_string()),
            hdurl: Some("https://x/img_hd.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(item.image_source(), Some("https://x/img_hd.jpg"));
    }

    #[test]
    fn test_image_source_falls_back_to_url() {
        let item = MediaItem {
            url: Some("https://x/img.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(item.image_source(), Some("https://x/img.jpg"));
    }

    #[test]
    fn test_media_kind_deserialization() {
        let image: MediaItem = serde_json::from_str(r#"{"media_type": "image"}"#).unwrap();
        assert_eq!(image.media_type, MediaKind::Image);

        let video: MediaItem = serde_json::from_str(r#"{"media_type": "video"}"#).unwrap();
        assert_eq!(video.media_type, MediaKind::Video);

        let other: MediaItem = serde_json::from_str(r#"{"media_type": "audio"}"#).unwrap();
        assert_eq!(other.media_type, MediaKind::Other("audio".to_string()));

        let missing: MediaItem = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.media_type, MediaKind::Other(String::new()));
    }

    #[test]
    fn test_thumbnail_alias() {
        let item: MediaItem =
            serde_json::from_str(r#"{"thumbnail": "https://x/thumb.jpg"}"#).unwrap();
        assert_eq!(item.thumbnail(), Some("https://x/thumb.jpg"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let item: MediaItem = serde_json::from_str(
            r#"{"title": "X", "copyright": "someone", "service_version": "v1"}"#,
        )
        .unwrap();
        assert_eq!(item.display_title(), "X");
    }
}
