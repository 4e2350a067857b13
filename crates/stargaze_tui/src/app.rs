//! Application state and core TUI types.

use stargaze_core::{GalleryConfig, MediaItem, MediaKind, embed_url, random_fact};
use stargaze_error::{FeedError, FeedResult};
use stargaze_feed::{EMPTY_FEED_NOTICE, FeedOutcome};

/// Trigger label while idle.
pub const FETCH_LABEL: &str = "Fetch space images [f]";
/// Trigger label while a fetch is in flight.
pub const LOADING_LABEL: &str = "Loading...";
/// Gallery placeholder shown while a fetch is in flight.
pub const LOADING_NOTICE: &str = "loading space images 🚀";

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Gallery view - browse fetched items
    Gallery,
    /// Detail view - the overlay showing a single item
    Detail,
}

/// What the gallery pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// Nothing fetched yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// Items are rendered as cards
    Populated,
    /// Benign empty-state placeholder (empty feed, nothing supported)
    Notice(String),
    /// Error placeholder from a failed fetch
    Failed(String),
}

/// Media content of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    /// Image with its preferred source
    Image {
        /// Image location, `hdurl` when available
        source: String,
    },
    /// Video embed plus a fallback link to the original
    Video {
        /// Embeddable-player URL (or the raw URL when no rewrite applies)
        embed: String,
        /// Original URL for the open-in-browser fallback
        original: String,
    },
    /// Unsupported media type notice
    Unsupported(String),
    /// Cleared; nothing to show (initial state and after close)
    Empty,
}

/// Reusable content buffer for the detail overlay.
///
/// Allocated on the first open and reused for every subsequent open; each
/// open fully overwrites the previous content, and closing clears the media
/// source so nothing stale is retained while the overlay is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Item title
    pub title: String,
    /// Item date, display-only
    pub date: String,
    /// Long-form explanation
    pub explanation: String,
    /// Media content
    pub media: DetailMedia,
}

impl Default for DetailView {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            explanation: String::new(),
            media: DetailMedia::Empty,
        }
    }
}

impl DetailView {
    /// Overwrite all content for the given item.
    pub fn populate(&mut self, item: &MediaItem) {
        self.title = item.display_title().to_string();
        self.date = item.display_date().to_string();
        self.explanation = item.display_explanation().to_string();
        self.media = match &item.media_type {
            MediaKind::Image => DetailMedia::Image {
                source: item.image_source().unwrap_or("").to_string(),
            },
            MediaKind::Video => {
                let original = item.url.as_deref().unwrap_or("").to_string();
                DetailMedia::Video {
                    embed: embed_url(&original),
                    original,
                }
            }
            MediaKind::Other(kind) => DetailMedia::Unsupported(kind.clone()),
        };
    }

    /// Clear the media source, stopping anything stale from being shown.
    pub fn clear_media(&mut self) {
        self.media = DetailMedia::Empty;
    }
}

/// Main application state.
pub struct App {
    /// Gallery configuration built once at startup
    pub config: GalleryConfig,
    /// Current "did you know" fact, when the panel is enabled
    pub fact: Option<&'static str>,
    /// Items currently rendered in the gallery, in feed order
    pub items: Vec<MediaItem>,
    /// Currently selected index in the gallery
    pub selected_index: usize,
    /// Gallery pane state
    pub gallery: GalleryState,
    /// Current mode
    pub mode: AppMode,
    /// Detail overlay buffer, allocated on first open
    pub detail: Option<DetailView>,
    /// Whether a fetch is in flight (the trigger is disabled)
    pub fetch_busy: bool,
    /// Trigger label shown in the status bar
    pub trigger_label: &'static str,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance with empty state.
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            fact: config.show_facts.then(random_fact),
            items: Vec::new(),
            selected_index: 0,
            gallery: GalleryState::Idle,
            mode: AppMode::Gallery,
            detail: None,
            fetch_busy: false,
            trigger_label: FETCH_LABEL,
            status_message: String::from("Press f to fetch space images"),
            should_quit: false,
        }
    }

    /// Mark the trigger busy and show the loading placeholder.
    ///
    /// Returns false when a fetch is already in flight; the press is
    /// ignored, which is what keeps at most one request outstanding.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_busy {
            return false;
        }
        self.fetch_busy = true;
        self.trigger_label = LOADING_LABEL;
        self.gallery = GalleryState::Loading;
        true
    }

    /// Apply a fetch result, re-enabling the trigger on every path.
    pub fn finish_fetch(&mut self, result: FeedResult<FeedOutcome>) {
        self.fetch_busy = false;
        self.trigger_label = FETCH_LABEL;

        match result {
            Ok(FeedOutcome::Loaded(items)) => {
                self.status_message = format!("Loaded {} items", items.len());
                self.items = items;
                self.selected_index = 0;
                self.gallery = GalleryState::Populated;
            }
            Ok(outcome) => {
                self.items.clear();
                let notice = outcome
                    .notice(&self.config.filter)
                    .unwrap_or(EMPTY_FEED_NOTICE);
                self.gallery = GalleryState::Notice(notice.to_string());
            }
            Err(err) => {
                self.items.clear();
                self.gallery = GalleryState::Failed(Self::error_notice(&err));
            }
        }
    }

    /// Error placeholder text for a failed fetch.
    fn error_notice(err: &FeedError) -> String {
        format!("Error loading images: {}", err.user_message())
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if !self.items.is_empty() && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Open the detail overlay for the selected item.
    ///
    /// Content is populated before the overlay becomes visible, fully
    /// overwriting whatever a previous open left behind.
    pub fn open_detail(&mut self) {
        if let Some(item) = self.items.get(self.selected_index) {
            let view = self.detail.get_or_insert_with(DetailView::default);
            view.populate(item);
            self.mode = AppMode::Detail;
        }
    }

    /// Close the detail overlay and clear its media source.
    pub fn close_detail(&mut self) {
        self.mode = AppMode::Gallery;
        if let Some(view) = &mut self.detail {
            view.clear_media();
        }
    }

    /// Replace the fact panel content with a fresh random pick.
    pub fn reroll_fact(&mut self) {
        if self.config.show_facts {
            self.fact = Some(random_fact());
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stargaze_core::MediaFilter;
    use stargaze_error::FeedErrorKind;

    fn image(title: &str, url: &str) -> MediaItem {
        MediaItem {
            title: Some(title.to_string()),
            media_type: MediaKind::Image,
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    fn loaded(items: Vec<MediaItem>) -> FeedResult<FeedOutcome> {
        Ok(FeedOutcome::Loaded(items))
    }

    #[test]
    fn test_loaded_items_render_in_order() {
        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        app.finish_fetch(loaded(vec![
            image("a", "https://x/a.jpg"),
            image("b", "https://x/b.jpg"),
            image("c", "https://x/c.jpg"),
        ]));

        assert_eq!(app.gallery, GalleryState::Populated);
        assert_eq!(app.items.len(), 3);
        let titles: Vec<&str> = app.items.iter().map(|i| i.display_title()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fetch_guard_ignores_second_press() {
        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        assert_eq!(app.trigger_label, LOADING_LABEL);
        assert!(!app.begin_fetch());
    }

    #[test]
    fn test_failed_fetch_restores_trigger() {
        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        app.finish_fetch(Err(FeedError::new(FeedErrorKind::Status(503))));

        assert!(!app.fetch_busy);
        assert_eq!(app.trigger_label, FETCH_LABEL);
        match &app.gallery {
            GalleryState::Failed(msg) => {
                assert!(msg.starts_with("Error loading images:"));
                assert!(msg.contains("503"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_feed_is_notice_not_failure() {
        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        app.finish_fetch(Ok(FeedOutcome::EmptyFeed));

        assert_eq!(
            app.gallery,
            GalleryState::Notice("No images found in the dataset.".to_string())
        );
    }

    #[test]
    fn test_no_supported_items_notice_follows_filter() {
        let config = GalleryConfig::new(MediaFilter::ImagesOnly, true);
        let mut app = App::new(config);
        assert!(app.begin_fetch());
        app.finish_fetch(Ok(FeedOutcome::NoSupportedItems));

        assert_eq!(
            app.gallery,
            GalleryState::Notice("No image items found in the dataset.".to_string())
        );
    }

    #[test]
    fn test_open_detail_populates_before_visible() {
        let mut app = App::new(GalleryConfig::default());
        app.finish_fetch(loaded(vec![{
            let mut item = image("Eagle Nebula", "https://x/img.jpg");
            item.date = Some("2024-01-01".to_string());
            item
        }]));

        app.open_detail();
        assert_eq!(app.mode, AppMode::Detail);
        let view = app.detail.as_ref().unwrap();
        assert_eq!(view.title, "Eagle Nebula");
        assert_eq!(view.date, "2024-01-01");
        assert_eq!(
            view.media,
            DetailMedia::Image {
                source: "https://x/img.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_second_open_leaves_no_residue() {
        let mut app = App::new(GalleryConfig::default());
        let mut first = image("First", "https://x/a.jpg");
        first.explanation = Some("long explanation".to_string());
        let second = MediaItem {
            title: Some("Second".to_string()),
            media_type: MediaKind::Video,
            url: Some("https://youtu.be/abc123".to_string()),
            ..Default::default()
        };
        app.finish_fetch(loaded(vec![first, second]));

        app.open_detail();
        app.close_detail();
        app.select_next();
        app.open_detail();

        let view = app.detail.as_ref().unwrap();
        assert_eq!(view.title, "Second");
        assert_eq!(view.date, "");
        assert_eq!(view.explanation, "");
        assert_eq!(
            view.media,
            DetailMedia::Video {
                embed: "https://www.youtube.com/embed/abc123".to_string(),
                original: "https://youtu.be/abc123".to_string(),
            }
        );
    }

    #[test]
    fn test_close_clears_media_source() {
        let mut app = App::new(GalleryConfig::default());
        app.finish_fetch(loaded(vec![image("a", "https://x/a.jpg")]));

        app.open_detail();
        app.close_detail();

        assert_eq!(app.mode, AppMode::Gallery);
        assert_eq!(app.detail.as_ref().unwrap().media, DetailMedia::Empty);
    }

    #[test]
    fn test_open_detail_on_empty_gallery_is_inert() {
        let mut app = App::new(GalleryConfig::default());
        app.open_detail();
        assert_eq!(app.mode, AppMode::Gallery);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_fact_panel_respects_configuration() {
        let with_facts = App::new(GalleryConfig::default());
        assert!(with_facts.fact.is_some());

        let mut without = App::new(GalleryConfig::new(MediaFilter::default(), false));
        assert!(without.fact.is_none());
        without.reroll_fact();
        assert!(without.fact.is_none());
    }
}
