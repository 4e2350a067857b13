//! Video embed-URL rewriting.

use url::Url;

/// Rewrite a video URL into an embeddable-player form when the host is
/// recognized, passing anything else through unchanged.
///
/// YouTube `watch?v=ID` and short `youtu.be/ID` links become
/// `https://www.youtube.com/embed/ID`. URLs that fail to parse, have no
/// host, or belong to other hosts are returned verbatim; the caller always
/// pairs the embed source with a fallback link to the original URL, so a
/// wrong guess here stays recoverable.
///
/// # Examples
///
/// ```
/// use stargaze_core::embed_url;
///
/// assert_eq!(
///     embed_url("https://youtu.be/abc123"),
///     "https://www.youtube.com/embed/abc123"
/// );
/// assert_eq!(
///     embed_url("https://vimeo.com/12345"),
///     "https://vimeo.com/12345"
/// );
/// ```
pub fn embed_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return raw.to_string();
    };

    if host.contains("youtu.be") {
        // short url format: https://youtu.be/ID
        let id = parsed.path().trim_start_matches('/');
        if !id.is_empty() {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    } else if host.contains("youtube.com") {
        if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            return format!("https://www.youtube.com/embed/{}", id);
        }
        // no v parameter: likely already an /embed/ link, leave it alone
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_rewritten() {
        assert_eq!(
            embed_url("https://youtu.be/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn test_watch_link_rewritten() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_link_passes_through() {
        let embed = "https://www.youtube.com/embed/abc123?rel=0";
        assert_eq!(embed_url(embed), embed);
    }

    #[test]
    fn test_other_host_passes_through() {
        let vimeo = "https://player.vimeo.com/video/12345";
        assert_eq!(embed_url(vimeo), vimeo);
    }

    #[test]
    fn test_unparseable_url_passes_through() {
        assert_eq!(embed_url("not a url at all"), "not a url at all");
        assert_eq!(embed_url(""), "");
    }

    #[test]
    fn test_empty_short_link_path_passes_through() {
        assert_eq!(embed_url("https://youtu.be/"), "https://youtu.be/");
    }
}
