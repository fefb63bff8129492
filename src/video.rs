// Trust step for external video links
//
// Catalog entries carry embed URLs; only https links to an allowed host are
// ever handed to the system browser.

use thiserror::Error;
use url::Url;

pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["www.youtube.com", "youtube.com", "youtu.be"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VideoError {
    #[error("malformed video url '{url}': {reason}")]
    Malformed { url: String, reason: String },

    #[error("video url '{0}' is not https")]
    InsecureScheme(String),

    #[error("video host '{0}' is not in the allow list")]
    UntrustedHost(String),
}

/// A video URL that passed the allow-list check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedVideoUrl(Url);

impl TrustedVideoUrl {
    pub fn parse<S: AsRef<str>>(raw: &str, allowed_hosts: &[S]) -> Result<Self, VideoError> {
        let url = Url::parse(raw).map_err(|e| VideoError::Malformed {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "https" {
            return Err(VideoError::InsecureScheme(raw.to_string()));
        }

        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if !allowed_hosts
            .iter()
            .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(&host))
        {
            return Err(VideoError::UntrustedHost(host));
        }

        Ok(Self(url))
    }

    /// Page to open in a browser. YouTube embed links become watch links.
    pub fn browser_url(&self) -> String {
        let mut segments = match self.0.path_segments() {
            Some(segments) => segments,
            None => return self.0.to_string(),
        };
        match (segments.next(), segments.next()) {
            (Some("embed"), Some(id)) if !id.is_empty() => {
                format!("https://www.youtube.com/watch?v={}", id)
            }
            _ => self.0.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builtin_videos_are_trusted() {
        for entry in Catalog::builtin().list() {
            assert!(
                TrustedVideoUrl::parse(entry.video_url, DEFAULT_ALLOWED_HOSTS).is_ok(),
                "{} should be trusted",
                entry.route
            );
        }
    }

    #[test]
    fn test_http_rejected() {
        let err = TrustedVideoUrl::parse("http://www.youtube.com/embed/x", DEFAULT_ALLOWED_HOSTS)
            .unwrap_err();
        assert!(matches!(err, VideoError::InsecureScheme(_)));
    }

    #[test]
    fn test_unknown_host_rejected() {
        let err = TrustedVideoUrl::parse("https://evil.example/embed/x", DEFAULT_ALLOWED_HOSTS)
            .unwrap_err();
        assert_eq!(err, VideoError::UntrustedHost("evil.example".to_string()));
    }

    #[test]
    fn test_malformed_rejected() {
        let err = TrustedVideoUrl::parse("not a url", DEFAULT_ALLOWED_HOSTS).unwrap_err();
        assert!(matches!(err, VideoError::Malformed { .. }));
    }

    #[test]
    fn test_host_match_ignores_case() {
        assert!(TrustedVideoUrl::parse("https://YouTu.be/abc", DEFAULT_ALLOWED_HOSTS).is_ok());
    }

    #[test]
    fn test_browser_url() {
        let raw = "https://www.youtube.com/embed/oxTVYaKGg2A";
        let embed = TrustedVideoUrl::parse(raw, DEFAULT_ALLOWED_HOSTS).unwrap();
        assert_eq!(embed.browser_url(), "https://www.youtube.com/watch?v=oxTVYaKGg2A");

        let short = TrustedVideoUrl::parse("https://youtu.be/abc", DEFAULT_ALLOWED_HOSTS).unwrap();
        assert_eq!(short.browser_url(), "https://youtu.be/abc");
    }
}
