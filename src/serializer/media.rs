use crate::config::DEFAULT_MEDIA_URL;
use url::Url;

/// Turns stored file names into public URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStorage {
    base_url: String,
}

impl Default for MediaStorage {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_URL)
    }
}

impl MediaStorage {
    /// `base_url` may be absolute (`https://cdn.example.com/media/`) or a
    /// path (`/media/`); a trailing slash is added when missing.
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The public URL of a stored file; `None` when no file is stored.
    ///
    /// Each `/`-separated part of the name is percent-encoded as one path
    /// segment under the base, so the result never leaves the base URL.
    pub fn url(&self, name: &str) -> Option<String> {
        let name = name.trim().replace('\\', "/");
        let mut segments = name
            .split('/')
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .peekable();
        segments.peek()?;

        match Url::parse(&self.base_url) {
            Ok(mut base) if !base.cannot_be_a_base() => {
                base.path_segments_mut().ok()?.pop_if_empty().extend(segments);
                Some(base.into())
            }
            // a path such as `/media/`: encode against a scratch URL and
            // append the encoded path to the base as is
            _ => {
                let mut scratch = Url::parse("http://localhost/").ok()?;
                scratch.path_segments_mut().ok()?.clear().extend(segments);
                Some(format!("{}{}", self.base_url, &scratch.path()[1..]))
            }
        }
    }
}
