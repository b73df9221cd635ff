//! Client configuration

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::ModeloId;

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// Characters that would end or split a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the `/modelo` collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `MODELO_API_BASE` at compile time; a wasm bundle has no runtime environment.
    pub fn from_build_env() -> Self {
        match option_env!("MODELO_API_BASE") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// `{base}/modelo`, tolerating a trailing slash on the base
    pub fn collection_url(&self) -> String {
        format!("{}/modelo", self.base_url.trim_end_matches('/'))
    }

    /// `{base}/modelo/{id}`, the id escaped as one path segment
    pub fn record_url(&self, id: &ModeloId) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id.as_str(), SEGMENT_ENCODE_SET)
        )
    }
}
