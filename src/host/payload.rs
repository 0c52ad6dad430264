use serde::{Deserialize, Serialize};

use crate::core::WindowId;

/// MIME type under which [`TabDragPayload::to_json`] travels between windows.
pub const TAB_PAYLOAD_MIME: &str = "application/x-tabstrip-tab+json";

/// Data carried by a tab drag, or by any drag that lands on the strip.
///
/// Drags that originate from a strip carry `window`; drags from elsewhere
/// (links, bookmarks, the desktop) only carry URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabDragPayload {
    pub urls: Vec<String>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub window: Option<WindowId>,
}

impl TabDragPayload {
    pub fn for_window(window: WindowId, url: &str, title: &str) -> Self {
        Self {
            urls: vec![url.to_owned()],
            text: Some(url.to_owned()),
            title: Some(title.to_owned()),
            window: Some(window),
        }
    }

    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn has_urls(&self) -> bool {
        !self.urls.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
