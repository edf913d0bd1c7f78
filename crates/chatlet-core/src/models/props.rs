use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inputs the host passes when it mounts the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WidgetProps {
    /// Label on the toggle button.
    pub title: String,
    /// Label in the expanded header.
    pub description: String,
    /// Where to fetch the context document from, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub file_url: Option<String>,
}

impl WidgetProps {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            file_url: None,
        }
    }

    pub fn with_file_url(mut self, url: impl Into<String>) -> Self {
        self.file_url = Some(url.into());
        self
    }
}
