//! Extraction result types

use serde::{Deserialize, Serialize};

/// Typed payload produced by a view type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewContent {
    /// Region carries only title/description
    Basic,
    Image { src: String },
    ImageGrid { images: Vec<String> },
    Video { src: String },
    Article { excerpt: String },
    /// Payload of a view type registered outside this crate
    Custom { value: serde_json::Value },
}

/// Preview metadata for one marked region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Name of the view type that produced `result`
    #[serde(rename = "type")]
    pub view_type: Option<String>,
    pub result: Option<ViewContent>,
}

/// Generic title/description/icon found on a region or in the head
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicProperties {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ExtractionResult {
    /// Copy title, description and icon from `basics` into fields that are
    /// unset or blank
    pub fn fill_unset(&mut self, basics: BasicProperties) {
        fill_field(&mut self.title, basics.title);
        fill_field(&mut self.description, basics.description);
        fill_field(&mut self.icon, basics.icon);
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some() && self.icon.is_some()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn fill_field(field: &mut Option<String>, value: Option<String>) {
    let usable = field.as_deref().is_some_and(|f| !f.trim().is_empty());
    if !usable && value.is_some() {
        *field = value;
    }
}

impl From<BasicProperties> for ExtractionResult {
    fn from(basics: BasicProperties) -> Self {
        Self {
            title: basics.title,
            description: basics.description,
            icon: basics.icon,
            ..Default::default()
        }
    }
}
