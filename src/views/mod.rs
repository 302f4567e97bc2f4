//! View types: named extraction strategies
//!
//! A page declares the view type of a marked region with `np-view`. Each view
//! type knows a default selector, how to read its content straight from
//! informational attributes ("tagged"), and how to turn selector matches into
//! a typed payload.

mod article;
mod basic;
mod image;
mod image_grid;
mod video;

pub use article::ArticleView;
pub use basic::BasicView;
pub use image::ImageView;
pub use image_grid::ImageGridView;
pub use video::VideoView;

use std::collections::HashMap;
use std::fmt;

use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};

/// Extraction strategy registered under a unique name
pub trait ViewType: Send + Sync {
    fn name(&self) -> &str;

    /// Selector run against the marked region when the directive gives none
    ///
    /// `None` means the region is described by head metadata alone.
    fn default_query(&self) -> Option<&str>;

    /// Content read from informational attributes, if the region uses them
    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult>;

    /// Turn selector matches into a payload; `None` when nothing usable matched
    fn filter(&self, matches: &[Node<'_>]) -> Option<ViewContent>;
}

/// Name-keyed set of view types, fixed once handed to the client
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<String, Box<dyn ViewType>>,
}

impl ViewRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with basic, article, image, image-grid and video
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(BasicView);
        registry.register(ArticleView::default());
        registry.register(ImageView);
        registry.register(ImageGridView);
        registry.register(VideoView);
        registry
    }

    /// Add a view type, replacing any previous one with the same name
    pub fn register(&mut self, view: impl ViewType + 'static) -> &mut Self {
        self.views.insert(view.name().to_string(), Box::new(view));
        self
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&dyn ViewType> {
        self.views.get(name).map(|v| v.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.views.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.names())
            .finish()
    }
}

/// Provided attribute value, else the element's text
fn value_or_text(node: &Node<'_>, attr: &str) -> Option<String> {
    match node.provided(attr) {
        Some(value) => Some(value.to_string()),
        None => Some(node.text()).filter(|t| !t.is_empty()),
    }
}

/// Provided attribute value, else a non-blank `src`
fn value_or_src(node: &Node<'_>, attr: &str) -> Option<String> {
    node.provided(attr)
        .or_else(|| node.non_blank("src"))
        .map(String::from)
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
