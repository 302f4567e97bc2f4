//! Reserved markup vocabulary read from pages

/// Marks a region; the value is the lookup key
pub const FOR: &str = "np-for";
/// Directive on the marked region: `type[ <op> query]`
pub const VIEW: &str = "np-view";

pub const TITLE: &str = "np-title";
pub const DESCRIPTION: &str = "np-description";
pub const ICON: &str = "np-icon";
pub const IMAGE: &str = "np-image";
pub const VIDEO: &str = "np-video";
pub const ARTICLE: &str = "np-article";

/// `<meta name>` values consulted in the document head
pub const META_TITLE: &str = "title";
pub const META_DESCRIPTION: &str = "description";
pub const META_ICON: &str = "icon";
