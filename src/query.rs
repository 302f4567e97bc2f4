//! Executing a resolved directive's selector

use tracing::debug;

use crate::document::Node;
use crate::preview::ExtractionResult;
use crate::views::ViewType;

/// Run `selector` under `scope` and hand the matches to the view's filter
///
/// `scope` is the marked region for local queries and the document for
/// global ones. A blank selector yields no payload without consulting the
/// filter; zero matches still go through it.
pub fn execute(view: &dyn ViewType, selector: &str, scope: &Node<'_>) -> ExtractionResult {
    let selector = selector.trim();

    let result = if selector.is_empty() {
        None
    } else {
        let matches = scope.query(selector);
        debug!(
            view_type = view.name(),
            selector,
            matches = matches.len(),
            "executed view query"
        );
        view.filter(&matches)
    };

    ExtractionResult {
        view_type: Some(view.name().to_string()),
        result,
        ..Default::default()
    }
}
