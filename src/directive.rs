//! `np-view` directives: syntax and resolution
//!
//! A directive names a view type and optionally a selector:
//!
//! - `image` uses the view type's tagged content or default selector
//! - `image > img.lead` runs `img.lead` inside the marked region
//! - `image >> img.lead` runs `img.lead` against the whole document

use tracing::debug;

use crate::document::Node;
use crate::error::{PreviewError, Result};
use crate::preview::ExtractionResult;
use crate::views::{ViewRegistry, ViewType};
use crate::vocabulary;

/// Query runs against the whole document
pub const GLOBAL_OPERATOR: &str = ">>";
/// Query runs against the marked region
pub const LOCAL_OPERATOR: &str = ">";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Global,
    Local,
}

impl Operator {
    pub fn token(self) -> &'static str {
        match self {
            Operator::Global => GLOBAL_OPERATOR,
            Operator::Local => LOCAL_OPERATOR,
        }
    }
}

/// Raw directive split at its first operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub view_type: &'a str,
    pub scoped: Option<(Operator, &'a str)>,
}

/// Split a directive into its type name and optional scoped query
///
/// The global operator is looked for first, so `a >> b` is never read as a
/// local query. Both parts are trimmed.
pub fn split(raw: &str) -> Split<'_> {
    for op in [Operator::Global, Operator::Local] {
        if let Some((view_type, query)) = raw.split_once(op.token()) {
            return Split {
                view_type: view_type.trim(),
                scoped: Some((op, query.trim())),
            };
        }
    }

    Split {
        view_type: raw.trim(),
        scoped: None,
    }
}

/// Where the content of a region comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Selector run against the whole document
    Global(String),
    /// Selector run against the marked region
    Local(String),
    /// Content read from informational attributes; already final
    Tagged(ExtractionResult),
    /// No selector at all; head metadata describes the region
    Unset,
}

impl Query {
    pub fn is_global(&self) -> bool {
        matches!(self, Query::Global(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub view_type: String,
    pub query: Query,
}

/// Read and resolve the `np-view` directive of a marked node
///
/// Query precedence: explicit global, explicit local, tagged content, then
/// the view type's default selector. The registered view type is returned
/// alongside the directive.
pub fn resolve<'r>(
    node: &Node<'_>,
    registry: &'r ViewRegistry,
) -> Result<(Directive, &'r dyn ViewType)> {
    let raw = node
        .attr(vocabulary::VIEW)
        .filter(|v| !v.trim().is_empty())
        .ok_or(PreviewError::MissingDirective)?;

    let Split { view_type, scoped } = split(raw);

    let view = registry
        .get(view_type)
        .ok_or_else(|| PreviewError::InvalidViewType(view_type.to_string()))?;

    let query = match scoped {
        Some((Operator::Global, query)) => Query::Global(query.to_string()),
        Some((Operator::Local, query)) => Query::Local(query.to_string()),
        None => match view.tagged(node) {
            Some(content) => Query::Tagged(content),
            None => match view.default_query() {
                Some(default) => Query::Local(default.to_string()),
                None => Query::Unset,
            },
        },
    };

    debug!(view_type, ?query, "resolved directive");

    let directive = Directive {
        view_type: view_type.to_string(),
        query,
    };

    Ok((directive, view))
}
