//! Presentation collaborator contracts.
//!
//! The engine never builds UI itself. A route that presents something hands
//! the work to one of these contracts on the UI scheduler and passes the
//! resulting unit to the `presentable_ready` hook.

use crate::error::BoxError;
use std::fmt;

/// A named template: a group (e.g. a storyboard or layout bundle) and an item
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    /// Template group name.
    pub group: String,
    /// Item name within the group.
    pub item: String,
}

impl Template {
    /// Create a template reference.
    pub fn new(group: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            item: item.into(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.item)
    }
}

/// Instantiates presentable units from named templates.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot instantiate templates into `{V}`",
    label = "missing `TemplateLoader` implementation",
    note = "Implement `TemplateLoader<{P}, {V}>` and pass it to `NavigatorBuilder::templates`."
)]
pub trait TemplateLoader<P, V>: Send + Sync + 'static {
    /// Build the unit named by `template`.
    fn instantiate(&self, template: &Template, params: Option<&P>) -> Result<V, BoxError>;
}

impl<P, V, F> TemplateLoader<P, V> for F
where
    F: Fn(&Template, Option<&P>) -> Result<V, BoxError> + Send + Sync + 'static,
{
    fn instantiate(&self, template: &Template, params: Option<&P>) -> Result<V, BoxError> {
        self(template, params)
    }
}

/// A type that knows how to build itself as a presentable unit.
///
/// `create` runs first; `accept_parameters` runs on the fresh instance right
/// after, for screens that take their parameters by injection rather than
/// at construction. The default ignores them.
pub trait Screen<P>: Sized {
    /// Construct the screen.
    fn create(params: Option<&P>) -> Self;

    /// Receive parameters after construction.
    fn accept_parameters(&mut self, _params: Option<P>) {}
}
