use super::pattern::{openapi_path, pattern_to_regex};
use crate::config::DrawConfig;
use crate::error::DrawResult;
use crate::scope::{draw, Scope};
use crate::target::TargetDescriptor;
use http::Method;
use regex::Regex;
use serde::Serialize;
use tracing::info;

/// Append-only sink for compiled routes
///
/// Implementations must preserve registration order. Shadowing between
/// overlapping patterns is left to whatever matcher consumes the table.
pub trait RouteTable {
    /// What the table stores per route, produced by a [`DispatchResolver`]
    type Handler;

    fn add_route(&mut self, method: Method, path: String, handler: Self::Handler);
}

/// Binds a canonical target descriptor to a table's handler type
///
/// Routes only ever pass descriptors in. Whether the controller or action
/// exists is entirely up to the resolver.
pub trait DispatchResolver<T: RouteTable> {
    fn resolve(&self, descriptor: TargetDescriptor, table: &T) -> T::Handler;
}

/// Named dispatch target stored by [`RouteSet`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// `ns1::ns2::controller#action`
    pub handler_name: String,
    pub descriptor: TargetDescriptor,
}

/// Resolver producing [`Dispatch`] handlers named after their descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedResolver;

impl<T: RouteTable<Handler = Dispatch>> DispatchResolver<T> for NamedResolver {
    fn resolve(&self, descriptor: TargetDescriptor, _table: &T) -> Dispatch {
        Dispatch {
            handler_name: descriptor.to_string(),
            descriptor,
        }
    }
}

/// One registered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    /// Absolute pattern, e.g. `/posts/:post_id(\d+)/comments`
    pub path: String,
    pub handler: Dispatch,
}

impl RouteEntry {
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.handler.descriptor.controller
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.handler.descriptor.action
    }

    #[must_use]
    pub fn namespace(&self) -> &[String] {
        &self.handler.descriptor.namespace
    }

    /// Anchored regex for this pattern plus its ordered parameter names
    ///
    /// # Errors
    ///
    /// Fails when a parameter constraint is not a valid regex.
    pub fn pattern_regex(&self) -> Result<(Regex, Vec<String>), regex::Error> {
        pattern_to_regex(&self.path)
    }

    /// The pattern in OpenAPI `{param}` form
    #[must_use]
    pub fn openapi_path(&self) -> String {
        openapi_path(&self.path)
    }
}

/// In-memory, order-preserving route table
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    entries: Vec<RouteEntry>,
}

impl RouteTable for RouteSet {
    type Handler = Dispatch;

    fn add_route(&mut self, method: Method, path: String, handler: Dispatch) {
        self.entries.push(RouteEntry {
            method,
            path,
            handler,
        });
    }
}

impl RouteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a declaration block into a fresh table
    ///
    /// Uses [`NamedResolver`] and the default [`DrawConfig`].
    ///
    /// # Errors
    ///
    /// Propagates the first [`DrawError`](crate::DrawError) raised by the block.
    pub fn draw<F>(block: F) -> DrawResult<Self>
    where
        F: FnOnce(&mut Scope<'_, RouteSet>) -> DrawResult,
    {
        let mut routes = Self::new();
        draw(&mut routes, &NamedResolver, &DrawConfig::default(), block)?;
        info!(routes_count = routes.len(), "Route definitions compiled");
        Ok(routes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<RouteEntry> {
        self.entries
    }

    /// Last entry registered for exactly this method and pattern
    ///
    /// This compares declared patterns; it does not match request paths.
    #[must_use]
    pub fn find(&self, method: &Method, path: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .rfind(|e| e.method == *method && e.path == path)
    }

    /// Every registered pattern, in registration order
    #[must_use]
    pub fn path_patterns(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Print all registered routes to stdout
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.entries.len());
        for entry in &self.entries {
            println!(
                "[route] {} {} -> {}",
                entry.method, entry.path, entry.handler.handler_name
            );
        }
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
