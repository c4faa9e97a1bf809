//! # Scope Module
//!
//! Scopes are the declaration contexts of a route definition. Drawing starts
//! at a root [`Scope`]; every `namespace` or `resources` declaration creates a
//! child scope and runs a caller-supplied block against it, so compilation is
//! a single depth-first pass that bottoms out in `add_route` calls on the
//! shared [`RouteTable`].
//!
//! ## Scope kinds
//!
//! | kind | path prefix | direct verbs |
//! |---|---|---|
//! | root | `''` | register |
//! | namespace | `/` + chain joined by `/` | register |
//! | resource | `<chain>/<name>` or `<parent>/:<parent>_id(\d+)/<name>` | ignored |
//! | member ([`ActionScope`]) | resource prefix + `/:id(\d+)` | one route per action |
//! | collection ([`ActionScope`]) | resource prefix | one route per action |
//!
//! ## Example
//!
//! ```rust
//! use routedraw::scope::{ResourceOptions, RestAction};
//! use routedraw::table::RouteSet;
//!
//! # fn main() -> Result<(), routedraw::DrawError> {
//! let routes = RouteSet::draw(|r| {
//!     r.namespace("admin", |admin| {
//!         admin.resources("posts", |posts| {
//!             posts.member(|m| m.post("publish"))?;
//!             posts.resources_with(
//!                 "comments",
//!                 ResourceOptions::new().only([RestAction::Index, RestAction::Create]),
//!                 |_| Ok(()),
//!             )
//!         })
//!     })
//! })?;
//!
//! assert!(routes
//!     .find(&http::Method::POST, r"/admin/posts/:id(\d+)/publish")
//!     .is_some());
//! assert!(routes
//!     .find(&http::Method::GET, r"/admin/posts/:post_id(\d+)/comments")
//!     .is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure
//!
//! Every declaration returns [`DrawResult`]. The first error aborts the pass,
//! but routes registered before it stay in the table: registration is
//! incremental, so a caller that recovers from the error sees a partially
//! populated table.

mod action;
mod resource;

pub use action::{ActionKind, ActionScope};
pub use resource::{singular, ResourceFrame, ResourceOptions, RestAction};

use crate::config::DrawConfig;
use crate::error::{DrawError, DrawResult};
use crate::table::{DispatchResolver, RouteTable};
use crate::target::{IntoTarget, Target, TargetDescriptor};
use crate::verb::Verb;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Namespace segments and resource names: one non-empty path segment
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/\s]+$").expect("name regex should be valid"));

/// Compile a declaration block against a caller-owned table
///
/// # Errors
///
/// Returns the first [`DrawError`] raised while declaring. Routes registered
/// before the failure are not rolled back.
pub fn draw<T, F>(
    table: &mut T,
    resolver: &dyn DispatchResolver<T>,
    config: &DrawConfig,
    block: F,
) -> DrawResult
where
    T: RouteTable,
    F: FnOnce(&mut Scope<'_, T>) -> DrawResult,
{
    let mut root = Scope {
        table,
        resolver,
        config,
        namespaces: Vec::new(),
        kind: ScopeKind::Root,
    };
    block(&mut root)
}

/// Which declaration context a [`Scope`] represents
#[derive(Debug, Clone)]
pub enum ScopeKind {
    Root,
    Namespace,
    Resource(Arc<ResourceFrame>),
}

/// A declaration context
pub struct Scope<'a, T: RouteTable> {
    table: &'a mut T,
    resolver: &'a dyn DispatchResolver<T>,
    config: &'a DrawConfig,
    /// Owned copy; children extend their own clone
    namespaces: Vec<String>,
    kind: ScopeKind,
}

impl<'a, T: RouteTable> Scope<'a, T> {
    #[must_use]
    pub fn kind(&self) -> &ScopeKind {
        &self.kind
    }

    #[must_use]
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    #[must_use]
    pub fn config(&self) -> &DrawConfig {
        self.config
    }

    /// URL prefix shared by every route declared in this scope
    #[must_use]
    pub fn path_prefix(&self) -> String {
        match &self.kind {
            ScopeKind::Resource(frame) => frame.path_prefix(self.config),
            ScopeKind::Root | ScopeKind::Namespace => chain_prefix(&self.namespaces),
        }
    }

    /// Declare one route
    ///
    /// Inside a resources block direct verbs are ignored (with a warning);
    /// extra actions belong in [`Scope::member`] or [`Scope::collection`].
    pub fn route(&mut self, verb: Verb, path: &str, target: impl IntoTarget) -> DrawResult {
        let target = target.into_target()?;
        if let ScopeKind::Resource(frame) = &self.kind {
            warn!(
                resource = %frame.name(),
                verb = %verb,
                path = %path,
                "Direct verb declaration ignored inside resources block"
            );
            return Ok(());
        }
        let prefix = self.path_prefix();
        self.register_at(prefix, verb, path, target)
    }

    pub fn get(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Get, path, target)
    }

    pub fn put(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Put, path, target)
    }

    pub fn post(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Post, path, target)
    }

    pub fn patch(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Patch, path, target)
    }

    pub fn delete(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Delete, path, target)
    }

    /// Alias for [`Scope::delete`]
    pub fn del(&mut self, path: &str, target: impl IntoTarget) -> DrawResult {
        self.route(Verb::Delete, path, target)
    }

    /// Declare a namespace of one or more segments and draw `block` inside it
    ///
    /// Inside a resources block the resource already owns its path segment,
    /// so the segments are not applied and `block` runs against the resource
    /// scope itself.
    pub fn namespace<N, F>(&mut self, names: N, block: F) -> DrawResult
    where
        N: NamespaceSegments,
        F: FnOnce(&mut Scope<'_, T>) -> DrawResult,
    {
        if let ScopeKind::Resource(frame) = &self.kind {
            debug!(resource = %frame.name(), "Namespace inside resources block drawn in place");
            return block(self);
        }

        let segments = names.into_segments();
        if segments.is_empty() {
            return Err(DrawError::InvalidName {
                call: "namespace",
                name: String::new(),
            });
        }
        for segment in &segments {
            validate_name("namespace", segment)?;
        }

        let mut namespaces = self.namespaces.clone();
        namespaces.extend(segments);
        let mut child = self.child(namespaces, ScopeKind::Namespace);
        block(&mut child)
    }

    /// Declare a resource with default options
    pub fn resources<F>(&mut self, name: &str, block: F) -> DrawResult
    where
        F: FnOnce(&mut Scope<'_, T>) -> DrawResult,
    {
        self.resources_with(name, ResourceOptions::default(), block)
    }

    /// Declare a resource, expand its RESTful routes, then draw `block` inside it
    ///
    /// `options.namespace` extends the resource's namespace chain and is
    /// consumed there. Declared inside another resource, the new resource is
    /// nested under it.
    pub fn resources_with<F>(&mut self, name: &str, mut options: ResourceOptions, block: F) -> DrawResult
    where
        F: FnOnce(&mut Scope<'_, T>) -> DrawResult,
    {
        validate_name("resources", name)?;

        let mut namespaces = self.namespaces.clone();
        if let Some(ns) = options.namespace.take() {
            validate_name("resources", &ns)?;
            namespaces.push(ns);
        }
        for value in [&options.controller, &options.param].into_iter().flatten() {
            validate_name("resources", value)?;
        }

        let parent = match &self.kind {
            ScopeKind::Resource(frame) => Some(Arc::clone(frame)),
            ScopeKind::Root | ScopeKind::Namespace => None,
        };
        let frame = Arc::new(ResourceFrame::new(name, options, namespaces.clone(), parent));

        let mut child = self.child(namespaces, ScopeKind::Resource(Arc::clone(&frame)));
        child.generate_restful_routes(&frame)?;
        block(&mut child)
    }

    /// Extra actions on a single resource: `/<resource>/:id(\d+)/<action>`
    pub fn member<F>(&mut self, block: F) -> DrawResult
    where
        F: FnOnce(&mut ActionScope<'_, T>) -> DrawResult,
    {
        self.action_scope("member", ActionKind::Member, block)
    }

    /// Extra actions on the resource collection: `/<resource>/<action>`
    pub fn collection<F>(&mut self, block: F) -> DrawResult
    where
        F: FnOnce(&mut ActionScope<'_, T>) -> DrawResult,
    {
        self.action_scope("collection", ActionKind::Collection, block)
    }

    fn action_scope<F>(&mut self, call: &'static str, kind: ActionKind, block: F) -> DrawResult
    where
        F: FnOnce(&mut ActionScope<'_, T>) -> DrawResult,
    {
        let frame = match &self.kind {
            ScopeKind::Resource(frame) => Arc::clone(frame),
            ScopeKind::Root | ScopeKind::Namespace => {
                return Err(DrawError::InvalidNesting { call });
            }
        };
        let namespaces = self.namespaces.clone();
        let scope = self.child(namespaces, ScopeKind::Resource(Arc::clone(&frame)));
        let mut actions = ActionScope::new(scope, frame, kind);
        block(&mut actions)
    }

    /// Register every allowed RESTful action of `frame`, in table order
    fn generate_restful_routes(&mut self, frame: &ResourceFrame) -> DrawResult {
        let prefix = frame.path_prefix(self.config);
        for action in frame.allowed_actions() {
            let (verb, suffix) = action.route(self.config);
            let target = Target::new(frame.controller(), action.as_str());
            self.register_at(prefix.clone(), verb, &suffix, target)?;
        }
        Ok(())
    }

    /// Shared single-route registrar behind every verb
    fn register_at(&mut self, mut prefix: String, verb: Verb, path: &str, target: Target) -> DrawResult {
        match (&target.prefix, &target.namespace) {
            (Some(extra), _) => {
                if !extra.starts_with('/') {
                    prefix.push('/');
                }
                prefix.push_str(extra);
            }
            (None, Some(ns)) => {
                prefix.push('/');
                prefix.push_str(ns);
            }
            (None, None) => {}
        }
        let full_path = join_path(&prefix, path);

        let mut namespace = self.namespaces.clone();
        namespace.extend(target.namespace);
        let descriptor = TargetDescriptor {
            controller: target.controller,
            action: target.action,
            namespace,
        };

        debug!(
            method = %verb.method(),
            path = %full_path,
            target = %descriptor,
            "Route registered"
        );

        let handler = self.resolver.resolve(descriptor, &*self.table);
        self.table.add_route(verb.method(), full_path, handler);
        Ok(())
    }

    fn child(&mut self, namespaces: Vec<String>, kind: ScopeKind) -> Scope<'_, T> {
        Scope {
            table: &mut *self.table,
            resolver: self.resolver,
            config: self.config,
            namespaces,
            kind,
        }
    }
}

/// One or more namespace segments
///
/// Implemented for a single segment (`"admin"`) and for lists
/// (`["api", "v1"]`, `vec!["api".to_string()]`).
pub trait NamespaceSegments {
    fn into_segments(self) -> Vec<String>;
}

impl NamespaceSegments for &str {
    fn into_segments(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl NamespaceSegments for String {
    fn into_segments(self) -> Vec<String> {
        vec![self]
    }
}

impl NamespaceSegments for Vec<String> {
    fn into_segments(self) -> Vec<String> {
        self
    }
}

impl NamespaceSegments for Vec<&str> {
    fn into_segments(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl NamespaceSegments for &[&str] {
    fn into_segments(self) -> Vec<String> {
        self.iter().map(|s| (*s).to_string()).collect()
    }
}

impl<const N: usize> NamespaceSegments for [&str; N] {
    fn into_segments(self) -> Vec<String> {
        self.iter().map(|s| (*s).to_string()).collect()
    }
}

/// `''` for an empty chain, else `/` + segments joined by `/`
#[must_use]
pub fn chain_prefix(namespaces: &[String]) -> String {
    if namespaces.is_empty() {
        String::new()
    } else {
        format!("/{}", namespaces.join("/"))
    }
}

/// Concatenate a scope prefix and a local path with exactly one `/` between
///
/// An empty local path yields the bare prefix (or `/` at the root).
#[must_use]
pub fn join_path(prefix: &str, path: &str) -> String {
    let base = prefix.trim_end_matches('/');
    let suffix = path.trim_start_matches('/');
    match (base.is_empty(), suffix.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => base.to_string(),
        (true, false) => format!("/{suffix}"),
        (false, false) => format!("{base}/{suffix}"),
    }
}

pub(crate) fn validate_name(call: &'static str, name: &str) -> DrawResult {
    if NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(DrawError::InvalidName {
            call,
            name: name.to_string(),
        })
    }
}
