//! # routedraw
//!
//! **routedraw** compiles a nested, block-structured description of an
//! application's HTTP surface into a flat route table. Namespaces, RESTful
//! resources and member/collection actions are declared as Rust closures (or
//! as a YAML/JSON definition document) and flattened into
//! `(method, pattern, dispatch target)` registrations.
//!
//! ## Overview
//!
//! routedraw does not match requests, invoke controllers or check that they
//! exist. It only turns declarations into registrations against a
//! caller-owned [`RouteTable`](table::RouteTable), binding each declared target
//! through a [`DispatchResolver`](table::DispatchResolver).
//!
//! ## Architecture
//!
//! - **[`scope`]** - declaration contexts: root, namespace, resource, member, collection
//! - **[`target`]** - `controller#action` shorthand and canonical target descriptors
//! - **[`table`]** - route table and resolver seams, plus the in-memory [`RouteSet`]
//! - **[`verb`]** - the declarable HTTP verbs
//! - **[`definition`]** - route definitions loaded from YAML or JSON documents
//! - **[`config`]** - environment-driven compilation settings
//! - **[`logging`]** - `tracing-subscriber` initialisation for the CLI
//! - **[`cli`]** - the `routedraw` command line
//!
//! ### Compilation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant Root as Scope (root)
//!     participant Res as Scope (resource)
//!     participant Member as ActionScope (member)
//!     participant Resolver as DispatchResolver
//!     participant Table as RouteTable
//!
//!     User->>Root: RouteSet::draw(block)
//!     Root->>Res: resources("posts", block)
//!     Res->>Res: generate RESTful routes<br/>(index, show, new, create, edit, update, destroy)
//!     loop each allowed action
//!         Res->>Resolver: resolve(posts#action, table)
//!         Res->>Table: add_route(method, /posts..., handler)
//!     end
//!     Res->>Member: member(block)
//!     Member->>Resolver: resolve(posts#publish, table)
//!     Member->>Table: add_route(POST, /posts/:id(\d+)/publish, handler)
//!     Root-->>User: RouteSet
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use routedraw::{RestAction, ResourceOptions, RouteSet};
//!
//! # fn main() -> Result<(), routedraw::DrawError> {
//! let routes = RouteSet::draw(|r| {
//!     r.get("/", "home#index")?;
//!     r.namespace(["api", "v1"], |api| {
//!         api.resources_with(
//!             "users",
//!             ResourceOptions::new().except([RestAction::Destroy]),
//!             |users| users.collection(|c| c.get("search")),
//!         )
//!     })
//! })?;
//!
//! for route in &routes {
//!     println!("{} {} -> {}", route.method, route.path, route.handler.handler_name);
//! }
//! assert_eq!(routes.len(), 1 + 6 + 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Semantics
//!
//! Every declaration returns [`DrawResult`]. Errors are programmer errors in
//! the definitions (malformed `controller#action` targets, empty names,
//! `member` outside a resource) and abort the pass. Registration is
//! incremental, so routes declared before the failure remain in the table.

pub mod cli;
pub mod config;
pub mod definition;
pub mod error;
pub mod logging;
pub mod scope;
pub mod table;
pub mod target;
pub mod verb;

pub use config::DrawConfig;
pub use definition::{load_definition, Definition};
pub use error::{DrawError, DrawResult};
pub use scope::{draw, ActionKind, ActionScope, ResourceOptions, RestAction, Scope, ScopeKind};
pub use table::{Dispatch, DispatchResolver, NamedResolver, RouteEntry, RouteSet, RouteTable};
pub use target::{IntoTarget, Target, TargetDescriptor};
pub use verb::Verb;
