//! # Route Table Module
//!
//! The route table is the collaborator every scope registers into. It is
//! owned by the caller, passed into the root scope when drawing starts and
//! shared by mutable reference through every nested scope.
//!
//! ## Overview
//!
//! The module exposes two seams and one concrete implementation:
//!
//! - [`RouteTable`] - append-only sink for `(method, pattern, handler)` entries
//! - [`DispatchResolver`] - turns a [`TargetDescriptor`](crate::target::TargetDescriptor)
//!   into whatever handler type the table stores
//! - [`RouteSet`] / [`NamedResolver`] - an in-memory, order-preserving table
//!   whose handlers are named dispatch targets
//!
//! ## Example
//!
//! ```rust
//! use routedraw::table::RouteSet;
//!
//! # fn main() -> Result<(), routedraw::DrawError> {
//! let routes = RouteSet::draw(|r| {
//!     r.get("/health", "health#show")?;
//!     r.resources("posts", |_| Ok(()))
//! })?;
//!
//! assert_eq!(routes.len(), 8);
//! routes.dump_routes();
//! # Ok(())
//! # }
//! ```
//!
//! Registered patterns use the `:name(constraint)` syntax. Matching them
//! against requests is the hosting router's job; [`RouteEntry::pattern_regex`]
//! and [`RouteEntry::openapi_path`] hand them over in the two forms routers
//! usually accept.

mod pattern;
mod set;
#[cfg(test)]
mod tests;

pub use pattern::{openapi_path, pattern_to_regex};
pub use set::{Dispatch, DispatchResolver, NamedResolver, RouteEntry, RouteSet, RouteTable};
