//! # CLI Module
//!
//! Command-line access to route compilation for definition documents.
//!
//! ## Commands
//!
//! ### `draw`
//!
//! Compile a definition document and print the route table:
//!
//! ```bash
//! routedraw draw --file config/routes.yaml
//! routedraw draw --file config/routes.yaml --format json
//! ```
//!
//! ### `check`
//!
//! Compile a definition document and report only the route count. Exits
//! non-zero on any definition error:
//!
//! ```bash
//! routedraw check --file config/routes.yaml
//! ```
//!
//! ## Environment
//!
//! - `ROUTEDRAW_ID_CONSTRAINT` - id segment constraint (see [`crate::config`])
//! - `ROUTEDRAW_LOG_LEVEL`, `ROUTEDRAW_LOG_FORMAT` - logging (see [`crate::logging`])

mod commands;


pub use commands::{render_routes, run_cli, Cli, Commands, OutputFormat};
