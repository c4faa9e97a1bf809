//! # Route Definition Documents
//!
//! The declaration DSL as data: a YAML or JSON document whose entries are
//! replayed, depth-first and in document order, onto a [`Scope`].
//!
//! ```yaml
//! routes:
//!   - route: { verb: get, path: /health, to: "health#show" }
//!   - namespace:
//!       name: [api, v1]
//!       routes:
//!         - resources:
//!             name: posts
//!             except: [destroy]
//!             routes:
//!               - member: [{ verb: post, action: publish }]
//!               - collection: [{ verb: get, action: search }]
//!               - resources: { name: comments, only: [index, create] }
//! ```
//!
//! `to` takes either the `controller#action` shorthand or a map with
//! `controller`, `action` and optional `prefix` / `namespace`. Verbs are
//! case-insensitive. `resources` also accepts `param`, the singular name used
//! for the parent id segment of nested resources.

use crate::config::DrawConfig;
use crate::error::DrawResult;
use crate::scope::{draw, ResourceOptions, RestAction, Scope};
use crate::table::{NamedResolver, RouteSet, RouteTable};
use crate::target::{IntoTarget, Target};
use crate::verb::Verb;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// A parsed route definition document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub routes: Vec<Declaration>,
}

/// One declaration entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    Route(RouteDecl),
    Namespace(NamespaceDecl),
    Resources(ResourcesDecl),
    Member(Vec<ActionDecl>),
    Collection(Vec<ActionDecl>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDecl {
    pub verb: Verb,
    #[serde(default)]
    pub path: String,
    pub to: TargetDecl,
}

/// Declared target: shorthand string or structured map
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TargetDecl {
    Shorthand(String),
    Full(Target),
}

impl TargetDecl {
    fn to_target(&self) -> DrawResult<Target> {
        match self {
            TargetDecl::Shorthand(s) => Target::parse(s),
            TargetDecl::Full(t) => t.clone().into_target(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceDecl {
    pub name: Segments,
    #[serde(default)]
    pub routes: Vec<Declaration>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Segments {
    One(String),
    Many(Vec<String>),
}

impl Segments {
    fn to_vec(&self) -> Vec<String> {
        match self {
            Segments::One(s) => vec![s.clone()],
            Segments::Many(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesDecl {
    pub name: String,
    #[serde(default)]
    pub controller: Option<String>,
    #[serde(default)]
    pub only: Option<Vec<String>>,
    #[serde(default)]
    pub except: Option<Vec<String>>,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Singular name for `:<param>_id` in nested resources
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub routes: Vec<Declaration>,
}

impl ResourcesDecl {
    fn options(&self) -> DrawResult<ResourceOptions> {
        Ok(ResourceOptions {
            controller: self.controller.clone(),
            only: parse_actions(self.only.as_deref())?,
            except: parse_actions(self.except.as_deref())?,
            namespace: self.namespace.clone(),
            param: self.param.clone(),
        })
    }
}

fn parse_actions(names: Option<&[String]>) -> DrawResult<Option<Vec<RestAction>>> {
    names
        .map(|names| {
            names
                .iter()
                .map(|n| n.parse::<RestAction>())
                .collect::<DrawResult<Vec<_>>>()
        })
        .transpose()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionDecl {
    pub verb: Verb,
    pub action: String,
}

impl Definition {
    /// Parse a YAML document
    ///
    /// # Errors
    ///
    /// Fails when the document is not valid YAML or does not describe declarations.
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_yaml::from_str(content).context("Failed to parse YAML route definitions")?;
        serde_json::from_value(value).context("Invalid route definition document")
    }

    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Fails when the document is not valid JSON or does not describe declarations.
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Invalid route definition document")
    }

    /// Replay every declaration onto `scope`
    ///
    /// # Errors
    ///
    /// Returns the first [`DrawError`](crate::DrawError) raised while declaring.
    pub fn draw_into<T: RouteTable>(&self, scope: &mut Scope<'_, T>) -> DrawResult {
        apply_all(&self.routes, scope)
    }

    /// Compile into a fresh [`RouteSet`]
    ///
    /// # Errors
    ///
    /// Returns the first [`DrawError`](crate::DrawError) raised while declaring.
    pub fn compile(&self, config: &DrawConfig) -> DrawResult<RouteSet> {
        let mut routes = RouteSet::new();
        draw(&mut routes, &NamedResolver, config, |root| self.draw_into(root))?;
        info!(routes_count = routes.len(), "Route definitions compiled");
        Ok(routes)
    }
}

/// Load a route definition document, YAML (`.yaml`/`.yml`) or JSON
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_definition(path: impl AsRef<Path>) -> anyhow::Result<Definition> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route definitions from {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let definition = if is_yaml {
        Definition::from_yaml_str(&content)
    } else {
        Definition::from_json_str(&content)
    };
    definition.with_context(|| format!("Failed to load {}", path.display()))
}

fn apply_all<T: RouteTable>(declarations: &[Declaration], scope: &mut Scope<'_, T>) -> DrawResult {
    for declaration in declarations {
        apply(declaration, scope)?;
    }
    Ok(())
}

fn apply<T: RouteTable>(declaration: &Declaration, scope: &mut Scope<'_, T>) -> DrawResult {
    match declaration {
        Declaration::Route(route) => scope.route(route.verb, &route.path, route.to.to_target()?),
        Declaration::Namespace(ns) => {
            scope.namespace(ns.name.to_vec(), |child| apply_all(&ns.routes, child))
        }
        Declaration::Resources(res) => {
            let options = res.options()?;
            scope.resources_with(&res.name, options, |child| apply_all(&res.routes, child))
        }
        Declaration::Member(actions) => scope.member(|m| {
            for a in actions {
                m.action(a.verb, &a.action)?;
            }
            Ok(())
        }),
        Declaration::Collection(actions) => scope.collection(|c| {
            for a in actions {
                c.action(a.verb, &a.action)?;
            }
            Ok(())
        }),
    }
}
