use super::chain_prefix;
use crate::config::DrawConfig;
use crate::error::DrawError;
use crate::verb::Verb;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The seven conventional RESTful actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestAction {
    Index,
    Show,
    New,
    Create,
    Edit,
    Update,
    Destroy,
}

impl RestAction {
    /// Expansion order
    pub const ALL: [RestAction; 7] = [
        RestAction::Index,
        RestAction::Show,
        RestAction::New,
        RestAction::Create,
        RestAction::Edit,
        RestAction::Update,
        RestAction::Destroy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RestAction::Index => "index",
            RestAction::Show => "show",
            RestAction::New => "new",
            RestAction::Create => "create",
            RestAction::Edit => "edit",
            RestAction::Update => "update",
            RestAction::Destroy => "destroy",
        }
    }

    /// Verb and path suffix registered for this action
    #[must_use]
    pub fn route(self, config: &DrawConfig) -> (Verb, String) {
        let id = config.id_segment("id");
        match self {
            RestAction::Index => (Verb::Get, String::new()),
            RestAction::Show => (Verb::Get, id),
            RestAction::New => (Verb::Get, "/new".to_string()),
            RestAction::Create => (Verb::Post, String::new()),
            RestAction::Edit => (Verb::Get, format!("{id}/edit")),
            RestAction::Update => (Verb::Put, id),
            RestAction::Destroy => (Verb::Delete, id),
        }
    }
}

impl FromStr for RestAction {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DrawError::UnknownAction { name: s.to_string() })
    }
}

impl fmt::Display for RestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by `resources_with`
///
/// When both `only` and `except` are set, `only` wins and `except` is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceOptions {
    /// Controller name; defaults to the resource name
    pub controller: Option<String>,
    pub only: Option<Vec<RestAction>>,
    pub except: Option<Vec<RestAction>>,
    /// Extra namespace segment for the resource's chain
    pub namespace: Option<String>,
    /// Singular name used for `:<param>_id` in nested resources; defaults to
    /// [`singular`] of the resource name
    pub param: Option<String>,
}

impl ResourceOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    #[must_use]
    pub fn only(mut self, actions: impl IntoIterator<Item = RestAction>) -> Self {
        self.only = Some(actions.into_iter().collect());
        self
    }

    #[must_use]
    pub fn except(mut self, actions: impl IntoIterator<Item = RestAction>) -> Self {
        self.except = Some(actions.into_iter().collect());
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Actions to expand, in [`RestAction::ALL`] order
    #[must_use]
    pub fn allowed_actions(&self) -> Vec<RestAction> {
        match (&self.only, &self.except) {
            (Some(only), _) => RestAction::ALL
                .into_iter()
                .filter(|a| only.contains(a))
                .collect(),
            (None, Some(except)) => RestAction::ALL
                .into_iter()
                .filter(|a| !except.contains(a))
                .collect(),
            (None, None) => RestAction::ALL.to_vec(),
        }
    }
}

/// A declared resource, shared by its scope, its member/collection scopes
/// and any resources nested inside it
#[derive(Debug, Clone)]
pub struct ResourceFrame {
    name: String,
    controller: String,
    options: ResourceOptions,
    namespaces: Vec<String>,
    parent: Option<Arc<ResourceFrame>>,
}

impl ResourceFrame {
    #[must_use]
    pub fn new(
        name: &str,
        mut options: ResourceOptions,
        namespaces: Vec<String>,
        parent: Option<Arc<ResourceFrame>>,
    ) -> Self {
        let controller = options
            .controller
            .get_or_insert_with(|| name.to_string())
            .clone();
        Self {
            name: name.to_string(),
            controller,
            options,
            namespaces,
            parent,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    #[must_use]
    pub fn options(&self) -> &ResourceOptions {
        &self.options
    }

    /// Singular name a nested resource uses for this resource's id
    #[must_use]
    pub fn param(&self) -> String {
        self.options
            .param
            .clone()
            .unwrap_or_else(|| singular(&self.name))
    }

    #[must_use]
    pub fn allowed_actions(&self) -> Vec<RestAction> {
        self.options.allowed_actions()
    }

    /// Collection-level prefix
    ///
    /// A nested resource is addressed through its parent's member id, so the
    /// namespace chain does not take part in its prefix.
    #[must_use]
    pub fn path_prefix(&self, config: &DrawConfig) -> String {
        match &self.parent {
            Some(parent) => format!(
                "{}{}/{}",
                parent.path_prefix(config),
                config.id_segment(&format!("{}_id", parent.param())),
                self.name
            ),
            None => format!("{}/{}", chain_prefix(&self.namespaces), self.name),
        }
    }
}

/// Singular form of a plural resource name, used for parent id segments
///
/// Covers the regular English endings: `categories` -> `category`,
/// `boxes` -> `box`, `branches` -> `branch`, `caches` -> `cache`,
/// `posts` -> `post`. Names ending in `ss`, `us`, `is` or `ws` (`class`,
/// `status`, `analysis`, `news`) are taken as already singular and returned
/// unchanged, as is anything that does not end in `s`. When the result is
/// still wrong, set [`ResourceOptions::param`].
#[must_use]
pub fn singular(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for ending in ["sses", "shes", "xes", "zes"] {
        if name.ends_with(ending) {
            return name[..name.len() - 2].to_string();
        }
    }
    if let Some(stem) = name.strip_suffix("ches") {
        // `tches`, `nches`, `rches`, `oaches`, `eaches` drop `es`; `caches`, `niches` drop `s`
        let drops_es = stem.ends_with(|c: char| !"aeiou".contains(c))
            || stem.ends_with("oa")
            || stem.ends_with("ea");
        if !stem.is_empty() {
            let keep = if drops_es { 2 } else { 1 };
            return name[..name.len() - keep].to_string();
        }
    }
    if ["ss", "us", "is", "ws"].iter().any(|e| name.ends_with(e)) {
        return name.to_string();
    }
    match name.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}
