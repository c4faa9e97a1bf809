use super::{validate_name, ResourceFrame, Scope};
use crate::error::DrawResult;
use crate::table::RouteTable;
use crate::target::Target;
use crate::verb::Verb;
use std::sync::Arc;

/// Where the extra actions of an [`ActionScope`] live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// One resource instance: `/<resource>/:id(\d+)/<action>`
    Member,
    /// The resource collection: `/<resource>/<action>`
    Collection,
}

impl ActionKind {
    fn call(self) -> &'static str {
        match self {
            ActionKind::Member => "member",
            ActionKind::Collection => "collection",
        }
    }
}

/// Declaration context inside `member` or `collection`
///
/// Each verb takes a bare action name and registers exactly one route to
/// `<controller>#<action>` at `<prefix>/<action>`.
pub struct ActionScope<'a, T: RouteTable> {
    scope: Scope<'a, T>,
    frame: Arc<ResourceFrame>,
    kind: ActionKind,
}

impl<'a, T: RouteTable> ActionScope<'a, T> {
    pub(super) fn new(scope: Scope<'a, T>, frame: Arc<ResourceFrame>, kind: ActionKind) -> Self {
        Self { scope, frame, kind }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    #[must_use]
    pub fn resource(&self) -> &ResourceFrame {
        &self.frame
    }

    #[must_use]
    pub fn path_prefix(&self) -> String {
        let prefix = self.scope.path_prefix();
        match self.kind {
            ActionKind::Member => prefix + &self.scope.config().id_segment("id"),
            ActionKind::Collection => prefix,
        }
    }

    /// Register `<prefix>/<action>` for `verb`
    pub fn action(&mut self, verb: Verb, action: &str) -> DrawResult {
        validate_name(self.kind.call(), action)?;
        let target = Target::new(self.frame.controller(), action);
        let prefix = self.path_prefix();
        self.scope.register_at(prefix, verb, action, target)
    }

    pub fn get(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Get, action)
    }

    pub fn put(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Put, action)
    }

    pub fn post(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Post, action)
    }

    pub fn patch(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Patch, action)
    }

    pub fn delete(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Delete, action)
    }

    pub fn del(&mut self, action: &str) -> DrawResult {
        self.action(Verb::Delete, action)
    }
}
