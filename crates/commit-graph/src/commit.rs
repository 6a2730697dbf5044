use serde::{Deserialize, Serialize};

/// Trait for commits fed to the layout engine
///
/// The engine reads the identity and ancestry of each commit and writes back
/// two per-row results for the renderer: the merged flag and the reserved
/// graph column width.
pub trait GraphCommit {
    /// Unique identifier of the commit
    fn id(&self) -> &str;

    /// Parent identifiers, primary parent first
    fn parents(&self) -> &[String];

    /// Whether this commit is the current head
    fn is_head(&self) -> bool;

    /// Whether this commit was already known to be merged into the head
    fn is_merged(&self) -> bool;

    fn set_merged(&mut self, merged: bool);

    /// Store the width reserved for the graph column on this commit's row
    fn set_graph_offset(&mut self, offset: f32);
}

/// A plain commit record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub parents: Vec<String>,
    #[serde(default)]
    pub is_head: bool,
    #[serde(default)]
    pub is_merged: bool,
    #[serde(default)]
    pub graph_offset: f32,
}

impl Commit {
    /// Create a commit with the given parents
    pub fn new<I, P>(id: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            id: id.into(),
            parents: parents.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Create a commit without parents
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Mark this commit as the current head
    pub fn head(mut self) -> Self {
        self.is_head = true;
        self
    }

    /// Mark this commit as merged into the head
    pub fn merged(mut self) -> Self {
        self.is_merged = true;
        self
    }

    /// Clear the fields written by a previous layout
    pub fn reset(&mut self) {
        self.is_merged = false;
        self.graph_offset = 0.0;
    }
}

impl GraphCommit for Commit {
    fn id(&self) -> &str {
        &self.id
    }

    fn parents(&self) -> &[String] {
        &self.parents
    }

    fn is_head(&self) -> bool {
        self.is_head
    }

    fn is_merged(&self) -> bool {
        self.is_merged
    }

    fn set_merged(&mut self, merged: bool) {
        self.is_merged = merged;
    }

    fn set_graph_offset(&mut self, offset: f32) {
        self.graph_offset = offset;
    }
}

impl<C: GraphCommit + ?Sized> GraphCommit for Box<C> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn parents(&self) -> &[String] {
        (**self).parents()
    }

    fn is_head(&self) -> bool {
        (**self).is_head()
    }

    fn is_merged(&self) -> bool {
        (**self).is_merged()
    }

    fn set_merged(&mut self, merged: bool) {
        (**self).set_merged(merged)
    }

    fn set_graph_offset(&mut self, offset: f32) {
        (**self).set_graph_offset(offset)
    }
}
