use crate::{CommitGraph, GraphCommit};

/// A layout engine that turns an ordered commit list into a drawable graph
///
/// Engines only consume the ordering they are given: the commit source is
/// responsible for supplying commits newest first, children before parents.
pub trait LayoutEngine {
    /// The error reported for input the engine refuses to lay out
    type Error: std::error::Error;

    /// Compute the graph for the given commits
    ///
    /// Besides returning the graph, the engine writes the merged flag and the
    /// graph column width back into every commit.
    ///
    /// # Errors
    /// Returns an error if the input is malformed (e.g. duplicate commit
    /// identifiers) or the engine configuration is invalid. No commit is
    /// modified in that case.
    fn layout<C>(&self, commits: &mut [C]) -> Result<CommitGraph, Self::Error>
    where
        C: GraphCommit;
}
