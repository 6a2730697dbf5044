use super::LayoutError;
use crate::GraphCommit;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use std::collections::{HashMap, HashSet};

/// Reject commit windows the scan cannot lay out faithfully
///
/// Parents missing from the window are fine: they become dangling rails.
pub(crate) fn validate_commits<C>(commits: &[C], check_cycles: bool) -> Result<(), LayoutError>
where
    C: GraphCommit,
{
    let mut rows: HashMap<&str, usize> = HashMap::with_capacity(commits.len());

    for (row, commit) in commits.iter().enumerate() {
        let id = commit.id();
        if id.is_empty() {
            return Err(LayoutError::EmptyId { row });
        }
        if rows.insert(id, row).is_some() {
            return Err(LayoutError::DuplicateCommit(id.to_owned()));
        }

        let mut seen = HashSet::with_capacity(commit.parents().len());
        for parent in commit.parents() {
            if parent == id {
                return Err(LayoutError::SelfParent(id.to_owned()));
            }
            if !seen.insert(parent.as_str()) {
                return Err(LayoutError::DuplicateParent {
                    commit: id.to_owned(),
                    parent: parent.clone(),
                });
            }
        }
    }

    if check_cycles {
        check_acyclic(commits, &rows)?;
    }

    Ok(())
}

/// Ensure the parent edges between commits of the window form a DAG
fn check_acyclic<C>(commits: &[C], rows: &HashMap<&str, usize>) -> Result<(), LayoutError>
where
    C: GraphCommit,
{
    let mut graph = DiGraphMap::<usize, ()>::with_capacity(commits.len(), commits.len());
    for (row, commit) in commits.iter().enumerate() {
        graph.add_node(row);
        for parent in commit.parents() {
            if let Some(&parent_row) = rows.get(parent.as_str()) {
                graph.add_edge(row, parent_row, ());
            }
        }
    }

    toposort(&graph, None)
        .map(|_| ())
        .map_err(|cycle| LayoutError::GraphHasCycle(commits[cycle.node_id()].id().to_owned()))
}
