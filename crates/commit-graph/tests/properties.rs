use commit_graph::{Commit, CommitGraph, LaneLayout, LayoutEngine};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Random commit windows, newest first
///
/// Parents always come later in the window, and a few parent identifiers
/// point past its end so that some rails dangle.
fn history_strategy() -> impl Strategy<Value = Vec<Commit>> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(0..n + 3, 0..4), n),
                0..n,
            )
        })
        .prop_map(|(picks, head)| build_history(picks, head))
}

fn build_history(picks: Vec<Vec<usize>>, head: usize) -> Vec<Commit> {
    picks
        .into_iter()
        .enumerate()
        .map(|(row, picks)| {
            let mut parents: Vec<String> = Vec::new();
            for pick in picks.into_iter().filter(|&pick| pick > row) {
                let parent = format!("c{pick}");
                if !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
            let commit = Commit::new(format!("c{row}"), parents);
            if row == head {
                commit.head()
            } else {
                commit
            }
        })
        .collect()
}

fn on_lane_grid(engine: &LaneLayout, x: f32) -> bool {
    let slot = x / engine.unit.x - 0.5;
    slot >= 0.0 && slot.fract() == 0.0
}

// ===================
// Property checks
// ===================

/// One dot per commit, in input order, on its row
fn check_one_dot_per_commit(
    commits: &[Commit],
    graph: &CommitGraph,
) -> Result<(), TestCaseError> {
    let engine = LaneLayout::default();
    prop_assert_eq!(graph.dots.len(), commits.len());
    for (row, dot) in graph.dots.iter().enumerate() {
        prop_assert_eq!(dot.position.y, engine.row_y(row));
    }
    Ok(())
}

/// Lines are never empty and never repeat a point
fn check_lines_are_clean(graph: &CommitGraph) -> Result<(), TestCaseError> {
    for line in &graph.lines {
        prop_assert!(!line.points.is_empty());
        for pair in line.points.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
    Ok(())
}

/// Every position sits on a lane and inside the reserved row width
fn check_dots_fit_rows(
    commits: &[Commit],
    graph: &CommitGraph,
) -> Result<(), TestCaseError> {
    let engine = LaneLayout::default();
    for (commit, dot) in commits.iter().zip(&graph.dots) {
        prop_assert!(on_lane_grid(&engine, dot.position.x));
        prop_assert!(dot.position.x + engine.unit.x / 2.0 <= commit.graph_offset);
    }
    for line in &graph.lines {
        for point in &line.points {
            prop_assert!(on_lane_grid(&engine, point.x));
        }
    }
    Ok(())
}

/// Short links bend from the merge dot down onto the target lane
fn check_links_are_l_shaped(graph: &CommitGraph) -> Result<(), TestCaseError> {
    let half_row = LaneLayout::default().unit.y / 2.0;
    for link in &graph.links {
        prop_assert_eq!(link.end.y, link.start.y + half_row);
        prop_assert_eq!(link.control.x, link.end.x);
        prop_assert_eq!(link.control.y, link.start.y);
    }
    Ok(())
}

/// Laying out the same window twice gives the same result
fn check_layout_is_repeatable(mut commits: Vec<Commit>) -> Result<(), TestCaseError> {
    let engine = LaneLayout::default();
    let first = engine
        .layout(&mut commits)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let first_rows: Vec<(bool, f32)> = commits
        .iter()
        .map(|commit| (commit.is_merged, commit.graph_offset))
        .collect();

    commits.iter_mut().for_each(Commit::reset);
    let second = engine
        .layout(&mut commits)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let second_rows: Vec<(bool, f32)> = commits
        .iter()
        .map(|commit| (commit.is_merged, commit.graph_offset))
        .collect();

    prop_assert_eq!(first, second);
    prop_assert_eq!(first_rows, second_rows);
    Ok(())
}

fn laid_out(mut commits: Vec<Commit>) -> Result<(Vec<Commit>, CommitGraph), TestCaseError> {
    let graph = commit_graph::layout(&mut commits)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    Ok((commits, graph))
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn one_dot_per_commit(commits in history_strategy()) {
        let (commits, graph) = laid_out(commits)?;
        check_one_dot_per_commit(&commits, &graph)?;
    }

    #[test]
    fn lines_are_clean(commits in history_strategy()) {
        let (_, graph) = laid_out(commits)?;
        check_lines_are_clean(&graph)?;
    }

    #[test]
    fn dots_fit_rows(commits in history_strategy()) {
        let (commits, graph) = laid_out(commits)?;
        check_dots_fit_rows(&commits, &graph)?;
    }

    #[test]
    fn links_are_l_shaped(commits in history_strategy()) {
        let (_, graph) = laid_out(commits)?;
        check_links_are_l_shaped(&graph)?;
    }

    #[test]
    fn layout_is_repeatable(commits in history_strategy()) {
        check_layout_is_repeatable(commits)?;
    }
}
