//! Lane layout for commit history graphs
//!
//! This crate computes the graph column drawn next to a commit log, the way
//! `git log --graph` does. It takes commits ordered newest first, each with
//! its parent identifiers. In a single forward pass it assigns every branch
//! line a lane, packs lanes left to right as lines terminate, and produces
//! everything a renderer needs:
//!
//! - [`Dot`]s: one plotted position per commit, in input order
//! - [`Line`]s: polylines following each branch to its primary ancestor
//! - [`ShortLink`]s: curved connectors for merge parents already on a lane
//!
//! Colors are abstract [`ColorIndex`] values into a [`Palette`].
//!
//! # Example
//!
//! ```
//! use commit_graph::{Commit, LaneLayout, LayoutEngine, Vec2};
//!
//! // Newest first: `b` and `c` merge into `m`
//! let mut commits = vec![
//!     Commit::new("m", ["b", "c"]).head(),
//!     Commit::new("c", ["a"]),
//!     Commit::new("b", ["a"]),
//!     Commit::root("a"),
//! ];
//!
//! // Use the default geometry (12px lanes, 24px rows)...
//! let graph = commit_graph::layout(&mut commits).unwrap();
//! assert_eq!(graph.dots.len(), 4);
//!
//! // ...or configure the engine explicitly
//! let engine = LaneLayout::new(Vec2::new(16.0, 32.0));
//! let graph = engine.layout(&mut commits).unwrap();
//! assert!(commits[0].is_merged);
//! assert!(commits[0].graph_offset >= graph.dots[0].position.x);
//! ```

mod commit;
mod engine;
mod geometry;
mod graph;
mod palette;

pub mod lanes;

// Re-export core types and traits
pub use commit::{Commit, GraphCommit};
pub use engine::LayoutEngine;
pub use geometry::{Point, Vec2};
pub use graph::{CommitGraph, Dot, Line, ShortLink};
pub use palette::{ColorIndex, Palette, Rgb, DEFAULT_COLORS};

// Re-export lane layout types
pub use lanes::{LaneLayout, LayoutError};

/// Lay out commits with the default [`LaneLayout`]
///
/// # Errors
/// Returns an error if the commit list is malformed, see [`LayoutError`]
pub fn layout<C>(commits: &mut [C]) -> Result<CommitGraph, LayoutError>
where
    C: GraphCommit,
{
    LaneLayout::default().layout(commits)
}
