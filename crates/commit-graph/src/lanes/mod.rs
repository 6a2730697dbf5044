mod rails;
mod scan;
mod validate;


use crate::{CommitGraph, GraphCommit, LayoutEngine, Palette, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use scan::Scan;
use validate::validate_commits;

/// Errors that can occur during lane layout computation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A commit has an empty identifier
    #[error("commit at row {row} has an empty identifier")]
    EmptyId { row: usize },

    /// Two commits share the same identifier
    #[error("commit {0} appears more than once")]
    DuplicateCommit(String),

    /// A commit lists itself as one of its parents
    #[error("commit {0} is its own parent")]
    SelfParent(String),

    /// A commit lists the same parent twice
    #[error("commit {commit} lists parent {parent} more than once")]
    DuplicateParent { commit: String, parent: String },

    /// The parent links within the window contain a cycle
    #[error("commit history contains a cycle at commit {0}")]
    GraphHasCycle(String),

    /// The layout configuration could not be parsed
    #[error("invalid layout configuration: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// The layout configuration holds unusable values
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for the lane-based commit graph layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneLayout {
    /// Lane width (`x`) and row height (`y`)
    pub unit: Vec2,

    /// Colors assigned to rails round-robin in creation order
    pub palette: Palette,

    /// Reject commit windows whose parent links form a cycle
    pub check_cycles: bool,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self {
            unit: Vec2::new(12.0, 24.0),
            palette: Palette::default(),
            check_cycles: true,
        }
    }
}

impl LaneLayout {
    /// Create a new lane layout with the given lane width and row height
    pub fn new(unit: Vec2) -> Self {
        Self {
            unit,
            ..Default::default()
        }
    }

    /// Parse a configuration from RON, missing fields keep their defaults
    ///
    /// # Errors
    /// Returns an error if the text is not valid RON or holds unusable values
    pub fn from_ron(text: &str) -> Result<Self, LayoutError> {
        let layout: Self = ron::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check that the configuration can produce a layout
    ///
    /// # Errors
    /// Returns an error for non-positive or non-finite sizes and empty palettes
    pub fn validate(&self) -> Result<(), LayoutError> {
        let Vec2 { x, y } = self.unit;
        if !(x.is_finite() && x > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "lane width must be positive, got {x}"
            )));
        }
        if !(y.is_finite() && y > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "row height must be positive, got {y}"
            )));
        }
        if self.palette.is_empty() {
            return Err(LayoutError::InvalidConfig("palette has no colors".into()));
        }
        Ok(())
    }

    /// Horizontal center of the lane slot `lane`
    pub fn lane_x(&self, lane: usize) -> f32 {
        (lane as f32 + 0.5) * self.unit.x
    }

    /// Vertical center of the row `row`
    pub fn row_y(&self, row: usize) -> f32 {
        (row as f32 + 0.5) * self.unit.y
    }
}

impl LayoutEngine for LaneLayout {
    type Error = LayoutError;

    fn layout<C>(&self, commits: &mut [C]) -> Result<CommitGraph, LayoutError>
    where
        C: GraphCommit,
    {
        self.validate()?;
        validate_commits(commits, self.check_cycles)?;

        debug!(commits = commits.len(), "Computing commit graph layout");

        let (graph, rows) = {
            let mut scan = Scan::new(self);
            for (row, commit) in commits.iter().enumerate() {
                scan.step(row, commit);
            }
            scan.finish(commits.len())
        };

        for (commit, row) in commits.iter_mut().zip(rows) {
            commit.set_merged(row.merged);
            commit.set_graph_offset(row.graph_offset);
        }

        debug!(
            dots = graph.dots.len(),
            lines = graph.lines.len(),
            links = graph.links.len(),
            "Commit graph layout done"
        );

        Ok(graph)
    }
}
