use crate::{ColorIndex, Point};
use serde::{Deserialize, Serialize};

/// Plotted position of one commit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// Center of the dot
    pub position: Point,
    pub color: ColorIndex,
}

/// A finished rail, drawn as a polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub points: Vec<Point>,
    pub color: ColorIndex,
    /// Whether the line is part of the history reachable from the head
    pub merged: bool,
}

/// Curved connector from a merge commit to a rail that already exists
///
/// Drawn as a quadratic curve from `start` to `end` bent towards `control`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub color: ColorIndex,
}

/// Everything a renderer needs to draw the graph column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitGraph {
    /// One dot per commit, in input order
    pub dots: Vec<Dot>,
    /// Rails in the order they were closed
    pub lines: Vec<Line>,
    pub links: Vec<ShortLink>,
}

impl CommitGraph {
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.lines.is_empty() && self.links.is_empty()
    }

    /// Horizontal extent of the drawing, padded by half a lane on the right
    pub fn width(&self, lane_width: f32) -> f32 {
        let line_points = self.lines.iter().flat_map(|line| line.points.iter());
        let link_points = self
            .links
            .iter()
            .flat_map(|link| [link.start, link.control, link.end]);
        let dot_points = self.dots.iter().map(|dot| dot.position);

        let max_x = line_points
            .copied()
            .chain(link_points)
            .chain(dot_points)
            .map(|point| point.x)
            .fold(None, |max: Option<f32>, x| Some(max.map_or(x, |max| max.max(x))));

        max_x.map_or(0.0, |x| x + lane_width / 2.0)
    }
}
