use super::rails::{RailId, Rails};
use super::LaneLayout;
use crate::{ColorIndex, CommitGraph, Dot, GraphCommit, Point, ShortLink};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Per-row results written back to the commits once the scan is done
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RowState {
    pub merged: bool,
    pub graph_offset: f32,
}

/// State of the single forward pass over the commit list
pub(crate) struct Scan<'l, 'a> {
    layout: &'l LaneLayout,
    rails: Rails<'a>,
    /// Rails still waiting for a commit, in lane order
    open: Vec<RailId>,
    /// Rail reachable through each awaited parent, only valid for one row
    reachable: HashMap<&'a str, RailId>,
    ended: Vec<RailId>,
    graph: CommitGraph,
    rows: Vec<RowState>,
}

impl<'l, 'a> Scan<'l, 'a> {
    pub fn new(layout: &'l LaneLayout) -> Self {
        Self {
            layout,
            rails: Rails::default(),
            open: Vec::new(),
            reachable: HashMap::new(),
            ended: Vec::new(),
            graph: CommitGraph::default(),
            rows: Vec::new(),
        }
    }

    /// Lay out one commit on row `row`
    pub fn step<C>(&mut self, row: usize, commit: &'a C)
    where
        C: GraphCommit,
    {
        let half_row = self.layout.unit.half().y;
        let y = self.layout.row_y(row);
        let id = commit.id();
        let parents = commit.parents();

        let open_before = self.open.len();
        let mut lanes = 0;
        let mut merged = commit.is_head() || commit.is_merged();
        let mut primary = None;

        for &rail_id in &self.open {
            let rail = self.rails.get_mut(rail_id);
            if rail.awaited == Some(id) {
                if primary.is_none() {
                    primary = Some(rail_id);
                    match parents.first() {
                        Some(parent) => {
                            rail.awaited = Some(parent.as_str());
                            self.reachable.entry(parent.as_str()).or_insert(rail_id);
                        }
                        None => self.ended.push(rail_id),
                    }
                    rail.move_to(Point::new(self.layout.lane_x(lanes), y), half_row);
                    lanes += 1;
                } else {
                    // Converges into the primary rail on this commit's dot
                    self.ended.push(rail_id);
                }
                merged |= rail.merged;
            } else {
                if let Some(awaited) = rail.awaited {
                    self.reachable.entry(awaited).or_insert(rail_id);
                }
                rail.move_to(Point::new(self.layout.lane_x(lanes), y), half_row);
                lanes += 1;
            }
        }

        if primary.is_none() {
            if let Some(parent) = parents.first() {
                let start = Point::new(self.layout.lane_x(lanes), y);
                lanes += 1;
                let rail_id = self.create_rail(parent, merged, start);
                primary = Some(rail_id);
            }
        }

        let dot = match primary {
            Some(rail_id) => {
                let rail = self.rails.get_mut(rail_id);
                rail.merged = merged;
                Dot {
                    position: rail.cursor(),
                    color: rail.color,
                }
            }
            None => {
                // Isolated commit: nothing awaits it and it has no parent
                let position = Point::new(self.layout.lane_x(lanes), y);
                lanes += 1;
                Dot {
                    position,
                    color: ColorIndex(0),
                }
            }
        };
        self.graph.dots.push(dot);

        for parent in parents.iter().skip(1) {
            match self.reachable.get(parent.as_str()).copied() {
                Some(target) => {
                    let target = self.rails.get(target);
                    let end = Point::new(target.cursor().x, y + half_row);
                    self.graph.links.push(ShortLink {
                        start: dot.position,
                        control: Point::new(end.x, dot.position.y),
                        end,
                        color: target.color,
                    });
                }
                None => {
                    lanes += 1;
                    self.create_rail(parent, merged, dot.position);
                }
            }
        }

        for rail_id in std::mem::take(&mut self.ended) {
            self.rails.get_mut(rail_id).close_at(dot.position, half_row);
            self.graph.lines.push(self.rails.finish(rail_id));
            self.open.retain(|&open| open != rail_id);
        }

        let graph_offset = lanes.max(open_before) as f32 * self.layout.unit.x;
        trace!(row, commit = id, open = self.open.len(), graph_offset, "Laid out row");

        self.rows.push(RowState {
            merged,
            graph_offset,
        });
        self.reachable.clear();
    }

    /// Close the rails that never reached their commit and return the results
    pub fn finish(mut self, row_count: usize) -> (CommitGraph, Vec<RowState>) {
        if self.open.is_empty() {
            return (self.graph, self.rows);
        }

        let half_row = self.layout.unit.half().y;
        let end_y = (row_count as f32 - 0.5) * self.layout.unit.y;
        log_dangling(&self);

        for (lane, &rail_id) in self.open.iter().enumerate() {
            let rail = self.rails.get_mut(rail_id);
            if let [only] = rail.points() {
                if only.y == end_y {
                    continue;
                }
            }
            rail.close_at(Point::new(self.layout.lane_x(lane), end_y), half_row);
            self.graph.lines.push(self.rails.finish(rail_id));
        }

        (self.graph, self.rows)
    }

    fn create_rail(&mut self, awaited: &'a str, merged: bool, start: Point) -> RailId {
        let color = self.layout.palette.index_for(self.rails.created());
        let rail_id = self.rails.create(awaited, merged, color, start);
        self.open.push(rail_id);
        rail_id
    }
}

fn log_dangling(scan: &Scan<'_, '_>) {
    let awaited: Vec<&str> = scan
        .open
        .iter()
        .filter_map(|&rail_id| scan.rails.get(rail_id).awaited)
        .collect();
    debug!(
        count = awaited.len(),
        "Closing rails awaiting commits outside the window: {awaited:?}"
    );
}
