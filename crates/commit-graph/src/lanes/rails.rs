use crate::{ColorIndex, Line, Point};

/// Stable index of a rail in the [`Rails`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RailId(usize);

/// A branch line waiting to reach a future commit
#[derive(Debug)]
pub(crate) struct Rail<'a> {
    /// Commit this rail connects to next, `None` once it terminated
    pub awaited: Option<&'a str>,
    pub merged: bool,
    pub color: ColorIndex,
    points: Vec<Point>,
    /// Logical lane position, points only record the bends
    cursor: Point,
}

impl<'a> Rail<'a> {
    fn new(awaited: &'a str, merged: bool, color: ColorIndex, start: Point) -> Self {
        Self {
            awaited: Some(awaited),
            merged,
            color,
            points: vec![start],
            cursor: start,
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Move the rail to a lane position on a later (or the same) row
    ///
    /// Lane changes are drawn as a bend half a row away from the row holding
    /// the dot, so rails never cross diagonally.
    pub fn move_to(&mut self, to: Point, half_row: f32) {
        let from = self.cursor;
        if to.x > from.x {
            self.push(from);
            self.push(Point::new(to.x, to.y - half_row));
        } else if to.x < from.x {
            self.push(Point::new(from.x, from.y + half_row));
            self.push(to);
        }
        self.cursor = to;
    }

    /// Move the rail to its final position and record it as the last point
    pub fn close_at(&mut self, end: Point, half_row: f32) {
        self.move_to(end, half_row);
        self.push(end);
        self.awaited = None;
    }

    fn push(&mut self, point: Point) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    fn take_line(&mut self) -> Line {
        Line {
            points: std::mem::take(&mut self.points),
            color: self.color,
            merged: self.merged,
        }
    }
}

/// Arena owning every rail created during one layout call
#[derive(Debug, Default)]
pub(crate) struct Rails<'a> {
    arena: Vec<Rail<'a>>,
}

impl<'a> Rails<'a> {
    /// Number of rails created so far, which drives color assignment
    pub fn created(&self) -> usize {
        self.arena.len()
    }

    pub fn create(
        &mut self,
        awaited: &'a str,
        merged: bool,
        color: ColorIndex,
        start: Point,
    ) -> RailId {
        let id = RailId(self.arena.len());
        self.arena.push(Rail::new(awaited, merged, color, start));
        id
    }

    pub fn get(&self, id: RailId) -> &Rail<'a> {
        &self.arena[id.0]
    }

    pub fn get_mut(&mut self, id: RailId) -> &mut Rail<'a> {
        &mut self.arena[id.0]
    }

    /// Hand the finished polyline of a closed rail to the output
    pub fn finish(&mut self, id: RailId) -> Line {
        self.arena[id.0].take_line()
    }
}
