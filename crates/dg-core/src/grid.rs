//! Grid and world coordinate types.
//!
//! The simulation distinguishes two coordinate spaces:
//!
//! - [`GridPoint`] — integer tile coordinates, the domain of the pathfinder
//!   and of all adjacency reasoning.
//! - [`WorldPoint`] — continuous engine/world space, the domain of the
//!   position sink that actually relocates agents.
//!
//! The mapping between the two (cell size, origin) is owned by the dungeon
//! graph; nothing in this module assumes a particular scale.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The four orthogonal neighbour keys of a tile.
///
/// The discriminant doubles as the index into a tile's neighbour array, so
/// `neighbors[dir as usize]` is always the neighbour in that direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North = 0,
    East  = 1,
    South = 2,
    West  = 3,
}

impl Direction {
    /// All directions in neighbour-array order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Grid-coordinate offset of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East  => (1, 0),
            Direction::South => (0, -1),
            Direction::West  => (-1, 0),
        }
    }

    /// The direction pointing back the way we came.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        };
        write!(f, "{s}")
    }
}

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// An integer tile coordinate.
///
/// Signed so dungeons need not hug the origin; generators are free to carve
/// rooms at negative coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPoint {
        let (dx, dy) = dir.delta();
        GridPoint::new(self.x + dx, self.y + dy)
    }

    /// Straight-line (Euclidean) distance between two grid coordinates.
    ///
    /// Used for nearest-treasure selection and as an optional A* heuristic.
    /// Under 4-connected unit-step movement this is a lower bound on the true
    /// path length, never an overestimate.
    pub fn euclidean_distance(self, other: GridPoint) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan (taxicab) distance — the exact minimum number of orthogonal
    /// steps between two coordinates on an unobstructed grid.
    #[inline]
    pub fn manhattan_distance(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── WorldPoint ────────────────────────────────────────────────────────────────

/// A continuous world-space position, as consumed by the engine-side position
/// sink.  Single precision matches what game engines hand us for transforms.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in world units.
    pub fn distance(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
