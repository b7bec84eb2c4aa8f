//! Core types for the traffic simulation
//!
//! Ids, enums and tuning constants shared by the grid, vehicles and city.

/// A unique identifier for a vehicle, assigned sequentially from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub usize);

/// Kind of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Truck,
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Car,
        VehicleKind::Truck,
        VehicleKind::Motorcycle,
    ];

    /// Map symbol for this kind (first letter of its name)
    pub fn glyph(self) -> char {
        match self {
            VehicleKind::Car => 'C',
            VehicleKind::Truck => 'T',
            VehicleKind::Motorcycle => 'M',
        }
    }
}

/// Direction of travel. North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// Unit step `(dx, dy)` for this heading
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::South => (0, 1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }
}

/// A cell coordinate on the city grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Wrap both coordinates into `[0, width) x [0, height)`
    pub fn wrapped(self, width: i32, height: i32) -> GridPos {
        GridPos {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }
}

/// A pair of vehicles found on the same cell after a tick settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// The vehicle earlier in creation order
    pub first: VehicleId,
    pub second: VehicleId,
    pub position: GridPos,
}

/// Every `STREET_ROW_SPACING`-th row is a street
pub const STREET_ROW_SPACING: i32 = 5;

/// Every `STREET_COLUMN_SPACING`-th column is a street
pub const STREET_COLUMN_SPACING: i32 = 10;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 3;

/// One in `LIGHT_TOGGLE_ODDS` chance that a light flips on a given tick
pub const LIGHT_TOGGLE_ODDS: usize = 10;

pub const STREET_GLYPH: char = '·';
pub const EMPTY_GLYPH: char = ' ';
pub const GREEN_LIGHT_GLYPH: char = '@';
pub const RED_LIGHT_GLYPH: char = '&';
