//! Grid traffic simulation
//!
//! The engine (grid, intersections, vehicles, city) is a pure per-tick state
//! transition with no I/O. The driver on top paces ticks and hands composed
//! grids to a display sink.

mod city;
mod driver;
mod error;
mod grid;
mod intersection;
mod rng;
mod types;
mod vehicle;

pub use city::{SimCity, TickReport};
pub use driver::{DisplaySink, DriverConfig, RunSummary, SimulationDriver, TerminalSink};
pub use error::{SimError, SimResult};
pub use grid::{render_grid, StreetGrid};
pub use intersection::SimIntersection;
pub use rng::SimRng;
pub use types::{
    Collision, GridPos, Heading, VehicleId, VehicleKind, EMPTY_GLYPH, GREEN_LIGHT_GLYPH,
    LIGHT_TOGGLE_ODDS, MAX_SPEED, MIN_SPEED, RED_LIGHT_GLYPH, STREET_COLUMN_SPACING,
    STREET_GLYPH, STREET_ROW_SPACING,
};
pub use vehicle::SimVehicle;
