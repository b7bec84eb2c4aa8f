//! Vehicle movement for the traffic simulation

use super::types::{GridPos, Heading, VehicleId, VehicleKind};

/// A vehicle in the traffic simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimVehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub position: GridPos,
    /// Only reassigned by the city when a move would leave the streets
    pub heading: Heading,
    /// Cells travelled per tick, fixed for the vehicle's lifetime
    pub speed: u32,
}

impl SimVehicle {
    pub fn new(
        id: VehicleId,
        kind: VehicleKind,
        position: GridPos,
        heading: Heading,
        speed: u32,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            heading,
            speed,
        }
    }

    /// Move `speed` cells along the heading.
    ///
    /// The result may lie outside the city; wrapping and the street check are
    /// the city's job.
    pub fn advance(&mut self) {
        let (dx, dy) = self.heading.delta();
        let step = self.speed as i32;
        self.position.x += dx * step;
        self.position.y += dy * step;
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }
}
