//! The simulated city that ties everything together
//!
//! Owns the street grid, the vehicles and the intersections, and advances
//! them one tick at a time. All randomness comes from the city's own
//! [`SimRng`], so a seeded or scripted source gives exact, repeatable runs.

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::{SimError, SimResult};
use super::grid::StreetGrid;
use super::intersection::SimIntersection;
use super::rng::SimRng;
use super::types::{
    Collision, GridPos, Heading, VehicleId, VehicleKind, LIGHT_TOGGLE_ODDS, MAX_SPEED, MIN_SPEED,
    STREET_COLUMN_SPACING, STREET_ROW_SPACING,
};
use super::vehicle::SimVehicle;

/// Everything one call to [`SimCity::tick`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based number of the tick that just completed
    pub tick: u64,
    pub collisions: Vec<Collision>,
    /// Composed display grid, indexed `[y][x]`
    pub grid: Vec<Vec<char>>,
}

/// The main simulation city
pub struct SimCity<R: SimRng = StdRng> {
    grid: StreetGrid,

    /// All vehicles, in creation order
    vehicles: Vec<SimVehicle>,

    /// All intersections, in construction order
    intersections: Vec<SimIntersection>,

    /// Next vehicle id to assign
    next_vehicle_id: usize,

    ticks_elapsed: u64,

    total_collisions: usize,

    rng: R,
}

impl SimCity {
    /// Create a city with an OS-seeded random source
    pub fn new(width: i32, height: i32) -> SimResult<Self> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create a city with a seeded RNG for reproducible simulations
    pub fn new_with_seed(width: i32, height: i32, seed: u64) -> SimResult<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: SimRng> SimCity<R> {
    /// Create a city drawing all randomness from `rng`
    pub fn with_rng(width: i32, height: i32, rng: R) -> SimResult<Self> {
        let grid = StreetGrid::build(width, height)?;

        let mut intersections = Vec::new();
        for x in (STREET_COLUMN_SPACING..width).step_by(STREET_COLUMN_SPACING as usize) {
            for y in (STREET_ROW_SPACING..height).step_by(STREET_ROW_SPACING as usize) {
                intersections.push(SimIntersection::new(GridPos::new(x, y)));
            }
        }

        debug!(
            "Built {}x{} city with {} street cells and {} intersections",
            width,
            height,
            grid.street_count(),
            intersections.len()
        );

        Ok(Self {
            grid,
            vehicles: Vec::new(),
            intersections,
            next_vehicle_id: 1,
            ticks_elapsed: 0,
            total_collisions: 0,
            rng,
        })
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &StreetGrid {
        &self.grid
    }

    pub fn vehicles(&self) -> &[SimVehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&SimVehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn intersections(&self) -> &[SimIntersection] {
        &self.intersections
    }

    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    /// Collisions reported over the city's whole lifetime
    pub fn total_collisions(&self) -> usize {
        self.total_collisions
    }

    /// Pick one of `options` uniformly
    fn choose<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.below(options.len())]
    }

    fn next_id(&mut self) -> VehicleId {
        let id = VehicleId(self.next_vehicle_id);
        self.next_vehicle_id += 1;
        id
    }

    /// Add a vehicle of random kind, heading and speed on a random street cell
    pub fn spawn_vehicle(&mut self) -> SimResult<VehicleId> {
        // Rejection sampling below only terminates while some street exists.
        if self.grid.street_count() == 0 {
            return Err(SimError::NoStreetCells);
        }

        let (width, height) = (self.width() as usize, self.height() as usize);
        let kind = self.choose(&VehicleKind::ALL);
        let position = loop {
            let x = self.rng.below(width) as i32;
            let y = self.rng.below(height) as i32;
            if self.grid.is_street(x, y) {
                break GridPos::new(x, y);
            }
        };
        let heading = self.choose(&Heading::ALL);
        let speed = MIN_SPEED + self.rng.below((MAX_SPEED - MIN_SPEED + 1) as usize) as u32;

        let id = self.next_id();
        debug!(
            "Spawned vehicle {} ({:?}) at ({}, {}) heading {:?} at speed {}",
            id.0, kind, position.x, position.y, heading, speed
        );
        self.vehicles
            .push(SimVehicle::new(id, kind, position, heading, speed));
        Ok(id)
    }

    /// Add a vehicle with fully specified state
    pub fn place_vehicle(
        &mut self,
        kind: VehicleKind,
        x: i32,
        y: i32,
        heading: Heading,
        speed: u32,
    ) -> SimResult<VehicleId> {
        if !self.grid.contains(x, y) {
            return Err(SimError::OutOfBounds { x, y });
        }
        if !self.grid.is_street(x, y) {
            return Err(SimError::OffStreet { x, y });
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(SimError::InvalidSpeed(speed));
        }

        let id = self.next_id();
        self.vehicles.push(SimVehicle::new(
            id,
            kind,
            GridPos::new(x, y),
            heading,
            speed,
        ));
        Ok(id)
    }

    /// Move every vehicle one step.
    ///
    /// A vehicle whose wrapped destination is off the streets stays where it
    /// was and gets a fresh random heading for the next tick.
    pub fn update_vehicles(&mut self) {
        let (width, height) = (self.width(), self.height());

        for index in 0..self.vehicles.len() {
            let vehicle = &mut self.vehicles[index];
            let old_position = vehicle.position;

            vehicle.advance();
            vehicle.position = vehicle.position.wrapped(width, height);

            if self.grid.is_street(vehicle.position.x, vehicle.position.y) {
                continue;
            }

            let blocked_at = vehicle.position;
            vehicle.position = old_position;
            let heading = self.choose(&Heading::ALL);
            let vehicle = &mut self.vehicles[index];
            trace!(
                "Vehicle {} blocked at ({}, {}), now heading {:?}",
                vehicle.id.0,
                blocked_at.x,
                blocked_at.y,
                heading
            );
            vehicle.heading = heading;
        }
    }

    /// Give every light its independent chance to flip
    pub fn update_intersections(&mut self) {
        for index in 0..self.intersections.len() {
            if self.rng.below(LIGHT_TOGGLE_ODDS) != 0 {
                continue;
            }
            let intersection = &mut self.intersections[index];
            intersection.toggle();
            debug!(
                "Light at ({}, {}) is now {}",
                intersection.position.x,
                intersection.position.y,
                if intersection.is_green { "green" } else { "red" }
            );
        }
    }

    /// Report every pair of vehicles sharing a cell. Vehicles are not touched.
    pub fn detect_collisions(&mut self) -> Vec<Collision> {
        let mut collisions = Vec::new();

        for (i, first) in self.vehicles.iter().enumerate() {
            for second in &self.vehicles[i + 1..] {
                if first.position == second.position {
                    warn!(
                        "Collision detected between vehicle {} and vehicle {}",
                        first.id.0, second.id.0
                    );
                    collisions.push(Collision {
                        first: first.id,
                        second: second.id,
                        position: first.position,
                    });
                }
            }
        }

        self.total_collisions += collisions.len();
        collisions
    }

    /// Street layer, then lights, then vehicles.
    ///
    /// When vehicles share a cell the one latest in creation order is drawn.
    pub fn compose_grid(&self) -> Vec<Vec<char>> {
        let mut grid = self.grid.base_layer();

        for intersection in &self.intersections {
            let GridPos { x, y } = intersection.position;
            grid[y as usize][x as usize] = intersection.glyph();
        }

        for vehicle in &self.vehicles {
            let GridPos { x, y } = vehicle.position;
            grid[y as usize][x as usize] = vehicle.glyph();
        }

        grid
    }

    /// Main simulation tick
    pub fn tick(&mut self) -> TickReport {
        self.update_vehicles();
        self.update_intersections();
        let collisions = self.detect_collisions();
        let grid = self.compose_grid();

        self.ticks_elapsed += 1;

        TickReport {
            tick: self.ticks_elapsed,
            collisions,
            grid,
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let red_lights = self.intersections.iter().filter(|i| !i.is_green).count();
        format!(
            "Tick: {} | Vehicles: {} | Lights: {} green / {} red | Collisions: {}",
            self.ticks_elapsed,
            self.vehicles.len(),
            self.intersections.len() - red_lights,
            red_lights,
            self.total_collisions
        )
    }
}
