//! Tick driver and display sinks
//!
//! The driver paces ticks, forwards each settled tick to a display sink and
//! stops on a tick limit or when its stop flag is raised. The city itself
//! knows nothing about time or cancellation.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::city::{SimCity, TickReport};
use super::grid::render_grid;
use super::rng::SimRng;

/// ANSI "clear screen, cursor home"
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Consumer of composed grids
pub trait DisplaySink {
    /// Show one settled tick. `summary` is the city's status line.
    fn show(&mut self, report: &TickReport, summary: &str) -> Result<()>;
}

/// Renders each tick as text to a writer, usually stdout
pub struct TerminalSink<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, report: &TickReport, summary: &str) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        write!(self.out, "{}", render_grid(&report.grid))?;
        writeln!(self.out, "{}", summary)?;
        self.out.flush().context("Failed to flush display")?;
        Ok(())
    }
}

/// Pacing and stop condition for a run
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Pause between ticks
    pub tick_delay: Duration,
    /// Stop after this many ticks; `None` runs until stopped
    pub max_ticks: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_delay: Duration::from_millis(500),
            max_ticks: None,
        }
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub total_collisions: usize,
}

/// Runs a city tick after tick
pub struct SimulationDriver<R: SimRng> {
    city: SimCity<R>,
    config: DriverConfig,
    stop: Arc<AtomicBool>,
}

impl<R: SimRng> SimulationDriver<R> {
    pub fn new(city: SimCity<R>, config: DriverConfig) -> Self {
        Self {
            city,
            config,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag; storing `true` ends the run after the current tick
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn city(&self) -> &SimCity<R> {
        &self.city
    }

    pub fn into_city(self) -> SimCity<R> {
        self.city
    }

    fn should_stop(&self, ticks_run: u64) -> bool {
        self.stop.load(Ordering::SeqCst)
            || self.config.max_ticks.is_some_and(|limit| ticks_run >= limit)
    }

    /// Tick until the limit is reached or the stop flag is raised
    pub fn run(&mut self, sink: &mut dyn DisplaySink) -> Result<RunSummary> {
        info!(
            "Starting simulation: {}x{} city, {} vehicles, {} intersections",
            self.city.width(),
            self.city.height(),
            self.city.vehicles().len(),
            self.city.intersections().len()
        );

        let mut ticks_run = 0;
        while !self.should_stop(ticks_run) {
            let report = self.city.tick();
            ticks_run += 1;

            sink.show(&report, &self.city.summary())
                .with_context(|| format!("Failed to display tick {}", report.tick))?;

            if !self.config.tick_delay.is_zero() && !self.should_stop(ticks_run) {
                std::thread::sleep(self.config.tick_delay);
            }
        }

        let summary = RunSummary {
            ticks: ticks_run,
            total_collisions: self.city.total_collisions(),
        };

        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks run: {}", summary.ticks);
        info!("Vehicles: {}", self.city.vehicles().len());
        info!("Intersections: {}", self.city.intersections().len());
        info!("Total collisions: {}", summary.total_collisions);

        Ok(summary)
    }
}
