//! Grid Traffic Library
//!
//! A discrete-time traffic simulator on a fixed street grid, with a terminal
//! renderer and a tick driver on top of the engine.

pub mod simulation;
