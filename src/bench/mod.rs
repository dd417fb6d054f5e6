//! Benchmark Module
//!
//! # Components
//!
//! - [`walk`] - Gaussian random-walk simulator
//! - [`harness`] - Timed repeat loop around the simulator

pub mod harness;
pub mod walk;
