//! # Garden Spatial Engine
//!
//! Spatial grid and sunlight exposure engine for garden planning.
//!
//! Given an arbitrary garden boundary polygon in geographic coordinates,
//! this crate partitions it into a metric lattice of fixed-size planting
//! cells (with correct projection between geographic and local planar
//! frames, so "1 foot" means a true foot on the ground at any latitude)
//! and estimates a zone's effective daily sunlight hours from sampled sun
//! positions.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated DTO surface and serialization contract
//! - [`models`]: boundary, grid, and sun-sample value types
//! - [`projection`]: local planar reference selection and transforms
//! - [`services`]: the grid partitioner and sun exposure estimator
//!
//! Everything here is a pure, stateless, synchronous computation: no I/O,
//! no persistence, no shared mutable state. HTTP routing, storage, and
//! third-party data sources (weather, geocoding, imagery) live in the
//! surrounding application; the engine receives a boundary and, for sun
//! exposure, a [`services::solar::SolarPositionProvider`] capability, and
//! returns result objects.

pub mod api;
pub mod error;
pub mod models;
pub mod projection;
pub mod services;
