//! Finds every way down a "mountain" of rest stops.
//!
//! Rest stops ([`mountain::Waypoint`]) are kept in a height-balanced binary
//! search tree ([`mountain::Mountain`]). [`path::PathScraper`] walks that tree
//! to a depth fixed by its height, tracking the hiker's food, axes and rafts in
//! a [`path::Traveler`], and reports every route that reaches the floor.

pub mod app;
pub mod mountain;
pub mod path;
pub mod waypoint_loader;
