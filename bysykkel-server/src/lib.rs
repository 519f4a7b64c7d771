//! Bergen Bysykkel availability server.
//!
//! Shows how many bikes and free docks two city-bike stations have right
//! now, from the operator's public GBFS feeds.

pub mod availability;
pub mod config;
pub mod domain;
pub mod gbfs;
pub mod locale;
pub mod web;
