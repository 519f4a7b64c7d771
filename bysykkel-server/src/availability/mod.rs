//! Station availability: which target stations exist in the feeds, and
//! how many bikes and docks they have.
//!
//! The flow per render is:
//! 1. Fetch `station_information` and `station_status` concurrently
//! 2. Resolve target names to station ids ([`resolve`])
//! 3. Look up each resolved id's status record ([`match_status`])
//! 4. Classify bikes and docks against capacity

mod board;
mod resolve;
mod status;

pub use board::{Board, BoardOutcome, assemble};
pub use resolve::{Resolution, TargetStations, resolve};
pub use status::match_status;
