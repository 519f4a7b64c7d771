//! Web layer for the availability board.
//!
//! Serves the board as a full page, as an embeddable fragment and as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
