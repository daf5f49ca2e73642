//! Web layer for the route advisor.
//!
//! A thin JSON front-end over [`crate::advisor::RouteAdvisor`].

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{Advisor, AppState};
