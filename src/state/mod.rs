//! Client-side state for the name log page.
//!
//! DESIGN
//! ======
//! `names` holds the state and its reducer, `health` the backend status shown
//! in the footer, and `tasks` the async flows that call the backend and feed
//! actions back into the reducer.

pub mod health;
pub mod names;
pub mod tasks;
