//! Terminal movie catalog browser backed by the TMDB metadata API.
//!
//! The library holds the remote catalog client, the catalog state store and
//! the presentation helpers; the binary wires them into a ratatui front-end.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod present;
pub mod store;
pub mod ui;
