//! coupe - terminal search client for a cocktail recipe service
//!
//! Library crate exposing the small components used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod api;
pub mod cocktail;

pub mod ui;
