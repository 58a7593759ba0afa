//! Operator console for the Channel H Media content API.
//!
//! Talks to the same REST endpoints as the reader site and the admin console
//! and prints JSON, so listings, ad placement and admin deletes can be checked
//! from a terminal or a script.

/// Command-line definition.
pub mod cli;
pub mod client;
pub mod commands;
