#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod types;

#[cfg(test)]
pub(crate) mod util;

pub use graph::Graph;
