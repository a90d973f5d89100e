pub mod compiler;
pub mod config;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod graph;
pub mod index;
pub mod registry;
pub mod reporting;
pub mod signals;
pub mod types;
