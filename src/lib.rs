//! npmgraph - render a visual graph of an npm project's direct dependencies.
//!
//! This crate reads a small TOML configuration pointing at an npm project,
//! parses the project's package.json, merges runtime and development
//! dependencies into one set, and renders a Graphviz image of the result.

pub mod config;
pub mod graph;
pub mod parser;
pub mod render;
