#![doc = "readme-gen-core: core logic library for readme-gen."]

//! This crate contains all data models, collaborator contracts and pipelines
//! for generating a project README from a directory snapshot and an external
//! chat-completion endpoint. Host-specific concerns (argument parsing,
//! terminal prompts, log sinks) live in the CLI crate.
//!
//! # Usage
//! Add this as a dependency for the rendering, configuration, generation and
//! persistence logic; implement the traits in [`contract`] to plug in your
//! own input provider or conflict handling.

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod ignore;
pub mod persist;
pub mod pipeline;
pub mod tree;
