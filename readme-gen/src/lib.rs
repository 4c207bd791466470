//! CLI glue for readme-gen. All business logic lives in `readme-gen-core`;
//! this crate parses arguments, wires tracing and the environment, and
//! supplies the concrete input-provider and conflict-decider collaborators.

pub mod cli;
pub mod input;
