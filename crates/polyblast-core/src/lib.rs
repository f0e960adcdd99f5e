//! Core types and definitions for the POLYBLAST arcade simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vectors, components, entities, configuration, input events, render
//! snapshots, and gameplay constants. It has no dependency on any windowing
//! or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod entity;
pub mod state;
pub mod types;
