//! POLYBLAST headless runner.
//!
//! Loads a config file, drives the simulation with a scripted pilot until a
//! close signal, and reports the outcome.

pub mod cli;
pub mod pilot;

pub use polyblast_core as core;
