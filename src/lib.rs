//! Raxe core library.
//!
//! This crate exposes programmatic APIs for normalizing the raw output of
//! an axe-core accessibility scan into a flat, display-ready report model.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Input (axe JSON) and output (report) data models.
//! - `report`: The transformation itself: per-rule summaries, fix-text
//!   parsing, and full report assembly. Pure and state-free.
//! - `scan`: Loading of axe result files matched by a glob pattern.
//! - `output`: Human/JSON printers for assembled reports.
//! - `wcag`: Default standards-reference lookup used by the binary.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod scan;
pub mod utils;
pub mod wcag;
