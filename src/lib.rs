//! Drives the Tesseract font training toolchain
//!
//! A training request is validated up front, then a fixed sequence of external
//! programs renders the training text, annotates and extracts features, clusters
//! them and packages the result, which is finally installed into a tessdata
//! directory.

#![forbid(unsafe_code)]

/// Command-line interface, configuration, errors, logging and progress display
pub mod io;
/// Training request model, validation and pipeline orchestration
pub mod training;

pub use io::error::{Result, TrainerError};
