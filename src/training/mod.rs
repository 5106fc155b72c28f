//! Request model, validation and the training pipeline

/// External program invocation and the runner abstraction
pub mod command;
/// Pipeline driver
pub mod orchestrator;
/// Step definitions and command plans
pub mod pipeline;
/// Immutable training parameters
pub mod request;
/// Pre-flight argument checks
pub mod validation;
/// Scratch directory lifecycle and installation
pub mod workspace;

pub use orchestrator::{Trainer, TrainingReport};
pub use request::TrainingRequest;
