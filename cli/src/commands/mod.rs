//! CLI commands for the bytepair trainer.

pub mod train;

pub use train::TrainCommand;
