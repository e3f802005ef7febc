//! Background worker fed from the UI command queue.

pub mod commands;
pub mod runtime;
