//! Single-window winit runtime.
//!
//! Owns the event loop and the window, wires them to the GPU layer and drives
//! the application with continuous redraws.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
