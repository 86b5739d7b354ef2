//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Window events become driver input; redraws become ticks.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::FloraApp;
