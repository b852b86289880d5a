//! Fly Fighter: a vertical arcade shooter.
//!
//! The library holds the frame-by-frame simulation and the rendering
//! contract. The terminal binary supplies the keyboard, the screen and the
//! clock.

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
