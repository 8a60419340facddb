//! Platform abstraction layer
//!
//! Glue between a host (window, browser, terminal, headless runner) and the
//! simulation:
//! - Input events reduced to the single flap command
//! - Fixed-rate tick scheduling from variable frame times
//! - A demo autopilot that plays through the same input path
//! - Headless demo sessions built from the pieces above

pub mod autopilot;
pub mod clock;
pub mod demo;
pub mod input;

pub use autopilot::Autopilot;
pub use clock::FixedTimestep;
pub use demo::{DemoReport, play};
pub use input::{InputAdapter, InputEvent, Key, MouseButton};
