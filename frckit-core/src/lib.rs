//! Shared utilities for competition robot control programs.
//!
//! Pure logic only: autonomous routine selection, LED patterns, and unit
//! scaling. Dashboard widgets and LED hardware stay behind traits so the
//! crate runs on the robot controller and in host-side simulation alike.
#![no_std]

extern crate alloc;

pub mod utils;
