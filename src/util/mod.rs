//! Shared utilities.
//!
//! Scalar easing curves used by the marker color ramp and depth fade.

pub mod easing;
