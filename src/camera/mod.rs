//! Camera data consumed by the marker pipeline.
//!
//! scanmark does not move or control a camera; the host supplies a
//! [`core::CameraBlock`] every frame and scanmark only reads it.

pub mod core;
pub mod frustum;
