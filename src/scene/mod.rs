//! Placed marks and visibility queries.
//!
//! [`octree::MarkOctree`] stores marks by position and hands back the
//! frustum-visible subset as a [`crate::marker::ModelInstance`] stream,
//! ordered far-to-near for alpha blending.

pub mod octree;

pub use octree::MarkOctree;
