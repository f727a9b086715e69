//! Materials, rotation tables, and the world-write seam.
#![forbid(unsafe_code)]

pub mod error;
pub mod material;
pub mod names;
pub mod rotation;
pub mod spec;
pub mod world;

pub use error::{MaterialError, Result};
pub use material::{MaterialRegistry, MaterialValue};
pub use rotation::RotationFamily;
pub use spec::MaterialSpec;
pub use world::{BlockPos, BlockSink, Cuboid, MemoryWorld};
