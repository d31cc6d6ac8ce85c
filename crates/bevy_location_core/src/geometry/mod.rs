//! Bounds arithmetic and coordinate conversion.

pub mod bounds;
pub mod coords;

pub use bounds::Bounds;
pub use coords::PixelScale;
