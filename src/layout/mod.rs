//! Layout engine for circular shape clouds
//!
//! This module places shapes around a center point: a spiral generator
//! proposes candidate centers, a factory materializes shapes there, and the
//! layouter keeps the first free candidate after pulling it toward the center.

pub mod config;
pub mod error;
pub mod factory;
pub mod layouter;
pub mod shape;
pub mod spiral;
pub mod types;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use factory::{RectangleFactory, ShapeFactory};
pub use layouter::CircularCloudLayouter;
pub use shape::{CloudShape, RectangleShape};
pub use spiral::{ArchimedeanSpiral, SpiralPointGenerator};
pub use types::*;
