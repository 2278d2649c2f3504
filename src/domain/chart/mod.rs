//! Chart datasets derived from the portfolio, plus canvas geometry.

pub mod geometry;
pub mod services;
pub mod value_objects;

pub use geometry::*;
pub use services::*;
pub use value_objects::*;
