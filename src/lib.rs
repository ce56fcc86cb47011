//! Vectors, quaternions and matrices for rigid body transforms.
//!
//! Matrices are row-major and points are row vectors multiplied on the left
//! (`p' = p * M`), so the translation of an affine matrix lives in its last
//! row. A [`TransformationMatrix`](math::TransformationMatrix) packs scale,
//! rotation and translation into one matrix and can take them apart again.

pub mod error;
pub use error::MathError;
pub use error::Result;

pub mod math;
