//! Error types for fallible matrix and quaternion operations.

use thiserror::Error;

/// Errors raised when an operation has no meaningful result for its input
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
	/// The determinant is zero so the matrix (or quaternion) has no inverse
	#[error("matrix is singular and cannot be inverted")]
	Singular,

	/// One of the basis rows has zero length so its rotation cannot be recovered
	#[error("scale along axis {axis} is zero")]
	DegenerateScale {
		/// Row of the basis with zero length (0 = x, 1 = y, 2 = z)
		axis: usize
	},

	/// The basis is not orthonormal
	#[error("matrix is not a rotation (determinant {determinant})")]
	NonRotation {
		determinant: f32
	},

	#[error("index {index} out of range for length {len}")]
	IndexOutOfRange {
		index: usize,
		len: usize
	}
}

pub type Result<T> = std::result::Result<T, MathError>;
