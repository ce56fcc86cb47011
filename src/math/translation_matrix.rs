use super::{
	Vector3, Matrix4x3, Matrix4x4, matrix3x3, RotationMatrix3x3, ScaleMatrix3x3, AffineMatrix,
	TransformationMatrix, ApproxEq
};
use std::fmt::Display;
use std::ops::{Mul, MulAssign};
use bytemuck::{Pod, Zeroable};

/// A pure translation stored in a 4x3 or 4x4 matrix. The basis is always
/// the identity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TranslationMatrix<M> {
	pub matrix: M
}

pub type TranslationMatrix4x3 = TranslationMatrix<Matrix4x3>;
pub type TranslationMatrix4x4 = TranslationMatrix<Matrix4x4>;

// SAFETY: transparent over a Pod matrix
unsafe impl Zeroable for TranslationMatrix<Matrix4x3> {}
unsafe impl Pod for TranslationMatrix<Matrix4x3> {}
unsafe impl Zeroable for TranslationMatrix<Matrix4x4> {}
unsafe impl Pod for TranslationMatrix<Matrix4x4> {}

impl<M: AffineMatrix> TranslationMatrix<M> {
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self::from_vector(&Vector3::new(x, y, z))
	}

	pub fn from_vector(translation: &Vector3) -> Self {
		Self { matrix: M::from_parts(&matrix3x3::IDENTITY, translation) }
	}

	pub fn translation(&self) -> Vector3 {
		self.matrix.translation()
	}

	pub fn invert(&self) -> Self {
		Self::from_vector(&-self.translation())
	}

	pub fn determinant(&self) -> f32 {
		1.0
	}
}

impl<M: AffineMatrix> Default for TranslationMatrix<M> {
	fn default() -> Self {
		Self { matrix: M::IDENTITY }
	}
}

impl From<TranslationMatrix4x3> for TranslationMatrix4x4 {
	fn from(t: TranslationMatrix4x3) -> Self {
		Self::from_vector(&t.translation())
	}
}

impl From<TranslationMatrix4x4> for TranslationMatrix4x3 {
	fn from(t: TranslationMatrix4x4) -> Self {
		Self::from_vector(&t.translation())
	}
}

impl<M: AffineMatrix, N: AffineMatrix> Mul<TranslationMatrix<N>> for TranslationMatrix<M> {
	type Output = TranslationMatrix<M>;

	fn mul(self, rhs: TranslationMatrix<N>) -> TranslationMatrix<M> {
		TranslationMatrix::from_vector(&(self.translation() + rhs.translation()))
	}
}

impl<M: AffineMatrix, N: AffineMatrix> MulAssign<TranslationMatrix<N>> for TranslationMatrix<M> {
	fn mul_assign(&mut self, rhs: TranslationMatrix<N>) {
		*self = *self * rhs;
	}
}

impl<M: AffineMatrix> Mul<ScaleMatrix3x3> for TranslationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: ScaleMatrix3x3) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl<M: AffineMatrix> Mul<RotationMatrix3x3> for TranslationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: RotationMatrix3x3) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl<M: AffineMatrix, N: AffineMatrix> Mul<TransformationMatrix<N>> for TranslationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TransformationMatrix<N>) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl<M: AffineMatrix> ApproxEq for TranslationMatrix<M> {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.matrix.approx_eq(&other.matrix, tol)
	}
}

impl<M: AffineMatrix> Display for TranslationMatrix<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.translation())
	}
}
