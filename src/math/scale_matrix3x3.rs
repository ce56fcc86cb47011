use super::{
	Vector3, Matrix3x3, matrix3x3, RotationMatrix3x3, AffineMatrix, TranslationMatrix,
	TransformationMatrix, TransformationMatrix4x4, ApproxEq, float
};
use crate::{MathError, Result};
use std::fmt::Display;
use std::ops::Mul;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: ScaleMatrix3x3 = ScaleMatrix3x3 { matrix: matrix3x3::IDENTITY };

/// A diagonal 3x3 matrix holding one scale factor per axis
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ScaleMatrix3x3 {
	pub matrix: Matrix3x3
}

impl ScaleMatrix3x3 {
	pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
		Self {
			matrix: Matrix3x3::new([
				[sx, 0.0, 0.0],
				[0.0, sy, 0.0],
				[0.0, 0.0, sz]
			])
		}
	}

	pub fn from_vector(scale: &Vector3) -> Self {
		Self::new(scale.x, scale.y, scale.z)
	}

	pub fn scale(&self) -> Vector3 {
		let e = &self.matrix.elements;
		Vector3::new(e[0][0], e[1][1], e[2][2])
	}

	pub fn invert(&self) -> Result<Self> {
		let s = self.scale();

		for (axis, factor) in [s.x, s.y, s.z].iter().enumerate() {
			if float::is_zero(*factor) {
				log::debug!("cannot invert scale with zero factor on axis {}", axis);
				return Err(MathError::Singular);
			}
		}

		Ok(Self::new(1.0 / s.x, 1.0 / s.y, 1.0 / s.z))
	}

	pub fn determinant(&self) -> f32 {
		let e = &self.matrix.elements;
		e[0][0] * e[1][1] * e[2][2]
	}
}

impl Default for ScaleMatrix3x3 {
	fn default() -> Self {
		IDENTITY
	}
}

impl_op_ex!(* |a: &ScaleMatrix3x3, b: &ScaleMatrix3x3| -> ScaleMatrix3x3 {
	let (sa, sb) = (a.scale(), b.scale());
	ScaleMatrix3x3::new(sa.x * sb.x, sa.y * sb.y, sa.z * sb.z)
});

impl_op_ex!(*= |a: &mut ScaleMatrix3x3, b: &ScaleMatrix3x3| {
	*a = *a * b;
});

impl_op_ex!(* |a: &ScaleMatrix3x3, b: &RotationMatrix3x3| -> TransformationMatrix4x4 {
	TransformationMatrix4x4::from(*a) * *b
});

impl<M: AffineMatrix> Mul<TranslationMatrix<M>> for ScaleMatrix3x3 {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TranslationMatrix<M>) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl<M: AffineMatrix> Mul<TransformationMatrix<M>> for ScaleMatrix3x3 {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TransformationMatrix<M>) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl ApproxEq for ScaleMatrix3x3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.matrix.approx_eq(&other.matrix, tol)
	}
}

impl Display for ScaleMatrix3x3 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.scale())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::{Quaternion, TranslationMatrix4x4, TransformationMatrix4x3, quaternion, vector3};

	#[test]
	fn new() {
		let s = ScaleMatrix3x3::new(2.0, 3.0, 4.0);
		assert_eq!(s.matrix.elements, [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
		assert_eq!(ScaleMatrix3x3::from_vector(&Vector3::new(2.0, 3.0, 4.0)), s);
	}

	#[test]
	fn default() {
		assert_eq!(ScaleMatrix3x3::default().scale(), vector3::ONE);
	}

	#[test]
	fn invert() {
		let s = ScaleMatrix3x3::new(2.0, 4.0, -0.5);
		assert_eq!(s.invert(), Ok(ScaleMatrix3x3::new(0.5, 0.25, -2.0)));
		assert_eq!(ScaleMatrix3x3::new(1.0, 0.0, 1.0).invert(), Err(MathError::Singular));
	}

	#[test]
	fn determinant() {
		assert_eq!(ScaleMatrix3x3::new(2.0, 3.0, -4.0).determinant(), -24.0);
	}

	#[test]
	fn mul() {
		let mut s = ScaleMatrix3x3::new(2.0, 3.0, 4.0);
		assert_eq!(s * ScaleMatrix3x3::new(0.5, 2.0, 1.0), ScaleMatrix3x3::new(1.0, 6.0, 4.0));

		s *= ScaleMatrix3x3::new(0.5, 2.0, 1.0);
		assert_eq!(s.scale(), Vector3::new(1.0, 6.0, 4.0));
	}

	#[test]
	fn mul_rotation() {
		let r = RotationMatrix3x3::from_quaternion(&Quaternion::new(0.5, 0.5, 0.5, 0.5));
		let t = ScaleMatrix3x3::new(2.0, 3.0, 4.0) * r;

		// Rows of the rotation are scaled
		let expected = [
			[0.0, 0.0, 2.0, 0.0],
			[3.0, 0.0, 0.0, 0.0],
			[0.0, 4.0, 0.0, 0.0],
			[0.0, 0.0, 0.0, 1.0]
		];

		assert_eq!(t.matrix.elements, expected);
		assert_eq!(t.scale(), Vector3::new(2.0, 3.0, 4.0));
	}

	#[test]
	fn mul_translation() {
		let t = ScaleMatrix3x3::new(2.0, 3.0, 4.0) * TranslationMatrix4x4::new(1.0, 2.0, 3.0);
		assert_eq!(t.scale(), Vector3::new(2.0, 3.0, 4.0));
		assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
	}

	#[test]
	fn mul_transformation() {
		let b = TransformationMatrix4x3::new(&Vector3::new(1.0, 2.0, 3.0), &quaternion::IDENTITY, &Vector3::new(1.0, 1.0, 2.0));
		let t = ScaleMatrix3x3::new(2.0, 3.0, 4.0) * b;

		assert_eq!(t.scale(), Vector3::new(2.0, 3.0, 8.0));
		assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
	}
}
