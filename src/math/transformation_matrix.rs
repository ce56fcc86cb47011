//! Affine transforms applied as scale, rotate, translate: `M = S * R * T`.
//! The sign of a negative scale is lost on decomposition.

use super::{
	Vector3, Vector4, Quaternion, Euler, Order, Matrix3x3, Matrix4x3, Matrix4x4, RotationMatrix3x3,
	ScaleMatrix3x3, AffineMatrix, TranslationMatrix, ApproxEq, float
};
use crate::{MathError, Result};
use std::fmt::Display;
use std::ops::{Mul, MulAssign};
use bytemuck::{Pod, Zeroable};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TransformationMatrix<M> {
	pub matrix: M
}

pub type TransformationMatrix4x3 = TransformationMatrix<Matrix4x3>;
pub type TransformationMatrix4x4 = TransformationMatrix<Matrix4x4>;

// SAFETY: transparent over a Pod matrix
unsafe impl Zeroable for TransformationMatrix<Matrix4x3> {}
unsafe impl Pod for TransformationMatrix<Matrix4x3> {}
unsafe impl Zeroable for TransformationMatrix<Matrix4x4> {}
unsafe impl Pod for TransformationMatrix<Matrix4x4> {}

impl<M: AffineMatrix> TransformationMatrix<M> {
	pub fn new(translation: &Vector3, rotation: &Quaternion, scale: &Vector3) -> Self {
		let r = RotationMatrix3x3::from_quaternion(rotation).matrix.elements;
		let s = [scale.x, scale.y, scale.z];
		let mut basis = Matrix3x3::default();

		for i in 0..3 {
			for j in 0..3 {
				basis.elements[i][j] = r[i][j] * s[i];
			}
		}

		Self { matrix: M::from_parts(&basis, translation) }
	}

	/// The `w` of the translation is ignored
	pub fn from_translation4(translation: &Vector4, rotation: &Quaternion, scale: &Vector3) -> Self {
		Self::new(&translation.truncate(), rotation, scale)
	}

	pub fn from_matrices<N: AffineMatrix>(translation: &TranslationMatrix<N>, rotation: &RotationMatrix3x3, scale: &ScaleMatrix3x3) -> Self {
		let basis = scale.matrix * rotation.matrix;
		Self { matrix: M::from_parts(&basis, &translation.translation()) }
	}

	#[allow(clippy::too_many_arguments)]
	pub fn from_components(
		dx: f32, dy: f32, dz: f32,
		qx: f32, qy: f32, qz: f32, qw: f32,
		sx: f32, sy: f32, sz: f32
	) -> Self {
		Self::new(&Vector3::new(dx, dy, dz), &Quaternion::new(qx, qy, qz, qw), &Vector3::new(sx, sy, sz))
	}

	pub fn basis(&self) -> Matrix3x3 {
		self.matrix.basis()
	}

	pub fn is_identity(&self) -> bool {
		self.matrix.approx_eq(&M::IDENTITY, float::EPSILON)
	}

	pub fn determinant(&self) -> f32 {
		self.basis().determinant()
	}

	pub fn invert(&self) -> Result<Self> {
		if self.is_identity() {
			return Ok(*self);
		}

		let inv = self.basis().invert()?;
		let translation = -(self.translation() * inv);

		Ok(Self { matrix: M::from_parts(&inv, &translation) })
	}

	pub fn transform_point(&self, point: &Vector3) -> Vector3 {
		point * self.basis() + self.translation()
	}

	/// Applies the basis only, ignoring translation
	pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
		vector * self.basis()
	}

	pub fn translation(&self) -> Vector3 {
		self.matrix.translation()
	}

	pub fn translation4(&self) -> Vector4 {
		self.translation().expand(0.0)
	}

	pub fn scale(&self) -> Vector3 {
		let b = self.basis().elements;
		let length = |r: [f32; 3]| (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();

		Vector3::new(length(b[0]), length(b[1]), length(b[2]))
	}

	pub fn rotation_matrix(&self) -> Result<RotationMatrix3x3> {
		let mut basis = self.basis();
		let scale = self.scale();

		for (axis, (row, length)) in basis.elements.iter_mut().zip([scale.x, scale.y, scale.z].iter()).enumerate() {
			if float::is_zero(*length) {
				return Err(MathError::DegenerateScale { axis });
			}

			row.iter_mut().for_each(|e| *e /= length);
		}

		let det = self.determinant();

		if float::is_negative(det) {
			log::warn!("decomposing a transformation with negative determinant {}, the rotation is a reflection", det);
		}

		Ok(RotationMatrix3x3::from_matrix(basis))
	}

	pub fn rotation(&self) -> Result<Quaternion> {
		Ok(self.rotation_matrix()?.to_quaternion())
	}

	pub fn rotation_axis_angle(&self) -> Result<(Vector3, f32)> {
		Ok(self.rotation_matrix()?.to_axis_angle())
	}

	pub fn rotation_euler(&self, order: Order) -> Result<Euler> {
		Ok(self.rotation_matrix()?.to_euler(order))
	}

	pub fn decompose(&self) -> Result<(Vector3, Quaternion, Vector3)> {
		Ok((self.translation(), self.rotation()?, self.scale()))
	}

	pub fn decompose_matrices<N: AffineMatrix>(&self) -> Result<(TranslationMatrix<N>, RotationMatrix3x3, ScaleMatrix3x3)> {
		let rotation = self.rotation_matrix()?;

		Ok((
			TranslationMatrix::from_vector(&self.translation()),
			rotation,
			ScaleMatrix3x3::from_vector(&self.scale())
		))
	}

	/// Recomposes as `scale * rotation * translation`
	pub fn decompose_transformations<N: AffineMatrix>(&self) -> Result<(TransformationMatrix<N>, TransformationMatrix<N>, TransformationMatrix<N>)> {
		let (translation, rotation, scale) = self.decompose_matrices::<N>()?;

		Ok((
			TransformationMatrix::from(translation),
			TransformationMatrix::from(rotation),
			TransformationMatrix::from(scale)
		))
	}

	/// Transposes the rotation, keeping each row's scale, and negates z
	pub fn switch_hand_convention(&self) -> Result<Self> {
		let scale = self.scale();
		let s = [scale.x, scale.y, scale.z];

		if let Some(axis) = s.iter().position(|v| float::is_zero(*v)) {
			return Err(MathError::DegenerateScale { axis });
		}

		let old = self.basis().elements;
		let mut basis = Matrix3x3::new(old);

		for i in 0..3 {
			for j in 0..3 {
				if i != j {
					basis.elements[i][j] = old[j][i] * s[i] / s[j];
				}
			}
		}

		let mut translation = self.translation();
		translation.z = -translation.z;

		Ok(Self { matrix: M::from_parts(&basis, &translation) })
	}
}

impl<M: AffineMatrix> Default for TransformationMatrix<M> {
	fn default() -> Self {
		Self { matrix: M::IDENTITY }
	}
}

impl From<TransformationMatrix4x3> for TransformationMatrix4x4 {
	fn from(t: TransformationMatrix4x3) -> Self {
		Self { matrix: Matrix4x4::from(t.matrix) }
	}
}

impl From<TransformationMatrix4x4> for TransformationMatrix4x3 {
	fn from(t: TransformationMatrix4x4) -> Self {
		Self { matrix: Matrix4x3::from(t.matrix) }
	}
}

impl<M: AffineMatrix> From<TranslationMatrix<M>> for TransformationMatrix<M> {
	fn from(t: TranslationMatrix<M>) -> Self {
		Self { matrix: t.matrix }
	}
}

impl<M: AffineMatrix> From<RotationMatrix3x3> for TransformationMatrix<M> {
	fn from(r: RotationMatrix3x3) -> Self {
		Self { matrix: M::from_parts(&r.matrix, &Vector3::default()) }
	}
}

impl<M: AffineMatrix> From<ScaleMatrix3x3> for TransformationMatrix<M> {
	fn from(s: ScaleMatrix3x3) -> Self {
		Self { matrix: M::from_parts(&s.matrix, &Vector3::default()) }
	}
}

impl<M: AffineMatrix, N: AffineMatrix> Mul<TransformationMatrix<N>> for TransformationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TransformationMatrix<N>) -> TransformationMatrix<M> {
		let b = rhs.basis();
		let basis = self.basis() * b;
		let translation = self.translation() * b + rhs.translation();

		TransformationMatrix { matrix: M::from_parts(&basis, &translation) }
	}
}

impl<M: AffineMatrix, N: AffineMatrix> Mul<TranslationMatrix<N>> for TransformationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TranslationMatrix<N>) -> TransformationMatrix<M> {
		let mut r = self;
		r.matrix.set_translation(&(self.translation() + rhs.translation()));
		r
	}
}

impl<M: AffineMatrix> Mul<RotationMatrix3x3> for TransformationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: RotationMatrix3x3) -> TransformationMatrix<M> {
		let basis = self.basis() * rhs.matrix;
		let translation = self.translation() * rhs.matrix;

		TransformationMatrix { matrix: M::from_parts(&basis, &translation) }
	}
}

impl<M: AffineMatrix> Mul<ScaleMatrix3x3> for TransformationMatrix<M> {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: ScaleMatrix3x3) -> TransformationMatrix<M> {
		let s = rhs.scale();
		let mut basis = self.basis();

		for row in basis.elements.iter_mut() {
			row[0] *= s.x;
			row[1] *= s.y;
			row[2] *= s.z;
		}

		let translation = self.translation() * s;

		TransformationMatrix { matrix: M::from_parts(&basis, &translation) }
	}
}

impl<M: AffineMatrix, N: AffineMatrix> MulAssign<TransformationMatrix<N>> for TransformationMatrix<M> {
	fn mul_assign(&mut self, rhs: TransformationMatrix<N>) {
		*self = *self * rhs;
	}
}

impl<M: AffineMatrix, N: AffineMatrix> MulAssign<TranslationMatrix<N>> for TransformationMatrix<M> {
	fn mul_assign(&mut self, rhs: TranslationMatrix<N>) {
		*self = *self * rhs;
	}
}

impl<M: AffineMatrix> MulAssign<RotationMatrix3x3> for TransformationMatrix<M> {
	fn mul_assign(&mut self, rhs: RotationMatrix3x3) {
		*self = *self * rhs;
	}
}

impl<M: AffineMatrix> MulAssign<ScaleMatrix3x3> for TransformationMatrix<M> {
	fn mul_assign(&mut self, rhs: ScaleMatrix3x3) {
		*self = *self * rhs;
	}
}

impl<M: AffineMatrix> ApproxEq for TransformationMatrix<M> {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.matrix.approx_eq(&other.matrix, tol)
	}
}

impl<M: AffineMatrix + Display> Display for TransformationMatrix<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.matrix)
	}
}
