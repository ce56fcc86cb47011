use super::{
	Vector3, Quaternion, Euler, Order, Matrix3x3, matrix3x3, ScaleMatrix3x3, AffineMatrix,
	TranslationMatrix, TransformationMatrix, TransformationMatrix4x4, ApproxEq, float
};
use crate::{MathError, Result};
use std::fmt::Display;
use std::f32::consts::{PI, FRAC_1_SQRT_2};
use std::ops::Mul;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: RotationMatrix3x3 = RotationMatrix3x3 { matrix: matrix3x3::IDENTITY };

const ORTHONORMAL_TOLERANCE: f32 = 1e-5;

/// An orthonormal 3x3 basis. Points are rotated as row vectors, `p' = p * R`.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct RotationMatrix3x3 {
	pub matrix: Matrix3x3
}

impl RotationMatrix3x3 {
	/// Unchecked, see [`Self::try_from_matrix`]
	pub fn from_matrix(matrix: Matrix3x3) -> Self {
		Self { matrix }
	}

	/// Fails unless the rows are orthonormal and the determinant is one
	pub fn try_from_matrix(matrix: Matrix3x3) -> Result<Self> {
		let determinant = matrix.determinant();

		let mut transposed = matrix;
		transposed.transpose();

		if !float::are_equal_with_tolerance(determinant, 1.0, ORTHONORMAL_TOLERANCE)
			|| !(matrix * transposed).approx_eq(&matrix3x3::IDENTITY, ORTHONORMAL_TOLERANCE) {
			return Err(MathError::NonRotation { determinant });
		}

		Ok(Self { matrix })
	}

	pub fn from_quaternion(q: &Quaternion) -> Self {
		let (x, y, z, w) = (q.x, q.y, q.z, q.w);

		let (x2, y2, z2) = (x * 2.0, y * 2.0, z * 2.0);
		let (xx, xy, xz) = (x * x2, x * y2, x * z2);
		let (yy, yz, zz) = (y * y2, y * z2, z * z2);
		let (wx, wy, wz) = (w * x2, w * y2, w * z2);

		Self::from_matrix(Matrix3x3::new([
			[1.0 - (yy + zz), xy - wz, xz + wy],
			[xy + wz, 1.0 - (xx + zz), yz - wx],
			[xz - wy, yz + wx, 1.0 - (xx + yy)]
		]))
	}

	/// The axis is normalized before use
	pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
		let mut n = *axis;
		n.normalize();

		let (s, c) = angle.sin_cos();
		let t = 1.0 - c;
		let (x, y, z) = (n.x, n.y, n.z);

		Self::from_matrix(Matrix3x3::new([
			[c + t * x * x, t * x * y - z * s, t * x * z + y * s],
			[t * x * y + z * s, c + t * y * y, t * y * z - x * s],
			[t * x * z - y * s, t * y * z + x * s, c + t * z * z]
		]))
	}

	pub fn from_euler(e: &Euler) -> Self {
		let (cx, cy, cz) = (e.x.cos(), e.y.cos(), e.z.cos());
		let (sx, sy, sz) = (e.x.sin(), e.y.sin(), e.z.sin());

		let elements = match e.order {
			Order::Xyz => [
				[cy * cz, -cy * sz, sy],
				[cz * sx * sy + cx * sz, cx * cz - sx * sy * sz, -cy * sx],
				[sx * sz - cx * cz * sy, cz * sx + cx * sy * sz, cx * cy]
			],
			Order::Xzy => [
				[cy * cz, -sz, cz * sy],
				[sx * sy + cx * cy * sz, cx * cz, cx * sy * sz - cy * sx],
				[cy * sx * sz - cx * sy, cz * sx, cx * cy + sx * sy * sz]
			],
			Order::Yxz => [
				[cy * cz + sx * sy * sz, cz * sx * sy - cy * sz, cx * sy],
				[cx * sz, cx * cz, -sx],
				[cy * sx * sz - cz * sy, cy * cz * sx + sy * sz, cx * cy]
			],
			Order::Yzx => [
				[cy * cz, sx * sy - cx * cy * sz, cx * sy + cy * sx * sz],
				[sz, cx * cz, -cz * sx],
				[-cz * sy, cy * sx + cx * sy * sz, cx * cy - sx * sy * sz]
			],
			Order::Zxy => [
				[cy * cz - sx * sy * sz, -cx * sz, cz * sy + cy * sx * sz],
				[cz * sx * sy + cy * sz, cx * cz, sy * sz - cy * cz * sx],
				[-cx * sy, sx, cx * cy]
			],
			Order::Zyx => [
				[cy * cz, cz * sx * sy - cx * sz, cx * cz * sy + sx * sz],
				[cy * sz, cx * cz + sx * sy * sz, cx * sy * sz - cz * sx],
				[-sy, cy * sx, cx * cy]
			]
		};

		Self::from_matrix(Matrix3x3::new(elements))
	}

	/// The result always has a non-negative `w`
	pub fn to_quaternion(&self) -> Quaternion {
		let r = &self.matrix.elements;

		let tw = 1.0 + r[0][0] + r[1][1] + r[2][2];
		let tx = 1.0 + r[0][0] - r[1][1] - r[2][2];
		let ty = 1.0 - r[0][0] + r[1][1] - r[2][2];
		let tz = 1.0 - r[0][0] - r[1][1] + r[2][2];

		let q = if tw >= tx && tw >= ty && tw >= tz {
			let w = 0.5 * tw.sqrt();
			let f = 0.25 / w;
			Quaternion::new((r[2][1] - r[1][2]) * f, (r[0][2] - r[2][0]) * f, (r[1][0] - r[0][1]) * f, w)
		}
		else if tx >= ty && tx >= tz {
			let x = 0.5 * tx.sqrt();
			let f = 0.25 / x;
			Quaternion::new(x, (r[0][1] + r[1][0]) * f, (r[0][2] + r[2][0]) * f, (r[2][1] - r[1][2]) * f)
		}
		else if ty >= tz {
			let y = 0.5 * ty.sqrt();
			let f = 0.25 / y;
			Quaternion::new((r[0][1] + r[1][0]) * f, y, (r[1][2] + r[2][1]) * f, (r[0][2] - r[2][0]) * f)
		}
		else {
			let z = 0.5 * tz.sqrt();
			let f = 0.25 / z;
			Quaternion::new((r[0][2] + r[2][0]) * f, (r[1][2] + r[2][1]) * f, z, (r[1][0] - r[0][1]) * f)
		};

		if q.w < 0.0 { -q } else { q }
	}

	/// A null rotation reports the X axis
	pub fn to_axis_angle(&self) -> (Vector3, f32) {
		let r = &self.matrix.elements;

		let cos = float::clamp((r[0][0] + r[1][1] + r[2][2] - 1.0) / 2.0, -1.0, 1.0);
		let angle = cos.acos();

		if float::is_zero(angle) {
			return (Vector3::new(1.0, 0.0, 0.0), 0.0);
		}

		if float::is_zero(1.0 + cos) {
			// R = 2nn' - I, so the axis is read from the symmetric part
			let xx = (r[0][0] + 1.0) / 2.0;
			let yy = (r[1][1] + 1.0) / 2.0;
			let zz = (r[2][2] + 1.0) / 2.0;
			let xy = (r[0][1] + r[1][0]) / 4.0;
			let xz = (r[0][2] + r[2][0]) / 4.0;
			let yz = (r[1][2] + r[2][1]) / 4.0;

			let axis = if xx > yy && xx > zz {
				if float::is_zero(xx) {
					Vector3::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2)
				}
				else {
					let x = xx.sqrt();
					Vector3::new(x, xy / x, xz / x)
				}
			}
			else if yy > zz {
				if float::is_zero(yy) {
					Vector3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2)
				}
				else {
					let y = yy.sqrt();
					Vector3::new(xy / y, y, yz / y)
				}
			}
			else if float::is_zero(zz) {
				Vector3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0)
			}
			else {
				let z = zz.sqrt();
				Vector3::new(xz / z, yz / z, z)
			};

			return (axis, PI);
		}

		let f = 0.5 / angle.sin();
		let axis = Vector3::new(
			(r[2][1] - r[1][2]) * f,
			(r[0][2] - r[2][0]) * f,
			(r[1][0] - r[0][1]) * f);

		(axis, angle)
	}

	pub fn to_euler(&self, order: Order) -> Euler {
		Euler::from_rotation_matrix(self, order)
	}

	pub fn invert(&self) -> Self {
		let mut r = *self;
		r.matrix.transpose();
		r
	}

	pub fn determinant(&self) -> f32 {
		self.matrix.determinant()
	}
}

impl Default for RotationMatrix3x3 {
	fn default() -> Self {
		IDENTITY
	}
}

impl From<Quaternion> for RotationMatrix3x3 {
	fn from(q: Quaternion) -> Self {
		Self::from_quaternion(&q)
	}
}

impl_op_ex!(* |a: &RotationMatrix3x3, b: &RotationMatrix3x3| -> RotationMatrix3x3 {
	RotationMatrix3x3 { matrix: a.matrix * b.matrix }
});

impl_op_ex!(*= |a: &mut RotationMatrix3x3, b: &RotationMatrix3x3| {
	a.matrix *= b.matrix;
});

impl_op_ex!(* |a: &RotationMatrix3x3, b: &ScaleMatrix3x3| -> TransformationMatrix4x4 {
	TransformationMatrix4x4::from(*a) * *b
});

impl<M: AffineMatrix> Mul<TranslationMatrix<M>> for RotationMatrix3x3 {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TranslationMatrix<M>) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl<M: AffineMatrix> Mul<TransformationMatrix<M>> for RotationMatrix3x3 {
	type Output = TransformationMatrix<M>;

	fn mul(self, rhs: TransformationMatrix<M>) -> TransformationMatrix<M> {
		TransformationMatrix::<M>::from(self) * rhs
	}
}

impl ApproxEq for RotationMatrix3x3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.matrix.approx_eq(&other.matrix, tol)
	}
}

impl Display for RotationMatrix3x3 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.matrix)
	}
}
