use super::{Vector4, Vf32, Matrix4x3, ApproxEq, float};
use crate::{MathError, Result};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: Matrix4x4 = Matrix4x4 {
	elements: [
		[1.0, 0.0, 0.0, 0.0],
		[0.0, 1.0, 0.0, 0.0],
		[0.0, 0.0, 1.0, 0.0],
		[0.0, 0.0, 0.0, 1.0]
	]
};

pub const ZERO: Matrix4x4 = Matrix4x4 { elements: [[0.0; 4]; 4] };

#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x4 {
	pub elements: [[f32; 4]; 4]
}

impl Matrix4x4 {
	pub fn new(elements: [[f32; 4]; 4]) -> Self {
		Self { elements }
	}

	pub fn from_rows(r0: &Vector4, r1: &Vector4, r2: &Vector4, r3: &Vector4) -> Self {
		Self {
			elements: [
				[r0.x, r0.y, r0.z, r0.w],
				[r1.x, r1.y, r1.z, r1.w],
				[r2.x, r2.y, r2.z, r2.w],
				[r3.x, r3.y, r3.z, r3.w]
			]
		}
	}

	pub fn from_packs(r0: Vf32, r1: Vf32, r2: Vf32, r3: Vf32) -> Self {
		Self { elements: [r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()] }
	}

	pub fn set(&mut self, elements: [[f32; 4]; 4]) {
		self.elements = elements;
	}

	pub fn identity(&mut self) {
		self.elements = IDENTITY.elements;
	}

	pub fn transpose(&mut self) {
		let e = &mut self.elements;
		let mut temp;

		temp = e[1][0]; e[1][0] = e[0][1]; e[0][1] = temp;
		temp = e[2][0]; e[2][0] = e[0][2]; e[0][2] = temp;
		temp = e[3][0]; e[3][0] = e[0][3]; e[0][3] = temp;

		temp = e[2][1]; e[2][1] = e[1][2]; e[1][2] = temp;
		temp = e[3][1]; e[3][1] = e[1][3]; e[1][3] = temp;

		temp = e[3][2]; e[3][2] = e[2][3]; e[2][3] = temp;
	}

	pub fn is_zero(&self) -> bool {
		self.elements.iter().flatten().all(|e| float::is_zero(*e))
	}

	pub fn is_identity(&self) -> bool {
		self.approx_eq(&IDENTITY, float::EPSILON)
	}

	/// Cofactors of the first row, shared by the determinant and the inverse
	fn first_row_cofactors(&self) -> [f32; 4] {
		let m = &self.elements;

		let (m10, m11, m12, m13) = (m[1][0], m[1][1], m[1][2], m[1][3]);
		let (m20, m21, m22, m23) = (m[2][0], m[2][1], m[2][2], m[2][3]);
		let (m30, m31, m32, m33) = (m[3][0], m[3][1], m[3][2], m[3][3]);

		[
			m21 * m32 * m13 - m31 * m22 * m13 + m31 * m12 * m23 - m11 * m32 * m23 - m21 * m12 * m33 + m11 * m22 * m33,
			m30 * m22 * m13 - m20 * m32 * m13 - m30 * m12 * m23 + m10 * m32 * m23 + m20 * m12 * m33 - m10 * m22 * m33,
			m20 * m31 * m13 - m30 * m21 * m13 + m30 * m11 * m23 - m10 * m31 * m23 - m20 * m11 * m33 + m10 * m21 * m33,
			m30 * m21 * m12 - m20 * m31 * m12 - m30 * m11 * m22 + m10 * m31 * m22 + m20 * m11 * m32 - m10 * m21 * m32
		]
	}

	pub fn determinant(&self) -> f32 {
		let m = &self.elements;
		let [t11, t12, t13, t14] = self.first_row_cofactors();

		m[0][0] * t11 + m[0][1] * t12 + m[0][2] * t13 + m[0][3] * t14
	}

	pub fn invert(&self) -> Result<Self> {
		let det = self.determinant();

		if float::is_zero(det) {
			log::debug!("cannot invert 4x4 matrix with determinant {}", det);
			return Err(MathError::Singular);
		}

		let m = &self.elements;

		let (m00, m01, m02, m03) = (m[0][0], m[0][1], m[0][2], m[0][3]);
		let (m10, m11, m12, m13) = (m[1][0], m[1][1], m[1][2], m[1][3]);
		let (m20, m21, m22, m23) = (m[2][0], m[2][1], m[2][2], m[2][3]);
		let (m30, m31, m32, m33) = (m[3][0], m[3][1], m[3][2], m[3][3]);

		let [t11, t12, t13, t14] = self.first_row_cofactors();
		let det_rec = 1.0 / det;

		let mut r = ZERO;
		let e = &mut r.elements;

		e[0][0] = t11 * det_rec;
		e[0][1] = (m31 * m22 * m03 - m21 * m32 * m03 - m31 * m02 * m23 + m01 * m32 * m23 + m21 * m02 * m33 - m01 * m22 * m33) * det_rec;
		e[0][2] = (m11 * m32 * m03 - m31 * m12 * m03 + m31 * m02 * m13 - m01 * m32 * m13 - m11 * m02 * m33 + m01 * m12 * m33) * det_rec;
		e[0][3] = (m21 * m12 * m03 - m11 * m22 * m03 - m21 * m02 * m13 + m01 * m22 * m13 + m11 * m02 * m23 - m01 * m12 * m23) * det_rec;

		e[1][0] = t12 * det_rec;
		e[1][1] = (m20 * m32 * m03 - m30 * m22 * m03 + m30 * m02 * m23 - m00 * m32 * m23 - m20 * m02 * m33 + m00 * m22 * m33) * det_rec;
		e[1][2] = (m30 * m12 * m03 - m10 * m32 * m03 - m30 * m02 * m13 + m00 * m32 * m13 + m10 * m02 * m33 - m00 * m12 * m33) * det_rec;
		e[1][3] = (m10 * m22 * m03 - m20 * m12 * m03 + m20 * m02 * m13 - m00 * m22 * m13 - m10 * m02 * m23 + m00 * m12 * m23) * det_rec;

		e[2][0] = t13 * det_rec;
		e[2][1] = (m30 * m21 * m03 - m20 * m31 * m03 - m30 * m01 * m23 + m00 * m31 * m23 + m20 * m01 * m33 - m00 * m21 * m33) * det_rec;
		e[2][2] = (m10 * m31 * m03 - m30 * m11 * m03 + m30 * m01 * m13 - m00 * m31 * m13 - m10 * m01 * m33 + m00 * m11 * m33) * det_rec;
		e[2][3] = (m20 * m11 * m03 - m10 * m21 * m03 - m20 * m01 * m13 + m00 * m21 * m13 + m10 * m01 * m23 - m00 * m11 * m23) * det_rec;

		e[3][0] = t14 * det_rec;
		e[3][1] = (m20 * m31 * m02 - m30 * m21 * m02 + m30 * m01 * m22 - m00 * m31 * m22 - m20 * m01 * m32 + m00 * m21 * m32) * det_rec;
		e[3][2] = (m30 * m11 * m02 - m10 * m31 * m02 - m30 * m01 * m12 + m00 * m31 * m12 + m10 * m01 * m32 - m00 * m11 * m32) * det_rec;
		e[3][3] = (m10 * m21 * m02 - m20 * m11 * m02 + m20 * m01 * m12 - m00 * m21 * m12 - m10 * m01 * m22 + m00 * m11 * m22) * det_rec;

		Ok(r)
	}
}

impl From<Matrix4x3> for Matrix4x4 {
	/// Fills the fourth column with `(0, 0, 0, 1)`
	fn from(m: Matrix4x3) -> Self {
		let e = &m.elements;

		Self {
			elements: [
				[e[0][0], e[0][1], e[0][2], 0.0],
				[e[1][0], e[1][1], e[1][2], 0.0],
				[e[2][0], e[2][1], e[2][2], 0.0],
				[e[3][0], e[3][1], e[3][2], 1.0]
			]
		}
	}
}

impl_op_ex!(+ |a: &Matrix4x4, b: &Matrix4x4| -> Matrix4x4 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Matrix4x4, b: &Matrix4x4| -> Matrix4x4 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(+= |a: &mut Matrix4x4, b: &Matrix4x4| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae += be;
		}
	}
});

impl_op_ex!(-= |a: &mut Matrix4x4, b: &Matrix4x4| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae -= be;
		}
	}
});

impl_op_ex!(* |a: &Matrix4x4, b: &Matrix4x4| -> Matrix4x4 {
	let a = &a.elements;
	let b = &b.elements;

	let c00 = a[0][0] * b[0][0] + a[0][1] * b[1][0] + a[0][2] * b[2][0] + a[0][3] * b[3][0];
	let c01 = a[0][0] * b[0][1] + a[0][1] * b[1][1] + a[0][2] * b[2][1] + a[0][3] * b[3][1];
	let c02 = a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2] * b[2][2] + a[0][3] * b[3][2];
	let c03 = a[0][0] * b[0][3] + a[0][1] * b[1][3] + a[0][2] * b[2][3] + a[0][3] * b[3][3];

	let c10 = a[1][0] * b[0][0] + a[1][1] * b[1][0] + a[1][2] * b[2][0] + a[1][3] * b[3][0];
	let c11 = a[1][0] * b[0][1] + a[1][1] * b[1][1] + a[1][2] * b[2][1] + a[1][3] * b[3][1];
	let c12 = a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2] * b[2][2] + a[1][3] * b[3][2];
	let c13 = a[1][0] * b[0][3] + a[1][1] * b[1][3] + a[1][2] * b[2][3] + a[1][3] * b[3][3];

	let c20 = a[2][0] * b[0][0] + a[2][1] * b[1][0] + a[2][2] * b[2][0] + a[2][3] * b[3][0];
	let c21 = a[2][0] * b[0][1] + a[2][1] * b[1][1] + a[2][2] * b[2][1] + a[2][3] * b[3][1];
	let c22 = a[2][0] * b[0][2] + a[2][1] * b[1][2] + a[2][2] * b[2][2] + a[2][3] * b[3][2];
	let c23 = a[2][0] * b[0][3] + a[2][1] * b[1][3] + a[2][2] * b[2][3] + a[2][3] * b[3][3];

	let c30 = a[3][0] * b[0][0] + a[3][1] * b[1][0] + a[3][2] * b[2][0] + a[3][3] * b[3][0];
	let c31 = a[3][0] * b[0][1] + a[3][1] * b[1][1] + a[3][2] * b[2][1] + a[3][3] * b[3][1];
	let c32 = a[3][0] * b[0][2] + a[3][1] * b[1][2] + a[3][2] * b[2][2] + a[3][3] * b[3][2];
	let c33 = a[3][0] * b[0][3] + a[3][1] * b[1][3] + a[3][2] * b[2][3] + a[3][3] * b[3][3];

	Matrix4x4 {
		elements: [
			[c00, c01, c02, c03],
			[c10, c11, c12, c13],
			[c20, c21, c22, c23],
			[c30, c31, c32, c33]
		]
	}
});

impl_op_ex!(*= |a: &mut Matrix4x4, b: &Matrix4x4| {
	*a = *a * b;
});

impl_op_ex!(* |a: &Matrix4x4, b: f32| -> Matrix4x4 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Matrix4x4, b: f32| -> Matrix4x4 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Matrix4x4, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e *= b);
});

impl_op_ex!(/= |a: &mut Matrix4x4, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e /= b);
});

impl_op_ex!(* |a: &Matrix4x4, b: &Matrix4x3| -> Matrix4x3 {
	let ae = &a.elements;
	let be = &b.elements;
	let mut r = [[0.0; 3]; 4];

	for i in 0..4 {
		for j in 0..3 {
			r[i][j] = ae[i][0] * be[0][j] + ae[i][1] * be[1][j] + ae[i][2] * be[2][j] + ae[i][3] * be[3][j];
		}
	}

	Matrix4x3::new(r)
});

impl ApproxEq for Matrix4x4 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		for i in 0..4 {
			for j in 0..4 {
				if (self.elements[i][j] - other.elements[i][j]).abs() > tol {
					return false;
				}
			}
		}

		true
	}
}

impl Display for Matrix4x4 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.elements)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;

	fn sample() -> Matrix4x4 {
		Matrix4x4::new([
			[0.0, 0.1, 0.2, 0.3],
			[1.0, 1.1, 1.2, 1.3],
			[2.0, 2.1, 2.2, 2.3],
			[3.0, 3.1, 3.2, 3.3]
		])
	}

	#[test]
	fn from_rows() {
		let m = Matrix4x4::from_rows(
			&Vector4::new(0.0, 0.1, 0.2, 0.3),
			&Vector4::new(1.0, 1.1, 1.2, 1.3),
			&Vector4::new(2.0, 2.1, 2.2, 2.3),
			&Vector4::new(3.0, 3.1, 3.2, 3.3));

		assert_eq!(m, sample());
	}

	#[test]
	fn from_packs() {
		let m = Matrix4x4::from_packs(
			Vf32::pack(0.0, 0.1, 0.2, 0.3),
			Vf32::pack(1.0, 1.1, 1.2, 1.3),
			Vf32::pack(2.0, 2.1, 2.2, 2.3),
			Vf32::pack(3.0, 3.1, 3.2, 3.3));

		assert_eq!(m, sample());
	}

	#[test]
	fn identity() {
		let mut m = sample();
		m.identity();
		assert_eq!(m, IDENTITY);
	}

	#[test]
	fn transpose() {
		let mut m = sample();
		m.transpose();

		let expected = [
			[0.0, 1.0, 2.0, 3.0],
			[0.1, 1.1, 2.1, 3.1],
			[0.2, 1.2, 2.2, 3.2],
			[0.3, 1.3, 2.3, 3.3]
		];

		assert_eq!(m.elements, expected);
	}

	#[test]
	fn is_zero() {
		assert!(ZERO.is_zero());
		assert!(!sample().is_zero());
	}

	#[test]
	fn is_identity() {
		assert!(IDENTITY.is_identity());
		assert!(!sample().is_identity());
	}

	#[test]
	fn determinant() {
		let m = Matrix4x4::new([
			[2.0, 0.0, 0.0, 0.0],
			[0.0, 3.0, 0.0, 0.0],
			[0.0, 0.0, 4.0, 0.0],
			[5.0, 6.0, 7.0, 1.0]
		]);

		assert_eq!(m.determinant(), 24.0);
		assert_eq!(IDENTITY.determinant(), 1.0);
	}

	#[test]
	fn invert() {
		let m = Matrix4x4::new([
			[2.0, 4.0, 3.0, 7.0],
			[5.0, 2.0, 8.0, 3.0],
			[7.0, 6.0, 1.0, 0.0],
			[4.0, 9.0, 5.0, 7.0]
		]);

		let expected = Matrix4x4::new([
			[0.205, 0.038, 0.183, -0.222],
			[-0.209, -0.066, -0.028, 0.238],
			[-0.181, 0.127, -0.111, 0.126],
			[0.281, -0.027, 0.011, -0.126]
		]);

		let inv = m.invert().unwrap();
		assert_approx_eq(&inv, &expected, 0.001);
		assert_approx_eq(&(m * inv), &IDENTITY, 1e-5);
	}

	#[test]
	fn invert_singular() {
		let m = Matrix4x4::new([
			[1.0, 2.0, 3.0, 4.0],
			[5.0, 6.0, 7.0, 8.0],
			[9.0, 10.0, 11.0, 12.0],
			[13.0, 14.0, 15.0, 16.0]
		]);

		assert_eq!(m.invert(), Err(MathError::Singular));
		assert_eq!(ZERO.invert(), Err(MathError::Singular));
	}

	#[test]
	fn mul() {
		let a = Matrix4x4::new([
			[1.0, 2.0, 3.0, 4.0],
			[5.0, 6.0, 7.0, 8.0],
			[9.0, 10.0, 11.0, 12.0],
			[13.0, 14.0, 15.0, 16.0]
		]);

		let expected = Matrix4x4::new([
			[90.0, 100.0, 110.0, 120.0],
			[202.0, 228.0, 254.0, 280.0],
			[314.0, 356.0, 398.0, 440.0],
			[426.0, 484.0, 542.0, 600.0]
		]);

		assert_eq!(a * a, expected);

		let mut b = a;
		b *= a;
		assert_eq!(b, expected);
	}

	#[test]
	fn scalar_ops() {
		let a = sample();
		assert_approx_eq(&(a + a), &(a * 2.0), 1e-6);
		assert_approx_eq(&(a * 4.0 / 4.0), &a, 1e-6);
		assert!((a - a).is_zero());
	}

	#[test]
	fn mul_matrix4x3() {
		let a = Matrix4x4::new([
			[1.0, 0.0, 0.0, 0.0],
			[0.0, 1.0, 0.0, 0.0],
			[0.0, 0.0, 1.0, 0.0],
			[1.0, 2.0, 3.0, 1.0]
		]);

		let b = Matrix4x3::new([
			[2.0, 0.0, 0.0],
			[0.0, 2.0, 0.0],
			[0.0, 0.0, 2.0],
			[1.0, 1.0, 1.0]
		]);

		let expected = Matrix4x3::new([
			[2.0, 0.0, 0.0],
			[0.0, 2.0, 0.0],
			[0.0, 0.0, 2.0],
			[3.0, 5.0, 7.0]
		]);

		assert_eq!(a * b, expected);
	}

	#[test]
	fn from_matrix4x3() {
		let m = Matrix4x4::from(crate::math::matrix4x3::IDENTITY);
		assert_eq!(m, IDENTITY);
	}
}
