use super::{Vector4, Vf32, Matrix3x3, Matrix4x3, ApproxEq, float};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: Matrix3x4 = Matrix3x4 {
	elements: [
		[1.0, 0.0, 0.0, 0.0],
		[0.0, 1.0, 0.0, 0.0],
		[0.0, 0.0, 1.0, 0.0]
	]
};

pub const ZERO: Matrix3x4 = Matrix3x4 { elements: [[0.0; 4]; 3] };

/// Three rows of four columns, the transpose shape of [`Matrix4x3`]
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x4 {
	pub elements: [[f32; 4]; 3]
}

impl Matrix3x4 {
	pub fn new(elements: [[f32; 4]; 3]) -> Self {
		Self { elements }
	}

	pub fn from_rows(r0: &Vector4, r1: &Vector4, r2: &Vector4) -> Self {
		Self {
			elements: [
				[r0.x, r0.y, r0.z, r0.w],
				[r1.x, r1.y, r1.z, r1.w],
				[r2.x, r2.y, r2.z, r2.w]
			]
		}
	}

	pub fn from_packs(r0: Vf32, r1: Vf32, r2: Vf32) -> Self {
		Self { elements: [r0.to_array(), r1.to_array(), r2.to_array()] }
	}

	pub fn set(&mut self, elements: [[f32; 4]; 3]) {
		self.elements = elements;
	}

	pub fn transpose(&self) -> Matrix4x3 {
		let e = &self.elements;

		Matrix4x3::new([
			[e[0][0], e[1][0], e[2][0]],
			[e[0][1], e[1][1], e[2][1]],
			[e[0][2], e[1][2], e[2][2]],
			[e[0][3], e[1][3], e[2][3]]
		])
	}

	pub fn is_zero(&self) -> bool {
		self.elements.iter().flatten().all(|e| float::is_zero(*e))
	}

	pub fn is_identity(&self) -> bool {
		self.approx_eq(&IDENTITY, float::EPSILON)
	}
}

impl_op_ex!(+ |a: &Matrix3x4, b: &Matrix3x4| -> Matrix3x4 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Matrix3x4, b: &Matrix3x4| -> Matrix3x4 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(+= |a: &mut Matrix3x4, b: &Matrix3x4| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae += be;
		}
	}
});

impl_op_ex!(-= |a: &mut Matrix3x4, b: &Matrix3x4| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae -= be;
		}
	}
});

impl_op_ex!(* |a: &Matrix3x4, b: f32| -> Matrix3x4 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Matrix3x4, b: f32| -> Matrix3x4 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Matrix3x4, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e *= b);
});

impl_op_ex!(/= |a: &mut Matrix3x4, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e /= b);
});

impl_op_ex!(* |a: &Matrix3x4, b: &Matrix4x3| -> Matrix3x3 {
	let ae = &a.elements;
	let be = &b.elements;
	let mut r = [[0.0; 3]; 3];

	for i in 0..3 {
		for j in 0..3 {
			r[i][j] = ae[i][0] * be[0][j] + ae[i][1] * be[1][j] + ae[i][2] * be[2][j] + ae[i][3] * be[3][j];
		}
	}

	Matrix3x3::new(r)
});

impl ApproxEq for Matrix3x4 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.elements.iter().flatten()
			.zip(other.elements.iter().flatten())
			.all(|(a, b)| (a - b).abs() <= tol)
	}
}

impl Display for Matrix3x4 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.elements)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::{matrix3x3, assert_approx_eq};

	fn sample() -> Matrix3x4 {
		Matrix3x4::new([
			[1.0, 2.0, 3.0, 4.0],
			[5.0, 6.0, 7.0, 8.0],
			[9.0, 10.0, 11.0, 12.0]])
	}

	#[test]
	fn from_rows() {
		let m = Matrix3x4::from_rows(
			&Vector4::new(1.0, 2.0, 3.0, 4.0),
			&Vector4::new(5.0, 6.0, 7.0, 8.0),
			&Vector4::new(9.0, 10.0, 11.0, 12.0));

		assert_eq!(m, sample());
	}

	#[test]
	fn from_packs() {
		let m = Matrix3x4::from_packs(
			Vf32::pack(1.0, 2.0, 3.0, 4.0),
			Vf32::pack(5.0, 6.0, 7.0, 8.0),
			Vf32::pack(9.0, 10.0, 11.0, 12.0));

		assert_eq!(m, sample());
	}

	#[test]
	fn transpose() {
		let expected = [
			[1.0, 5.0, 9.0],
			[2.0, 6.0, 10.0],
			[3.0, 7.0, 11.0],
			[4.0, 8.0, 12.0]];

		assert_eq!(sample().transpose().elements, expected);
		assert_eq!(sample().transpose().transpose(), sample());
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
	fn add_sub() {
		let a = sample();
		assert_eq!(a + a, a * 2.0);
		assert!((a - a).is_zero());

		let mut b = a;
		b += a;
		b -= a;
		b /= 1.0;
		assert_eq!(b, a);
	}

	#[test]
	fn mul_matrix4x3() {
		// A 3x4 times its own transpose is the 3x3 of row dot products
		let a = sample();
		let r = a * a.transpose();

		let expected = Matrix3x3::new([
			[30.0, 70.0, 110.0],
			[70.0, 174.0, 278.0],
			[110.0, 278.0, 446.0]]);

		assert_eq!(r, expected);
		assert_approx_eq(&(IDENTITY * IDENTITY.transpose()), &matrix3x3::IDENTITY, 0.0);
	}
}
