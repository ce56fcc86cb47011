use super::{Vector3, Vf32, Matrix3x3, Matrix3x4, Matrix4x4, ApproxEq, float};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: Matrix4x3 = Matrix4x3 {
	elements: [
		[1.0, 0.0, 0.0],
		[0.0, 1.0, 0.0],
		[0.0, 0.0, 1.0],
		[0.0, 0.0, 0.0]
	]
};

pub const ZERO: Matrix4x3 = Matrix4x3 { elements: [[0.0; 3]; 4] };

/// Four rows of three columns. As an affine transform the upper three rows
/// are the basis and the last row is the translation, with an implied
/// `(0, 0, 0, 1)` fourth column.
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x3 {
	pub elements: [[f32; 3]; 4]
}

impl Matrix4x3 {
	pub fn new(elements: [[f32; 3]; 4]) -> Self {
		Self { elements }
	}

	pub fn from_rows(r0: &Vector3, r1: &Vector3, r2: &Vector3, r3: &Vector3) -> Self {
		Self {
			elements: [
				[r0.x, r0.y, r0.z],
				[r1.x, r1.y, r1.z],
				[r2.x, r2.y, r2.z],
				[r3.x, r3.y, r3.z]
			]
		}
	}

	/// The fourth lane of every pack is ignored
	pub fn from_packs(r0: Vf32, r1: Vf32, r2: Vf32, r3: Vf32) -> Self {
		Self { elements: [r0.xyz(), r1.xyz(), r2.xyz(), r3.xyz()] }
	}

	pub fn set(&mut self, elements: [[f32; 3]; 4]) {
		self.elements = elements;
	}

	pub fn transpose(&self) -> Matrix3x4 {
		let e = &self.elements;

		Matrix3x4::new([
			[e[0][0], e[1][0], e[2][0], e[3][0]],
			[e[0][1], e[1][1], e[2][1], e[3][1]],
			[e[0][2], e[1][2], e[2][2], e[3][2]]
		])
	}

	pub fn is_zero(&self) -> bool {
		self.elements.iter().flatten().all(|e| float::is_zero(*e))
	}

	pub fn is_identity(&self) -> bool {
		self.approx_eq(&IDENTITY, float::EPSILON)
	}
}

impl From<Matrix4x4> for Matrix4x3 {
	/// Drops the fourth column
	fn from(m: Matrix4x4) -> Self {
		let e = &m.elements;

		Self {
			elements: [
				[e[0][0], e[0][1], e[0][2]],
				[e[1][0], e[1][1], e[1][2]],
				[e[2][0], e[2][1], e[2][2]],
				[e[3][0], e[3][1], e[3][2]]
			]
		}
	}
}

impl_op_ex!(+ |a: &Matrix4x3, b: &Matrix4x3| -> Matrix4x3 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Matrix4x3, b: &Matrix4x3| -> Matrix4x3 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(+= |a: &mut Matrix4x3, b: &Matrix4x3| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae += be;
		}
	}
});

impl_op_ex!(-= |a: &mut Matrix4x3, b: &Matrix4x3| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae -= be;
		}
	}
});

impl_op_ex!(* |a: &Matrix4x3, b: f32| -> Matrix4x3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Matrix4x3, b: f32| -> Matrix4x3 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Matrix4x3, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e *= b);
});

impl_op_ex!(/= |a: &mut Matrix4x3, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e /= b);
});

impl_op_ex!(* |a: &Matrix4x3, b: &Matrix3x3| -> Matrix4x3 {
	let ae = &a.elements;
	let be = &b.elements;
	let mut r = [[0.0; 3]; 4];

	for i in 0..4 {
		for j in 0..3 {
			r[i][j] = ae[i][0] * be[0][j] + ae[i][1] * be[1][j] + ae[i][2] * be[2][j];
		}
	}

	Matrix4x3::new(r)
});

impl_op_ex!(*= |a: &mut Matrix4x3, b: &Matrix3x3| {
	*a = *a * b;
});

impl_op_ex!(* |a: &Matrix4x3, b: &Matrix3x4| -> Matrix4x4 {
	let ae = &a.elements;
	let be = &b.elements;
	let mut r = [[0.0; 4]; 4];

	for i in 0..4 {
		for j in 0..4 {
			r[i][j] = ae[i][0] * be[0][j] + ae[i][1] * be[1][j] + ae[i][2] * be[2][j];
		}
	}

	Matrix4x4::new(r)
});

impl ApproxEq for Matrix4x3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		self.elements.iter().flatten()
			.zip(other.elements.iter().flatten())
			.all(|(a, b)| (a - b).abs() <= tol)
	}
}

impl Display for Matrix4x3 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.elements)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Matrix4x3 {
		Matrix4x3::new([
			[1.0, 2.0, 3.0],
			[4.0, 5.0, 6.0],
			[7.0, 8.0, 9.0],
			[10.0, 11.0, 12.0]])
	}

	#[test]
	fn from_rows() {
		let m = Matrix4x3::from_rows(
			&Vector3::new(1.0, 2.0, 3.0),
			&Vector3::new(4.0, 5.0, 6.0),
			&Vector3::new(7.0, 8.0, 9.0),
			&Vector3::new(10.0, 11.0, 12.0));

		assert_eq!(m, sample());
	}

	#[test]
	fn from_packs() {
		let m = Matrix4x3::from_packs(
			Vf32::pack(1.0, 2.0, 3.0, -1.0),
			Vf32::pack(4.0, 5.0, 6.0, -1.0),
			Vf32::pack(7.0, 8.0, 9.0, -1.0),
			Vf32::pack(10.0, 11.0, 12.0, -1.0));

		assert_eq!(m, sample());
	}

	#[test]
	fn from_matrix4x4() {
		let m = Matrix4x4::new([
			[1.0, 2.0, 3.0, 0.0],
			[4.0, 5.0, 6.0, 0.0],
			[7.0, 8.0, 9.0, 0.0],
			[10.0, 11.0, 12.0, 1.0]]);

		assert_eq!(Matrix4x3::from(m), sample());
	}

	#[test]
	fn transpose() {
		let expected = [
			[1.0, 4.0, 7.0, 10.0],
			[2.0, 5.0, 8.0, 11.0],
			[3.0, 6.0, 9.0, 12.0]];

		assert_eq!(sample().transpose().elements, expected);
	}

	#[test]
	fn is_zero() {
		assert!(ZERO.is_zero());
		assert!(!IDENTITY.is_zero());
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
		assert_eq!((a * 2.0) / 2.0, a);
		assert!((a - a).is_zero());
	}

	#[test]
	fn mul_matrix3x3() {
		let b = Matrix3x3::new([
			[0.0, 1.0, 0.0],
			[1.0, 0.0, 0.0],
			[0.0, 0.0, 2.0]]);

		let expected = Matrix4x3::new([
			[2.0, 1.0, 6.0],
			[5.0, 4.0, 12.0],
			[8.0, 7.0, 18.0],
			[11.0, 10.0, 24.0]]);

		assert_eq!(sample() * b, expected);

		let mut c = sample();
		c *= b;
		assert_eq!(c, expected);
	}

	#[test]
	fn mul_matrix3x4() {
		let r = IDENTITY * IDENTITY.transpose();

		let expected = Matrix4x4::new([
			[1.0, 0.0, 0.0, 0.0],
			[0.0, 1.0, 0.0, 0.0],
			[0.0, 0.0, 1.0, 0.0],
			[0.0, 0.0, 0.0, 0.0]]);

		assert_eq!(r, expected);

		// Entry (3, 3) is the squared length of the last row
		let r = sample() * sample().transpose();
		assert_eq!(r.elements[3][3], 365.0);
		assert_eq!(r.elements[0][3], 68.0);
	}
}
