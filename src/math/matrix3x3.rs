use super::{Vector3, Vf32, Matrix3x4, ApproxEq, float};
use crate::{MathError, Result};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: Matrix3x3 = Matrix3x3 {
	elements: [
		[1.0, 0.0, 0.0],
		[0.0, 1.0, 0.0],
		[0.0, 0.0, 1.0]
	]
};

pub const ZERO: Matrix3x3 = Matrix3x3 { elements: [[0.0; 3]; 3] };

#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x3 {
	pub elements: [[f32; 3]; 3]
}

impl Matrix3x3 {
	pub fn new(elements: [[f32; 3]; 3]) -> Self {
		Self { elements }
	}

	pub fn from_rows(r0: &Vector3, r1: &Vector3, r2: &Vector3) -> Self {
		Self {
			elements: [
				[r0.x, r0.y, r0.z],
				[r1.x, r1.y, r1.z],
				[r2.x, r2.y, r2.z]
			]
		}
	}

	/// The fourth lane of every pack is ignored
	pub fn from_packs(r0: Vf32, r1: Vf32, r2: Vf32) -> Self {
		Self { elements: [r0.xyz(), r1.xyz(), r2.xyz()] }
	}

	pub fn set(&mut self, elements: [[f32; 3]; 3]) {
		self.elements = elements;
	}

	pub fn row(&self, index: usize) -> Result<Vector3> {
		let r = self.elements.get(index).ok_or(MathError::IndexOutOfRange { index, len: 3 })?;
		Ok(Vector3::new(r[0], r[1], r[2]))
	}

	pub fn transpose(&mut self) {
		let e = &mut self.elements;

		let temp = e[1][0]; e[1][0] = e[0][1]; e[0][1] = temp;
		let temp = e[2][0]; e[2][0] = e[0][2]; e[0][2] = temp;
		let temp = e[2][1]; e[2][1] = e[1][2]; e[1][2] = temp;
	}

	pub fn is_zero(&self) -> bool {
		self.elements.iter().flatten().all(|e| float::is_zero(*e))
	}

	pub fn is_identity(&self) -> bool {
		self.approx_eq(&IDENTITY, float::EPSILON)
	}

	pub fn determinant(&self) -> f32 {
		let e = &self.elements;

		e[0][0] * (e[1][1] * e[2][2] - e[1][2] * e[2][1]) -
		e[0][1] * (e[1][0] * e[2][2] - e[1][2] * e[2][0]) +
		e[0][2] * (e[1][0] * e[2][1] - e[1][1] * e[2][0])
	}

	pub fn invert(&self) -> Result<Self> {
		let det = self.determinant();

		if float::is_zero(det) {
			log::debug!("cannot invert 3x3 matrix with determinant {}", det);
			return Err(MathError::Singular);
		}

		let e = &self.elements;
		let det_rec = 1.0 / det;

		Ok(Self {
			elements: [
				[
					(e[1][1] * e[2][2] - e[1][2] * e[2][1]) * det_rec,
					(e[0][2] * e[2][1] - e[0][1] * e[2][2]) * det_rec,
					(e[0][1] * e[1][2] - e[0][2] * e[1][1]) * det_rec
				],
				[
					(e[1][2] * e[2][0] - e[1][0] * e[2][2]) * det_rec,
					(e[0][0] * e[2][2] - e[0][2] * e[2][0]) * det_rec,
					(e[0][2] * e[1][0] - e[0][0] * e[1][2]) * det_rec
				],
				[
					(e[1][0] * e[2][1] - e[1][1] * e[2][0]) * det_rec,
					(e[0][1] * e[2][0] - e[0][0] * e[2][1]) * det_rec,
					(e[0][0] * e[1][1] - e[0][1] * e[1][0]) * det_rec
				]
			]
		})
	}
}

impl_op_ex!(+ |a: &Matrix3x3, b: &Matrix3x3| -> Matrix3x3 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Matrix3x3, b: &Matrix3x3| -> Matrix3x3 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(* |a: &Matrix3x3, b: &Matrix3x3| -> Matrix3x3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(+= |a: &mut Matrix3x3, b: &Matrix3x3| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae += be;
		}
	}
});

impl_op_ex!(-= |a: &mut Matrix3x3, b: &Matrix3x3| {
	for (ar, br) in a.elements.iter_mut().zip(b.elements.iter()) {
		for (ae, be) in ar.iter_mut().zip(br.iter()) {
			*ae -= be;
		}
	}
});

impl_op_ex!(*= |a: &mut Matrix3x3, b: &Matrix3x3| {
	let ae = &mut a.elements;
	let be = &b.elements;

	let (a00, a01, a02) = (ae[0][0], ae[0][1], ae[0][2]);
	let (a10, a11, a12) = (ae[1][0], ae[1][1], ae[1][2]);
	let (a20, a21, a22) = (ae[2][0], ae[2][1], ae[2][2]);

	let (b00, b01, b02) = (be[0][0], be[0][1], be[0][2]);
	let (b10, b11, b12) = (be[1][0], be[1][1], be[1][2]);
	let (b20, b21, b22) = (be[2][0], be[2][1], be[2][2]);

	ae[0][0] = a00 * b00 + a01 * b10 + a02 * b20;
	ae[0][1] = a00 * b01 + a01 * b11 + a02 * b21;
	ae[0][2] = a00 * b02 + a01 * b12 + a02 * b22;

	ae[1][0] = a10 * b00 + a11 * b10 + a12 * b20;
	ae[1][1] = a10 * b01 + a11 * b11 + a12 * b21;
	ae[1][2] = a10 * b02 + a11 * b12 + a12 * b22;

	ae[2][0] = a20 * b00 + a21 * b10 + a22 * b20;
	ae[2][1] = a20 * b01 + a21 * b11 + a22 * b21;
	ae[2][2] = a20 * b02 + a21 * b12 + a22 * b22;
});

impl_op_ex!(* |a: &Matrix3x3, b: f32| -> Matrix3x3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Matrix3x3, b: f32| -> Matrix3x3 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Matrix3x3, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e *= b);
});

impl_op_ex!(/= |a: &mut Matrix3x3, b: f32| {
	a.elements.iter_mut().flatten().for_each(|e| *e /= b);
});

impl_op_ex!(* |a: &Matrix3x3, b: &Matrix3x4| -> Matrix3x4 {
	let ae = &a.elements;
	let be = &b.elements;
	let mut r = [[0.0; 4]; 3];

	for i in 0..3 {
		for j in 0..4 {
			r[i][j] = ae[i][0] * be[0][j] + ae[i][1] * be[1][j] + ae[i][2] * be[2][j];
		}
	}

	Matrix3x4::new(r)
});

impl ApproxEq for Matrix3x3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		for i in 0..3 {
			for j in 0..3 {
				if (self.elements[i][j] - other.elements[i][j]).abs() > tol {
					return false;
				}
			}
		}

		true
	}
}

impl Display for Matrix3x3 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.elements)
	}
}
