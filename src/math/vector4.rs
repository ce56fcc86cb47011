use super::{Vector3, Matrix4x3, Matrix4x4, Vf32, ApproxEq};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const ZERO: Vector4 = Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
pub const ONE: Vector4 = Vector4 { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };

/// The origin as a point (`w = 1`)
pub const ZERO_POINT: Vector4 = Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32
}

impl Vector4 {
	pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
		Self { x, y, z, w }
	}

	pub fn from_scalar(scalar: f32) -> Self {
		Self { x: scalar, y: scalar, z: scalar, w: scalar }
	}

	pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
		self.x = x;
		self.y = y;
		self.z = z;
		self.w = w;
	}

	/// Drops `w`
	pub fn truncate(&self) -> Vector3 {
		Vector3::new(self.x, self.y, self.z)
	}

	pub fn length(&self) -> f32 {
		self.length_sq().sqrt()
	}

	pub fn length_sq(&self) -> f32 {
		self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
	}

	pub fn normalize(&mut self) {
		let length = self.length();

		if length != 0.0 {
			*self /= length;
		}
	}

	pub fn dot(&self, other: &Self) -> f32 {
		self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
	}
}

impl From<Vf32> for Vector4 {
	fn from(pack: Vf32) -> Self {
		let (x, y, z, w) = pack.unpack();
		Self { x, y, z, w }
	}
}

impl From<Vector4> for Vf32 {
	fn from(v: Vector4) -> Self {
		Vf32::pack(v.x, v.y, v.z, v.w)
	}
}

impl_op_ex!(+ |a: &Vector4, b: &Vector4| -> Vector4 {
	Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_op_ex!(- |a: &Vector4, b: &Vector4| -> Vector4 {
	Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_op_ex!(* |a: &Vector4, b: f32| -> Vector4 {
	Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_op_ex!(/ |a: &Vector4, b: f32| -> Vector4 {
	Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_op_ex!(*= |a: &mut Vector4, b: f32| {
	*a = *a * b;
});

impl_op_ex!(/= |a: &mut Vector4, b: f32| {
	*a = *a / b;
});

impl_op_ex!(- |a: &Vector4| -> Vector4 {
	Vector4::new(-a.x, -a.y, -a.z, -a.w)
});

impl_op_ex!(* |a: &Vector4, b: &Matrix4x4| -> Vector4 {
	let m = &b.elements;

	Vector4 {
		x: a.x * m[0][0] + a.y * m[1][0] + a.z * m[2][0] + a.w * m[3][0],
		y: a.x * m[0][1] + a.y * m[1][1] + a.z * m[2][1] + a.w * m[3][1],
		z: a.x * m[0][2] + a.y * m[1][2] + a.z * m[2][2] + a.w * m[3][2],
		w: a.x * m[0][3] + a.y * m[1][3] + a.z * m[2][3] + a.w * m[3][3]
	}
});

impl_op_ex!(* |a: &Vector4, b: &Matrix4x3| -> Vector3 {
	let m = &b.elements;

	Vector3 {
		x: a.x * m[0][0] + a.y * m[1][0] + a.z * m[2][0] + a.w * m[3][0],
		y: a.x * m[0][1] + a.y * m[1][1] + a.z * m[2][1] + a.w * m[3][1],
		z: a.x * m[0][2] + a.y * m[1][2] + a.z * m[2][2] + a.w * m[3][2]
	}
});

impl ApproxEq for Vector4 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self.x - other.x).abs() <= tol &&
		(self.y - other.y).abs() <= tol &&
		(self.z - other.z).abs() <= tol &&
		(self.w - other.w).abs() <= tol
	}
}

impl Display for Vector4 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({} {} {} {})", self.x, self.y, self.z, self.w)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::{matrix4x3, matrix4x4, assert_approx_eq};

	#[test]
	fn new() {
		assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0), Vector4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 });
	}

	#[test]
	fn truncate() {
		assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0).truncate(), Vector3::new(1.0, 2.0, 3.0));
	}

	#[test]
	fn length() {
		assert_eq!(Vector4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
	}

	#[test]
	fn normalize() {
		let mut v = Vector4::new(0.0, 3.0, 0.0, 4.0);
		v.normalize();
		assert_approx_eq(&v, &Vector4::new(0.0, 0.6, 0.0, 0.8), 1e-6);
	}

	#[test]
	fn dot() {
		assert_eq!(ONE.dot(&Vector4::new(1.0, -2.0, 3.0, -4.0)), -2.0);
	}

	#[test]
	fn ops() {
		let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
		assert_eq!(a + ONE, Vector4::new(2.0, 3.0, 4.0, 5.0));
		assert_eq!(a - ONE, Vector4::new(0.0, 1.0, 2.0, 3.0));
		assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
		assert_eq!(a / 2.0, Vector4::new(0.5, 1.0, 1.5, 2.0));
		assert_eq!(-a, Vector4::new(-1.0, -2.0, -3.0, -4.0));
	}

	#[test]
	fn mul_matrix4x4() {
		let mut m = matrix4x4::IDENTITY;
		m.elements[3] = [5.0, 6.0, 7.0, 1.0];

		assert_eq!(ZERO_POINT * m, Vector4::new(5.0, 6.0, 7.0, 1.0));
		assert_eq!(Vector4::new(1.0, 0.0, 0.0, 0.0) * m, Vector4::new(1.0, 0.0, 0.0, 0.0));
	}

	#[test]
	fn mul_matrix4x3() {
		let mut m = matrix4x3::IDENTITY;
		m.elements[3] = [5.0, 6.0, 7.0];

		assert_eq!(Vector4::new(1.0, 1.0, 1.0, 1.0) * m, Vector3::new(6.0, 7.0, 8.0));
	}

	#[test]
	fn pack() {
		let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
		assert_eq!(Vector4::from(Vf32::from(v)), v);
	}
}
