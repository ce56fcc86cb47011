use super::{Vector4, Quaternion, Matrix3x3, Vf32, ApproxEq, float};
use crate::{MathError, Result};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
pub const ONE: Vector3 = Vector3 { x: 1.0, y: 1.0, z: 1.0 };
pub const UNIT_X: Vector3 = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
pub const UNIT_Y: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
pub const UNIT_Z: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 1.0 };
pub const UNIT_INV_X: Vector3 = Vector3 { x: -1.0, y: 0.0, z: 0.0 };
pub const UNIT_INV_Y: Vector3 = Vector3 { x: 0.0, y: -1.0, z: 0.0 };
pub const UNIT_INV_Z: Vector3 = Vector3 { x: 0.0, y: 0.0, z: -1.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
	pub x: f32,
	pub y: f32,
	pub z: f32
}

impl Vector3 {
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}

	pub fn from_scalar(scalar: f32) -> Self {
		Self { x: scalar, y: scalar, z: scalar }
	}

	pub fn set(&mut self, x: f32, y: f32, z: f32) {
		self.x = x;
		self.y = y;
		self.z = z;
	}

	pub fn component(&self, index: usize) -> Result<f32> {
		match index {
			0 => Ok(self.x),
			1 => Ok(self.y),
			2 => Ok(self.z),
			_ => Err(MathError::IndexOutOfRange { index, len: 3 })
		}
	}

	pub fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
		match index {
			0 => self.x = value,
			1 => self.y = value,
			2 => self.z = value,
			_ => return Err(MathError::IndexOutOfRange { index, len: 3 })
		}

		Ok(())
	}

	pub fn expand(&self, w: f32) -> Vector4 {
		Vector4::new(self.x, self.y, self.z, w)
	}

	pub fn length(&self) -> f32 {
		self.length_sq().sqrt()
	}

	pub fn length_sq(&self) -> f32 {
		self.x * self.x + self.y * self.y + self.z * self.z
	}

	pub fn normalize(&mut self) {
		let length = self.length();

		if length != 0.0 {
			*self /= length;
		}
	}

	pub fn is_zero(&self) -> bool {
		float::is_zero(self.x) && float::is_zero(self.y) && float::is_zero(self.z)
	}

	pub fn dot(&self, other: &Self) -> f32 {
		self.x * other.x + self.y * other.y + self.z * other.z
	}

	pub fn cross(&mut self, other: &Self) {
		let (x, y, z) = (self.x, self.y, self.z);

		self.x = y * other.z - z * other.y;
		self.y = z * other.x - x * other.z;
		self.z = x * other.y - y * other.x;
	}

	/// Moves `self` toward `other` by `factor` (0 keeps `self`, 1 reaches `other`)
	pub fn lerp(&mut self, other: &Self, factor: f32) {
		*self += (other - *self) * factor;
	}

	pub fn distance(&self, other: &Self) -> f32 {
		(other - self).length()
	}

	/// Rotates the vector by `q` in the column vector sense, `v' = q v q*`
	pub fn apply_quaternion(&mut self, q: &Quaternion) {
		let ix = q.w * self.x + q.y * self.z - q.z * self.y;
		let iy = q.w * self.y + q.z * self.x - q.x * self.z;
		let iz = q.w * self.z + q.x * self.y - q.y * self.x;
		let iw = -q.x * self.x - q.y * self.y - q.z * self.z;

		self.x = ix * q.w - iw * q.x - iy * q.z + iz * q.y;
		self.y = iy * q.w - iw * q.y - iz * q.x + ix * q.z;
		self.z = iz * q.w - iw * q.z - ix * q.y + iy * q.x;
	}

	pub fn min(&mut self, other: &Self) {
		self.x = self.x.min(other.x);
		self.y = self.y.min(other.y);
		self.z = self.z.min(other.z);
	}

	pub fn max(&mut self, other: &Self) {
		self.x = self.x.max(other.x);
		self.y = self.y.max(other.y);
		self.z = self.z.max(other.z);
	}
}

impl From<Vf32> for Vector3 {
	fn from(pack: Vf32) -> Self {
		let (x, y, z, _) = pack.unpack();
		Self { x, y, z }
	}
}

impl From<Vector3> for Vf32 {
	fn from(v: Vector3) -> Self {
		Vf32::pack(v.x, v.y, v.z, 0.0)
	}
}

impl_op_ex!(+ |a: &Vector3, b: &Vector3| -> Vector3 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Vector3, b: &Vector3| -> Vector3 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(* |a: &Vector3, b: &Vector3| -> Vector3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Vector3, b: &Vector3| -> Vector3 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(+= |a: &mut Vector3, b: &Vector3| {
	a.x += b.x;
	a.y += b.y;
	a.z += b.z;
});

impl_op_ex!(-= |a: &mut Vector3, b: &Vector3| {
	a.x -= b.x;
	a.y -= b.y;
	a.z -= b.z;
});

impl_op_ex!(*= |a: &mut Vector3, b: &Vector3| {
	a.x *= b.x;
	a.y *= b.y;
	a.z *= b.z;
});

impl_op_ex!(/= |a: &mut Vector3, b: &Vector3| {
	a.x /= b.x;
	a.y /= b.y;
	a.z /= b.z;
});

impl_op_ex!(* |a: &Vector3, b: f32| -> Vector3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Vector3, b: f32| -> Vector3 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Vector3, b: f32| {
	a.x *= b;
	a.y *= b;
	a.z *= b;
});

impl_op_ex!(/= |a: &mut Vector3, b: f32| {
	a.x /= b;
	a.y /= b;
	a.z /= b;
});

// Row vector times matrix
impl_op_ex!(* |a: &Vector3, b: &Matrix3x3| -> Vector3 {
	let m = &b.elements;

	Vector3 {
		x: a.x * m[0][0] + a.y * m[1][0] + a.z * m[2][0],
		y: a.x * m[0][1] + a.y * m[1][1] + a.z * m[2][1],
		z: a.x * m[0][2] + a.y * m[1][2] + a.z * m[2][2]
	}
});

impl_op_ex!(*= |a: &mut Vector3, b: &Matrix3x3| {
	*a = *a * b;
});

impl_op_ex!(- |a: &Vector3| -> Vector3 {
	Vector3 {
		x: -a.x,
		y: -a.y,
		z: -a.z
	}
});

impl ApproxEq for Vector3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();
		let z_diff = (self.z - other.z).abs();

		x_diff <= tol && y_diff <= tol && z_diff <= tol
	}
}

impl Display for Vector3 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({} {} {})", self.x, self.y, self.z)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;
	use std::f32::consts::FRAC_PI_2;

	#[test]
	fn new() {
		assert_eq!(Vector3::new(4.0, -1.0, 0.5), Vector3 { x: 4.0, y: -1.0, z: 0.5 });
	}

	#[test]
	fn from_scalar() {
		assert_eq!(Vector3::from_scalar(-2.0), Vector3 { x: -2.0, y: -2.0, z: -2.0 });
	}

	#[test]
	fn component() {
		let v = Vector3::new(7.0, 8.0, 9.0);
		assert_eq!(v.component(0), Ok(7.0));
		assert_eq!(v.component(2), Ok(9.0));
		assert_eq!(v.component(3), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
	}

	#[test]
	fn set_component() {
		let mut v = ZERO;
		v.set_component(1, 5.0).unwrap();
		assert_eq!(v, Vector3 { x: 0.0, y: 5.0, z: 0.0 });
		assert!(v.set_component(4, 1.0).is_err());
	}

	#[test]
	fn expand() {
		assert_eq!(UNIT_Y.expand(1.0), Vector4::new(0.0, 1.0, 0.0, 1.0));
	}

	#[test]
	fn length() {
		assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
		assert_eq!(Vector3::new(2.0, 3.0, 6.0).length_sq(), 49.0);
	}

	#[test]
	fn normalize() {
		let mut v = Vector3::new(0.0, -4.0, 3.0);
		v.normalize();
		assert_approx_eq(&v, &Vector3::new(0.0, -0.8, 0.6), 1e-6);

		let mut z = ZERO;
		z.normalize();
		assert_eq!(z, ZERO);
	}

	#[test]
	fn is_zero() {
		assert!(Vector3::new(1e-7, -1e-7, 0.0).is_zero());
		assert!(!UNIT_Z.is_zero());
	}

	#[test]
	fn dot() {
		assert_eq!(Vector3::new(2.0, -1.0, 4.0).dot(&Vector3::new(1.0, 5.0, -2.0)), -11.0);
	}

	#[test]
	fn cross() {
		let mut v = UNIT_X;
		v.cross(&UNIT_Y);
		assert_eq!(v, UNIT_Z);

		let mut v = Vector3::new(2.0, 0.0, -1.0);
		v.cross(&Vector3::new(1.0, 3.0, 2.0));
		assert_eq!(v, Vector3::new(3.0, -5.0, 6.0));
	}

	#[test]
	fn lerp() {
		let mut v = Vector3::new(0.0, 10.0, -4.0);
		v.lerp(&Vector3::new(4.0, 20.0, 4.0), 0.25);
		assert_approx_eq(&v, &Vector3::new(1.0, 12.5, -2.0), 1e-6);
	}

	#[test]
	fn distance() {
		assert_eq!(Vector3::new(1.0, 1.0, 1.0).distance(&Vector3::new(3.0, 4.0, 7.0)), 7.0);
	}

	#[test]
	fn apply_quaternion() {
		let mut v = UNIT_X;
		v.apply_quaternion(&Quaternion::from_axis_angle(&UNIT_Z, FRAC_PI_2));
		assert_approx_eq(&v, &UNIT_Y, 1e-6);
	}

	#[test]
	fn min_max() {
		let mut a = Vector3::new(3.0, -1.0, 2.0);
		a.min(&Vector3::new(1.0, 0.0, 2.5));
		assert_eq!(a, Vector3::new(1.0, -1.0, 2.0));

		let mut b = Vector3::new(3.0, -1.0, 2.0);
		b.max(&Vector3::new(1.0, 0.0, 2.5));
		assert_eq!(b, Vector3::new(3.0, 0.0, 2.5));
	}

	#[test]
	fn pack() {
		let p: Vf32 = Vector3::new(1.0, 2.0, 3.0).into();
		assert_eq!(p.to_array(), [1.0, 2.0, 3.0, 0.0]);
		assert_eq!(Vector3::from(Vf32::pack(4.0, 5.0, 6.0, 7.0)), Vector3::new(4.0, 5.0, 6.0));
	}

	#[test]
	fn vector_ops() {
		let a = Vector3::new(6.0, -2.0, 3.0);
		let b = Vector3::new(2.0, 4.0, -3.0);
		assert_eq!(a + b, Vector3::new(8.0, 2.0, 0.0));
		assert_eq!(a - b, Vector3::new(4.0, -6.0, 6.0));
		assert_eq!(a * b, Vector3::new(12.0, -8.0, -9.0));
		assert_eq!(a / b, Vector3::new(3.0, -0.5, -1.0));
		assert_eq!(-a, Vector3::new(-6.0, 2.0, -3.0));

		let mut c = a;
		c += b;
		c -= Vector3::new(1.0, 1.0, 1.0);
		c *= Vector3::new(2.0, 2.0, 2.0);
		c /= Vector3::new(1.0, 2.0, 1.0);
		assert_eq!(c, Vector3::new(14.0, 1.0, -2.0));
	}

	#[test]
	fn scalar_ops() {
		let a = Vector3::new(6.0, -2.0, 3.0);
		assert_eq!(a * 2.0, Vector3::new(12.0, -4.0, 6.0));
		assert_eq!(a / 2.0, Vector3::new(3.0, -1.0, 1.5));

		let mut b = a;
		b *= 0.5;
		b /= 0.5;
		assert_eq!(b, a);
	}

	#[test]
	fn mul_matrix() {
		let m = Matrix3x3::new([
			[1.0, 2.0, 3.0],
			[4.0, 5.0, 6.0],
			[7.0, 8.0, 9.0]]);

		let v = Vector3::new(1.0, 0.0, -1.0);
		assert_eq!(v * m, Vector3::new(-6.0, -6.0, -6.0));

		let mut w = UNIT_Y;
		w *= m;
		assert_eq!(w, Vector3::new(4.0, 5.0, 6.0));
	}

	#[test]
	fn approx_eq() {
		let a = Vector3::new(1.0, 2.0, 3.0);
		assert_approx_eq(&a, &Vector3::new(1.05, 1.95, 3.0), 0.1);
		assert!(!a.approx_eq(&Vector3::new(1.2, 2.0, 3.0), 0.1));
	}
}
