use super::{Vector3, Euler, Order, RotationMatrix3x3, AffineMatrix, TransformationMatrix, Vf32, ApproxEq, float};
use crate::{MathError, Result};
use std::fmt::Display;
use auto_ops::impl_op_ex;
use bytemuck::{Pod, Zeroable};

pub const IDENTITY: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32
}

impl Quaternion {
	pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
		Self { x, y, z, w }
	}

	pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
		self.x = x;
		self.y = y;
		self.z = z;
		self.w = w;
	}

	/// The axis is normalized before use
	pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
		let mut axis = *axis;
		axis.normalize();

		let half_angle = angle / 2.0;
		let s = half_angle.sin();

		Self {
			x: axis.x * s,
			y: axis.y * s,
			z: axis.z * s,
			w: half_angle.cos()
		}
	}

	pub fn from_euler(e: &Euler) -> Self {
		let (cx, cy, cz) = ((e.x / 2.0).cos(), (e.y / 2.0).cos(), (e.z / 2.0).cos());
		let (sx, sy, sz) = ((e.x / 2.0).sin(), (e.y / 2.0).sin(), (e.z / 2.0).sin());

		let (x, y, z, w) = match e.order {
			Order::Xyz => (
				sx * cy * cz + cx * sy * sz,
				cx * sy * cz - sx * cy * sz,
				cx * cy * sz + sx * sy * cz,
				cx * cy * cz - sx * sy * sz
			),
			Order::Xzy => (
				sx * cy * cz - cx * sy * sz,
				cx * sy * cz - sx * cy * sz,
				cx * cy * sz + sx * sy * cz,
				cx * cy * cz + sx * sy * sz
			),
			Order::Yxz => (
				sx * cy * cz + cx * sy * sz,
				cx * sy * cz - sx * cy * sz,
				cx * cy * sz - sx * sy * cz,
				cx * cy * cz + sx * sy * sz
			),
			Order::Yzx => (
				sx * cy * cz + cx * sy * sz,
				cx * sy * cz + sx * cy * sz,
				cx * cy * sz - sx * sy * cz,
				cx * cy * cz - sx * sy * sz
			),
			Order::Zxy => (
				sx * cy * cz - cx * sy * sz,
				cx * sy * cz + sx * cy * sz,
				cx * cy * sz + sx * sy * cz,
				cx * cy * cz - sx * sy * sz
			),
			Order::Zyx => (
				sx * cy * cz - cx * sy * sz,
				cx * sy * cz + sx * cy * sz,
				cx * cy * sz - sx * sy * cz,
				cx * cy * cz + sx * sy * sz
			)
		};

		Self { x, y, z, w }
	}

	pub fn from_rotation_matrix(m: &RotationMatrix3x3) -> Self {
		m.to_quaternion()
	}

	/// Rotation held by a transformation, with its scale divided out
	pub fn from_transformation<M: AffineMatrix>(m: &TransformationMatrix<M>) -> Result<Self> {
		m.rotation()
	}

	pub fn conjugate(&mut self) {
		self.x = -self.x;
		self.y = -self.y;
		self.z = -self.z;
	}

	pub fn dot(&self, other: &Self) -> f32 {
		self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
	}

	pub fn length(&self) -> f32 {
		self.length_sq().sqrt()
	}

	pub fn length_sq(&self) -> f32 {
		self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
	}

	/// A zero quaternion becomes the identity
	pub fn normalize(&mut self) {
		let l = self.length();

		if l == 0.0 {
			self.w = 1.0;
		}
		else {
			self.x /= l;
			self.y /= l;
			self.z /= l;
			self.w /= l;
		}
	}

	pub fn invert(&self) -> Result<Self> {
		let length_sq = self.length_sq();

		if float::is_zero(length_sq) {
			return Err(MathError::Singular);
		}

		let neg_inv = -1.0 / length_sq;

		Ok(Self {
			x: self.x * neg_inv,
			y: self.y * neg_inv,
			z: self.z * neg_inv,
			w: -self.w * neg_inv
		})
	}

	/// Inverse of a unit quaternion, which is its conjugate
	pub fn unit_invert(&self) -> Self {
		Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
	}

	/// Normalized linear blend, `factor` 0 gives `self` and 1 gives `other`
	pub fn lerp(&self, other: &Self, factor: f32) -> Self {
		let mut q = self * (1.0 - factor) + other * factor;
		q.normalize();
		q
	}

	/// Spherical blend along the shorter arc
	pub fn slerp(&self, other: &Self, factor: f32) -> Self {
		let mut cos = self.dot(other);
		let mut end = *other;

		if cos < 0.0 {
			cos = -cos;
			end = -end;
		}

		// Nearly parallel, the sine below would vanish
		if cos > 1.0 - float::EPSILON {
			return self.lerp(&end, factor);
		}

		let angle = cos.acos();
		let inv_sin = 1.0 / angle.sin();
		let a = ((1.0 - factor) * angle).sin() * inv_sin;
		let b = (factor * angle).sin() * inv_sin;

		self * a + end * b
	}

	/// Returns `(axis, angle)`. A null rotation reports the X axis.
	pub fn to_axis_angle(&self) -> (Vector3, f32) {
		let w = float::clamp(self.w, -1.0, 1.0);
		let angle = 2.0 * w.acos();
		let s = (1.0 - w * w).sqrt();

		if float::is_zero(s) {
			return (Vector3::new(1.0, 0.0, 0.0), angle);
		}

		(Vector3::new(self.x / s, self.y / s, self.z / s), angle)
	}
}

impl Default for Quaternion {
	fn default() -> Self {
		IDENTITY
	}
}

impl From<Vf32> for Quaternion {
	fn from(pack: Vf32) -> Self {
		let (x, y, z, w) = pack.unpack();
		Self { x, y, z, w }
	}
}

impl From<Quaternion> for Vf32 {
	fn from(q: Quaternion) -> Self {
		Vf32::pack(q.x, q.y, q.z, q.w)
	}
}

impl_op_ex!(* |a: &Quaternion, b: &Quaternion| -> Quaternion {
	Quaternion {
		x:  a.x * b.w + a.y * b.z - a.z * b.y + a.w * b.x,
		y: -a.x * b.z + a.y * b.w + a.z * b.x + a.w * b.y,
		z:  a.x * b.y - a.y * b.x + a.z * b.w + a.w * b.z,
		w: -a.x * b.x - a.y * b.y - a.z * b.z + a.w * b.w
	}
});

impl_op_ex!(*= |a: &mut Quaternion, b: &Quaternion| {
	*a = *a * b;
});

impl_op_ex!(+ |a: &Quaternion, b: &Quaternion| -> Quaternion {
	Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_op_ex!(- |a: &Quaternion, b: &Quaternion| -> Quaternion {
	Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_op_ex!(* |a: &Quaternion, b: f32| -> Quaternion {
	Quaternion::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_op_ex!(/ |a: &Quaternion, b: f32| -> Quaternion {
	Quaternion::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_op_ex!(- |a: &Quaternion| -> Quaternion {
	Quaternion::new(-a.x, -a.y, -a.z, -a.w)
});

impl ApproxEq for Quaternion {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();
		let z_diff = (self.z - other.z).abs();
		let w_diff = (self.w - other.w).abs();

		x_diff <= tol && y_diff <= tol && z_diff <= tol && w_diff <= tol
	}
}

impl Display for Quaternion {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({} {} {} {})", self.x, self.y, self.z, self.w)
	}
}
