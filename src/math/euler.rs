use super::{Quaternion, RotationMatrix3x3, ApproxEq, float};
use std::fmt::Display;

const SINGULARITY_THRESHOLD: f32 = 0.999999;

/// Sequence in which the three axis rotations are applied
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
	Xyz,
	Xzy,
	Yxz,
	Yzx,
	Zxy,
	Zyx
}

impl Default for Order {
	fn default() -> Self {
		Order::Xyz
	}
}

impl Display for Order {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

/// Angles in radians
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub order: Order
}

impl Euler {
	pub fn new(x: f32, y: f32, z: f32, order: Order) -> Self {
		Self { x, y, z, order }
	}

	pub fn set(&mut self, x: f32, y: f32, z: f32, order: Order) {
		self.x = x;
		self.y = y;
		self.z = z;
		self.order = order;
	}

	/// Extracts the angles of a pure rotation. At gimbal lock the third angle is
	/// pinned to zero and the remaining freedom goes to the first.
	pub fn from_rotation_matrix(m: &RotationMatrix3x3, order: Order) -> Self {
		let e = &m.matrix.elements;
		let asin = |v: f32| float::clamp(v, -1.0, 1.0).asin();
		let mut r = Self { x: 0.0, y: 0.0, z: 0.0, order };

		match order {
			Order::Xyz => {
				r.y = asin(e[0][2]);

				if e[0][2] > SINGULARITY_THRESHOLD {
					r.x = e[1][0].atan2(e[1][1]);
				}
				else if e[0][2] < -SINGULARITY_THRESHOLD {
					r.x = -e[1][0].atan2(e[1][1]);
				}
				else {
					r.x = (-e[1][2]).atan2(e[2][2]);
					r.z = (-e[0][1]).atan2(e[0][0]);
				}
			},
			Order::Xzy => {
				r.z = asin(-e[0][1]);

				if e[0][1] > SINGULARITY_THRESHOLD {
					r.x = (-e[2][0]).atan2(e[2][2]);
				}
				else if e[0][1] < -SINGULARITY_THRESHOLD {
					r.x = -(-e[2][0]).atan2(e[2][2]);
				}
				else {
					r.x = e[2][1].atan2(e[1][1]);
					r.y = e[0][2].atan2(e[0][0]);
				}
			},
			Order::Yxz => {
				r.x = asin(-e[1][2]);

				if e[1][2] > SINGULARITY_THRESHOLD {
					r.y = (-e[0][1]).atan2(e[0][0]);
				}
				else if e[1][2] < -SINGULARITY_THRESHOLD {
					r.y = -(-e[0][1]).atan2(e[0][0]);
				}
				else {
					r.y = e[0][2].atan2(e[2][2]);
					r.z = e[1][0].atan2(e[1][1]);
				}
			},
			Order::Yzx => {
				r.z = asin(e[1][0]);

				if e[1][0] > SINGULARITY_THRESHOLD {
					r.y = e[2][1].atan2(e[2][2]);
				}
				else if e[1][0] < -SINGULARITY_THRESHOLD {
					r.y = -e[2][1].atan2(e[2][2]);
				}
				else {
					r.x = (-e[1][2]).atan2(e[1][1]);
					r.y = (-e[2][0]).atan2(e[0][0]);
				}
			},
			Order::Zxy => {
				r.x = asin(e[2][1]);

				if e[2][1] > SINGULARITY_THRESHOLD {
					r.z = e[0][2].atan2(e[0][0]);
				}
				else if e[2][1] < -SINGULARITY_THRESHOLD {
					r.z = -e[0][2].atan2(e[0][0]);
				}
				else {
					r.y = (-e[2][0]).atan2(e[2][2]);
					r.z = (-e[0][1]).atan2(e[1][1]);
				}
			},
			Order::Zyx => {
				r.y = asin(-e[2][0]);

				if e[2][0] > SINGULARITY_THRESHOLD {
					r.z = (-e[1][2]).atan2(e[1][1]);
				}
				else if e[2][0] < -SINGULARITY_THRESHOLD {
					r.z = -(-e[1][2]).atan2(e[1][1]);
				}
				else {
					r.x = e[2][1].atan2(e[2][2]);
					r.z = e[1][0].atan2(e[0][0]);
				}
			}
		}

		if r.is_gimbal_locked() {
			log::debug!("gimbal lock extracting {} angles, pinning the last rotation to zero", order);
		}

		r
	}

	pub fn from_quaternion(q: &Quaternion, order: Order) -> Self {
		Self::from_rotation_matrix(&RotationMatrix3x3::from_quaternion(q), order)
	}

	/// The middle angle sits at plus or minus a quarter turn
	pub fn is_gimbal_locked(&self) -> bool {
		let middle = match self.order {
			Order::Xyz | Order::Zyx => self.y,
			Order::Xzy | Order::Yzx => self.z,
			Order::Yxz | Order::Zxy => self.x
		};

		middle.abs() > SINGULARITY_THRESHOLD.asin()
	}
}

impl ApproxEq for Euler {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();
		let z_diff = (self.z - other.z).abs();

		x_diff <= tol && y_diff <= tol && z_diff <= tol && self.order == other.order
	}
}

impl Display for Euler {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({} {} {} {})", self.x, self.y, self.z, self.order)
	}
}
