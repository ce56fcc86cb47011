//! Four packed 32-bit floats, laid out like a 128-bit SIMD register.
//!
//! Vectors, quaternions and matrix rows load from and store to [`Vf32`] so
//! callers holding register-shaped data can move it in one piece.

use bytemuck::{Pod, Zeroable};

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64 as x86;

#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vf32 {
	pub lanes: [f32; 4]
}

// SAFETY: four f32 lanes fill the 16 byte alignment exactly, so there is no padding
unsafe impl Zeroable for Vf32 {}
unsafe impl Pod for Vf32 {}

impl Vf32 {
	pub fn pack(a: f32, b: f32, c: f32, d: f32) -> Self {
		Self { lanes: [a, b, c, d] }
	}

	pub fn splat(value: f32) -> Self {
		Self { lanes: [value; 4] }
	}

	pub fn from_array(lanes: [f32; 4]) -> Self {
		Self { lanes }
	}

	pub fn unpack(&self) -> (f32, f32, f32, f32) {
		let l = &self.lanes;
		(l[0], l[1], l[2], l[3])
	}

	pub fn to_array(&self) -> [f32; 4] {
		self.lanes
	}

	/// First three lanes, used by 3-wide rows
	pub fn xyz(&self) -> [f32; 3] {
		let l = &self.lanes;
		[l[0], l[1], l[2]]
	}
}

#[cfg(target_arch = "x86_64")]
impl From<Vf32> for x86::__m128 {
	fn from(pack: Vf32) -> Self {
		// SAFETY: SSE is part of the x86_64 baseline and Vf32 is 16 byte aligned
		unsafe { x86::_mm_load_ps(pack.lanes.as_ptr()) }
	}
}

#[cfg(target_arch = "x86_64")]
impl From<x86::__m128> for Vf32 {
	fn from(register: x86::__m128) -> Self {
		let mut pack = Vf32::default();
		// SAFETY: SSE is part of the x86_64 baseline and Vf32 is 16 byte aligned
		unsafe { x86::_mm_store_ps(pack.lanes.as_mut_ptr(), register) };
		pack
	}
}
