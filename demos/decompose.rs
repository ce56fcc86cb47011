//! Builds a transform from scale, rotation and translation, takes it apart
//! again and shows what is lost when the scale is negative.
//!
//! Run with `RUST_LOG=debug cargo run --example decompose` to also see the
//! gimbal lock message.

use spatial_math::math::{
	Vector3, Quaternion, Euler, Order, TransformationMatrix4x3, TransformationMatrix4x4, RotationMatrix3x3
};
use std::f32::consts::FRAC_PI_2;

fn main() -> spatial_math::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let rotation = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), 0.8);
	let t = TransformationMatrix4x4::new(&Vector3::new(1.0, 2.0, 3.0), &rotation, &Vector3::new(2.0, 0.5, 1.5));
	log::info!("composed:\n{}", t);

	let (translation, q, scale) = t.decompose()?;
	log::info!("translation {} rotation {} scale {}", translation, q, scale);

	let (axis, angle) = t.rotation_axis_angle()?;
	log::info!("axis {} angle {}", axis, angle);

	let inv = t.invert()?;
	log::info!("round trip of (4, 5, 6): {}", inv.transform_point(&t.transform_point(&Vector3::new(4.0, 5.0, 6.0))));

	// Negative scale comes back positive with a reflected basis
	let mirrored = TransformationMatrix4x3::new(&Vector3::default(), &rotation, &Vector3::new(-1.0, 1.0, 1.0));
	let (_, _, scale) = mirrored.decompose()?;
	log::info!("mirrored scale {} determinant {}", scale, mirrored.determinant());

	let locked = RotationMatrix3x3::from_euler(&Euler::new(0.3, FRAC_PI_2, 0.2, Order::Xyz));
	let e = locked.to_euler(Order::Xyz);
	log::info!("gimbal locked euler ({}, {}, {})", e.x, e.y, e.z);

	Ok(())
}
