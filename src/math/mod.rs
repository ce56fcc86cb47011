pub mod float;

pub mod simd;
pub use simd::Vf32;

pub mod vector3;
pub use vector3::Vector3;

pub mod vector4;
pub use vector4::Vector4;

pub mod quaternion;
pub use quaternion::Quaternion;

pub mod euler;
pub use euler::Order;
pub use euler::Euler;

pub mod matrix3x3;
pub use matrix3x3::Matrix3x3;

pub mod matrix3x4;
pub use matrix3x4::Matrix3x4;

pub mod matrix4x3;
pub use matrix4x3::Matrix4x3;

pub mod matrix4x4;
pub use matrix4x4::Matrix4x4;

pub mod rotation_matrix3x3;
pub use rotation_matrix3x3::RotationMatrix3x3;

pub mod scale_matrix3x3;
pub use scale_matrix3x3::ScaleMatrix3x3;

pub mod affine;
pub use affine::AffineMatrix;

pub mod translation_matrix;
pub use translation_matrix::TranslationMatrix;
pub use translation_matrix::TranslationMatrix4x3;
pub use translation_matrix::TranslationMatrix4x4;

pub mod transformation_matrix;
pub use transformation_matrix::TransformationMatrix;
pub use transformation_matrix::TransformationMatrix4x3;
pub use transformation_matrix::TransformationMatrix4x4;

use std::fmt::Debug;

pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool;
}

pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f32) {
	if !left.approx_eq(right, tol) {
		panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`", left, right, tol);
	}
}

impl ApproxEq for f32 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self - other).abs() <= tol
	}
}
