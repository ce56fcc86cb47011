//! Scalar comparisons that tolerate floating point error.
//!
//! Every comparison comes in two forms: one using [`EPSILON`] and one taking
//! an explicit tolerance.

pub const EPSILON: f32 = 1e-6;

pub fn are_equal(a: f32, b: f32) -> bool {
	are_equal_with_tolerance(a, b, EPSILON)
}

pub fn are_equal_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	(a - b).abs() <= tol
}

pub fn are_not_equal(a: f32, b: f32) -> bool {
	are_not_equal_with_tolerance(a, b, EPSILON)
}

pub fn are_not_equal_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	(a - b).abs() > tol
}

pub fn is_zero(value: f32) -> bool {
	are_equal(value, 0.0)
}

pub fn is_zero_with_tolerance(value: f32, tol: f32) -> bool {
	are_equal_with_tolerance(value, 0.0, tol)
}

pub fn is_not_zero(value: f32) -> bool {
	are_not_equal(value, 0.0)
}

pub fn is_not_zero_with_tolerance(value: f32, tol: f32) -> bool {
	are_not_equal_with_tolerance(value, 0.0, tol)
}

/// `a` exceeds `b` by more than the tolerance
pub fn is_greater_than(a: f32, b: f32) -> bool {
	is_greater_than_with_tolerance(a, b, EPSILON)
}

pub fn is_greater_than_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	a - b > tol
}

/// `a` is below `b` by more than the tolerance
pub fn is_less_than(a: f32, b: f32) -> bool {
	is_less_than_with_tolerance(a, b, EPSILON)
}

pub fn is_less_than_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	a - b < -tol
}

pub fn is_greater_or_equal(a: f32, b: f32) -> bool {
	is_greater_or_equal_with_tolerance(a, b, EPSILON)
}

pub fn is_greater_or_equal_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	a - b >= -tol
}

pub fn is_less_or_equal(a: f32, b: f32) -> bool {
	is_less_or_equal_with_tolerance(a, b, EPSILON)
}

pub fn is_less_or_equal_with_tolerance(a: f32, b: f32, tol: f32) -> bool {
	a - b <= tol
}

pub fn is_negative(value: f32) -> bool {
	is_less_than(value, 0.0)
}

pub fn is_positive(value: f32) -> bool {
	is_greater_than(value, 0.0)
}

/// Returns `value` carrying the sign of `signed`. A `signed` within [`EPSILON`]
/// of zero counts as positive.
pub fn copy_sign(signed: f32, value: f32) -> f32 {
	let magnitude = value.abs();

	if is_negative(signed) {
		-magnitude
	}
	else {
		magnitude
	}
}

pub fn is_nan(value: f32) -> bool {
	value.is_nan()
}

pub fn is_infinite(value: f32) -> bool {
	value.is_infinite()
}

pub fn is_nan_or_infinite(value: f32) -> bool {
	!value.is_finite()
}

/// Panics if `min > max`, like [`f32::clamp`]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
	value.clamp(min, max)
}

pub fn truncate(value: f32) -> f32 {
	value.trunc()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn are_equal() {
		assert!(super::are_equal(1.0, 1.0 + EPSILON * 0.5));
		assert!(!super::are_equal(1.0, 1.1));
		assert!(are_equal_with_tolerance(1.0, 1.05, 0.1));
	}

	#[test]
	fn are_not_equal() {
		assert!(super::are_not_equal(1.0, 1.1));
		assert!(!super::are_not_equal(0.0, EPSILON * 0.5));
		assert!(!are_not_equal_with_tolerance(1.0, 1.05, 0.1));
	}

	#[test]
	fn is_zero() {
		assert!(super::is_zero(EPSILON * 0.5));
		assert!(!super::is_zero(0.01));
		assert!(is_zero_with_tolerance(0.01, 0.1));
		assert!(super::is_not_zero(0.01));
		assert!(!is_not_zero_with_tolerance(0.01, 0.1));
	}

	#[test]
	fn greater_and_less() {
		assert!(is_greater_than(2.0, 1.0));
		assert!(!is_greater_than(1.0 + EPSILON * 0.5, 1.0));
		assert!(is_less_than(1.0, 2.0));
		assert!(!is_less_than(1.0 - EPSILON * 0.5, 1.0));
		assert!(is_greater_or_equal(1.0 - EPSILON * 0.5, 1.0));
		assert!(is_less_or_equal(1.0 + EPSILON * 0.5, 1.0));
		assert!(is_greater_than_with_tolerance(1.5, 1.0, 0.1));
		assert!(!is_less_than_with_tolerance(0.95, 1.0, 0.1));
	}

	#[test]
	fn sign() {
		assert!(is_negative(-1.0));
		assert!(!is_negative(-EPSILON * 0.5));
		assert!(is_positive(1.0));
		assert!(!is_positive(EPSILON * 0.5));
	}

	#[test]
	fn copy_sign() {
		assert_eq!(super::copy_sign(-3.0, 2.0), -2.0);
		assert_eq!(super::copy_sign(3.0, -2.0), 2.0);
		assert_eq!(super::copy_sign(-EPSILON * 0.5, -2.0), 2.0);
	}

	#[test]
	fn nan_and_infinite() {
		assert!(is_nan(f32::NAN));
		assert!(is_infinite(f32::INFINITY));
		assert!(is_nan_or_infinite(f32::NEG_INFINITY));
		assert!(!is_nan_or_infinite(1.0));
	}

	#[test]
	fn clamp() {
		assert_eq!(super::clamp(5.0, 0.0, 1.0), 1.0);
		assert_eq!(super::clamp(-5.0, 0.0, 1.0), 0.0);
		assert_eq!(super::clamp(0.5, 0.0, 1.0), 0.5);
		assert!(super::clamp(f32::NAN, 0.0, 1.0).is_nan());
	}

	#[test]
	#[should_panic]
	fn clamp_inverted_range() {
		super::clamp(0.5, 1.0, 0.0);
	}

	#[test]
	fn truncate() {
		assert_eq!(super::truncate(2.7), 2.0);
		assert_eq!(super::truncate(-2.7), -2.0);
		assert_eq!(super::truncate(-0.3), 0.0);
		assert!(super::truncate(f32::INFINITY).is_infinite());
	}
}
