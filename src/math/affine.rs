use super::{Vector3, Matrix3x3, Matrix4x3, Matrix4x4, matrix4x3, matrix4x4, ApproxEq};
use std::fmt::Debug;

/// Storage able to hold an affine transform: a 3x3 basis in the upper rows and
/// a translation in the last row. Implemented by [`Matrix4x3`] and
/// [`Matrix4x4`], whose fourth column always stays `(0, 0, 0, 1)`.
pub trait AffineMatrix: Copy + Debug + PartialEq + ApproxEq {
	const IDENTITY: Self;

	fn basis(&self) -> Matrix3x3;
	fn set_basis(&mut self, basis: &Matrix3x3);
	fn translation(&self) -> Vector3;
	fn set_translation(&mut self, translation: &Vector3);

	fn from_parts(basis: &Matrix3x3, translation: &Vector3) -> Self {
		let mut m = Self::IDENTITY;
		m.set_basis(basis);
		m.set_translation(translation);
		m
	}
}

impl AffineMatrix for Matrix4x3 {
	const IDENTITY: Self = matrix4x3::IDENTITY;

	fn basis(&self) -> Matrix3x3 {
		let e = &self.elements;
		Matrix3x3::new([e[0], e[1], e[2]])
	}

	fn set_basis(&mut self, basis: &Matrix3x3) {
		self.elements[0..3].copy_from_slice(&basis.elements);
	}

	fn translation(&self) -> Vector3 {
		let t = &self.elements[3];
		Vector3::new(t[0], t[1], t[2])
	}

	fn set_translation(&mut self, translation: &Vector3) {
		self.elements[3] = [translation.x, translation.y, translation.z];
	}
}

impl AffineMatrix for Matrix4x4 {
	const IDENTITY: Self = matrix4x4::IDENTITY;

	fn basis(&self) -> Matrix3x3 {
		let e = &self.elements;

		Matrix3x3::new([
			[e[0][0], e[0][1], e[0][2]],
			[e[1][0], e[1][1], e[1][2]],
			[e[2][0], e[2][1], e[2][2]]
		])
	}

	fn set_basis(&mut self, basis: &Matrix3x3) {
		for (row, b) in self.elements.iter_mut().zip(basis.elements.iter()) {
			row[0..3].copy_from_slice(b);
		}
	}

	fn translation(&self) -> Vector3 {
		let t = &self.elements[3];
		Vector3::new(t[0], t[1], t[2])
	}

	fn set_translation(&mut self, translation: &Vector3) {
		let t = &mut self.elements[3];
		t[0] = translation.x;
		t[1] = translation.y;
		t[2] = translation.z;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn basis() -> Matrix3x3 {
		Matrix3x3::new([
			[1.0, 2.0, 3.0],
			[4.0, 5.0, 6.0],
			[7.0, 8.0, 9.0]])
	}

	#[test]
	fn from_parts_4x3() {
		let m = Matrix4x3::from_parts(&basis(), &Vector3::new(10.0, 11.0, 12.0));

		assert_eq!(m.elements, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0], [10.0, 11.0, 12.0]]);
		assert_eq!(m.basis(), basis());
		assert_eq!(AffineMatrix::translation(&m), Vector3::new(10.0, 11.0, 12.0));
	}

	#[test]
	fn from_parts_4x4() {
		let m = Matrix4x4::from_parts(&basis(), &Vector3::new(10.0, 11.0, 12.0));

		let expected = [
			[1.0, 2.0, 3.0, 0.0],
			[4.0, 5.0, 6.0, 0.0],
			[7.0, 8.0, 9.0, 0.0],
			[10.0, 11.0, 12.0, 1.0]
		];

		assert_eq!(m.elements, expected);
		assert_eq!(m.basis(), basis());
		assert_eq!(AffineMatrix::translation(&m), Vector3::new(10.0, 11.0, 12.0));
	}

	#[test]
	fn set_basis_keeps_fourth_column() {
		let mut m = <Matrix4x4 as AffineMatrix>::IDENTITY;
		m.set_basis(&basis());
		m.set_translation(&Vector3::new(1.0, 1.0, 1.0));

		let column: Vec<f32> = m.elements.iter().map(|r| r[3]).collect();
		assert_eq!(column, vec![0.0, 0.0, 0.0, 1.0]);
	}
}
