//! Mapping from the logical frame to surface pixels.

/// Width and height, in logical units or pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// Create a size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// The logical frame vertex positions are expressed in.
pub const REFERENCE_FRAME: Size = Size::new(500.0, 400.0);

/// Scale `position` from `frame` onto `target`.
///
/// Each axis is scaled on its own: no offset, no clipping, and a target with a
/// different aspect ratio stretches the drawing.
pub fn scale_position((x, y): (f64, f64), frame: Size, target: Size) -> (f64, f64) {
	(x * target.width / frame.width, y * target.height / frame.height)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_at_reference_size() {
		assert_eq!(
			scale_position((250.0, 200.0), REFERENCE_FRAME, Size::new(500.0, 400.0)),
			(250.0, 200.0)
		);
	}

	#[test]
	fn doubles_on_double_size() {
		assert_eq!(
			scale_position((250.0, 200.0), REFERENCE_FRAME, Size::new(1000.0, 800.0)),
			(500.0, 400.0)
		);
	}

	#[test]
	fn stretches_instead_of_letterboxing() {
		assert_eq!(
			scale_position((500.0, 400.0), REFERENCE_FRAME, Size::new(1000.0, 400.0)),
			(1000.0, 400.0)
		);
	}

	#[test]
	fn no_clipping_outside_the_frame() {
		assert_eq!(
			scale_position((-50.0, 800.0), REFERENCE_FRAME, Size::new(500.0, 400.0)),
			(-50.0, 800.0)
		);
	}
}
