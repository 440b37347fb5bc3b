//! Pointer-driven 3D tilt for project card icons.

/// Pixels of pointer travel per degree of rotation.
const SENSITIVITY: f64 = 20.0;

/// Rotation in degrees around the X and Y axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Resting orientation.
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` card.
    ///
    /// The icon leans toward the pointer: below centre tips it forward,
    /// left of centre turns it left.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / SENSITIVITY,
            rotate_y: (center_x - x) / SENSITIVITY,
        }
    }

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        assert_eq!(Tilt::from_pointer(100.0, 50.0, 200.0, 100.0), Tilt::REST);
    }

    #[test]
    fn test_corner() {
        let tilt = Tilt::from_pointer(0.0, 100.0, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 2.5);
        assert_eq!(tilt.rotate_y, 5.0);
    }

    #[test]
    fn test_transform_string() {
        assert_eq!(
            Tilt::REST.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
        let tilt = Tilt { rotate_x: 1.5, rotate_y: -2.0 };
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(1.5deg) rotateY(-2deg)"
        );
    }
}
