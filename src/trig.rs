//! Plane triangle solvers. Sides share whatever unit the caller uses,
//! angles are degrees.

use crate::error::{Error, Result};

/// Hypotenuse of a right triangle with legs `a` and `b`.
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    (a.powi(2) + b.powi(2)).sqrt()
}

/// Angle opposite side `a` in a right triangle with hypotenuse `c`.
///
/// `c` must be strictly longer than both legs.
pub fn solve_right_angle(a: f64, b: f64, c: f64) -> Result<f64> {
    if a >= c || b >= c {
        return Err(Error::InvalidTriangle);
    }

    Ok((a / c).asin().to_degrees())
}

/// Law of cosines: side opposite `angle`, which lies between sides `a` and `b`.
pub fn side_from_sas(a: f64, b: f64, angle: f64) -> f64 {
    (a.powi(2) + b.powi(2) - 2.0 * a * b * angle.to_radians().cos()).sqrt()
}

/// Law of sines: angle opposite `a`, given side `b` and its opposite angle.
///
/// NaN when no triangle fits the measurements.
pub fn angle_from_ssa(a: f64, b: f64, angle_b: f64) -> f64 {
    (a * angle_b.to_radians().sin() / b).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_four_five() {
        assert_eq!(hypotenuse(3.0, 4.0), 5.0);
        assert!(close(solve_right_angle(3.0, 4.0, 5.0).unwrap(), 36.86989764584402));
        assert!(close(solve_right_angle(4.0, 3.0, 5.0).unwrap(), 53.13010235415598));
    }

    #[test]
    fn hypotenuse_must_be_longest() {
        assert!(matches!(solve_right_angle(5.0, 1.0, 4.0), Err(Error::InvalidTriangle)));
        assert!(matches!(solve_right_angle(1.0, 5.0, 4.0), Err(Error::InvalidTriangle)));
        assert!(matches!(solve_right_angle(4.0, 1.0, 4.0), Err(Error::InvalidTriangle)));
    }

    #[test]
    fn law_of_cosines() {
        assert!(close(side_from_sas(3.0, 4.0, 90.0), 5.0));
        // Equilateral
        assert!(close(side_from_sas(2.0, 2.0, 60.0), 2.0));
        // Degenerate, sides overlap
        assert!(close(side_from_sas(3.0, 1.0, 0.0), 2.0));
    }

    #[test]
    fn law_of_sines() {
        assert!(close(angle_from_ssa(2.0, 2.0, 60.0), 60.0));
        assert!(close(angle_from_ssa(3.0, 5.0, 90.0), 36.86989764584402));
        assert!(angle_from_ssa(10.0, 1.0, 90.0).is_nan());
    }
}
