use core::ops::{Add, Mul, Neg};

use once_cell::sync::Lazy;
use vesta_math::Uint256;

use crate::field::FieldElement;
use crate::scalar::Scalar;

const GENERATOR_X: Uint256 =
    Uint256([0x59F2815B16F81798, 0x029BFCDB2DCE28D9, 0x55A06295CE870B07, 0x79BE667EF9DCBBAC]);
const GENERATOR_Y: Uint256 =
    Uint256([0x9C47D08FFB10D4B8, 0xFD17B448A6855419, 0x5DA4FBFC0E1108A8, 0x483ADA7726A3C465]);

/// The curve generator G.
pub static GENERATOR: Lazy<Point> = Lazy::new(|| Point::Affine {
    x: FieldElement::from_uint(GENERATOR_X),
    y: FieldElement::from_uint(GENERATOR_Y),
});

/// A point on the curve `y^2 = x^3 + 7`, or the identity.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Point {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    #[inline]
    pub fn is_infinity(self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn is_on_curve(self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => y.square() == x.square() * x + FieldElement::from_u64(7),
        }
    }

    /// Doubling via the tangent line. The identity and points with a
    /// vertical tangent double to the identity.
    pub fn double(self) -> Point {
        let (x, y) = match self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Infinity;
        }
        let two_y_inv = (y + y).invert().expect("nonzero field element is invertible");
        let slope = x.square() * FieldElement::from_u64(3) * two_y_inv;
        let x3 = slope.square() - x - x;
        let y3 = slope * (x - x3) - y;
        Point::Affine { x: x3, y: y3 }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Infinity, _) => return other,
            (_, Point::Infinity) => return self,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };
        if x1 == x2 {
            // Equal x means the points are equal or mirror images.
            return if y1 == y2 { self.double() } else { Point::Infinity };
        }
        let dx_inv = (x2 - x1).invert().expect("nonzero field element is invertible");
        let slope = (y2 - y1) * dx_inv;
        let x3 = slope.square() - x1 - x2;
        let y3 = slope * (x1 - x3) - y1;
        Point::Affine { x: x3, y: y3 }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x, y: -y },
        }
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    /// Double-and-add over the big-endian bits of the scalar.
    fn mul(self, k: Scalar) -> Point {
        let mut acc = Point::Infinity;
        for bit in k.as_uint().iter_be_bits() {
            acc = acc.double();
            if bit {
                acc = acc + self;
            }
        }
        debug_assert!(acc.is_on_curve());
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::CURVE_ORDER;

    fn scalar(n: u64) -> Scalar {
        Scalar::from_be_bytes(Uint256::from_u64(n).to_be_bytes()).unwrap()
    }

    fn affine(x_hex: &str, y_hex: &str) -> Point {
        Point::Affine {
            x: FieldElement::from_be_bytes(Uint256::from_hex(x_hex).unwrap().to_be_bytes()).unwrap(),
            y: FieldElement::from_be_bytes(Uint256::from_hex(y_hex).unwrap().to_be_bytes()).unwrap(),
        }
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(GENERATOR.is_on_curve());
        assert!(!GENERATOR.is_infinity());
    }

    #[test]
    fn identity_rules() {
        let g = *GENERATOR;
        assert_eq!(g + Point::Infinity, g);
        assert_eq!(Point::Infinity + g, g);
        assert_eq!(g + (-g), Point::Infinity);
        assert_eq!(Point::Infinity.double(), Point::Infinity);
        assert_eq!(g * scalar(0), Point::Infinity);
    }

    #[test]
    fn doubling_matches_known_coordinates() {
        let two_g = affine(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        );
        let g = *GENERATOR;
        assert_eq!(g.double(), two_g);
        assert_eq!(g + g, two_g);
        assert_eq!(g * scalar(2), two_g);
    }

    #[test]
    fn scalar_multiplication_distributes() {
        let g = *GENERATOR;
        assert_eq!(g * scalar(1), g);
        let (a, b) = (scalar(123_456_789), scalar(987_654_321));
        assert_eq!(g * a + g * b, g * (a + b));
        assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn order_minus_one_negates() {
        let k = Scalar::from_be_bytes((CURVE_ORDER - Uint256::from_u64(1)).to_be_bytes()).unwrap();
        assert_eq!(*GENERATOR * k, -*GENERATOR);
    }
}
