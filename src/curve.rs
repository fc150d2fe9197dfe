//! Generic short-Weierstrass elliptic curves and point arithmetic.
//!
//! A [`Curve`] is `y² = x³ + ax + b` over the field its coefficients live in.
//! Points hold a shared [`Arc`] handle to their curve so that the coefficients
//! are stored once per curve rather than once per point; operations on points
//! of different curves fail with
//! [`Error::PointsNotOnSameCurve`](crate::Error::PointsNotOnSameCurve).

use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::Error;
use crate::field::FieldElement;

/// An elliptic curve `y² = x³ + ax + b`, parameterised by its coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Construct a new curve from its coefficients.
    pub fn new(a: FieldElement, b: FieldElement) -> Curve {
        Curve { a, b }
    }

    /// The `a` coefficient.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Returns true if the given coordinates satisfy the curve equation.
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> bool {
        match self.rhs(x) {
            Ok(rhs) => y.pow(&BigInt::from(2)) == rhs,
            Err(_) => false,
        }
    }

    /// `x³ + ax + b` in the coefficient field.
    fn rhs(&self, x: &FieldElement) -> Result<FieldElement, Error> {
        let ax = self.a.mul(x)?;

        x.pow(&BigInt::from(3)).add(&ax)?.add(&self.b)
    }
}

/// A point on a [`Curve`], or the point at infinity.
///
/// The point at infinity carries no coordinates; it is the additive identity
/// of the curve group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    coords: Option<(FieldElement, FieldElement)>,
    curve: Arc<Curve>,
}

impl Point {
    /// Construct a new point, verifying that it lies on the curve.
    pub fn new(x: FieldElement, y: FieldElement, curve: Arc<Curve>) -> Result<Point, Error> {
        if !curve.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Point {
            coords: Some((x, y)),
            curve,
        })
    }

    /// Construct the point at infinity on the given curve.
    pub fn infinity(curve: Arc<Curve>) -> Point {
        Point {
            coords: None,
            curve,
        }
    }

    /// Returns true for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    /// The x coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// The y coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Add two points on the same curve.
    pub fn add(&self, other: &Point) -> Result<Point, Error> {
        if self.curve != other.curve {
            return Err(Error::PointsNotOnSameCurve);
        }

        let Some((x1, y1)) = &self.coords else {
            return Ok(other.clone());
        };
        let Some((x2, y2)) = &other.coords else {
            return Ok(self.clone());
        };

        if x1 != x2 {
            // Chord through two distinct points.
            let s = y2.sub(y1)?.div(&x2.sub(x1)?)?;
            let x3 = s.pow(&BigInt::from(2)).sub(x1)?.sub(x2)?;
            let y3 = s.mul(&x1.sub(&x3)?)?.sub(y1)?;

            return Point::new(x3, y3, Arc::clone(&self.curve));
        }

        // Equal x with unequal y is a vertical chord; equal coordinates with
        // y = 0 is a vertical tangent. Both sum to infinity.
        if y1 != y2 || y1.is_zero() {
            return Ok(Point::infinity(Arc::clone(&self.curve)));
        }

        // Tangent at a single point: s = (3x² + a) / 2y.
        let x1_sq = x1.pow(&BigInt::from(2));
        let num = x1_sq.add(&x1_sq)?.add(&x1_sq)?.add(self.curve.a())?;
        let s = num.div(&y1.add(y1)?)?;

        let x3 = s.pow(&BigInt::from(2)).sub(&x1.add(x1)?)?;
        let y3 = s.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Point::new(x3, y3, Arc::clone(&self.curve))
    }

    /// Scalar multiplication by double-and-add over the coefficient's bits,
    /// least-significant first.
    ///
    /// NOTE: this is not constant-time; the scalar's bit pattern is
    /// observable through control flow and timing.
    pub fn mul(&self, coef: &BigUint) -> Result<Point, Error> {
        let mut coef = coef.clone();
        let mut current = self.clone();
        let mut result = Point::infinity(Arc::clone(&self.curve));

        while !coef.is_zero() {
            if coef.bit(0) {
                result = result.add(&current)?;
            }

            current = current.add(&current)?;
            coef >>= 1u32;
        }

        Ok(result)
    }

    /// The additive inverse: `(x, -y)`, or infinity for infinity.
    pub fn negate(&self) -> Point {
        match &self.coords {
            None => self.clone(),
            Some((x, y)) => Point {
                coords: Some((x.clone(), y.negate())),
                curve: Arc::clone(&self.curve),
            },
        }
    }
}
