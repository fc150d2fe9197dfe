//! The secp256k1 curve: `y² = x³ + 7` over the prime field of
//! `P = 2²⁵⁶ − 2³² − 977`, with generator `G` and group order `N`.
//!
//! The curve instance and generator are process-wide immutable constants,
//! built once on first use. Every secp256k1 [`Point`] holds the same shared
//! curve handle, which makes the generic layer's cross-curve checks
//! unfailable here; the wrapper therefore exposes infallible arithmetic.

use std::ops::{Add, Mul, Neg};
use std::sync::{Arc, LazyLock};

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use rand::{CryptoRng, RngCore};

use crate::curve::{self, Curve};
use crate::error::Error;
use crate::field::FieldElement;

const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// The prime of the secp256k1 base field.
pub static P: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_str_radix(P_HEX, 16).expect("valid field prime hex"));

/// The order of the secp256k1 group.
pub static N: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_str_radix(N_HEX, 16).expect("valid group order hex"));

static CURVE: LazyLock<Arc<Curve>> = LazyLock::new(|| {
    let a = FieldElement::new(BigUint::zero(), P.clone()).expect("a < P");
    let b = FieldElement::new(BigUint::from(7u32), P.clone()).expect("b < P");

    Arc::new(Curve::new(a, b))
});

static GENERATOR: LazyLock<Point> = LazyLock::new(|| {
    let gx = BigUint::from_str_radix(GX_HEX, 16).expect("valid generator x hex");
    let gy = BigUint::from_str_radix(GY_HEX, 16).expect("valid generator y hex");

    let x = FieldElement::new(gx, P.clone()).expect("Gx < P");
    let y = FieldElement::new(gy, P.clone()).expect("Gy < P");

    Point {
        inner: curve::Point::new(x, y, Arc::clone(&CURVE)).expect("G is on the curve"),
    }
});

/// A shared handle to the secp256k1 curve instance.
pub fn secp256k1_curve() -> Arc<Curve> {
    Arc::clone(&CURVE)
}

/// Construct a base-field element bound to `P`.
pub fn new_field_element(num: BigUint) -> Result<FieldElement, Error> {
    FieldElement::new(num, P.clone())
}

/// An integer modulo the group order `N`.
///
/// Scalars are always reduced, so their arithmetic never leaves the group
/// order and is exposed through infallible operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    n: BigUint,
}

impl Scalar {
    /// Construct a scalar, reducing the value modulo `N`.
    pub fn new(n: BigUint) -> Scalar {
        Scalar { n: n % &*N }
    }

    /// The zero scalar.
    pub fn zero() -> Scalar {
        Scalar { n: BigUint::zero() }
    }

    /// The one scalar.
    pub fn one() -> Scalar {
        Scalar { n: BigUint::one() }
    }

    /// Interpret big-endian bytes as an integer and reduce it modulo `N`.
    pub fn from_bytes_be(bytes: &[u8]) -> Scalar {
        Scalar::new(BigUint::from_bytes_be(bytes))
    }

    /// The 32-byte big-endian encoding of the scalar.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let bytes = self.n.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);

        out
    }

    /// The scalar's value in `[0, N)`.
    pub fn value(&self) -> &BigUint {
        &self.n
    }

    /// Returns true for the zero scalar.
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    /// Draw a uniformly random scalar in `(0, N)` by rejection sampling.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
        loop {
            let mut buf = [0u8; 32];
            rng.fill_bytes(&mut buf);

            let k = BigUint::from_bytes_be(&buf);
            if !k.is_zero() && k < *N {
                return Scalar { n: k };
            }
        }
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar {
            n: (&self.n + &rhs.n) % &*N,
        }
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        &self + rhs
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar {
            n: (&self.n * &rhs.n) % &*N,
        }
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        &self * rhs
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.n.is_zero() {
            return Scalar::zero();
        }

        Scalar { n: &*N - &self.n }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}

/// A point on the secp256k1 curve.
///
/// All points share the process-wide curve handle, so addition, scalar
/// multiplication and negation cannot hit the generic layer's cross-curve or
/// field-mismatch errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    inner: curve::Point,
}

impl Point {
    /// The generator `G`.
    pub fn generator() -> Point {
        GENERATOR.clone()
    }

    /// The point at infinity.
    pub fn infinity() -> Point {
        Point {
            inner: curve::Point::infinity(secp256k1_curve()),
        }
    }

    /// Construct a point from base-field coordinates, verifying that it lies
    /// on the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Point, Error> {
        Ok(Point {
            inner: curve::Point::new(x, y, secp256k1_curve())?,
        })
    }

    /// Returns true for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.inner.is_infinity()
    }

    /// The x coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.inner.x()
    }

    /// The y coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.inner.y()
    }

    /// Add another secp256k1 point to this one.
    pub fn add(&self, other: &Point) -> Point {
        Point {
            inner: self
                .inner
                .add(&other.inner)
                .expect("points on the shared secp256k1 curve"),
        }
    }

    /// Multiply the point by a scalar.
    pub fn mul(&self, scalar: &Scalar) -> Point {
        Point {
            inner: self
                .inner
                .mul(scalar.value())
                .expect("points on the shared secp256k1 curve"),
        }
    }

    /// The additive inverse of the point.
    pub fn negate(&self) -> Point {
        Point {
            inner: self.inner.negate(),
        }
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Mul<&Scalar> for &Point {
    type Output = Point;

    fn mul(self, rhs: &Scalar) -> Point {
        Point::mul(self, rhs)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}
