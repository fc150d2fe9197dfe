//! Finite-field arithmetic over ℤ/pℤ.
//!
//! A [`FieldElement`] can only interact with elements of the same field; every
//! binary operation checks the moduli and fails with
//! [`Error::FieldMismatch`](crate::Error::FieldMismatch) when they differ.
//! Results are always canonically reduced into `[0, modulus)`.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::Error;

/// An element of the finite field of integers modulo a prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    num: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Construct a new element. The value must already be reduced, i.e.
    /// `num < modulus`.
    pub fn new(num: BigUint, modulus: BigUint) -> Result<Self, Error> {
        if num >= modulus {
            return Err(Error::OutOfRange);
        }

        Ok(FieldElement { num, modulus })
    }

    /// The element's value in `[0, modulus)`.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// The order of the field this element lives in.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns true if the element's value is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    fn check_field(&self, other: &FieldElement) -> Result<(), Error> {
        if self.modulus != other.modulus {
            return Err(Error::FieldMismatch);
        }

        Ok(())
    }

    /// Add two elements of the same field.
    pub fn add(&self, other: &FieldElement) -> Result<FieldElement, Error> {
        self.check_field(other)?;

        Ok(FieldElement {
            num: (&self.num + &other.num) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Subtract the given element from this one.
    pub fn sub(&self, other: &FieldElement) -> Result<FieldElement, Error> {
        self.check_field(other)?;

        // Both operands are reduced, so adding the modulus first keeps the
        // intermediate value non-negative.
        Ok(FieldElement {
            num: (&self.num + &self.modulus - &other.num) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Multiply two elements of the same field.
    pub fn mul(&self, other: &FieldElement) -> Result<FieldElement, Error> {
        self.check_field(other)?;

        Ok(FieldElement {
            num: (&self.num * &other.num) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Raise the element to the given (possibly negative) exponent.
    ///
    /// The exponent is reduced modulo `modulus - 1` into `[0, modulus - 2]`
    /// before exponentiating, which by Fermat's little theorem handles
    /// negative exponents without a separate inversion routine.
    pub fn pow(&self, exp: &BigInt) -> FieldElement {
        let order = BigInt::from_biguint(Sign::Plus, &self.modulus - 1u32);

        let mut n = exp % &order;
        if n.sign() == Sign::Minus {
            n += &order;
        }

        FieldElement {
            num: self.num.modpow(n.magnitude(), &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Divide this element by the given one, via the Fermat inverse
    /// `b^(p-2)`.
    pub fn div(&self, other: &FieldElement) -> Result<FieldElement, Error> {
        self.check_field(other)?;

        let exp = BigInt::from_biguint(Sign::Plus, &self.modulus - 2u32);

        self.mul(&other.pow(&exp))
    }

    /// The additive inverse of this element.
    pub fn negate(&self) -> FieldElement {
        FieldElement {
            num: (&self.modulus - &self.num) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Returns true if the element's value has its lowest bit set.
    pub fn is_odd(&self) -> bool {
        self.num.bit(0)
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.num)
    }
}
