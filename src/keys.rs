//! Private and public keys, x-only/plain encodings, and BIP-340 signing.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::error::Error;
use crate::secp256k1::{self, Point, Scalar};
use crate::signature::Signature;
use crate::tagged_hash::tagged_hash;

/// Length in bytes of a serialised private key.
pub const PRIV_KEY_LEN: usize = 32;

/// Length in bytes of an x-only public key.
pub const X_ONLY_PUB_KEY_LEN: usize = 32;

/// Length in bytes of a plain (compressed) public key.
pub const PLAIN_PUB_KEY_LEN: usize = 33;

/// Domain tag for masking auxiliary randomness during signing.
pub const BIP340_AUX_TAG: &str = "BIP0340/aux";

/// Domain tag for deriving the signing nonce.
pub const BIP340_NONCE_TAG: &str = "BIP0340/nonce";

/// Domain tag for the Schnorr challenge.
pub const BIP340_CHALLENGE_TAG: &str = "BIP0340/challenge";

/// A private key: a scalar `d` in `(0, N)`, together with its derived public
/// key `d·G`.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    d: Scalar,
    pub_key: PublicKey,
}

impl PrivateKey {
    /// Generate a fresh random private key from the given CSPRNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> PrivateKey {
        let d = Scalar::random(rng);
        let pub_key = PublicKey::new(&Point::generator() * &d);

        PrivateKey { d, pub_key }
    }

    /// Construct a private key from a nonzero scalar.
    pub fn from_scalar(d: Scalar) -> Result<PrivateKey, Error> {
        if d.is_zero() {
            return Err(Error::OutOfRange);
        }

        let pub_key = PublicKey::new(&Point::generator() * &d);

        Ok(PrivateKey { d, pub_key })
    }

    /// Construct a private key from its 32-byte big-endian encoding.
    pub fn from_bytes(b: &[u8]) -> Result<PrivateKey, Error> {
        if b.len() != PRIV_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: PRIV_KEY_LEN,
                got: b.len(),
            });
        }

        let d = BigUint::from_bytes_be(b);
        if d.is_zero() || d >= *secp256k1::N {
            return Err(Error::OutOfRange);
        }

        PrivateKey::from_scalar(Scalar::new(d))
    }

    /// The 32-byte big-endian encoding of the key.
    pub fn bytes(&self) -> [u8; PRIV_KEY_LEN] {
        self.d.to_bytes_be()
    }

    /// The secret scalar.
    pub fn d(&self) -> &Scalar {
        &self.d
    }

    /// The derived public key `d·G`.
    pub fn public_key(&self) -> &PublicKey {
        &self.pub_key
    }

    /// Produce a BIP-340 Schnorr signature over `msg` with auxiliary
    /// randomness `aux`. Both must be exactly 32 bytes.
    pub fn sign(&self, msg: &[u8], aux: &[u8]) -> Result<Signature, Error> {
        if msg.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                got: msg.len(),
            });
        }
        if aux.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                got: aux.len(),
            });
        }

        // d = d' if the public key has even Y, otherwise n - d'.
        let d = if self.pub_key.has_even_y() {
            self.d.clone()
        } else {
            -&self.d
        };

        // t = bytes(d) XOR hash_aux(aux)
        let t = xor32(&d.to_bytes_be(), &tagged_hash(BIP340_AUX_TAG, aux));

        // k' = int(hash_nonce(t || bytes(P) || m)) mod n
        let pk_bytes = self.pub_key.x_only_bytes();
        let mut buf = Vec::with_capacity(96);
        buf.extend_from_slice(&t);
        buf.extend_from_slice(&pk_bytes);
        buf.extend_from_slice(msg);

        let k = Scalar::from_bytes_be(&tagged_hash(BIP340_NONCE_TAG, &buf));
        if k.is_zero() {
            return Err(Error::ZeroNonce);
        }

        // R = k'·G; k = k' if R has even Y, otherwise n - k'.
        let r = PublicKey::new(&Point::generator() * &k);
        let k = if r.has_even_y() { k } else { -&k };

        // e = int(hash_challenge(bytes(R) || bytes(P) || m)) mod n
        let mut buf = Vec::with_capacity(96);
        buf.extend_from_slice(&r.x_only_bytes());
        buf.extend_from_slice(&pk_bytes);
        buf.extend_from_slice(msg);

        let e = Scalar::from_bytes_be(&tagged_hash(BIP340_CHALLENGE_TAG, &buf));

        let s = k + &(&e * &d);

        let sig = Signature::new(r, s);
        sig.verify(&self.pub_key, msg)
            .map_err(|_| Error::SelfCheckFailure)?;

        Ok(sig)
    }
}

/// A public key: a point on secp256k1, or infinity.
///
/// Infinity only ever appears as an intermediate accumulator value; a final
/// public key is never infinity. Equality is x-only for non-infinity keys,
/// matching the x-only encodings the protocols exchange.
#[derive(Debug, Clone)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Wrap a curve point as a public key.
    pub fn new(point: Point) -> PublicKey {
        PublicKey { point }
    }

    /// The zero-value public key: the point at infinity.
    pub fn infinity() -> PublicKey {
        PublicKey {
            point: Point::infinity(),
        }
    }

    /// Decode a 32-byte x-only public key, lifting to the even-Y point.
    pub fn from_x_only_bytes(b: &[u8]) -> Result<PublicKey, Error> {
        if b.len() != X_ONLY_PUB_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: X_ONLY_PUB_KEY_LEN,
                got: b.len(),
            });
        }

        lift_x(&BigUint::from_bytes_be(b))
    }

    /// Decode a 33-byte plain public key, honouring the parity tag byte.
    pub fn from_plain_bytes(b: &[u8]) -> Result<PublicKey, Error> {
        if b.len() != PLAIN_PUB_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: PLAIN_PUB_KEY_LEN,
                got: b.len(),
            });
        }

        if b[0] != 0x02 && b[0] != 0x03 {
            return Err(Error::InvalidPublicKey);
        }

        let pk = lift_x(&BigUint::from_bytes_be(&b[1..]))?;

        if b[0] == 0x02 {
            Ok(pk)
        } else {
            Ok(pk.negate())
        }
    }

    /// The 32-byte x-only encoding. Infinity encodes as all zeroes.
    pub fn x_only_bytes(&self) -> [u8; X_ONLY_PUB_KEY_LEN] {
        let mut out = [0u8; X_ONLY_PUB_KEY_LEN];
        if let Some(x) = self.point.x() {
            let bytes = x.num().to_bytes_be();
            out[X_ONLY_PUB_KEY_LEN - bytes.len()..].copy_from_slice(&bytes);
        }

        out
    }

    /// The 33-byte plain encoding: a parity tag byte followed by the x
    /// coordinate. Infinity encodes as all zeroes.
    pub fn plain_bytes(&self) -> [u8; PLAIN_PUB_KEY_LEN] {
        let mut out = [0u8; PLAIN_PUB_KEY_LEN];
        if self.point.is_infinity() {
            return out;
        }

        out[0] = if self.has_even_y() { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&self.x_only_bytes());

        out
    }

    /// Returns true if the key's Y coordinate is even (infinity counts as
    /// even).
    pub fn has_even_y(&self) -> bool {
        match self.point.y() {
            None => true,
            Some(y) => !y.is_odd(),
        }
    }

    /// Returns true for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.point.is_infinity()
    }

    /// The underlying curve point.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Add another public key's point to this one.
    pub fn add(&self, other: &PublicKey) -> PublicKey {
        PublicKey {
            point: self.point.add(&other.point),
        }
    }

    /// Multiply the key's point by a scalar.
    pub fn mul(&self, scalar: &Scalar) -> PublicKey {
        PublicKey {
            point: self.point.mul(scalar),
        }
    }

    /// The additive inverse of the key's point.
    pub fn negate(&self) -> PublicKey {
        PublicKey {
            point: self.point.negate(),
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        if self.is_infinity() || other.is_infinity() {
            return self.is_infinity() && other.is_infinity();
        }

        self.point.x() == other.point.x()
    }
}

impl Eq for PublicKey {}

/// Compute the public key with the given x coordinate and even Y.
///
/// Fails with [`Error::CouldNotLiftX`] if no point on the curve has that x
/// coordinate, or [`Error::OutOfRange`] if `x` is not a field element.
pub fn lift_x(x_int: &BigUint) -> Result<PublicKey, Error> {
    let x = secp256k1::new_field_element(x_int.clone())?;
    let seven = secp256k1::new_field_element(BigUint::from(7u32))?;

    // c = x³ + 7; candidate y = c^((P+1)/4), valid because P ≡ 3 (mod 4).
    let c = x.pow(&BigInt::from(3)).add(&seven)?;

    let exp = BigInt::from_biguint(Sign::Plus, (&*secp256k1::P + 1u32) >> 2u32);
    let y = c.pow(&exp);

    if y.mul(&y)? != c {
        return Err(Error::CouldNotLiftX);
    }

    let y = if y.is_odd() { y.negate() } else { y };

    Ok(PublicKey::new(Point::new(x, y)?))
}

/// Byte-wise XOR of two 32-byte arrays.
pub(crate) fn xor32(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a[i] ^ b[i];
    }

    out
}
