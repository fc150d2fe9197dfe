//! BIP-340 Schnorr signatures: encoding, verification, and (weak) batch
//! verification.

use num_bigint::BigUint;

use crate::error::Error;
use crate::keys::{BIP340_CHALLENGE_TAG, PublicKey};
use crate::secp256k1::{self, Point, Scalar};
use crate::tagged_hash::tagged_hash;

/// Length in bytes of a serialised signature.
pub const SIGNATURE_LEN: usize = 64;

/// A Schnorr signature `(R, s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    r: PublicKey,
    s: Scalar,
}

impl Signature {
    /// Construct a signature from its nonce point and scalar.
    pub fn new(r: PublicKey, s: Scalar) -> Signature {
        Signature { r, s }
    }

    /// Decode a 64-byte signature: the x-only `R` followed by `s`.
    pub fn from_bytes(b: &[u8]) -> Result<Signature, Error> {
        if b.len() != SIGNATURE_LEN {
            return Err(Error::InvalidLength {
                expected: SIGNATURE_LEN,
                got: b.len(),
            });
        }

        let r = PublicKey::from_x_only_bytes(&b[..32])?;

        let s = BigUint::from_bytes_be(&b[32..]);
        if s >= *secp256k1::N {
            return Err(Error::OutOfRange);
        }

        Ok(Signature {
            r,
            s: Scalar::new(s),
        })
    }

    /// The 64-byte encoding of the signature.
    pub fn bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r.x_only_bytes());
        out[32..].copy_from_slice(&self.s.to_bytes_be());

        out
    }

    /// The nonce point `R`.
    pub fn r(&self) -> &PublicKey {
        &self.r
    }

    /// The signature scalar `s`.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Verify the signature over `msg` for the given public key.
    ///
    /// Checks `s·G - e·P = R`, that the recovered `R` has even Y, and that
    /// its x coordinate matches the signature's `R`.
    pub fn verify(&self, pk: &PublicKey, msg: &[u8]) -> Result<(), Error> {
        // Work with the even-Y lift of the key, as the x-only encoding
        // implies.
        let pk_bytes = pk.x_only_bytes();
        let p = PublicKey::from_x_only_bytes(&pk_bytes)?;

        let e = challenge(&self.r.x_only_bytes(), &pk_bytes, msg);

        let sg = PublicKey::new(&Point::generator() * &self.s);
        let r = sg.add(&p.mul(&e).negate());

        if !r.has_even_y() {
            return Err(Error::InvalidSignature);
        }

        if r != self.r {
            return Err(Error::InvalidSignature);
        }

        Ok(())
    }
}

/// `e = int(hash_challenge(R.x || P.x || m)) mod n`.
fn challenge(r_bytes: &[u8; 32], pk_bytes: &[u8; 32], msg: &[u8]) -> Scalar {
    let mut buf = Vec::with_capacity(64 + msg.len());
    buf.extend_from_slice(r_bytes);
    buf.extend_from_slice(pk_bytes);
    buf.extend_from_slice(msg);

    Scalar::from_bytes_be(&tagged_hash(BIP340_CHALLENGE_TAG, &buf))
}

/// Batch-verify a set of signatures by comparing `(Σsᵢ)·G` against
/// `ΣRᵢ + Σ(eᵢ·Pᵢ)`.
///
/// WARNING: without independent random per-signature coefficients this check
/// is subject to a cancellation attack: one invalid signature can be masked
/// by another crafted to offset it. It is cheaper than verifying each
/// signature individually but must not be used where individual validity
/// matters.
pub fn batch_verify(pks: &[PublicKey], msgs: &[&[u8]], sigs: &[Signature]) -> Result<(), Error> {
    if msgs.len() != pks.len() {
        return Err(Error::InvalidLength {
            expected: pks.len(),
            got: msgs.len(),
        });
    }
    if sigs.len() != pks.len() {
        return Err(Error::InvalidLength {
            expected: pks.len(),
            got: sigs.len(),
        });
    }

    let mut s_acc = Scalar::zero();
    let mut r_acc = PublicKey::infinity();
    let mut ep_acc = PublicKey::infinity();

    for (i, sig) in sigs.iter().enumerate() {
        let e = challenge(&sig.r.x_only_bytes(), &pks[i].x_only_bytes(), msgs[i]);

        ep_acc = ep_acc.add(&pks[i].mul(&e));
        r_acc = r_acc.add(&sig.r);
        s_acc = s_acc + &sig.s;
    }

    let lhs = PublicKey::new(&Point::generator() * &s_acc);

    if lhs == r_acc.add(&ep_acc) {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
