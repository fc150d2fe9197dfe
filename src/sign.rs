//! MuSig2 partial signatures: signing, verification, and aggregation into a
//! final Schnorr signature.
//!
//! A partial signature is a bare scalar. Nonce exchange happens before any
//! partial signature exists, so every participant already knows the combined
//! nonce `R` and only the `s` values need to travel. Tweaks never appear in
//! individual partial signatures; their accumulated scalar enters once, at
//! aggregation.

use log::debug;
use num_bigint::BigUint;

use crate::error::Error;
use crate::keyagg::Tweak;
use crate::keys::{PrivateKey, PublicKey};
use crate::nonce::{PubNonce, SecNonce, nonce_agg};
use crate::secp256k1::{self, Point, Scalar};
use crate::session::SessionContext;
use crate::signature::Signature;

/// Length in bytes of a serialised partial signature.
pub const PARTIAL_SIG_LEN: usize = 32;

/// One participant's share of a MuSig2 signature: a scalar below the group
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSig {
    s: Scalar,
}

impl PartialSig {
    /// Wrap a scalar as a partial signature.
    pub fn new(s: Scalar) -> PartialSig {
        PartialSig { s }
    }

    /// Decode a 32-byte partial signature, rejecting values at or above the
    /// group order.
    pub fn from_bytes(b: &[u8]) -> Result<PartialSig, Error> {
        if b.len() != PARTIAL_SIG_LEN {
            return Err(Error::InvalidLength {
                expected: PARTIAL_SIG_LEN,
                got: b.len(),
            });
        }

        let s = BigUint::from_bytes_be(b);
        if s >= *secp256k1::N {
            return Err(Error::OutOfRange);
        }

        Ok(PartialSig {
            s: Scalar::new(s),
        })
    }

    /// The 32-byte big-endian encoding.
    pub fn bytes(&self) -> [u8; PARTIAL_SIG_LEN] {
        self.s.to_bytes_be()
    }

    /// The signature scalar.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Verify this partial signature for signer `i`, given all public
    /// nonces, keys and tweaks of the session.
    pub fn verify(
        &self,
        pub_nonces: &[PubNonce],
        pks: &[PublicKey],
        tweaks: &[Tweak],
        msg: &[u8],
        i: usize,
    ) -> Result<(), Error> {
        if i >= pks.len() || i >= pub_nonces.len() {
            return Err(Error::InvalidLength {
                expected: i + 1,
                got: pks.len().min(pub_nonces.len()),
            });
        }

        let ctx = SessionContext::new(
            nonce_agg(pub_nonces),
            pks.to_vec(),
            msg.to_vec(),
            tweaks.to_vec(),
        );

        self.verify_internal(&ctx, &pub_nonces[i], &pks[i])
    }

    /// Verify this partial signature against an already-built session
    /// context and the signer's own public nonce and key.
    ///
    /// Checks `s·G = Re + (g·gacc·e·a)·P`, where `Re` is the signer's
    /// combined nonce, negated when the session's final `R` has odd Y.
    pub fn verify_internal(
        &self,
        ctx: &SessionContext,
        pub_nonce: &PubNonce,
        pk: &PublicKey,
    ) -> Result<(), Error> {
        let sv = ctx.values()?;

        let mut re = pub_nonce.r1().add(&pub_nonce.r2().mul(&sv.b));
        if !sv.r.has_even_y() {
            re = re.negate();
        }

        let a = ctx.key_agg_coeff(pk)?;

        let g = if sv.key_agg_ctx.q().has_even_y() {
            Scalar::one()
        } else {
            -&Scalar::one()
        };
        let g = &g * sv.key_agg_ctx.gacc();

        let lhs = PublicKey::new(&Point::generator() * &self.s);
        let rhs = pk.mul(&g).mul(&sv.e).mul(&a).add(&re);

        if lhs.point() != rhs.point() {
            return Err(Error::InvalidSignature);
        }

        Ok(())
    }
}

/// Produce a partial signature for the given session, secret nonce and
/// private key.
///
/// The secret nonce must have been generated for this key's public key. The
/// produced signature is verified before being returned; a failure there is
/// a [`Error::SelfCheckFailure`], not a caller error.
pub fn sign(
    ctx: &SessionContext,
    sec_nonce: &SecNonce,
    sk: &PrivateKey,
) -> Result<PartialSig, Error> {
    let sv = ctx.values()?;

    // If the final R has odd Y, every signer negates its secret nonces so
    // the combined nonce lands on the even-Y point the signature encodes.
    let (mut k1, mut k2) = (sec_nonce.k1.d().clone(), sec_nonce.k2.d().clone());
    if !sv.r.has_even_y() {
        k1 = -&k1;
        k2 = -&k2;
    }

    let p = sk.public_key();
    if sec_nonce.public_key() != p {
        return Err(Error::InvalidPublicKey);
    }

    let a = ctx.key_agg_coeff(p)?;

    let g = if sv.key_agg_ctx.q().has_even_y() {
        Scalar::one()
    } else {
        -&Scalar::one()
    };

    // d = g · gacc · d', folding both the tweak-time and signing-time parity
    // flips into the secret key.
    let d = &(&g * sv.key_agg_ctx.gacc()) * sk.d();

    // s = k1 + b·k2 + e·a·d
    let r = k1 + &(&sv.b * &k2);
    let s = r + &(&sv.e * &(&a * &d));

    let psig = PartialSig::new(s);

    psig.verify_internal(ctx, &sec_nonce.pub_nonce(), p)
        .map_err(|_| Error::SelfCheckFailure)?;

    debug!("produced partial signature");

    Ok(psig)
}

/// Aggregate all partial signatures of a session into the final Schnorr
/// signature.
///
/// `s = Σsᵢ + e·g·tacc`: the accumulated tweak scalar enters the signature
/// here and nowhere else.
pub fn partial_sig_agg(ctx: &SessionContext, psigs: &[PartialSig]) -> Result<Signature, Error> {
    let mut s = Scalar::zero();
    for psig in psigs {
        s = s + &psig.s;
    }

    let sv = ctx.values()?;

    let g = if sv.key_agg_ctx.q().has_even_y() {
        Scalar::one()
    } else {
        -&Scalar::one()
    };

    let correction = &(&sv.e * &g) * sv.key_agg_ctx.tacc();
    let s = s + &correction;

    debug!("aggregated {} partial signatures", psigs.len());

    Ok(Signature::new(sv.r, s))
}
