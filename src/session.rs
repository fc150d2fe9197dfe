//! MuSig2 session context: the shared inputs of one signing run and the
//! values derived from them.
//!
//! A [`SessionContext`] is immutable once built. The derived
//! [`SessionValues`] (aggregate key state, nonce coefficient, combined nonce
//! and challenge) are recomputed on demand rather than cached, so they can
//! never go stale relative to the inputs.

use crate::error::Error;
use crate::keyagg::{KeyAggContext, Tweak, apply_tweak, key_agg, key_agg_coeff};
use crate::keys::{BIP340_CHALLENGE_TAG, PublicKey};
use crate::nonce::PubNonce;
use crate::secp256k1::{Point, Scalar};
use crate::tagged_hash::tagged_hash;

/// Domain tag for deriving the nonce coefficient `b`.
pub const MUSIG_NONCE_COEF_TAG: &str = "MuSig/noncecoef";

/// The shared inputs of a MuSig2 signing session: the aggregate public
/// nonce, the ordered public keys, the message, and the tweaks to apply.
#[derive(Debug, Clone)]
pub struct SessionContext {
    agg_pub_nonce: PubNonce,
    pub_keys: Vec<PublicKey>,
    msg: Vec<u8>,
    tweaks: Vec<Tweak>,
}

/// The values every signing and verification step derives from a
/// [`SessionContext`].
#[derive(Debug, Clone)]
pub struct SessionValues {
    /// Aggregate-key state after all tweaks.
    pub key_agg_ctx: KeyAggContext,
    /// The nonce coefficient binding the two nonce components.
    pub b: Scalar,
    /// The combined public nonce `R1 + b·R2`.
    pub r: PublicKey,
    /// The Schnorr challenge.
    pub e: Scalar,
}

impl SessionContext {
    /// Build a new session context.
    pub fn new(
        agg_pub_nonce: PubNonce,
        pub_keys: Vec<PublicKey>,
        msg: Vec<u8>,
        tweaks: Vec<Tweak>,
    ) -> SessionContext {
        SessionContext {
            agg_pub_nonce,
            pub_keys,
            msg,
            tweaks,
        }
    }

    /// The aggregate public nonce.
    pub fn agg_pub_nonce(&self) -> &PubNonce {
        &self.agg_pub_nonce
    }

    /// The ordered participant keys.
    pub fn pub_keys(&self) -> &[PublicKey] {
        &self.pub_keys
    }

    /// The message being signed.
    pub fn msg(&self) -> &[u8] {
        &self.msg
    }

    /// The tweaks applied to the aggregate key, in order.
    pub fn tweaks(&self) -> &[Tweak] {
        &self.tweaks
    }

    /// Derive the session values: aggregate and tweak the keys, then compute
    /// the nonce coefficient `b`, the combined nonce `R`, and the challenge
    /// `e`.
    ///
    /// If `R1 + b·R2` is the point at infinity, the generator is substituted
    /// so the signature stays well defined.
    pub fn values(&self) -> Result<SessionValues, Error> {
        let mut key_agg_ctx = key_agg(&self.pub_keys)?;
        for tweak in &self.tweaks {
            key_agg_ctx = apply_tweak(&key_agg_ctx, tweak)?;
        }

        let q_bytes = key_agg_ctx.q().x_only_bytes();

        let mut buf = Vec::with_capacity(66 + 32 + self.msg.len());
        buf.extend_from_slice(&self.agg_pub_nonce.bytes());
        buf.extend_from_slice(&q_bytes);
        buf.extend_from_slice(&self.msg);

        let b = Scalar::from_bytes_be(&tagged_hash(MUSIG_NONCE_COEF_TAG, &buf));

        let mut r = self
            .agg_pub_nonce
            .r1()
            .add(&self.agg_pub_nonce.r2().mul(&b));
        if r.is_infinity() {
            r = PublicKey::new(Point::generator());
        }

        let mut buf = Vec::with_capacity(64 + self.msg.len());
        buf.extend_from_slice(&r.x_only_bytes());
        buf.extend_from_slice(&q_bytes);
        buf.extend_from_slice(&self.msg);

        let e = Scalar::from_bytes_be(&tagged_hash(BIP340_CHALLENGE_TAG, &buf));

        Ok(SessionValues {
            key_agg_ctx,
            b,
            r,
            e,
        })
    }

    /// The aggregation coefficient of `pk` within this session's key list.
    ///
    /// Fails with [`Error::InvalidPublicKey`] if `pk` is not one of the
    /// session's participants.
    pub fn key_agg_coeff(&self, pk: &PublicKey) -> Result<Scalar, Error> {
        if !self.pub_keys.iter().any(|p| p == pk) {
            return Err(Error::InvalidPublicKey);
        }

        key_agg_coeff(&self.pub_keys, pk)
    }
}
