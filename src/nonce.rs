//! MuSig2 nonce generation and aggregation.
//!
//! Each signer derives two secret nonce scalars per session from fresh
//! randomness (optionally hedged with the signer's secret key), publishes the
//! corresponding point pair, and all published pairs are summed
//! component-wise into the session's aggregate public nonce.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::Error;
use crate::keys::{PLAIN_PUB_KEY_LEN, PrivateKey, PublicKey, xor32};
use crate::secp256k1::Scalar;
use crate::tagged_hash::tagged_hash;

/// Domain tag for masking the random draw with the secret key.
pub const MUSIG_AUX_TAG: &str = "MuSig/aux";

/// Domain tag for deriving the two nonce scalars.
pub const MUSIG_NONCE_TAG: &str = "MuSig/nonce";

/// Length in bytes of a serialised secret nonce: `k1 || k2 || pk`.
pub const SEC_NONCE_LEN: usize = 97;

/// Length in bytes of a serialised public nonce: `R1 || R2`.
pub const PUB_NONCE_LEN: usize = 66;

const ZERO_POINT_BYTES: [u8; PLAIN_PUB_KEY_LEN] = [0u8; PLAIN_PUB_KEY_LEN];

/// Optional inputs to [`nonce_gen`], with builder-style construction.
///
/// All fields default to absent. Binding the secret key, aggregate key and
/// message into the derivation hedges against weak randomness; the explicit
/// random bytes exist for deterministic testing.
#[derive(Debug, Clone, Default)]
pub struct NonceGenOptions {
    sk: Option<PrivateKey>,
    agg_pk: Option<PublicKey>,
    msg: Option<Vec<u8>>,
    extra_in: Option<Vec<u8>>,
    rand: Option<[u8; 32]>,
}

impl NonceGenOptions {
    /// Start from an empty option set.
    pub fn new() -> NonceGenOptions {
        NonceGenOptions::default()
    }

    /// Bind the signer's secret key into the derivation.
    pub fn with_secret_key(mut self, sk: PrivateKey) -> Self {
        self.sk = Some(sk);
        self
    }

    /// Bind the aggregate public key into the derivation.
    pub fn with_agg_key(mut self, agg_pk: PublicKey) -> Self {
        self.agg_pk = Some(agg_pk);
        self
    }

    /// Bind the message into the derivation. An absent message and an empty
    /// message are distinct inputs.
    pub fn with_message(mut self, msg: &[u8]) -> Self {
        self.msg = Some(msg.to_vec());
        self
    }

    /// Mix extra auxiliary bytes into the derivation.
    pub fn with_extra_in(mut self, extra: &[u8]) -> Self {
        self.extra_in = Some(extra.to_vec());
        self
    }

    /// Use the given bytes instead of drawing from the OS RNG.
    pub fn with_rand_bytes(mut self, rand: [u8; 32]) -> Self {
        self.rand = Some(rand);
        self
    }
}

/// A signer's secret nonce: two scalars and the public key they were
/// generated for.
#[derive(Debug, Clone)]
pub struct SecNonce {
    pub(crate) k1: PrivateKey,
    pub(crate) k2: PrivateKey,
    pk: PublicKey,
}

impl SecNonce {
    /// The public nonce pair `(k1·G, k2·G)`.
    pub fn pub_nonce(&self) -> PubNonce {
        PubNonce {
            r1: self.k1.public_key().clone(),
            r2: self.k2.public_key().clone(),
        }
    }

    /// The public key this nonce was generated for.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// The 97-byte encoding `k1 || k2 || pk`.
    pub fn bytes(&self) -> [u8; SEC_NONCE_LEN] {
        let mut out = [0u8; SEC_NONCE_LEN];
        out[..32].copy_from_slice(&self.k1.bytes());
        out[32..64].copy_from_slice(&self.k2.bytes());
        out[64..].copy_from_slice(&self.pk.plain_bytes());

        out
    }

    /// Decode a 97-byte secret nonce.
    pub fn from_bytes(b: &[u8]) -> Result<SecNonce, Error> {
        if b.len() != SEC_NONCE_LEN {
            return Err(Error::InvalidLength {
                expected: SEC_NONCE_LEN,
                got: b.len(),
            });
        }

        let k1 = PrivateKey::from_bytes(&b[..32])?;
        let k2 = PrivateKey::from_bytes(&b[32..64])?;
        let pk = PublicKey::from_plain_bytes(&b[64..])?;

        Ok(SecNonce { k1, k2, pk })
    }
}

/// A signer's public nonce pair, combined at signing time as `R1 + b·R2`.
///
/// Either component may be the point at infinity, encoded as 33 zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubNonce {
    r1: PublicKey,
    r2: PublicKey,
}

impl PubNonce {
    /// Construct a public nonce from its two components.
    pub fn new(r1: PublicKey, r2: PublicKey) -> PubNonce {
        PubNonce { r1, r2 }
    }

    /// The first nonce point.
    pub fn r1(&self) -> &PublicKey {
        &self.r1
    }

    /// The second nonce point.
    pub fn r2(&self) -> &PublicKey {
        &self.r2
    }

    /// The 66-byte encoding `R1 || R2`, with infinity components as zero
    /// blocks.
    pub fn bytes(&self) -> [u8; PUB_NONCE_LEN] {
        let mut out = [0u8; PUB_NONCE_LEN];
        out[..33].copy_from_slice(&self.r1.plain_bytes());
        out[33..].copy_from_slice(&self.r2.plain_bytes());

        out
    }

    /// Decode a 66-byte public nonce. An all-zero 33-byte block decodes as
    /// the point at infinity.
    pub fn from_bytes(b: &[u8]) -> Result<PubNonce, Error> {
        if b.len() != PUB_NONCE_LEN {
            return Err(Error::InvalidLength {
                expected: PUB_NONCE_LEN,
                got: b.len(),
            });
        }

        let r1 = if b[..33] == ZERO_POINT_BYTES {
            PublicKey::infinity()
        } else {
            PublicKey::from_plain_bytes(&b[..33])?
        };

        let r2 = if b[33..] == ZERO_POINT_BYTES {
            PublicKey::infinity()
        } else {
            PublicKey::from_plain_bytes(&b[33..])?
        };

        Ok(PubNonce { r1, r2 })
    }
}

/// A freshly generated secret nonce together with its public counterpart.
#[derive(Debug, Clone)]
pub struct Nonce {
    /// The secret half, kept by the signer.
    pub sec_nonce: SecNonce,
    /// The public half, broadcast to the other signers.
    pub pub_nonce: PubNonce,
}

/// Generate a nonce pair for the given public key.
///
/// Draws 32 fresh random bytes unless [`NonceGenOptions::with_rand_bytes`]
/// supplied them; when a secret key option is present, the draw is XORed with
/// `hash_aux(draw)` so the secret key hedges a weak RNG.
pub fn nonce_gen(pk: &PublicKey, opts: NonceGenOptions) -> Result<Nonce, Error> {
    let extra_in = opts.extra_in.as_deref().unwrap_or(&[]);
    if extra_in.len() > u32::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u32::MAX as usize,
            got: extra_in.len(),
        });
    }

    let mut rand_bytes = match opts.rand {
        Some(r) => r,
        None => {
            let mut buf = [0u8; 32];
            OsRng.try_fill_bytes(&mut buf).expect("OS RNG available");
            buf
        }
    };

    if let Some(sk) = &opts.sk {
        rand_bytes = xor32(&sk.bytes(), &tagged_hash(MUSIG_AUX_TAG, &rand_bytes));
    }

    let agg_pk_bytes: Vec<u8> = match &opts.agg_pk {
        Some(agg_pk) => agg_pk.x_only_bytes().to_vec(),
        None => Vec::new(),
    };

    let m_prefixed = match &opts.msg {
        None => vec![0x00],
        Some(m) => {
            let mut buf = Vec::with_capacity(1 + 8 + m.len());
            buf.push(0x01);
            buf.extend_from_slice(&(m.len() as u64).to_be_bytes());
            buf.extend_from_slice(m);
            buf
        }
    };

    let k1 = derive_nonce_key(1, pk, &rand_bytes, &agg_pk_bytes, &m_prefixed, extra_in)?;
    let k2 = derive_nonce_key(2, pk, &rand_bytes, &agg_pk_bytes, &m_prefixed, extra_in)?;

    let sec_nonce = SecNonce {
        k1,
        k2,
        pk: pk.clone(),
    };
    let pub_nonce = sec_nonce.pub_nonce();

    Ok(Nonce {
        sec_nonce,
        pub_nonce,
    })
}

/// `k_i = hash_nonce(rand || 33 || pk || len(aggpk) || aggpk || m' ||
/// len(extra) || extra || i-1) mod n`, for `i` in `{1, 2}`.
fn derive_nonce_key(
    i: u8,
    pk: &PublicKey,
    rand: &[u8; 32],
    agg_pk: &[u8],
    m_prefixed: &[u8],
    extra_in: &[u8],
) -> Result<PrivateKey, Error> {
    let mut buf = Vec::with_capacity(
        32 + 1 + PLAIN_PUB_KEY_LEN + 1 + agg_pk.len() + m_prefixed.len() + 4 + extra_in.len() + 1,
    );
    buf.extend_from_slice(rand);
    buf.push(PLAIN_PUB_KEY_LEN as u8);
    buf.extend_from_slice(&pk.plain_bytes());
    buf.push(agg_pk.len() as u8);
    buf.extend_from_slice(agg_pk);
    buf.extend_from_slice(m_prefixed);
    buf.extend_from_slice(&(extra_in.len() as u32).to_be_bytes());
    buf.extend_from_slice(extra_in);
    buf.push(i - 1);

    let k = Scalar::from_bytes_be(&tagged_hash(MUSIG_NONCE_TAG, &buf));
    if k.is_zero() {
        return Err(Error::ZeroNonce);
    }

    PrivateKey::from_scalar(k)
}

/// Sum all participants' public nonces component-wise.
///
/// Infinity components (all-zero blocks on the wire) sum as the identity;
/// rejecting them is the caller's responsibility. Use [`nonce_agg_strict`]
/// for an aggregation that refuses degenerate contributions outright.
pub fn nonce_agg(nonces: &[PubNonce]) -> PubNonce {
    let mut r1 = PublicKey::infinity();
    let mut r2 = PublicKey::infinity();

    for nonce in nonces {
        r1 = r1.add(&nonce.r1);
        r2 = r2.add(&nonce.r2);
    }

    PubNonce { r1, r2 }
}

/// Like [`nonce_agg`], but fails with [`Error::InfinityResult`] if any input
/// component, or either aggregate component, is the point at infinity.
pub fn nonce_agg_strict(nonces: &[PubNonce]) -> Result<PubNonce, Error> {
    for nonce in nonces {
        if nonce.r1.is_infinity() || nonce.r2.is_infinity() {
            return Err(Error::InfinityResult);
        }
    }

    let agg = nonce_agg(nonces);
    if agg.r1.is_infinity() || agg.r2.is_infinity() {
        return Err(Error::InfinityResult);
    }

    Ok(agg)
}
