//! MuSig2 key aggregation and tweaking.
//!
//! Aggregates a set of public keys into one x-only signing key. Each key is
//! weighted by a tagged-hash coefficient over the whole key list, which stops
//! a participant from choosing a key that cancels the others out. The
//! "second distinct key" in the list gets coefficient 1, saving one scalar
//! multiplication without weakening the scheme.

use log::debug;
use num_bigint::BigUint;

use crate::error::Error;
use crate::keys::{PLAIN_PUB_KEY_LEN, PublicKey};
use crate::secp256k1::{self, Point, Scalar};
use crate::tagged_hash::tagged_hash;

/// Domain tag for hashing the ordered key list.
pub const KEY_AGG_LIST_TAG: &str = "KeyAgg list";

/// Domain tag for deriving per-key coefficients.
pub const KEY_AGG_COEFFICIENT_TAG: &str = "KeyAgg coefficient";

/// Length in bytes of a serialised tweak.
pub const TWEAK_LEN: usize = 32;

/// Sort public keys lexicographically by their plain encodings.
///
/// The sort is stable, so duplicate keys stay adjacent in input order.
pub fn key_sort(pks: &[PublicKey]) -> Vec<PublicKey> {
    let mut keys = pks.to_vec();
    keys.sort_by_key(|pk| pk.plain_bytes());

    keys
}

/// The accumulated state of key aggregation and tweaking.
///
/// `q` is the (possibly tweaked) aggregate key. `tacc` is the running tweak
/// scalar, folded back in only when partial signatures are aggregated.
/// `gacc` records whether signers must negate their secret keys due to the
/// most recent Y-parity flip.
#[derive(Debug, Clone)]
pub struct KeyAggContext {
    q: PublicKey,
    tacc: Scalar,
    gacc: Scalar,
}

impl KeyAggContext {
    /// The aggregate (and potentially tweaked) public key.
    pub fn q(&self) -> &PublicKey {
        &self.q
    }

    /// The accumulated tweak scalar.
    pub fn tacc(&self) -> &Scalar {
        &self.tacc
    }

    /// The sign-flip scalar: 1 or n-1.
    pub fn gacc(&self) -> &Scalar {
        &self.gacc
    }
}

/// Aggregate the given public keys into a fresh [`KeyAggContext`].
///
/// Duplicate keys are valid input; each occurrence contributes its
/// coefficient's share independently. Fails with
/// [`Error::InfinityResult`] if the weighted sum collapses to infinity.
pub fn key_agg(pks: &[PublicKey]) -> Result<KeyAggContext, Error> {
    let pk2 = get_second_key(pks)?;

    let mut q = PublicKey::infinity();
    for pk in pks {
        q = q.add(&pk.mul(&key_agg_coeff_internal(pks, pk, &pk2)));
    }

    if q.is_infinity() {
        return Err(Error::InfinityResult);
    }

    debug!("aggregated {} public keys", pks.len());

    Ok(KeyAggContext {
        q,
        tacc: Scalar::zero(),
        gacc: Scalar::one(),
    })
}

/// The plain encoding of the first key in the list that differs from the
/// first key. If every key is identical, a 32-byte zero sentinel is returned,
/// which no plain encoding can match.
pub fn get_second_key(pks: &[PublicKey]) -> Result<Vec<u8>, Error> {
    if pks.is_empty() {
        return Err(Error::InvalidLength {
            expected: 1,
            got: 0,
        });
    }

    for pk in pks {
        if pk != &pks[0] {
            return Ok(pk.plain_bytes().to_vec());
        }
    }

    Ok(vec![0u8; 32])
}

/// The aggregation coefficient for `pk` within the key list `pks`.
pub fn key_agg_coeff(pks: &[PublicKey], pk: &PublicKey) -> Result<Scalar, Error> {
    let pk2 = get_second_key(pks)?;

    Ok(key_agg_coeff_internal(pks, pk, &pk2))
}

pub(crate) fn key_agg_coeff_internal(pks: &[PublicKey], pk: &PublicKey, pk2: &[u8]) -> Scalar {
    if pk.plain_bytes().as_slice() == pk2 {
        return Scalar::one();
    }

    let l = hash_keys(pks);

    let mut buf = Vec::with_capacity(32 + PLAIN_PUB_KEY_LEN);
    buf.extend_from_slice(&l);
    buf.extend_from_slice(&pk.plain_bytes());

    Scalar::from_bytes_be(&tagged_hash(KEY_AGG_COEFFICIENT_TAG, &buf))
}

/// The tagged hash of the plain encodings of all keys, in list order.
pub fn hash_keys(pks: &[PublicKey]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(pks.len() * PLAIN_PUB_KEY_LEN);
    for pk in pks {
        buf.extend_from_slice(&pk.plain_bytes());
    }

    tagged_hash(KEY_AGG_LIST_TAG, &buf)
}

/// A scalar offset to apply to an aggregate public key.
///
/// An x-only tweak first canonicalises the current aggregate to even Y; a
/// plain tweak applies to the point as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweak {
    t: Scalar,
    xonly: bool,
}

impl Tweak {
    /// Construct a tweak from its 32-byte big-endian scalar encoding.
    pub fn new(b: &[u8], xonly: bool) -> Result<Tweak, Error> {
        if b.len() != TWEAK_LEN {
            return Err(Error::InvalidLength {
                expected: TWEAK_LEN,
                got: b.len(),
            });
        }

        let t = BigUint::from_bytes_be(b);
        if t >= *secp256k1::N {
            return Err(Error::OutOfRange);
        }

        Ok(Tweak {
            t: Scalar::new(t),
            xonly,
        })
    }

    /// The tweak scalar.
    pub fn t(&self) -> &Scalar {
        &self.t
    }

    /// Whether the tweak is applied in x-only mode.
    pub fn is_xonly(&self) -> bool {
        self.xonly
    }
}

/// Apply a tweak to an aggregation context, producing the next context.
///
/// `Q' = g·Q + t·G` with `g = n-1` when an x-only tweak meets an odd-Y `Q`,
/// else `g = 1`. `tacc' = t + g·tacc` folds every earlier tweak through the
/// current flip, so `gacc'` stores only this call's `g` — it is not a running
/// product.
pub fn apply_tweak(ctx: &KeyAggContext, tweak: &Tweak) -> Result<KeyAggContext, Error> {
    let g = if tweak.xonly && !ctx.q.has_even_y() {
        -&Scalar::one()
    } else {
        Scalar::one()
    };

    let q = ctx
        .q
        .mul(&g)
        .add(&PublicKey::new(&Point::generator() * &tweak.t));

    if q.is_infinity() {
        return Err(Error::InfinityResult);
    }

    let tacc = &tweak.t + &(&g * &ctx.tacc);

    debug!(
        "applied {} tweak",
        if tweak.xonly { "x-only" } else { "plain" },
    );

    Ok(KeyAggContext { q, tacc, gacc: g })
}
