//! BIP-340 Schnorr signatures and the MuSig2 multi-signature protocol over
//! secp256k1, built on an exact big-integer finite-field and curve core.
//!
//! The layers build bottom-up: [`field`] → [`curve`] → [`secp256k1`] →
//! [`keys`]/[`signature`] → the MuSig2 modules ([`keyagg`], [`nonce`],
//! [`session`], [`sign`]). All arithmetic is variable-time; see the module
//! docs for the limitations that follow from that.

pub mod error;
pub use error::Error;
pub mod tagged_hash;
pub use tagged_hash::tagged_hash;
pub mod field;
pub use field::FieldElement;
pub mod curve;
pub mod secp256k1;
pub mod keys;
pub use keys::{PrivateKey, PublicKey, lift_x};
pub mod signature;
pub use signature::{Signature, batch_verify};
pub mod keyagg;
pub use keyagg::{KeyAggContext, Tweak, apply_tweak, key_agg, key_agg_coeff, key_sort};
pub mod nonce;
pub use nonce::{Nonce, NonceGenOptions, PubNonce, SecNonce, nonce_agg, nonce_agg_strict, nonce_gen};
pub mod session;
pub use session::{SessionContext, SessionValues};
pub mod sign;
pub use sign::{PartialSig, partial_sig_agg, sign};
