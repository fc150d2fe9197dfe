use thiserror::Error;

/// Errors that can occur across the field, curve, Schnorr and MuSig2 layers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A binary field operation was attempted on elements of different
    /// finite fields.
    #[error("elements must be in the same finite field")]
    FieldMismatch,

    /// The given coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// An operation was attempted on two points of different curves.
    #[error("points are not on the same curve")]
    PointsNotOnSameCurve,

    /// A byte buffer had the wrong length for the value being decoded.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Number of bytes the encoding requires.
        expected: usize,
        /// Number of bytes actually supplied.
        got: usize,
    },

    /// A scalar or coordinate was outside its valid range.
    #[error("value out of range")]
    OutOfRange,

    /// An aggregate or tweaked key, or a combined nonce, collapsed to the
    /// point at infinity. The protocol run must be aborted.
    #[error("result is the point at infinity")]
    InfinityResult,

    /// A signature (or partial signature) failed verification.
    #[error("invalid signature")]
    InvalidSignature,

    /// A derived nonce scalar reduced to zero.
    #[error("nonce scalar is zero")]
    ZeroNonce,

    /// No curve point exists with the given x coordinate and even y.
    #[error("could not lift x")]
    CouldNotLiftX,

    /// The input public key was invalid, or not part of the signing session.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// A freshly produced signature failed its own verification. This is an
    /// implementation bug, never a caller error.
    #[error("self-check of produced signature failed")]
    SelfCheckFailure,
}
