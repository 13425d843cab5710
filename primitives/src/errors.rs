use thiserror::Error;

/// Errors related to evaluation domains and polynomial arithmetic.
///
/// The `PolynomialError` enum covers everything that can go wrong while
/// building a domain, running an FFT over it, or combining polynomials in
/// evaluation form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// The requested domain needs more roots of unity than the field has.
    #[error(
        "invalid evaluation domain size: log size {log_size} exceeds two-adicity {two_adicity}"
    )]
    InvalidDomainSize { log_size: u32, two_adicity: u32 },

    /// A vector does not have the length the domain requires.
    #[error("length mismatch: expected at most {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Pointwise arithmetic between evaluations over different domains.
    #[error("evaluation forms are defined over different domains")]
    DomainMismatch,

    /// A divisor evaluation is zero and has no inverse.
    #[error("division by a zero evaluation")]
    DivisionByZero,

    #[error(
        "vanishing polynomial degree {degree} must be smaller than the domain size {domain_size}"
    )]
    VanishingDegreeTooLarge { degree: u64, domain_size: u64 },
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// setup, commitment, witness generation and verification, including those
/// from `PolynomialError`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    #[error("truncated degree is zero")]
    TruncatedDegreeZero,

    #[error("truncated degree {degree} exceeds the commit key max degree {max_degree}")]
    TruncatedDegreeTooLarge { degree: usize, max_degree: usize },

    /// Constant polynomials cannot be committed to.
    #[error("the committed polynomial has zero degree")]
    PolyDegreeZero,

    #[error("polynomial degree {degree} exceeds the commit key max degree {max_degree}")]
    PolyDegreeTooLarge { degree: usize, max_degree: usize },

    #[error("circuit degree is zero, cannot commit to constants")]
    CircuitDegreeZero,

    /// Batch inputs that should be aligned by index have different lengths.
    #[error(
        "size mismatch: {commitments} commitments, {points} points, \
         {evaluations} evaluations, {witnesses} witnesses"
    )]
    SizeMismatch {
        commitments: usize,
        points: usize,
        evaluations: usize,
        witnesses: usize,
    },

    #[error("not enough bytes to deserialize: expected {expected}, got {actual}")]
    SerializeShortBuffer { expected: usize, actual: usize },

    /// Error indicating an invalid input length scenario, typically an empty batch.
    #[error("invalid input length")]
    InvalidInputLength,

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),
}
