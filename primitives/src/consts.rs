pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48; // in bytes
pub const SIZE_OF_G1_AFFINE_UNCOMPRESSED: usize = 96; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 96; // in bytes
pub const SIZE_OF_G2_AFFINE_UNCOMPRESSED: usize = 192; // in bytes
pub const SIZE_OF_U64: usize = 8;

/// Largest `k` such that `2^k` divides `r - 1` for the BLS12-381 scalar field.
/// Bounds the size of any [crate::domain::EvaluationDomain].
pub const TWO_ADICITY: u32 = 32;

/// Extra SRS capacity reserved for blinding terms added by higher level
/// protocols: one per wire (four wires) and two for the permutation polynomial.
pub const EXTRA_BLINDING_DEGREE: usize = 6;

/// Number of challenge bytes drawn from the transcript before the wide
/// reduction into the scalar field.
pub const CHALLENGE_BYTES: usize = 64;

pub const TRANSCRIPT_DOMAIN: &[u8] = b"KZG_BLS12_381_COMMITMENT_V1_";
pub const CHALLENGE_GAMMA_LABEL: &[u8] = b"challenge_gamma";
pub const CHALLENGE_U_LABEL: &[u8] = b"challenge_u";
