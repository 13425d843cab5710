use std::fmt;

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;

use crate::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
    traits::PointEncoding,
};

type G2Prepared = <Bls12_381 as Pairing>::G2Prepared;

/// The verifier's view of the reference string: `g` in G1, `h` and `x·h` in G2.
///
/// Both G2 points are also kept in prepared form so that each pairing check
/// skips the line-coefficient precomputation.
#[derive(Clone)]
pub struct OpeningKey {
    g: G1Affine,
    h: G2Affine,
    h_beta: G2Affine,
    h_prepared: G2Prepared,
    h_beta_prepared: G2Prepared,
}

impl OpeningKey {
    /// `g` (48) ‖ `h` (96) ‖ `h_beta` (96), all compressed.
    pub const BYTE_SIZE: usize = SIZE_OF_G1_AFFINE_COMPRESSED + 2 * SIZE_OF_G2_AFFINE_COMPRESSED;

    pub fn new(g: G1Affine, h: G2Affine, h_beta: G2Affine) -> Self {
        Self {
            g,
            h,
            h_beta,
            h_prepared: G2Prepared::from(h),
            h_beta_prepared: G2Prepared::from(h_beta),
        }
    }

    pub fn g(&self) -> &G1Affine {
        &self.g
    }

    pub fn h(&self) -> &G2Affine {
        &self.h
    }

    pub fn h_beta(&self) -> &G2Affine {
        &self.h_beta
    }

    pub fn h_prepared(&self) -> &G2Prepared {
        &self.h_prepared
    }

    pub fn h_beta_prepared(&self) -> &G2Prepared {
        &self.h_beta_prepared
    }

    pub fn to_bytes(&self) -> Result<[u8; OpeningKey::BYTE_SIZE], KzgError> {
        let mut bytes = [0u8; OpeningKey::BYTE_SIZE];
        let (g_bytes, rest) = bytes.split_at_mut(SIZE_OF_G1_AFFINE_COMPRESSED);
        let (h_bytes, h_beta_bytes) = rest.split_at_mut(SIZE_OF_G2_AFFINE_COMPRESSED);

        g_bytes.copy_from_slice(&self.g.to_compressed_bytes()?);
        h_bytes.copy_from_slice(&self.h.to_compressed_bytes()?);
        h_beta_bytes.copy_from_slice(&self.h_beta.to_compressed_bytes()?);
        Ok(bytes)
    }

    /// Decodes [`Self::to_bytes`], validating every point. Trailing bytes are
    /// rejected.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return None;
        }
        let (g_bytes, rest) = bytes.split_at(SIZE_OF_G1_AFFINE_COMPRESSED);
        let (h_bytes, h_beta_bytes) = rest.split_at(SIZE_OF_G2_AFFINE_COMPRESSED);

        Some(Self::new(
            G1Affine::from_compressed_bytes(g_bytes)?,
            G2Affine::from_compressed_bytes(h_bytes)?,
            G2Affine::from_compressed_bytes(h_beta_bytes)?,
        ))
    }
}

impl PartialEq for OpeningKey {
    fn eq(&self, other: &Self) -> bool {
        self.g == other.g && self.h == other.h && self.h_beta == other.h_beta
    }
}

impl Eq for OpeningKey {}

impl fmt::Debug for OpeningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpeningKey")
            .field("g", &self.g)
            .field("h", &self.h)
            .field("h_beta", &self.h_beta)
            .finish_non_exhaustive()
    }
}
