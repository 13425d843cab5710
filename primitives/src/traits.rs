use ark_bls12_381::{g1, g2};
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{
    consts::{
        SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G1_AFFINE_UNCOMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_UNCOMPRESSED,
    },
    errors::KzgError,
};

/// Fixed-size little-endian encodings of curve points, in the arkworks
/// canonical format.
///
/// Compressed decoding always runs the on-curve and subgroup checks. The
/// uncompressed path skips them and is meant for trusted inputs such as a
/// locally cached reference string.
pub trait PointEncoding: AffineRepr {
    const COMPRESSED_SIZE: usize;
    const UNCOMPRESSED_SIZE: usize;

    fn to_compressed_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(Self::COMPRESSED_SIZE);
        self.serialize_compressed(&mut bytes)
            .map_err(|e| KzgError::SerializationError(e.to_string()))?;
        Ok(bytes)
    }

    fn to_uncompressed_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(Self::UNCOMPRESSED_SIZE);
        self.serialize_uncompressed(&mut bytes)
            .map_err(|e| KzgError::SerializationError(e.to_string()))?;
        Ok(bytes)
    }

    fn from_compressed_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::COMPRESSED_SIZE {
            return None;
        }
        Self::deserialize_compressed(bytes).ok()
    }

    fn from_uncompressed_bytes_unchecked(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::UNCOMPRESSED_SIZE {
            return None;
        }
        Self::deserialize_uncompressed_unchecked(bytes).ok()
    }
}

/// Encoded point sizes, keyed by curve configuration. The G1 and G2 affine
/// aliases are projections of one pairing config and cannot carry separate
/// impls.
pub trait EncodedSize: SWCurveConfig {
    const COMPRESSED_SIZE: usize;
    const UNCOMPRESSED_SIZE: usize;
}

impl EncodedSize for g1::Config {
    const COMPRESSED_SIZE: usize = SIZE_OF_G1_AFFINE_COMPRESSED;
    const UNCOMPRESSED_SIZE: usize = SIZE_OF_G1_AFFINE_UNCOMPRESSED;
}

impl EncodedSize for g2::Config {
    const COMPRESSED_SIZE: usize = SIZE_OF_G2_AFFINE_COMPRESSED;
    const UNCOMPRESSED_SIZE: usize = SIZE_OF_G2_AFFINE_UNCOMPRESSED;
}

impl<P: EncodedSize> PointEncoding for Affine<P> {
    const COMPRESSED_SIZE: usize = P::COMPRESSED_SIZE;
    const UNCOMPRESSED_SIZE: usize = P::UNCOMPRESSED_SIZE;
}
