use ark_bls12_381::{G1Affine, G1Projective};
use ark_ec::CurveGroup;
use ark_std::rand::RngCore;
use byteorder::{ByteOrder, LittleEndian};
use num_traits::ToPrimitive;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    consts::{
        EXTRA_BLINDING_DEGREE, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G1_AFFINE_UNCOMPRESSED,
        SIZE_OF_U64,
    },
    errors::KzgError,
    helpers,
    keys::OpeningKey,
    traits::PointEncoding,
};
use tracing::debug;

/// The prover's half of the reference string: `[g, x·g, x²·g, ..., x^d·g]`.
///
/// A key can only shrink, through [CommitKey::truncate].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CommitKey {
    powers_of_g: Vec<G1Affine>,
}

impl CommitKey {
    pub fn new(powers_of_g: Vec<G1Affine>) -> Self {
        Self { powers_of_g }
    }

    pub fn powers_of_g(&self) -> &[G1Affine] {
        &self.powers_of_g
    }

    /// Highest degree of a polynomial this key can commit to.
    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len().saturating_sub(1)
    }

    /// Returns a key holding only the first `truncated_degree + 1` powers.
    ///
    /// # Arguments
    /// * `truncated_degree` - Degree of the new key. A degree of 1 is raised to
    ///   2 so the key can still hold a blinded linear polynomial.
    ///
    /// # Returns
    /// * `KzgError::TruncatedDegreeZero` for degree 0
    /// * `KzgError::TruncatedDegreeTooLarge` above [Self::max_degree]
    pub fn truncate(&self, truncated_degree: usize) -> Result<CommitKey, KzgError> {
        if truncated_degree == 0 {
            return Err(KzgError::TruncatedDegreeZero);
        }
        let truncated_degree = if truncated_degree == 1 {
            2
        } else {
            truncated_degree
        };
        if truncated_degree > self.max_degree() {
            return Err(KzgError::TruncatedDegreeTooLarge {
                degree: truncated_degree,
                max_degree: self.max_degree(),
            });
        }

        Ok(CommitKey {
            powers_of_g: self.powers_of_g[..=truncated_degree].to_vec(),
        })
    }

    /// Rejects polynomials this key must not commit to: constants, and anything
    /// above [Self::max_degree].
    pub fn check_polynomial_degree(&self, poly_degree: usize) -> Result<(), KzgError> {
        if poly_degree == 0 {
            return Err(KzgError::PolyDegreeZero);
        }
        self.check_degree_bound(poly_degree)
    }

    pub(crate) fn check_degree_bound(&self, poly_degree: usize) -> Result<(), KzgError> {
        if poly_degree > self.max_degree() {
            return Err(KzgError::PolyDegreeTooLarge {
                degree: poly_degree,
                max_degree: self.max_degree(),
            });
        }
        Ok(())
    }

    /// `u64` point count (LE) followed by every point uncompressed.
    pub fn to_raw_var_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(
            SIZE_OF_U64 + self.powers_of_g.len() * SIZE_OF_G1_AFFINE_UNCOMPRESSED,
        );
        let mut count = [0u8; SIZE_OF_U64];
        LittleEndian::write_u64(&mut count, self.powers_of_g.len() as u64);
        bytes.extend_from_slice(&count);
        for point in &self.powers_of_g {
            bytes.extend_from_slice(&point.to_uncompressed_bytes()?);
        }
        Ok(bytes)
    }

    /// Decodes [Self::to_raw_var_bytes] without checking that the points lie
    /// in the G1 subgroup. Only use on bytes produced by a trusted party.
    ///
    /// # Returns
    /// * `KzgError::SerializeShortBuffer` when the buffer cannot hold the count
    ///   prefix or the points it announces.
    pub fn from_slice_unchecked(bytes: &[u8]) -> Result<Self, KzgError> {
        if bytes.len() < SIZE_OF_U64 {
            return Err(KzgError::SerializeShortBuffer {
                expected: SIZE_OF_U64,
                actual: bytes.len(),
            });
        }
        let count = LittleEndian::read_u64(&bytes[..SIZE_OF_U64])
            .to_usize()
            .ok_or_else(|| {
                KzgError::SerializationError("point count overflows usize".to_string())
            })?;
        let expected = count
            .checked_mul(SIZE_OF_G1_AFFINE_UNCOMPRESSED)
            .and_then(|len| len.checked_add(SIZE_OF_U64))
            .ok_or_else(|| {
                KzgError::SerializationError("point count overflows usize".to_string())
            })?;
        if bytes.len() < expected {
            return Err(KzgError::SerializeShortBuffer {
                expected,
                actual: bytes.len(),
            });
        }

        let point_bytes = &bytes[SIZE_OF_U64..expected];
        #[cfg(feature = "parallel")]
        let chunks = point_bytes.par_chunks_exact(SIZE_OF_G1_AFFINE_UNCOMPRESSED);
        #[cfg(not(feature = "parallel"))]
        let chunks = point_bytes.chunks_exact(SIZE_OF_G1_AFFINE_UNCOMPRESSED);

        let powers_of_g = chunks
            .map(|chunk| {
                G1Affine::from_uncompressed_bytes_unchecked(chunk)
                    .ok_or_else(|| KzgError::SerializationError("invalid G1 point".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { powers_of_g })
    }

    /// Every point compressed, without a count prefix.
    pub fn to_var_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.powers_of_g.len() * SIZE_OF_G1_AFFINE_COMPRESSED);
        for point in &self.powers_of_g {
            bytes.extend_from_slice(&point.to_compressed_bytes()?);
        }
        Ok(bytes)
    }

    /// Decodes [Self::to_var_bytes], validating every point. Returns `None`
    /// when the length is not a whole number of points or a point is invalid.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() % SIZE_OF_G1_AFFINE_COMPRESSED != 0 {
            return None;
        }

        #[cfg(feature = "parallel")]
        let chunks = bytes.par_chunks_exact(SIZE_OF_G1_AFFINE_COMPRESSED);
        #[cfg(not(feature = "parallel"))]
        let chunks = bytes.chunks_exact(SIZE_OF_G1_AFFINE_COMPRESSED);

        let powers_of_g = chunks
            .map(G1Affine::from_compressed_bytes)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { powers_of_g })
    }
}

/// The full output of a trusted setup: a [CommitKey] for the prover and an
/// [OpeningKey] for the verifier.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ReferenceString {
    commit_key: CommitKey,
    opening_key: OpeningKey,
}

impl ReferenceString {
    /// Runs a local trusted setup. The secret `x` is sampled from `rng` and
    /// dropped before returning, so this is only suitable for tests and
    /// single-party deployments.
    ///
    /// # Arguments
    /// * `max_degree` - Largest polynomial degree the caller plans to commit
    ///   to. [EXTRA_BLINDING_DEGREE] powers are added on top.
    /// * `rng` - Source of the secret and the random generators.
    ///
    /// # Returns
    /// * `KzgError::CircuitDegreeZero` when `max_degree` is 0
    pub fn setup<R: RngCore + ?Sized>(max_degree: usize, rng: &mut R) -> Result<Self, KzgError> {
        if max_degree < 1 {
            return Err(KzgError::CircuitDegreeZero);
        }
        let max_degree = max_degree + EXTRA_BLINDING_DEGREE;

        let x = helpers::random_scalar(rng);
        let g = helpers::random_g1_point(rng);
        let h = helpers::random_g2_point(rng);

        let powers_of_x = helpers::generate_vec_powers(&x, max_degree);
        let powers_of_g: Vec<G1Projective> =
            helpers::slow_multi_scalar_mul_single_base(&powers_of_x, &g);
        let powers_of_g = G1Projective::normalize_batch(&powers_of_g);

        let h_beta = (h * x).into_affine();
        let opening_key = OpeningKey::new(g.into_affine(), h.into_affine(), h_beta);

        debug!(max_degree, "generated reference string");
        Ok(Self {
            commit_key: CommitKey { powers_of_g },
            opening_key,
        })
    }

    /// Splits the reference string into keys sized for polynomials up to
    /// `truncated_degree`, keeping room for the blinding terms.
    pub fn trim(self, truncated_degree: usize) -> Result<(CommitKey, OpeningKey), KzgError> {
        let commit_key = self
            .commit_key
            .truncate(truncated_degree.saturating_add(EXTRA_BLINDING_DEGREE))?;
        debug!(
            truncated_degree,
            max_degree = commit_key.max_degree(),
            "trimmed reference string"
        );
        Ok((commit_key, self.opening_key))
    }

    pub fn commit_key(&self) -> &CommitKey {
        &self.commit_key
    }

    pub fn opening_key(&self) -> &OpeningKey {
        &self.opening_key
    }

    /// Opening key followed by the compressed commit key.
    pub fn to_var_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = self.opening_key.to_bytes()?.to_vec();
        bytes.extend_from_slice(&self.commit_key.to_var_bytes()?);
        Ok(bytes)
    }

    /// Opening key followed by the raw, count-prefixed commit key.
    pub fn to_raw_var_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = self.opening_key.to_bytes()?.to_vec();
        bytes.extend_from_slice(&self.commit_key.to_raw_var_bytes()?);
        Ok(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < OpeningKey::BYTE_SIZE {
            return None;
        }
        let (opening_key_bytes, commit_key_bytes) = bytes.split_at(OpeningKey::BYTE_SIZE);
        Some(Self {
            opening_key: OpeningKey::from_bytes(opening_key_bytes)?,
            commit_key: CommitKey::from_slice(commit_key_bytes)?,
        })
    }

    /// Decodes [Self::to_raw_var_bytes]. The opening key is still validated;
    /// the commit key points are not.
    pub fn from_slice_unchecked(bytes: &[u8]) -> Result<Self, KzgError> {
        if bytes.len() < OpeningKey::BYTE_SIZE {
            return Err(KzgError::SerializeShortBuffer {
                expected: OpeningKey::BYTE_SIZE,
                actual: bytes.len(),
            });
        }
        let (opening_key_bytes, commit_key_bytes) = bytes.split_at(OpeningKey::BYTE_SIZE);
        let opening_key = OpeningKey::from_bytes(opening_key_bytes)
            .ok_or_else(|| KzgError::SerializationError("invalid opening key".to_string()))?;
        Ok(Self {
            opening_key,
            commit_key: CommitKey::from_slice_unchecked(commit_key_bytes)?,
        })
    }
}
