use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{errors::KzgError, traits::PointEncoding};

/// A KZG commitment: a single G1 point binding a polynomial.
#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment(pub G1Affine);

impl Commitment {
    /// The point at infinity, which commits to the zero polynomial.
    pub fn identity() -> Self {
        Self(G1Affine::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Compressed encoding, 48 bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        self.0.to_compressed_bytes()
    }

    /// Decodes a compressed point, rejecting points outside the G1 subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        G1Affine::from_compressed_bytes(bytes).map(Self)
    }
}

impl Default for Commitment {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<G1Affine> for Commitment {
    fn from(point: G1Affine) -> Self {
        Self(point)
    }
}

impl From<G1Projective> for Commitment {
    fn from(point: G1Projective) -> Self {
        Self(point.into_affine())
    }
}

/// Opening of one polynomial at one point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof {
    /// The point the polynomial was opened at.
    pub point: Fr,
    /// The claimed value `p(point)`.
    pub evaluation: Fr,
    /// Commitment to the quotient `(p(X) - p(point)) / (X - point)`.
    pub witness: Commitment,
}

/// Opening of several polynomials at the same point with a single witness.
///
/// The witness commits to the quotient of `Σ γⁱ·pᵢ(X)` where `γ` is drawn from
/// the transcript after the commitments were appended.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct AggregatedProof {
    pub point: Fr,
    /// `pᵢ(point)` for every polynomial, in commitment order.
    pub evaluations: Vec<Fr>,
    pub witness: Commitment,
}

/// Openings at many points, verified together with one pairing check.
/// The three vectors are aligned by index.
#[derive(Clone, Debug, Default, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct BatchProof {
    pub points: Vec<Fr>,
    pub evaluations: Vec<Fr>,
    pub witnesses: Vec<Commitment>,
}

impl BatchProof {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, proof: Proof) {
        self.points.push(proof.point);
        self.evaluations.push(proof.evaluation);
        self.witnesses.push(proof.witness);
    }

    /// Number of openings, or `None` when the vectors disagree in length.
    pub fn len(&self) -> Option<usize> {
        let n = self.points.len();
        (self.evaluations.len() == n && self.witnesses.len() == n).then_some(n)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.evaluations.is_empty() && self.witnesses.is_empty()
    }
}

impl FromIterator<Proof> for BatchProof {
    fn from_iter<I: IntoIterator<Item = Proof>>(iter: I) -> Self {
        let mut batch = Self::new();
        for proof in iter {
            batch.push(proof);
        }
        batch
    }
}
