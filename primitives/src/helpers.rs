use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, Field, PrimeField, UniformRand};
use ark_serialize::CanonicalDeserialize;
use ark_std::{rand::RngCore, One, Zero};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError};

/// For a given field element x, computes [1, x, x², x³, ..., x^max_degree]
///
/// # Arguments
/// * `value` - The field element to compute powers of
/// * `max_degree` - The highest exponent, so the result holds `max_degree + 1` entries
///
/// # Returns
/// * Vector of field elements containing powers: [x⁰, x¹, x², ..., x^max_degree]
pub fn generate_vec_powers(value: &Fr, max_degree: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(max_degree + 1);
    let mut current = Fr::one();
    for _ in 0..=max_degree {
        powers.push(current);
        current *= value;
    }
    powers
}

/// Inverts every non-zero element of `values` in place with a single field
/// inversion (Montgomery's trick). Zero entries are left untouched.
pub fn batch_inversion(values: &mut [Fr]) {
    // prefix products over the non-zero entries only
    let mut prefix = Vec::with_capacity(values.len());
    let mut acc = Fr::one();
    for value in values.iter().filter(|value| !value.is_zero()) {
        acc *= value;
        prefix.push(acc);
    }

    let mut inverse = match acc.inverse() {
        Some(inverse) => inverse,
        None => return,
    };

    // walk backwards: inverse holds (v_0 * ... * v_i)^-1 when visiting v_i
    let mut remaining = prefix.len();
    for value in values.iter_mut().rev().filter(|value| !value.is_zero()) {
        remaining -= 1;
        let before = if remaining == 0 {
            Fr::one()
        } else {
            prefix[remaining - 1]
        };
        let next_inverse = inverse * *value;
        *value = inverse * before;
        inverse = next_inverse;
    }
}

/// Canonical 32 byte little-endian encoding of a scalar.
pub fn fr_to_le_bytes(scalar: &Fr) -> Vec<u8> {
    scalar.into_bigint().to_bytes_le()
}

/// Decodes a canonical little-endian scalar. Returns `None` for encodings
/// that are not exactly [`BYTES_PER_FIELD_ELEMENT`] long or not reduced
/// modulo the field order.
pub fn fr_from_le_bytes(bytes: &[u8]) -> Option<Fr> {
    if bytes.len() != BYTES_PER_FIELD_ELEMENT {
        return None;
    }
    Fr::deserialize_compressed(bytes).ok()
}

pub fn random_scalar<R: RngCore + ?Sized>(rng: &mut R) -> Fr {
    Fr::rand(rng)
}

/// Samples a uniformly random G1 element as a random multiple of the generator.
pub fn random_g1_point<R: RngCore + ?Sized>(rng: &mut R) -> G1Projective {
    G1Affine::generator() * random_scalar(rng)
}

/// Samples a uniformly random G2 element as a random multiple of the generator.
pub fn random_g2_point<R: RngCore + ?Sized>(rng: &mut R) -> G2Projective {
    ark_bls12_381::G2Affine::generator() * random_scalar(rng)
}

/// Multiplies a single base by every scalar, one scalar multiplication each.
/// Used by the SRS setup where all powers share the same generator.
pub fn slow_multi_scalar_mul_single_base(scalars: &[Fr], base: &G1Projective) -> Vec<G1Projective> {
    #[cfg(feature = "parallel")]
    let iter = scalars.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = scalars.iter();

    iter.map(|scalar| *base * *scalar).collect()
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// Computes: s₁P₁ + s₂P₂ + ... + sₙPₙ
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation.
///
/// # Arguments
/// * `points` - Array of G1 points in affine form
/// * `scalars` - Array of field elements as scalar weights
///
/// # Returns
/// * Single G1 point in affine form representing the linear combination
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Checks `e(a₁, b₁) · e(a₂, b₂) == 1` in the target group with one shared
/// final exponentiation.
pub fn pairing_product_is_identity(
    g1_points: [G1Affine; 2],
    g2_prepared: [<Bls12_381 as Pairing>::G2Prepared; 2],
) -> bool {
    let miller_loop = Bls12_381::multi_miller_loop(g1_points, g2_prepared);
    Bls12_381::final_exponentiation(miller_loop).map_or(false, |gt| gt.is_zero())
}
