use ark_bls12_381::{Fr, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use rust_kzg_bls12_381_primitives::{
    commitment::{BatchProof, Commitment},
    errors::KzgError,
    helpers,
    keys::OpeningKey,
};
use tracing::debug;

/// Checks openings at many points with a single two-pairing product.
///
/// Every opening `i` satisfies `e(Cᵢ - yᵢ·g + zᵢ·Wᵢ, h) = e(Wᵢ, x·h)`. The
/// equations are combined with powers of the random challenge `u`:
///
/// `e(-Σ uⁱ·Wᵢ, x·h) · e(Σ uⁱ·(Cᵢ + zᵢ·Wᵢ) - (Σ uⁱ·yᵢ)·g, h) = 1`
///
/// # Arguments
/// * `opening_key` - Verifier key
/// * `commitments` - One commitment per opening, aligned with `batch_proof`
/// * `batch_proof` - Points, evaluations and witnesses
/// * `u` - Challenge unknown to the prover when the witnesses were fixed
///
/// # Returns
/// * `KzgError::SizeMismatch` unless all four inputs have the same length
/// * `KzgError::InvalidInputLength` for an empty batch
pub fn verify_multiple_points(
    opening_key: &OpeningKey,
    commitments: &[Commitment],
    batch_proof: &BatchProof,
    u: &Fr,
) -> Result<bool, KzgError> {
    let n = commitments.len();
    if batch_proof.points.len() != n
        || batch_proof.evaluations.len() != n
        || batch_proof.witnesses.len() != n
    {
        return Err(KzgError::SizeMismatch {
            commitments: n,
            points: batch_proof.points.len(),
            evaluations: batch_proof.evaluations.len(),
            witnesses: batch_proof.witnesses.len(),
        });
    }
    if n == 0 {
        return Err(KzgError::InvalidInputLength);
    }

    let u_powers = helpers::generate_vec_powers(u, n - 1);

    // Cᵢ' = Cᵢ + zᵢ·Wᵢ
    let shifted_commitments: Vec<G1Projective> = commitments
        .iter()
        .zip(batch_proof.points.iter().zip(batch_proof.witnesses.iter()))
        .map(|(commitment, (point, witness))| commitment.0.into_group() + witness.0 * point)
        .collect();
    let shifted_commitments = G1Projective::normalize_batch(&shifted_commitments);

    let aggregated_evaluation: Fr = u_powers
        .iter()
        .zip(batch_proof.evaluations.iter())
        .map(|(power, evaluation)| *power * evaluation)
        .sum();

    let total_commitment = G1Projective::msm(&shifted_commitments, &u_powers)
        .map_err(|e| KzgError::MsmError(e.to_string()))?
        - *opening_key.g() * aggregated_evaluation;

    let witnesses: Vec<_> = batch_proof.witnesses.iter().map(|w| w.0).collect();
    let total_witness = helpers::g1_lincomb(&witnesses, &u_powers)?;

    let valid = helpers::pairing_product_is_identity(
        [-total_witness, total_commitment.into_affine()],
        [
            opening_key.h_beta_prepared().clone(),
            opening_key.h_prepared().clone(),
        ],
    );

    debug!(valid, num_openings = n, "verified batch of openings");
    Ok(valid)
}
