use ark_bls12_381::{Bls12_381, Fr};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use rust_kzg_bls12_381_primitives::{
    commitment::{AggregatedProof, Commitment, Proof},
    errors::KzgError,
    helpers,
    keys::OpeningKey,
};
use tracing::debug;

type G2Prepared = <Bls12_381 as Pairing>::G2Prepared;

/// Checks a single opening with one multi-pairing.
///
/// The proof claims `p(z) = y` for the polynomial behind `commitment`. With
/// witness `W = [q(x)]₁` this holds iff
///
/// `e(C - y·g, h) · e(W, z·h - x·h) = 1`
///
/// # Arguments
/// * `opening_key` - Verifier key from the same setup as the commit key
/// * `commitment` - Commitment to the opened polynomial
/// * `proof` - Point, claimed evaluation and witness
///
/// # Returns
/// * `true` if the proof is valid, `false` otherwise
pub fn verify_single_polynomial(
    opening_key: &OpeningKey,
    commitment: &Commitment,
    proof: &Proof,
) -> bool {
    let commitment_minus_value =
        (commitment.0.into_group() - *opening_key.g() * proof.evaluation).into_affine();
    let point_minus_beta =
        (*opening_key.h() * proof.point - opening_key.h_beta().into_group()).into_affine();

    let valid = helpers::pairing_product_is_identity(
        [commitment_minus_value, proof.witness.0],
        [
            opening_key.h_prepared().clone(),
            G2Prepared::from(point_minus_beta),
        ],
    );

    debug!(valid, "verified single opening");
    valid
}

/// Folds commitments and evaluations with powers of `gamma` into one
/// commitment and one evaluation, the shape [verify_single_polynomial] checks.
///
/// # Returns
/// * `KzgError::SizeMismatch` when the two slices differ in length
/// * `KzgError::InvalidInputLength` when they are empty
pub fn verify_aggregation(
    commitments: &[Commitment],
    evaluations: &[Fr],
    gamma: &Fr,
) -> Result<(Commitment, Fr), KzgError> {
    if commitments.len() != evaluations.len() {
        return Err(KzgError::SizeMismatch {
            commitments: commitments.len(),
            points: 1,
            evaluations: evaluations.len(),
            witnesses: 1,
        });
    }
    if commitments.is_empty() {
        return Err(KzgError::InvalidInputLength);
    }

    let gamma_powers = helpers::generate_vec_powers(gamma, commitments.len() - 1);

    let points: Vec<_> = commitments.iter().map(|c| c.0).collect();
    let flattened_commitment = helpers::g1_lincomb(&points, &gamma_powers)?;
    let flattened_evaluation: Fr = gamma_powers
        .iter()
        .zip(evaluations)
        .map(|(power, evaluation)| *power * evaluation)
        .sum();

    Ok((Commitment(flattened_commitment), flattened_evaluation))
}

/// Checks an opening of several polynomials at one point.
///
/// `gamma` must be the challenge the prover drew, which the caller recovers by
/// replaying the prover's transcript.
pub fn verify_multiple_polynomials(
    opening_key: &OpeningKey,
    commitments: &[Commitment],
    aggregated_proof: &AggregatedProof,
    gamma: &Fr,
) -> Result<bool, KzgError> {
    let (commitment, evaluation) =
        verify_aggregation(commitments, &aggregated_proof.evaluations, gamma)?;
    let flattened = Proof {
        point: aggregated_proof.point,
        evaluation,
        witness: aggregated_proof.witness,
    };

    let valid = verify_single_polynomial(opening_key, &commitment, &flattened);
    debug!(
        valid,
        num_polynomials = commitments.len(),
        "verified aggregated opening"
    );
    Ok(valid)
}
