use ark_bls12_381::Fr;
use rust_kzg_bls12_381_primitives::{
    commitment::{AggregatedProof, Commitment, Proof},
    consts::CHALLENGE_GAMMA_LABEL,
    errors::KzgError,
    helpers,
    polynomial::CoefficientForm,
    transcript::TranscriptProtocol,
};
use tracing::debug;

use crate::srs::CommitKey;

/// Commits to `polynomial` as `Σ cᵢ·(xⁱ·g)`.
///
/// # Arguments
/// * `commit_key` - Powers of the setup secret in G1
/// * `polynomial` - Polynomial in coefficient form, of degree between 1 and
///   `commit_key.max_degree()`
///
/// # Returns
/// * `KzgError::PolyDegreeZero` for constant polynomials
/// * `KzgError::PolyDegreeTooLarge` when the key is too short
pub fn commit(
    commit_key: &CommitKey,
    polynomial: &CoefficientForm,
) -> Result<Commitment, KzgError> {
    commit_key.check_polynomial_degree(polynomial.degree())?;
    msm_commit(commit_key, polynomial)
}

/// Quotients may legitimately be constant or zero, so witnesses only check the
/// upper degree bound.
fn commit_witness(
    commit_key: &CommitKey,
    quotient: &CoefficientForm,
) -> Result<Commitment, KzgError> {
    commit_key.check_degree_bound(quotient.degree())?;
    msm_commit(commit_key, quotient)
}

fn msm_commit(
    commit_key: &CommitKey,
    polynomial: &CoefficientForm,
) -> Result<Commitment, KzgError> {
    let bases = &commit_key.powers_of_g()[..polynomial.len()];
    let point = helpers::g1_lincomb(bases, polynomial.coefficients())?;
    Ok(Commitment(point))
}

/// Opens `polynomial` at `point`.
///
/// The witness commits to `q(X) = (p(X) - p(point)) / (X - point)`.
pub fn create_witness_single(
    commit_key: &CommitKey,
    polynomial: &CoefficientForm,
    point: &Fr,
) -> Result<Proof, KzgError> {
    let evaluation = polynomial.evaluate(point);
    let quotient = (polynomial - evaluation).ruffini(point);
    let witness = commit_witness(commit_key, &quotient)?;

    debug!(
        degree = polynomial.degree(),
        "created single opening witness"
    );
    Ok(Proof {
        point: *point,
        evaluation,
        witness,
    })
}

/// Opens every polynomial in `polynomials` at the same `point` with one
/// witness.
///
/// The caller must append the commitments to `transcript` before calling this,
/// and the verifier must replay the same appends to recover `γ`.
///
/// # Returns
/// * `KzgError::InvalidInputLength` when `polynomials` is empty
pub fn create_witness_multiple_polynomials<T: TranscriptProtocol + ?Sized>(
    commit_key: &CommitKey,
    polynomials: &[CoefficientForm],
    point: &Fr,
    transcript: &mut T,
) -> Result<AggregatedProof, KzgError> {
    if polynomials.is_empty() {
        return Err(KzgError::InvalidInputLength);
    }

    let gamma = transcript.challenge_scalar(CHALLENGE_GAMMA_LABEL);
    let gamma_powers = helpers::generate_vec_powers(&gamma, polynomials.len() - 1);

    let evaluations: Vec<Fr> = polynomials.iter().map(|p| p.evaluate(point)).collect();

    // ψ(X) = Σ γⁱ·pᵢ(X); its remainder at `point` is Σ γⁱ·pᵢ(point) and is
    // dropped by the division
    let aggregated = polynomials
        .iter()
        .zip(gamma_powers)
        .fold(CoefficientForm::zero(), |acc, (polynomial, gamma_i)| {
            &acc + &(polynomial * gamma_i)
        });
    let quotient = aggregated.ruffini(point);
    let witness = commit_witness(commit_key, &quotient)?;

    debug!(
        num_polynomials = polynomials.len(),
        "created aggregated opening witness"
    );
    Ok(AggregatedProof {
        point: *point,
        evaluations,
        witness,
    })
}
