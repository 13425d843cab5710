//! Fiat–Shamir transcript over [merlin].
//!
//! Prover and verifier must append the same messages in the same order before
//! drawing a challenge, otherwise they derive different scalars.

use ark_bls12_381::Fr;
use ark_ff::PrimeField;
use merlin::Transcript;

use crate::{
    commitment::Commitment,
    consts::{CHALLENGE_BYTES, TRANSCRIPT_DOMAIN},
    errors::KzgError,
    helpers::fr_to_le_bytes,
};

/// Extension methods for absorbing KZG values into a transcript and squeezing
/// scalar challenges out of it.
pub trait TranscriptProtocol {
    fn append_message(&mut self, label: &'static [u8], message: &[u8]);

    fn challenge_bytes(&mut self, label: &'static [u8], dest: &mut [u8]);

    /// Appends the compressed encoding of `commitment`.
    fn append_commitment(
        &mut self,
        label: &'static [u8],
        commitment: &Commitment,
    ) -> Result<(), KzgError> {
        let bytes = commitment.to_bytes()?;
        self.append_message(label, &bytes);
        Ok(())
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Fr) {
        self.append_message(label, &fr_to_le_bytes(scalar));
    }

    /// Draws 64 bytes and reduces them into the scalar field, which keeps the
    /// bias of the result negligible.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Fr {
        let mut buf = [0u8; CHALLENGE_BYTES];
        self.challenge_bytes(label, &mut buf);
        Fr::from_le_bytes_mod_order(&buf)
    }
}

impl TranscriptProtocol for Transcript {
    fn append_message(&mut self, label: &'static [u8], message: &[u8]) {
        Transcript::append_message(self, label, message);
    }

    fn challenge_bytes(&mut self, label: &'static [u8], dest: &mut [u8]) {
        Transcript::challenge_bytes(self, label, dest);
    }
}

/// Starts a transcript bound to this commitment scheme's domain separator.
pub fn new_transcript() -> Transcript {
    Transcript::new(TRANSCRIPT_DOMAIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CHALLENGE_GAMMA_LABEL;
    use ark_bls12_381::G1Affine;
    use ark_ec::AffineRepr;

    #[test]
    fn test_same_messages_same_challenge() {
        let commitment = Commitment(G1Affine::generator());
        let mut prover = new_transcript();
        let mut verifier = new_transcript();
        for transcript in [&mut prover, &mut verifier] {
            transcript
                .append_commitment(b"commitment", &commitment)
                .unwrap();
            transcript.append_scalar(b"point", &Fr::from(7u64));
        }
        assert_eq!(
            prover.challenge_scalar(CHALLENGE_GAMMA_LABEL),
            verifier.challenge_scalar(CHALLENGE_GAMMA_LABEL)
        );
    }

    #[test]
    fn test_order_changes_challenge() {
        let mut a = new_transcript();
        a.append_scalar(b"x", &Fr::from(1u64));
        a.append_scalar(b"y", &Fr::from(2u64));

        let mut b = new_transcript();
        b.append_scalar(b"y", &Fr::from(2u64));
        b.append_scalar(b"x", &Fr::from(1u64));

        assert_ne!(
            a.challenge_scalar(CHALLENGE_GAMMA_LABEL),
            b.challenge_scalar(CHALLENGE_GAMMA_LABEL)
        );
    }

    #[test]
    fn test_successive_challenges_differ() {
        let mut transcript = new_transcript();
        let first = transcript.challenge_scalar(CHALLENGE_GAMMA_LABEL);
        let second = transcript.challenge_scalar(CHALLENGE_GAMMA_LABEL);
        assert_ne!(first, second);
    }
}
