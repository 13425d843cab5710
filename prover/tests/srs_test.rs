#[cfg(test)]
mod tests {
    use ark_bls12_381::{Bls12_381, G1Affine};
    use ark_ec::{pairing::Pairing, AffineRepr};
    use lazy_static::lazy_static;
    use rand::{rngs::StdRng, SeedableRng};
    use rust_kzg_bls12_381_primitives::{
        consts::{EXTRA_BLINDING_DEGREE, SIZE_OF_G1_AFFINE_UNCOMPRESSED, SIZE_OF_U64},
        errors::KzgError,
        keys::OpeningKey,
    };
    use rust_kzg_bls12_381_prover::srs::{CommitKey, ReferenceString};

    const MAX_DEGREE: usize = 10;

    lazy_static! {
        static ref SRS_INSTANCE: ReferenceString = {
            let mut rng = StdRng::seed_from_u64(7);
            ReferenceString::setup(MAX_DEGREE, &mut rng).unwrap()
        };
    }

    #[test]
    fn test_setup_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            ReferenceString::setup(0, &mut rng),
            Err(KzgError::CircuitDegreeZero)
        );
    }

    #[test]
    fn test_setup_shape() {
        let commit_key = SRS_INSTANCE.commit_key();
        assert_eq!(commit_key.max_degree(), MAX_DEGREE + EXTRA_BLINDING_DEGREE);
        assert_eq!(
            commit_key.powers_of_g().len(),
            MAX_DEGREE + EXTRA_BLINDING_DEGREE + 1
        );
        assert_eq!(commit_key.powers_of_g()[0], *SRS_INSTANCE.opening_key().g());
        assert!(!SRS_INSTANCE.opening_key().g().is_zero());
    }

    #[test]
    fn test_powers_share_one_secret() {
        // e(xⁱ⁺¹·g, h) = e(xⁱ·g, x·h)
        let opening_key = SRS_INSTANCE.opening_key();
        let powers = SRS_INSTANCE.commit_key().powers_of_g();
        for window in powers.windows(2) {
            assert_eq!(
                Bls12_381::pairing(window[1], *opening_key.h()),
                Bls12_381::pairing(window[0], *opening_key.h_beta())
            );
        }
    }

    #[test]
    fn test_truncate() {
        let commit_key = SRS_INSTANCE.commit_key();
        assert_eq!(commit_key.truncate(0), Err(KzgError::TruncatedDegreeZero));

        // degree 1 is raised to 2
        let truncated = commit_key.truncate(1).unwrap();
        assert_eq!(truncated.max_degree(), 2);

        let truncated = commit_key.truncate(5).unwrap();
        assert_eq!(truncated.max_degree(), 5);
        assert_eq!(truncated.powers_of_g(), &commit_key.powers_of_g()[..6]);

        let max_degree = commit_key.max_degree();
        assert_eq!(commit_key.truncate(max_degree).unwrap(), commit_key.clone());
        assert_eq!(
            commit_key.truncate(max_degree + 1),
            Err(KzgError::TruncatedDegreeTooLarge {
                degree: max_degree + 1,
                max_degree
            })
        );
    }

    #[test]
    fn test_trim() {
        let (commit_key, opening_key) = SRS_INSTANCE.clone().trim(4).unwrap();
        assert_eq!(commit_key.max_degree(), 4 + EXTRA_BLINDING_DEGREE);
        assert_eq!(&opening_key, SRS_INSTANCE.opening_key());

        assert_eq!(
            SRS_INSTANCE.clone().trim(MAX_DEGREE + 1),
            Err(KzgError::TruncatedDegreeTooLarge {
                degree: MAX_DEGREE + 1 + EXTRA_BLINDING_DEGREE,
                max_degree: MAX_DEGREE + EXTRA_BLINDING_DEGREE
            })
        );
    }

    #[test]
    fn test_check_polynomial_degree() {
        let commit_key = SRS_INSTANCE.commit_key();
        assert_eq!(
            commit_key.check_polynomial_degree(0),
            Err(KzgError::PolyDegreeZero)
        );
        assert!(commit_key.check_polynomial_degree(1).is_ok());
        assert!(commit_key
            .check_polynomial_degree(commit_key.max_degree())
            .is_ok());
        assert_eq!(
            commit_key.check_polynomial_degree(commit_key.max_degree() + 1),
            Err(KzgError::PolyDegreeTooLarge {
                degree: commit_key.max_degree() + 1,
                max_degree: commit_key.max_degree()
            })
        );
    }

    #[test]
    fn test_commit_key_raw_bytes() {
        let commit_key = SRS_INSTANCE.commit_key();
        let bytes = commit_key.to_raw_var_bytes().unwrap();
        let count = commit_key.powers_of_g().len();
        assert_eq!(
            bytes.len(),
            SIZE_OF_U64 + count * SIZE_OF_G1_AFFINE_UNCOMPRESSED
        );
        assert_eq!(&bytes[..8], &(count as u64).to_le_bytes());
        assert_eq!(
            CommitKey::from_slice_unchecked(&bytes).unwrap(),
            commit_key.clone()
        );

        assert_eq!(
            CommitKey::from_slice_unchecked(&bytes[..5]),
            Err(KzgError::SerializeShortBuffer {
                expected: SIZE_OF_U64,
                actual: 5
            })
        );
        assert_eq!(
            CommitKey::from_slice_unchecked(&bytes[..bytes.len() - 1]),
            Err(KzgError::SerializeShortBuffer {
                expected: bytes.len(),
                actual: bytes.len() - 1
            })
        );
    }

    #[test]
    fn test_commit_key_compact_bytes() {
        let commit_key = SRS_INSTANCE.commit_key();
        let bytes = commit_key.to_var_bytes().unwrap();
        assert_eq!(bytes.len(), commit_key.powers_of_g().len() * 48);
        assert_eq!(CommitKey::from_slice(&bytes), Some(commit_key.clone()));
        assert_eq!(CommitKey::from_slice(&bytes[..47]), None);
        assert_eq!(CommitKey::from_slice(&[]), Some(CommitKey::new(vec![])));
    }

    #[test]
    fn test_reference_string_bytes() {
        let compact = SRS_INSTANCE.to_var_bytes().unwrap();
        assert_eq!(
            ReferenceString::from_slice(&compact),
            Some(SRS_INSTANCE.clone())
        );
        assert_eq!(
            &compact[..OpeningKey::BYTE_SIZE],
            &SRS_INSTANCE.opening_key().to_bytes().unwrap()
        );

        let raw = SRS_INSTANCE.to_raw_var_bytes().unwrap();
        assert_eq!(
            ReferenceString::from_slice_unchecked(&raw).unwrap(),
            SRS_INSTANCE.clone()
        );

        assert_eq!(ReferenceString::from_slice(&compact[..100]), None);
        assert_eq!(
            ReferenceString::from_slice_unchecked(&raw[..100]),
            Err(KzgError::SerializeShortBuffer {
                expected: OpeningKey::BYTE_SIZE,
                actual: 100
            })
        );
    }

    #[test]
    fn test_unchecked_decoding_skips_subgroup_check() {
        // a point on the curve but outside the prime order subgroup
        let mut rng = StdRng::seed_from_u64(9);
        let off_subgroup = loop {
            use ark_ff::UniformRand;
            let x = ark_bls12_381::Fq::rand(&mut rng);
            if let Some(point) = G1Affine::get_point_from_x_unchecked(x, false) {
                if !point.is_in_correct_subgroup_assuming_on_curve() {
                    break point;
                }
            }
        };
        let key = CommitKey::new(vec![off_subgroup]);
        let raw = key.to_raw_var_bytes().unwrap();
        assert_eq!(CommitKey::from_slice_unchecked(&raw).unwrap(), key);

        let compact = key.to_var_bytes().unwrap();
        assert_eq!(CommitKey::from_slice(&compact), None);
    }
}
