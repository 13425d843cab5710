use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{Field, UniformRand};
use ark_std::{One, Zero};
use rand::{rngs::StdRng, SeedableRng};
use rust_kzg_bls12_381_primitives::{
    errors::KzgError,
    helpers::{
        g1_lincomb, generate_vec_powers, pairing_product_is_identity, random_g1_point,
        random_g2_point, random_scalar, slow_multi_scalar_mul_single_base,
    },
};

type G2Prepared = <Bls12_381 as Pairing>::G2Prepared;

#[test]
fn test_generate_vec_powers() {
    let powers = generate_vec_powers(&Fr::from(3u64), 4);
    let expected: Vec<Fr> = [1u64, 3, 9, 27, 81].iter().map(|v| Fr::from(*v)).collect();
    assert_eq!(powers, expected);

    assert_eq!(generate_vec_powers(&Fr::from(3u64), 0), vec![Fr::one()]);
    assert_eq!(
        generate_vec_powers(&Fr::zero(), 2),
        vec![Fr::one(), Fr::zero(), Fr::zero()]
    );
}

#[test]
fn test_random_points_are_valid() {
    let mut rng = StdRng::seed_from_u64(1);
    let g1 = random_g1_point(&mut rng).into_affine();
    let g2 = random_g2_point(&mut rng).into_affine();
    assert!(g1.is_on_curve() && g1.is_in_correct_subgroup_assuming_on_curve());
    assert!(g2.is_on_curve() && g2.is_in_correct_subgroup_assuming_on_curve());
    assert_ne!(random_scalar(&mut rng), random_scalar(&mut rng));
}

#[test]
fn test_slow_msm_single_base() {
    let mut rng = StdRng::seed_from_u64(2);
    let base = random_g1_point(&mut rng);
    let scalars: Vec<Fr> = (0..10).map(|_| Fr::rand(&mut rng)).collect();
    let points = slow_multi_scalar_mul_single_base(&scalars, &base);
    assert_eq!(points.len(), scalars.len());
    for (point, scalar) in points.iter().zip(scalars.iter()) {
        assert_eq!(*point, base * scalar);
    }
    assert!(slow_multi_scalar_mul_single_base(&[], &base).is_empty());
}

#[test]
fn test_g1_lincomb() {
    let mut rng = StdRng::seed_from_u64(3);
    let points: Vec<G1Affine> = (0..8)
        .map(|_| random_g1_point(&mut rng).into_affine())
        .collect();
    let scalars: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();

    let expected = points
        .iter()
        .zip(scalars.iter())
        .fold(G1Projective::zero(), |acc, (p, s)| acc + *p * s);
    assert_eq!(
        g1_lincomb(&points, &scalars).unwrap(),
        expected.into_affine()
    );

    assert!(matches!(
        g1_lincomb(&points, &scalars[..3]),
        Err(KzgError::MsmError(_))
    ));
}

#[test]
fn test_pairing_product() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = Fr::rand(&mut rng);
    let b = Fr::rand(&mut rng);
    let g = G1Affine::generator();
    let h = G2Affine::generator();

    // e(a·g, b·h) · e(-(a·b)·g, h) = 1
    let lhs = (g * a).into_affine();
    let rhs = (g * -(a * b)).into_affine();
    let h_b = (h * b).into_affine();
    assert!(pairing_product_is_identity(
        [lhs, rhs],
        [G2Prepared::from(h_b), G2Prepared::from(h)]
    ));

    let wrong = (g * (a * b).square()).into_affine();
    assert!(!pairing_product_is_identity(
        [lhs, wrong],
        [G2Prepared::from(h_b), G2Prepared::from(h)]
    ));
}
