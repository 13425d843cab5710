//! Prover side of KZG commitments over BLS12-381.
//!
//! [srs::ReferenceString::setup] produces the keys, [kzg::commit] commits to a
//! polynomial and the `create_witness_*` functions in [kzg] produce opening
//! proofs that `rust-kzg-bls12-381-verifier` checks.

pub mod kzg;
pub mod srs;
