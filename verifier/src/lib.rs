//! Verifier side of KZG commitments over BLS12-381.
//!
//! [verify] checks single openings and openings of many polynomials at one
//! point. [batch] checks openings at many points at once. A proof that does
//! not verify is reported as `false`, errors are reserved for malformed input.

pub mod batch;
pub mod verify;
