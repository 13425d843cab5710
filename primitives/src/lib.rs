//! ## Library Design / Architecture
//!
//! Shared building blocks for KZG polynomial commitments over BLS12-381. The
//! prover and verifier crates are thin layers on top of the types here.
//!
//! ### Data Types
//!
//! - [domain::EvaluationDomain]: a power-of-two multiplicative subgroup of the
//!   scalar field, with FFT, coset FFT, vanishing polynomial and Lagrange
//!   helpers.
//! - [polynomial::CoefficientForm] and [polynomial::EvaluationForm]: the two
//!   representations of a polynomial. Converting between them is an FFT over
//!   the domain.
//! - [commitment::Commitment]: a G1 point binding a polynomial.
//! - [commitment::Proof], [commitment::AggregatedProof] and
//!   [commitment::BatchProof]: openings at one point, of many polynomials at
//!   one point, and at many points.
//! - [keys::OpeningKey]: the G1/G2 points a verifier needs.
//!
//! ### Fiat–Shamir
//!
//! Challenges for batching are drawn from a [merlin::Transcript] through the
//! [transcript::TranscriptProtocol] extension trait. The caller appends the
//! commitments before asking the prover for an aggregated witness, and the
//! verifier replays the same appends.

pub mod commitment;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod fft;
pub mod helpers;
pub mod keys;
pub mod polynomial;
pub mod traits;
pub mod transcript;
