use std::ops::{Add, Mul, Neg, Sub};

use ark_bls12_381::Fr;
use ark_std::{rand::RngCore, Zero};

use crate::{
    consts::BYTES_PER_FIELD_ELEMENT,
    domain::EvaluationDomain,
    errors::PolynomialError,
    helpers::{self, batch_inversion, fr_from_le_bytes, fr_to_le_bytes},
};

/// A polynomial stored by its coefficients, lowest degree first.
///
/// The representation is kept canonical: there is never a trailing zero
/// coefficient, so the zero polynomial is the empty vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoefficientForm {
    coeffs: Vec<Fr>,
}

impl CoefficientForm {
    /// Creates a new [CoefficientForm], dropping trailing zero coefficients.
    pub fn new(coeffs: Vec<Fr>) -> Self {
        let mut polynomial = Self { coeffs };
        polynomial.truncate_leading_zeros();
        polynomial
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial. Both the zero polynomial and non-zero
    /// constants report degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &[Fr] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<Fr> {
        self.coeffs
    }

    /// Number of stored coefficients, `degree + 1` for non-zero polynomials.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Samples a polynomial with `degree + 1` uniformly random coefficients.
    pub fn random<R: RngCore + ?Sized>(degree: usize, rng: &mut R) -> Self {
        Self::new((0..=degree).map(|_| helpers::random_scalar(rng)).collect())
    }

    /// Evaluates the polynomial at `point`.
    ///
    /// # Arguments
    /// * `point` - The field element to evaluate at
    ///
    /// # Returns
    /// * `Σ cᵢ·pointⁱ`, zero for the zero polynomial
    pub fn evaluate(&self, point: &Fr) -> Fr {
        if self.is_zero() {
            return Fr::zero();
        }
        helpers::generate_vec_powers(point, self.degree())
            .iter()
            .zip(self.coeffs.iter())
            .map(|(power, coeff)| *power * coeff)
            .sum()
    }

    /// Divides by `(X - point)` with synthetic division and returns the
    /// quotient. The remainder, which equals `self.evaluate(point)`, is dropped.
    pub fn ruffini(&self, point: &Fr) -> Self {
        let mut quotient = Vec::with_capacity(self.coeffs.len());
        let mut k = Fr::zero();

        for coeff in self.coeffs.iter().rev() {
            let t = *coeff + k;
            quotient.push(t);
            k = *point * t;
        }

        // last value pushed is the remainder
        quotient.pop();
        quotient.reverse();
        Self::new(quotient)
    }

    /// Multiplies two polynomials through an FFT over a domain large enough to
    /// hold the product.
    ///
    /// # Errors
    /// * `PolynomialError::InvalidDomainSize` when the product would not fit a
    ///   domain of the field.
    pub fn try_mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let domain = EvaluationDomain::new(self.len() + other.len())?;
        let lhs = self.evaluate_over_domain(&domain)?;
        let rhs = other.evaluate_over_domain(&domain)?;
        lhs.try_mul(&rhs)?.interpolate()
    }

    /// Evaluates the polynomial at every element of `domain`.
    pub fn evaluate_over_domain(
        &self,
        domain: &EvaluationDomain,
    ) -> Result<EvaluationForm, PolynomialError> {
        let evaluations = domain.fft(&self.coeffs)?;
        EvaluationForm::new(evaluations, *domain)
    }

    /// Coefficients as concatenated 32 byte little-endian scalars.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.coeffs.iter().flat_map(fr_to_le_bytes).collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() % BYTES_PER_FIELD_ELEMENT != 0 {
            return None;
        }
        let coeffs = bytes
            .chunks_exact(BYTES_PER_FIELD_ELEMENT)
            .map(fr_from_le_bytes)
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(coeffs))
    }

    fn truncate_leading_zeros(&mut self) {
        while self.coeffs.last().map_or(false, |c| c.is_zero()) {
            self.coeffs.pop();
        }
    }
}

impl From<Vec<Fr>> for CoefficientForm {
    fn from(coeffs: Vec<Fr>) -> Self {
        Self::new(coeffs)
    }
}

impl<'a, 'b> Add<&'a CoefficientForm> for &'b CoefficientForm {
    type Output = CoefficientForm;

    fn add(self, other: &'a CoefficientForm) -> CoefficientForm {
        let (longer, shorter) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (a, b) in coeffs.iter_mut().zip(shorter.coeffs.iter()) {
            *a += b;
        }
        CoefficientForm::new(coeffs)
    }
}

impl<'a, 'b> Sub<&'a CoefficientForm> for &'b CoefficientForm {
    type Output = CoefficientForm;

    fn sub(self, other: &'a CoefficientForm) -> CoefficientForm {
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < other.len() {
            coeffs.resize(other.len(), Fr::zero());
        }
        for (a, b) in coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a -= b;
        }
        CoefficientForm::new(coeffs)
    }
}

impl Neg for &CoefficientForm {
    type Output = CoefficientForm;

    fn neg(self) -> CoefficientForm {
        CoefficientForm {
            coeffs: self.coeffs.iter().map(|c| -*c).collect(),
        }
    }
}

impl Neg for CoefficientForm {
    type Output = CoefficientForm;

    fn neg(mut self) -> CoefficientForm {
        self.coeffs.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl Add<Fr> for &CoefficientForm {
    type Output = CoefficientForm;

    fn add(self, constant: Fr) -> CoefficientForm {
        if self.is_zero() {
            return CoefficientForm::new(vec![constant]);
        }
        let mut coeffs = self.coeffs.clone();
        coeffs[0] += constant;
        CoefficientForm::new(coeffs)
    }
}

impl Sub<Fr> for &CoefficientForm {
    type Output = CoefficientForm;

    fn sub(self, constant: Fr) -> CoefficientForm {
        self + (-constant)
    }
}

impl Mul<Fr> for &CoefficientForm {
    type Output = CoefficientForm;

    fn mul(self, scalar: Fr) -> CoefficientForm {
        if self.is_zero() || scalar.is_zero() {
            return CoefficientForm::zero();
        }
        CoefficientForm {
            coeffs: self.coeffs.iter().map(|c| *c * scalar).collect(),
        }
    }
}

/// A polynomial stored by its values over every element of an
/// [EvaluationDomain].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationForm {
    evaluations: Vec<Fr>,
    domain: EvaluationDomain,
}

impl EvaluationForm {
    /// Wraps `evaluations` taken over `domain`.
    ///
    /// # Errors
    /// * `PolynomialError::LengthMismatch` unless there is exactly one
    ///   evaluation per domain element.
    pub fn new(evaluations: Vec<Fr>, domain: EvaluationDomain) -> Result<Self, PolynomialError> {
        if evaluations.len() != domain.size() {
            return Err(PolynomialError::LengthMismatch {
                expected: domain.size(),
                actual: evaluations.len(),
            });
        }
        Ok(Self {
            evaluations,
            domain,
        })
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.pointwise(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.pointwise(other, |a, b| a - b)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.pointwise(other, |a, b| a * b)
    }

    /// Pointwise division, inverting all of `other`'s evaluations at once.
    ///
    /// # Errors
    /// * `PolynomialError::DomainMismatch` for evaluations over different domains.
    /// * `PolynomialError::DivisionByZero` if any evaluation of `other` is zero.
    pub fn try_div(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.check_domain(other)?;
        if other.evaluations.iter().any(|e| e.is_zero()) {
            return Err(PolynomialError::DivisionByZero);
        }
        let mut inverses = other.evaluations.clone();
        batch_inversion(&mut inverses);
        self.pointwise_with(&inverses, |a, b| a * b)
    }

    /// Recovers the coefficient form with an inverse FFT over the domain.
    pub fn interpolate(&self) -> Result<CoefficientForm, PolynomialError> {
        let coeffs = self.domain.ifft(&self.evaluations)?;
        Ok(CoefficientForm::new(coeffs))
    }

    /// Evaluations as 32 byte scalars followed by the domain encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            self.evaluations.len() * BYTES_PER_FIELD_ELEMENT + EvaluationDomain::BYTE_SIZE,
        );
        for evaluation in &self.evaluations {
            bytes.extend_from_slice(&fr_to_le_bytes(evaluation));
        }
        bytes.extend_from_slice(&self.domain.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let evaluations_len = bytes.len().checked_sub(EvaluationDomain::BYTE_SIZE)?;
        if evaluations_len % BYTES_PER_FIELD_ELEMENT != 0 {
            return None;
        }
        let (evaluation_bytes, domain_bytes) = bytes.split_at(evaluations_len);
        let domain = EvaluationDomain::from_bytes(domain_bytes)?;
        let evaluations = evaluation_bytes
            .chunks_exact(BYTES_PER_FIELD_ELEMENT)
            .map(fr_from_le_bytes)
            .collect::<Option<Vec<_>>>()?;
        Self::new(evaluations, domain).ok()
    }

    fn check_domain(&self, other: &Self) -> Result<(), PolynomialError> {
        if self.domain != other.domain {
            return Err(PolynomialError::DomainMismatch);
        }
        Ok(())
    }

    fn pointwise(&self, other: &Self, op: impl Fn(Fr, Fr) -> Fr) -> Result<Self, PolynomialError> {
        self.check_domain(other)?;
        self.pointwise_with(&other.evaluations, op)
    }

    fn pointwise_with(
        &self,
        values: &[Fr],
        op: impl Fn(Fr, Fr) -> Fr,
    ) -> Result<Self, PolynomialError> {
        let evaluations = self
            .evaluations
            .iter()
            .zip(values.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        Self::new(evaluations, self.domain)
    }
}
