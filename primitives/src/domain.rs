use ark_bls12_381::Fr;
use ark_ff::{FftField, Field};
use ark_std::{One, Zero};
use byteorder::{ByteOrder, LittleEndian};
use num_traits::ToPrimitive;

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_U64, TWO_ADICITY},
    errors::PolynomialError,
    fft::{distribute_powers, serial_fft},
    helpers::{batch_inversion, fr_from_le_bytes, fr_to_le_bytes},
    polynomial::EvaluationForm,
};

/// A multiplicative subgroup `H = {1, ω, ω², ..., ω^(n-1)}` of the scalar field
/// of size `n = 2^k`, used for FFTs and Lagrange interpolation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain {
    size: usize,
    log_size: u32,
    size_as_field_element: Fr,
    size_inverse: Fr,
    generator: Fr,
    generator_inverse: Fr,
}

impl EvaluationDomain {
    /// Encoded size: `u64` size followed by the generator.
    pub const BYTE_SIZE: usize = SIZE_OF_U64 + BYTES_PER_FIELD_ELEMENT;

    /// Creates the smallest domain able to hold `num_coefficients` values.
    ///
    /// The size is rounded up to the next power of two. Zero and one both give
    /// the trivial domain `{1}`.
    ///
    /// # Errors
    /// * `PolynomialError::InvalidDomainSize` when the rounded size exceeds
    ///   `2^TWO_ADICITY`.
    pub fn new(num_coefficients: usize) -> Result<Self, PolynomialError> {
        let size = num_coefficients.checked_next_power_of_two().ok_or(
            PolynomialError::InvalidDomainSize {
                log_size: usize::BITS,
                two_adicity: TWO_ADICITY,
            },
        )?;
        let log_size = size.trailing_zeros();
        if log_size > TWO_ADICITY {
            return Err(PolynomialError::InvalidDomainSize {
                log_size,
                two_adicity: TWO_ADICITY,
            });
        }

        let mut generator = Fr::TWO_ADIC_ROOT_OF_UNITY;
        for _ in log_size..TWO_ADICITY {
            generator.square_in_place();
        }

        Self::from_parts(generator, size).ok_or(PolynomialError::InvalidDomainSize {
            log_size,
            two_adicity: TWO_ADICITY,
        })
    }

    /// Rebuilds a domain from a known generator and size.
    ///
    /// Returns `None` when `size` is not a power of two within the two-adicity
    /// bound, or when `generator` is not a root of unity of order `size`.
    pub fn from_parts(generator: Fr, size: usize) -> Option<Self> {
        if !size.is_power_of_two() {
            return None;
        }
        let log_size = size.trailing_zeros();
        if log_size > TWO_ADICITY {
            return None;
        }
        let size_u64 = size.to_u64()?;
        if generator.pow([size_u64]) != Fr::one() {
            return None;
        }
        // primitive: no smaller power of two already reaches one
        if size_u64 > 1 && generator.pow([size_u64 / 2]) == Fr::one() {
            return None;
        }

        let size_as_field_element = Fr::from(size_u64);
        Some(Self {
            size,
            log_size,
            size_as_field_element,
            size_inverse: size_as_field_element.inverse()?,
            generator,
            generator_inverse: generator.inverse()?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn log_size(&self) -> u32 {
        self.log_size
    }

    pub fn size_as_field_element(&self) -> Fr {
        self.size_as_field_element
    }

    pub fn size_inverse(&self) -> Fr {
        self.size_inverse
    }

    /// The primitive `size`-th root of unity `ω`.
    pub fn group_generator(&self) -> Fr {
        self.generator
    }

    pub fn group_generator_inverse(&self) -> Fr {
        self.generator_inverse
    }

    /// Returns `ω^index`.
    pub fn element(&self, index: usize) -> Fr {
        self.generator.pow([index as u64])
    }

    /// Forward transform in place: coefficients in, evaluations over the domain
    /// out. Shorter inputs are zero-padded to the domain size.
    pub fn fast_fourier(&self, values: &mut Vec<Fr>) -> Result<(), PolynomialError> {
        self.pad(values)?;
        serial_fft(values, &self.generator, self.log_size);
        Ok(())
    }

    /// Inverse transform in place: evaluations in, coefficients out.
    pub fn inverse_fast_fourier(&self, values: &mut Vec<Fr>) -> Result<(), PolynomialError> {
        self.pad(values)?;
        serial_fft(values, &self.generator_inverse, self.log_size);
        for value in values.iter_mut() {
            *value *= self.size_inverse;
        }
        Ok(())
    }

    pub fn fft(&self, coefficients: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        let mut values = coefficients.to_vec();
        self.fast_fourier(&mut values)?;
        Ok(values)
    }

    pub fn ifft(&self, evaluations: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        let mut values = evaluations.to_vec();
        self.inverse_fast_fourier(&mut values)?;
        Ok(values)
    }

    /// Evaluates over the coset `g·H`, where `g` is the field's multiplicative
    /// generator.
    pub fn coset_fast_fourier(&self, values: &mut Vec<Fr>) -> Result<(), PolynomialError> {
        self.pad(values)?;
        distribute_powers(values, &Fr::GENERATOR);
        serial_fft(values, &self.generator, self.log_size);
        Ok(())
    }

    /// Interpolates evaluations taken over the coset `g·H` back to coefficients.
    pub fn coset_inverse_fast_fourier(&self, values: &mut Vec<Fr>) -> Result<(), PolynomialError> {
        let coset_generator_inverse = Fr::GENERATOR
            .inverse()
            .ok_or(PolynomialError::DivisionByZero)?;
        self.inverse_fast_fourier(values)?;
        distribute_powers(values, &coset_generator_inverse);
        Ok(())
    }

    /// `Z_H(tau) = tau^n - 1`.
    pub fn evaluate_vanishing_polynomial(&self, tau: &Fr) -> Fr {
        tau.pow([self.size as u64]) - Fr::one()
    }

    /// Evaluations of `Z(X) = X^degree - 1` over the coset `g·H`.
    ///
    /// # Errors
    /// * `PolynomialError::VanishingDegreeTooLarge` unless `degree < size`.
    pub fn evaluate_vanishing_polynomial_over_coset(
        &self,
        degree: u64,
    ) -> Result<EvaluationForm, PolynomialError> {
        if degree >= self.size as u64 {
            return Err(PolynomialError::VanishingDegreeTooLarge {
                degree,
                domain_size: self.size as u64,
            });
        }

        let coset_generator = Fr::GENERATOR.pow([degree]);
        let step = self.generator.pow([degree]);
        let mut current = coset_generator;
        let mut evaluations = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            evaluations.push(current - Fr::one());
            current *= step;
        }

        EvaluationForm::new(evaluations, *self)
    }

    /// Evaluates every Lagrange basis polynomial `L_i` of the domain at `tau`.
    pub fn evaluate_all_lagrange_coefficients(&self, tau: &Fr) -> Vec<Fr> {
        let z_h_at_tau = self.evaluate_vanishing_polynomial(tau);

        if z_h_at_tau.is_zero() {
            // tau is itself a domain element: L_i(tau) is the indicator of that index
            let mut coefficients = vec![Fr::zero(); self.size];
            if let Some(position) = self.iter().position(|element| element == *tau) {
                coefficients[position] = Fr::one();
            }
            return coefficients;
        }

        let l = z_h_at_tau * self.size_inverse;
        let mut denominators: Vec<Fr> = self.iter().map(|element| *tau - element).collect();
        batch_inversion(&mut denominators);

        self.iter()
            .zip(denominators)
            .map(|(element, inverse)| l * element * inverse)
            .collect()
    }

    /// Lazily yields `ω^0, ω^1, ..., ω^(n-1)`.
    pub fn iter(&self) -> Elements {
        self.iter_from(0)
    }

    /// Lazily yields `ω^start, ..., ω^(n-1)`.
    pub fn iter_from(&self, start: usize) -> Elements {
        let index = start.min(self.size);
        Elements {
            domain: *self,
            current: self.element(index),
            index,
        }
    }

    pub fn to_bytes(&self) -> [u8; EvaluationDomain::BYTE_SIZE] {
        let mut bytes = [0u8; EvaluationDomain::BYTE_SIZE];
        LittleEndian::write_u64(&mut bytes[..SIZE_OF_U64], self.size as u64);
        bytes[SIZE_OF_U64..].copy_from_slice(&fr_to_le_bytes(&self.generator));
        bytes
    }

    /// Decodes [`Self::to_bytes`]. Returns `None` on a wrong length, a
    /// non-canonical scalar, a size that is not a power of two or a generator
    /// that is not a primitive root of that order.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return None;
        }
        let size = LittleEndian::read_u64(&bytes[..SIZE_OF_U64]).to_usize()?;
        let generator = fr_from_le_bytes(&bytes[SIZE_OF_U64..])?;
        Self::from_parts(generator, size)
    }

    fn pad(&self, values: &mut Vec<Fr>) -> Result<(), PolynomialError> {
        if values.len() > self.size {
            return Err(PolynomialError::LengthMismatch {
                expected: self.size,
                actual: values.len(),
            });
        }
        values.resize(self.size, Fr::zero());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EvaluationDomain {
    type Item = Fr;
    type IntoIter = Elements;

    fn into_iter(self) -> Elements {
        self.iter()
    }
}

/// Iterator over the elements of an [`EvaluationDomain`], one multiplication per
/// step. Cloning it restarts from the clone's current position.
///
/// Two iterators compare equal when they walk the same domain and sit at the
/// same position.
#[derive(Clone, Debug)]
pub struct Elements {
    domain: EvaluationDomain,
    current: Fr,
    index: usize,
}

impl Elements {
    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    /// Exponent of the next element to be yielded.
    pub fn current_index(&self) -> usize {
        self.index
    }
}

impl Iterator for Elements {
    type Item = Fr;

    fn next(&mut self) -> Option<Fr> {
        if self.index >= self.domain.size {
            return None;
        }
        let element = self.current;
        self.current *= self.domain.generator;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.domain.size - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Elements {}

impl PartialEq for Elements {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.index == other.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_from_past_end_is_empty() {
        let domain = EvaluationDomain::new(8).unwrap();
        assert_eq!(domain.iter_from(8).count(), 0);
        assert_eq!(domain.iter_from(100).count(), 0);
        assert_eq!(domain.iter_from(3).len(), 5);
    }

    #[test]
    fn test_iterator_equality_follows_position() {
        let domain = EvaluationDomain::new(16).unwrap();
        let mut a = domain.iter();
        let b = domain.iter();
        assert!(a == b);
        a.next();
        assert!(a != b);
        assert!(a == domain.iter_from(1));
    }

    #[test]
    fn test_iterators_over_different_domains_differ() {
        let small = EvaluationDomain::new(8).unwrap();
        let large = EvaluationDomain::new(16).unwrap();
        assert!(small.iter() != large.iter());
        assert!(small.iter_from(8) != large.iter_from(8));
        assert!(small.iter() == small.iter());
    }

    #[test]
    fn test_from_parts_requires_primitive_root() {
        let domain = EvaluationDomain::new(256).unwrap();
        let generator = domain.group_generator();
        assert_eq!(EvaluationDomain::from_parts(generator, 256), Some(domain));

        // order 128 and order 1 both satisfy g^256 == 1
        assert_eq!(EvaluationDomain::from_parts(generator.square(), 256), None);
        assert_eq!(EvaluationDomain::from_parts(Fr::one(), 256), None);
        assert_eq!(
            EvaluationDomain::from_parts(-Fr::one(), 2).map(|d| d.size()),
            Some(2)
        );
        assert_eq!(
            EvaluationDomain::from_parts(Fr::one(), 1).map(|d| d.size()),
            Some(1)
        );
    }

    #[test]
    fn test_trivial_domain() {
        for n in [0, 1] {
            let domain = EvaluationDomain::new(n).unwrap();
            assert_eq!(domain.size(), 1);
            assert_eq!(domain.log_size(), 0);
            assert_eq!(domain.group_generator(), Fr::one());
        }
    }
}
