//! Radix-2 number theoretic transform over the BLS12-381 scalar field.
//!
//! These are the raw kernels behind [crate::domain::EvaluationDomain]. They work
//! on slices whose length is already a power of two and do no padding.

use ark_bls12_381::Fr;
use ark_ff::Field;
use ark_std::One;

/// Reverses the lowest `bits` bits of `index`.
#[inline]
pub fn bit_reverse(index: u64, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (u64::BITS - bits)
}

/// In-place iterative Cooley–Tukey transform.
///
/// # Arguments
/// * `values` - Slice of length `2^log_size`, coefficients in, evaluations out
/// * `omega` - Primitive root of unity of order `2^log_size`
/// * `log_size` - Base-2 logarithm of `values.len()`
///
/// Output is in natural order: `values[i]` becomes the evaluation at `omega^i`.
pub fn serial_fft(values: &mut [Fr], omega: &Fr, log_size: u32) {
    let size = values.len() as u64;
    debug_assert_eq!(size, 1u64 << log_size);

    for k in 0..size {
        let rk = bit_reverse(k, log_size);
        if k < rk {
            values.swap(rk as usize, k as usize);
        }
    }

    let mut half = 1usize;
    for _ in 0..log_size {
        let width = half * 2;
        let w_m = omega.pow([size / width as u64]);

        for block in values.chunks_exact_mut(width) {
            let (lo, hi) = block.split_at_mut(half);
            let mut w = Fr::one();
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = *b * w;
                *b = *a - t;
                *a += t;
                w *= w_m;
            }
        }

        half = width;
    }
}

/// Multiplies the i-th coefficient by `g^i`, shifting the polynomial onto the
/// coset `g·H` before a forward transform.
pub fn distribute_powers(coefficients: &mut [Fr], g: &Fr) {
    let mut power = Fr::one();
    for coefficient in coefficients.iter_mut() {
        *coefficient *= power;
        power *= g;
    }
}
