//! Polynomial arithmetic over a Galois field
//!
//! Coefficient buffers are ordered highest-degree-first: index 0 holds the
//! coefficient of the largest power of x. This matches how a systematic
//! codeword is laid out (first message byte = highest coefficient) and is
//! the single convention used throughout the crate. The one place the
//! reciprocal ordering matters, root search over candidate positions, goes
//! through [`eval_reciprocal`] explicitly.

use crate::galois::GaloisField;

/// Multiply two polynomials. Output length is `len(a) + len(b) - 1`.
pub fn mult(gf: &GaloisField, a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        if ca == 0 {
            continue;
        }
        for (j, &cb) in b.iter().enumerate() {
            out[i + j] ^= gf.multiply(ca, cb);
        }
    }
    out
}

/// Polynomial long division, returning `(quotient, remainder)`.
///
/// The divisor's leading coefficient must be nonzero. The remainder is
/// always returned with exactly `len(divisor) - 1` coefficients, zero
/// padded at the high end when the true remainder is shorter.
pub fn divide(gf: &GaloisField, dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
    assert!(
        !divisor.is_empty() && divisor[0] != 0,
        "divisor must be normalized"
    );

    if dividend.len() < divisor.len() {
        let mut remainder = vec![0u8; divisor.len() - 1];
        let offset = remainder.len() - dividend.len();
        remainder[offset..].copy_from_slice(dividend);
        return (Vec::new(), remainder);
    }

    let mut work = dividend.to_vec();
    let quotient_len = dividend.len() - divisor.len() + 1;
    let mut quotient = vec![0u8; quotient_len];

    for i in 0..quotient_len {
        let coef = work[i];
        if coef == 0 {
            continue;
        }
        let q = gf.divide(coef, divisor[0]);
        quotient[i] = q;
        for (j, &d) in divisor.iter().enumerate() {
            work[i + j] ^= gf.multiply(q, d);
        }
    }

    let remainder = work[quotient_len..].to_vec();
    (quotient, remainder)
}

/// Compute `a + scale * b` coefficient-wise.
///
/// The buffers are aligned at their constant terms, so the output length is
/// `max(len(a), len(b))` with the shorter input padded at the high end.
pub fn add_scaled(gf: &GaloisField, a: &[u8], b: &[u8], scale: u8) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = vec![0u8; len];
    out[len - a.len()..].copy_from_slice(a);
    let offset = len - b.len();
    for (i, &c) in b.iter().enumerate() {
        out[offset + i] ^= gf.multiply(c, scale);
    }
    out
}

/// Horner evaluation of a highest-order-first polynomial at `x`
pub fn eval(gf: &GaloisField, poly: &[u8], x: u8) -> u8 {
    let mut acc = 0u8;
    for &c in poly {
        acc = gf.multiply(acc, x) ^ c;
    }
    acc
}

/// Continue a Horner evaluation across a second coefficient buffer.
///
/// `eval_continue(gf, eval(gf, head, x), tail, x)` equals evaluating the
/// concatenation `head ‖ tail`, which lets a message and its ECC be treated
/// as one polynomial without copying.
pub fn eval_continue(gf: &GaloisField, partial: u8, tail: &[u8], x: u8) -> u8 {
    let mut acc = partial;
    for &c in tail {
        acc = gf.multiply(acc, x) ^ c;
    }
    acc
}

/// Evaluate the reciprocal polynomial `x^deg * p(1/x)` at `x`.
///
/// Equivalent to running Horner over the reversed buffer; a value `α^i` is
/// a root here exactly when `α^{-i}` is a root of `p`.
pub fn eval_reciprocal(gf: &GaloisField, poly: &[u8], x: u8) -> u8 {
    let mut acc = 0u8;
    for &c in poly.iter().rev() {
        acc = gf.multiply(acc, x) ^ c;
    }
    acc
}

/// Strip zero coefficients from the high-order end
pub fn trim_leading_zeros(poly: &mut Vec<u8>) {
    let leading = poly.iter().take_while(|&&c| c == 0).count();
    if leading > 0 {
        poly.drain(..leading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> GaloisField {
        GaloisField::new(8, 0x11D).unwrap()
    }

    #[test]
    fn mult_small_known() {
        let gf = field();
        // (x + 2)(x + 3) = x^2 + (2^3)x + 6 = x^2 + x + 6 over GF(2^8)
        let product = mult(&gf, &[1, 2], &[1, 3]);
        assert_eq!(product, vec![1, 1, 6]);
    }

    #[test]
    fn mult_by_constant_scales() {
        let gf = field();
        let product = mult(&gf, &[7, 11, 13], &[2]);
        assert_eq!(
            product,
            vec![gf.multiply(7, 2), gf.multiply(11, 2), gf.multiply(13, 2)]
        );
    }

    #[test]
    fn divide_reconstructs_dividend() {
        let gf = field();
        let dividend = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
        let divisor = [1, 0x0F, 0x36];

        let (quotient, remainder) = divide(&gf, &dividend, &divisor);
        assert_eq!(remainder.len(), divisor.len() - 1);

        // dividend = quotient * divisor + remainder
        let mut check = mult(&gf, &quotient, &divisor);
        check = add_scaled(&gf, &check, &remainder, 1);
        assert_eq!(check, dividend);
    }

    #[test]
    fn divide_short_dividend_is_remainder() {
        let gf = field();
        let (quotient, remainder) = divide(&gf, &[5, 9], &[1, 2, 3, 4]);
        assert!(quotient.is_empty());
        assert_eq!(remainder, vec![0, 5, 9]);
    }

    #[test]
    fn add_scaled_aligns_constant_terms() {
        let gf = field();
        // a = x + 1, b = x^2 (shifted previous-locator shape from BM)
        let out = add_scaled(&gf, &[1, 1], &[1, 0, 0], 2);
        assert_eq!(out, vec![2, 1, 1]);
    }

    #[test]
    fn eval_known_values() {
        let gf = field();
        // p(x) = x^2 + 3x + 5 at x = 0 and x = 1
        assert_eq!(eval(&gf, &[1, 3, 5], 0), 5);
        assert_eq!(eval(&gf, &[1, 3, 5], 1), 1 ^ 3 ^ 5);
        assert_eq!(eval(&gf, &[], 17), 0);
    }

    #[test]
    fn eval_continue_matches_concatenation() {
        let gf = field();
        let head = [0x40, 0xd2, 0x75];
        let tail = [0x47, 0x76];
        let whole = [0x40, 0xd2, 0x75, 0x47, 0x76];
        for i in 0..10 {
            let x = gf.primitive_power(i);
            let partial = eval(&gf, &head, x);
            assert_eq!(eval_continue(&gf, partial, &tail, x), eval(&gf, &whole, x));
        }
    }

    #[test]
    fn eval_reciprocal_reverses_roots() {
        let gf = field();
        // p(x) = x + 3 has root 3 = α^25; the reciprocal 3x + 1 has root α^-25
        let p = [1u8, 3u8];
        assert_eq!(eval(&gf, &p, 3), 0);
        assert_eq!(eval_reciprocal(&gf, &p, gf.inverse(3)), 0);
    }

    #[test]
    fn trim_leading_zeros_strips_high_end() {
        let mut p = vec![0, 0, 4, 0, 7];
        trim_leading_zeros(&mut p);
        assert_eq!(p, vec![4, 0, 7]);

        let mut all_zero = vec![0u8, 0];
        trim_leading_zeros(&mut all_zero);
        assert!(all_zero.is_empty());
    }
}
