//! Systematic Reed-Solomon encoder/decoder
//!
//! A codeword is `message ‖ ecc`, read as a polynomial with the first
//! message byte as the highest-order coefficient. Encoding divides
//! `message(x) · x^degree` by a fixed generator polynomial and keeps the
//! remainder; decoding computes syndromes, derives the error locator with
//! Berlekamp-Massey, searches for error positions, and corrects magnitudes
//! with the Forney formula.
//!
//! A codec holds only the field handle and the generator polynomial. All
//! decode scratch state is local to the call, so one `RsCodec` can serve
//! many threads concurrently with a single shared field.

use std::sync::Arc;

use log::debug;

use crate::error::CodecError;
use crate::galois::GaloisField;
use crate::poly;

/// Reed-Solomon codec for a fixed field and error-correction degree
pub struct RsCodec {
    field: Arc<GaloisField>,
    /// Monic generator polynomial, highest-order-first, `degree + 1` long
    generator: Vec<u8>,
    degree: usize,
}

impl RsCodec {
    /// Create a codec producing `degree` ECC bytes (correcting up to
    /// `degree / 2` byte errors) over the given field.
    pub fn new(field: Arc<GaloisField>, degree: usize) -> Result<Self, CodecError> {
        if field.num_bits() != 8 {
            return Err(CodecError::UnsupportedField {
                num_bits: field.num_bits(),
            });
        }
        // at least one message byte must fit next to the ECC
        let max = field.max_value() - 1;
        if degree == 0 || degree > max {
            return Err(CodecError::InvalidDegree { degree, max });
        }

        let generator = build_generator(&field, degree);
        Ok(RsCodec {
            field,
            generator,
            degree,
        })
    }

    /// Number of ECC bytes appended to each message
    pub fn ecc_len(&self) -> usize {
        self.degree
    }

    /// Number of byte errors this codec can correct
    pub fn capacity(&self) -> usize {
        self.degree / 2
    }

    /// The generator polynomial, highest-order-first
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    /// Compute the error-correction code for a message.
    ///
    /// The message bytes become the leading coefficients of
    /// `message(x) · x^degree`; the remainder after division by the
    /// generator is the ECC, always exactly `degree` bytes.
    pub fn compute_ecc(&self, message: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.check_block(message.len())?;

        let mut dividend = message.to_vec();
        dividend.resize(message.len() + self.degree, 0);
        let (_quotient, remainder) = poly::divide(&self.field, &dividend, &self.generator);
        Ok(remainder)
    }

    /// Evaluate `message ‖ ecc` at each generator root `α^i`.
    ///
    /// An all-zero result means the codeword is consistent with no error;
    /// beyond-capacity error bursts can still alias to zero.
    pub fn compute_syndromes(&self, message: &[u8], ecc: &[u8]) -> Vec<u8> {
        let mut syndromes = vec![0u8; self.degree];
        for (i, syndrome) in syndromes.iter_mut().enumerate() {
            let x = self.field.primitive_power(i);
            let partial = poly::eval(&self.field, message, x);
            *syndrome = poly::eval_continue(&self.field, partial, ecc, x);
        }
        syndromes
    }

    /// Derive the error locator polynomial from the syndromes using the
    /// Berlekamp-Massey algorithm.
    ///
    /// Returns the locator highest-order-first; its degree equals the
    /// number of detected errors while that number is within capacity.
    pub fn find_error_locator(&self, syndromes: &[u8]) -> Vec<u8> {
        let field = &self.field;
        let length = syndromes.len();

        // current and previous locator, both starting as the constant 1
        let mut locator: Vec<u8> = vec![1];
        let mut prev: Vec<u8> = vec![1];
        // discrepancy at the last step that replaced `prev`; must only be
        // refreshed on that branch or the degree bound breaks
        let mut prev_discrepancy = 1u8;

        for n in 0..length {
            let mut discrepancy = syndromes[n];
            for j in 1..locator.len() {
                discrepancy ^=
                    field.multiply(locator[locator.len() - j - 1], syndromes[n - j]);
            }

            // prev picks up a factor of x every iteration
            prev.push(0);

            if discrepancy != 0 {
                let scale = field.multiply(discrepancy, field.inverse(prev_discrepancy));
                let updated = poly::add_scaled(field, &locator, &prev, scale);
                if 2 * locator.len() <= length {
                    prev = locator.clone();
                    prev_discrepancy = discrepancy;
                }
                locator = updated;
            }
        }

        poly::trim_leading_zeros(&mut locator);
        locator
    }

    /// Search every candidate byte offset for roots of the locator.
    ///
    /// A zero of the reciprocal locator at `α^i` marks byte
    /// `codeword_len - i - 1` of `message ‖ ecc` as erroneous. The search
    /// only succeeds when the number of roots matches the locator degree;
    /// a mismatch means the error pattern exceeds capacity.
    pub fn find_error_locations(
        &self,
        locator: &[u8],
        codeword_len: usize,
    ) -> Result<Vec<usize>, CodecError> {
        let mut locations = Vec::new();
        for i in 0..codeword_len {
            let x = self.field.primitive_power(i);
            if poly::eval_reciprocal(&self.field, locator, x) == 0 {
                locations.push(codeword_len - i - 1);
            }
        }

        let expected = locator.len().saturating_sub(1);
        if locations.len() != expected {
            return Err(CodecError::InsufficientCapacity {
                located: locations.len(),
                expected,
            });
        }
        Ok(locations)
    }

    /// Compute error magnitudes with the Forney formula and XOR them into
    /// the codeword at the located positions.
    fn correct_errors(
        &self,
        codeword: &mut [u8],
        syndromes: &[u8],
        locator: &[u8],
        locations: &[usize],
    ) -> Result<(), CodecError> {
        let field = &self.field;

        // work lowest-order-first here: reversing the monic locator is
        // exact because its constant term is nonzero
        let lambda: Vec<u8> = locator.iter().rev().copied().collect();

        // error evaluator Ω(x) = S(x) · Λ(x) mod x^degree
        let mut omega = vec![0u8; self.degree];
        for (j, &l) in lambda.iter().enumerate() {
            if l == 0 {
                continue;
            }
            for (k, &s) in syndromes.iter().enumerate() {
                let t = j + k;
                if t >= self.degree {
                    break;
                }
                omega[t] ^= field.multiply(l, s);
            }
        }
        omega.reverse();

        // formal derivative Λ'(x): odd-degree terms drop one power, the
        // rest vanish in characteristic 2
        let mut derivative = vec![0u8; lambda.len().saturating_sub(1)];
        for j in (1..lambda.len()).step_by(2) {
            derivative[j - 1] = lambda[j];
        }
        derivative.reverse();

        let n = codeword.len();
        for &location in locations {
            // generator roots start at α^0, so e = X · Ω(X⁻¹) / Λ'(X⁻¹)
            let position = n - location - 1;
            let x = field.primitive_power(position);
            let x_inv = field.inverse(x);
            let numerator = poly::eval(field, &omega, x_inv);
            let denominator = poly::eval(field, &derivative, x_inv);
            if denominator == 0 {
                return Err(CodecError::MagnitudeComputation);
            }
            let magnitude = field.multiply(x, field.divide(numerator, denominator));
            codeword[location] ^= magnitude;
        }
        Ok(())
    }

    /// Decode a received block, correcting `message` in place.
    ///
    /// Returns the corrected byte offsets within `message ‖ ecc` (empty
    /// for a clean codeword). On any failure the message buffer is left
    /// exactly as it was passed in: corrections are staged on a scratch
    /// copy and only committed after the repaired block passes a fresh
    /// syndrome check.
    pub fn decode(&self, message: &mut [u8], ecc: &[u8]) -> Result<Vec<usize>, CodecError> {
        self.check_block(message.len())?;
        if ecc.len() != self.degree {
            return Err(CodecError::EccLengthMismatch {
                len: ecc.len(),
                expected: self.degree,
            });
        }

        let syndromes = self.compute_syndromes(message, ecc);
        if syndromes.iter().all(|&s| s == 0) {
            debug!("syndromes clear, codeword accepted as-is");
            return Ok(Vec::new());
        }

        let locator = self.find_error_locator(&syndromes);
        debug!(
            "nonzero syndromes, locator degree {}",
            locator.len().saturating_sub(1)
        );

        let codeword_len = message.len() + ecc.len();
        let mut locations = self.find_error_locations(&locator, codeword_len)?;
        locations.sort_unstable();
        debug!("located {} error byte(s) at {:?}", locations.len(), locations);

        let mut codeword = Vec::with_capacity(codeword_len);
        codeword.extend_from_slice(message);
        codeword.extend_from_slice(ecc);
        self.correct_errors(&mut codeword, &syndromes, &locator, &locations)?;

        let residue =
            self.compute_syndromes(&codeword[..message.len()], &codeword[message.len()..]);
        if residue.iter().any(|&s| s != 0) {
            debug!("corrected block fails the syndrome re-check, rejecting");
            return Err(CodecError::ResidualErrors);
        }

        message.copy_from_slice(&codeword[..message.len()]);
        Ok(locations)
    }

    fn check_block(&self, message_len: usize) -> Result<(), CodecError> {
        if message_len == 0 {
            return Err(CodecError::EmptyMessage);
        }
        let codeword_len = message_len + self.degree;
        if codeword_len > self.field.max_value() {
            return Err(CodecError::BlockTooLong {
                len: codeword_len,
                max: self.field.max_value(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for RsCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsCodec")
            .field("field", &self.field)
            .field("degree", &self.degree)
            .finish()
    }
}

/// Build `G(x) = Π_{i=0}^{degree-1} (x - α^i)` by accumulating the linear
/// factors one at a time
fn build_generator(field: &GaloisField, degree: usize) -> Vec<u8> {
    let mut generator: Vec<u8> = vec![1];
    let mut factor = [1u8, 0];
    for i in 0..degree {
        factor[1] = field.primitive_power(i);
        generator = poly::mult(field, &generator, &factor);
    }
    generator
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMITIVE8: u32 = 0x11D;

    fn codec(degree: usize) -> RsCodec {
        let field = Arc::new(GaloisField::new(8, PRIMITIVE8).unwrap());
        RsCodec::new(field, degree).unwrap()
    }

    #[test]
    fn generator_known_coefficients() {
        // g4(x) = x^4 + 0f x^3 + 36 x^2 + 78 x + 40 over 0x11D
        let alg = codec(4);
        assert_eq!(alg.generator(), &[0x01, 0x0F, 0x36, 0x78, 0x40]);
    }

    #[test]
    fn generator_is_monic_with_expected_length() {
        for degree in 1..20 {
            let alg = codec(degree);
            assert_eq!(alg.generator().len(), degree + 1);
            assert_eq!(alg.generator()[0], 1);
        }
    }

    #[test]
    fn ecc_is_always_degree_bytes() {
        let alg = codec(6);
        // a message dividing evenly would just produce zero padding
        let ecc = alg.compute_ecc(&[0x01]).unwrap();
        assert_eq!(ecc.len(), 6);
        let ecc = alg.compute_ecc(&[0x55; 100]).unwrap();
        assert_eq!(ecc.len(), 6);
    }

    #[test]
    fn rejects_bad_construction() {
        let gf4 = Arc::new(GaloisField::new(2, 0b111).unwrap());
        assert_eq!(
            RsCodec::new(gf4, 2).unwrap_err(),
            CodecError::UnsupportedField { num_bits: 2 }
        );

        let gf8 = Arc::new(GaloisField::new(8, PRIMITIVE8).unwrap());
        assert!(matches!(
            RsCodec::new(gf8.clone(), 0),
            Err(CodecError::InvalidDegree { .. })
        ));
        assert!(matches!(
            RsCodec::new(gf8, 255),
            Err(CodecError::InvalidDegree { .. })
        ));
    }

    #[test]
    fn rejects_malformed_blocks() {
        let alg = codec(10);
        assert_eq!(alg.compute_ecc(&[]).unwrap_err(), CodecError::EmptyMessage);
        assert!(matches!(
            alg.compute_ecc(&[0u8; 250]),
            Err(CodecError::BlockTooLong { .. })
        ));

        let mut message = vec![1u8, 2, 3];
        assert!(matches!(
            alg.decode(&mut message, &[0u8; 4]),
            Err(CodecError::EccLengthMismatch { .. })
        ));
        assert_eq!(message, vec![1, 2, 3]);
    }

    #[test]
    fn locator_is_trivial_for_zero_syndromes() {
        let alg = codec(6);
        let locator = alg.find_error_locator(&[0u8; 6]);
        assert_eq!(locator, vec![1]);
        let locations = alg.find_error_locations(&locator, 40).unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn decode_is_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<RsCodec>();
    }
}
