//! Galois Field GF(2^m) arithmetic backed by log/antilog tables
//!
//! The field is defined by a word size `m` (1 to 8 bits) and a caller-chosen
//! primitive polynomial of degree `m` over GF(2). All arithmetic is O(1)
//! table lookup after a one-time O(2^m) table build. Addition is plain XOR
//! and needs no table.
//!
//! A `GaloisField` is immutable once constructed. Encode and decode must use
//! the same field instance; share it behind an `Arc` rather than rebuilding
//! the tables per codec.

use crate::error::FieldError;

/// Precomputed exponent/logarithm tables for GF(2^m)
pub struct GaloisField {
    num_bits: u32,
    primitive: u32,
    num_values: usize,
    max_value: usize,
    /// Antilog table, doubled in length so multiply needs no modulo
    exp: Vec<u8>,
    log: Vec<u8>,
}

impl GaloisField {
    /// Build the field tables for `(num_bits, primitive)`.
    ///
    /// The primitive polynomial must have degree exactly `num_bits` and must
    /// generate the full multiplicative group: repeated multiplication by
    /// `x` has to visit every nonzero element before returning to 1. Both
    /// conditions are checked here so a misconfigured field fails fast
    /// instead of producing silently wrong tables.
    pub fn new(num_bits: u32, primitive: u32) -> Result<Self, FieldError> {
        if !(1..=8).contains(&num_bits) {
            return Err(FieldError::UnsupportedWordSize { num_bits });
        }
        if primitive >> num_bits != 1 {
            return Err(FieldError::InvalidPrimitive { primitive, num_bits });
        }

        let num_values = 1usize << num_bits;
        let max_value = num_values - 1;
        let mut exp = vec![0u8; 2 * max_value];
        let mut log = vec![0u8; num_values];
        let mut seen = vec![false; num_values];

        let mut value = 1u32;
        for i in 0..max_value {
            if seen[value as usize] {
                // the generated sequence cycled early: not a primitive root
                return Err(FieldError::InvalidPrimitive { primitive, num_bits });
            }
            seen[value as usize] = true;
            exp[i] = value as u8;
            log[value as usize] = i as u8;

            value <<= 1;
            if value & num_values as u32 != 0 {
                value ^= primitive;
            }
        }
        if value != 1 {
            return Err(FieldError::InvalidPrimitive { primitive, num_bits });
        }

        // Duplicate the antilog table so multiply can index log(a)+log(b)
        // directly without reducing mod 2^m - 1
        for i in max_value..2 * max_value {
            exp[i] = exp[i - max_value];
        }

        Ok(GaloisField {
            num_bits,
            primitive,
            num_values,
            max_value,
            exp,
            log,
        })
    }

    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// Number of elements in the field, 2^m
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    /// Largest field element, 2^m - 1
    pub fn max_value(&self) -> usize {
        self.max_value
    }

    /// Multiply two field elements
    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// Divide two field elements. Panics if `b` is zero.
    #[inline]
    pub fn divide(&self, a: u8, b: u8) -> u8 {
        if b == 0 {
            panic!("division by zero in GF(2^{})", self.num_bits);
        }
        if a == 0 {
            return 0;
        }
        let log_a = self.log[a as usize] as usize;
        let log_b = self.log[b as usize] as usize;
        self.exp[log_a + self.max_value - log_b]
    }

    /// Multiplicative inverse. Panics if `a` is zero.
    #[inline]
    pub fn inverse(&self, a: u8) -> u8 {
        if a == 0 {
            panic!("zero has no inverse in GF(2^{})", self.num_bits);
        }
        self.exp[self.max_value - self.log[a as usize] as usize]
    }

    /// Raise a field element to a power
    #[inline]
    pub fn power(&self, base: u8, exponent: usize) -> u8 {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }
        let log_base = self.log[base as usize] as usize;
        self.exp[(log_base * exponent) % self.max_value]
    }

    /// α^i, the i-th power of the field's primitive element
    #[inline]
    pub fn primitive_power(&self, i: usize) -> u8 {
        self.exp[i % self.max_value]
    }
}

impl std::fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaloisField")
            .field("num_bits", &self.num_bits)
            .field("primitive", &format_args!("{:#x}", self.primitive))
            .finish()
    }
}
