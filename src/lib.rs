//! Systematic Reed-Solomon error correction over GF(2^m)
//!
//! The crate is layered bottom-up: [`galois`] builds the field tables,
//! [`poly`] provides polynomial arithmetic over a field, and [`codec`]
//! combines them into a systematic encoder/decoder with Berlekamp-Massey
//! error location and Forney magnitude correction.
//!
//! ```
//! use std::sync::Arc;
//! use rsecc::{GaloisField, RsCodec};
//!
//! let field = Arc::new(GaloisField::new(8, 0x11D).unwrap());
//! let codec = RsCodec::new(field, 10).unwrap();
//!
//! let mut message = b"hello reed-solomon".to_vec();
//! let ecc = codec.compute_ecc(&message).unwrap();
//!
//! message[3] ^= 0x5A;
//! let corrected = codec.decode(&mut message, &ecc).unwrap();
//! assert_eq!(&message, b"hello reed-solomon");
//! assert_eq!(corrected, vec![3]);
//! ```

pub mod args;
pub mod codec;
pub mod error;
pub mod galois;
pub mod poly;

pub use args::{parse_args, parse_primitive};
pub use codec::RsCodec;
pub use error::{CodecError, FieldError};
pub use galois::GaloisField;
