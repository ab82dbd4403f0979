//! A streaming decoder core for the Binary JData (BJData) / UBJSON-derived
//! binary serialization format: the self-describing, length-prefixed,
//! marker-driven binary representation of scalars, strings, high-precision
//! decimals, variable-length arrays, typed/counted arrays (including
//! N-dimensional packed arrays), and key/value objects.
//!
//! This crate implements only the decoder: the marker dispatch, container
//! header grammar, and the byte-source abstraction that lets the same
//! decoder run over an in-memory buffer, a blocking stream, or a seekable
//! stream. The symmetric encoder, host module initialization, and CLI/library
//! entry points are external collaborators and are not part of this crate.
//!
//! The arbitrary-precision decimal type and the N-dimensional numeric array
//! type are opaque to this crate: callers supply a [`HostFactories`]
//! implementation that knows how to build them.
#![allow(missing_docs)]

mod array;
mod container;
mod decoder;
mod error;
mod factory;
mod marker;
mod object;
mod options;
mod scalar;
mod source;
mod value;

pub use decoder::{DecoderBuffer, MAX_DEPTH, decode_value};
pub use error::{DecodeError, DecodeErrorKind};
pub use factory::HostFactories;
pub use options::DecoderOptions;
pub use source::{SEEK_LOOKAHEAD, Source};
pub use value::{DecoderValue, ElementType};

/// A do-nothing [`HostFactories`] that records shape/type/bytes verbatim and
/// passes decimal text straight through, gated behind the `fuzzing` feature
/// so the fuzz target has a concrete host without this crate depending on
/// one itself.
#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use crate::error::DecodeError;
    use crate::factory::HostFactories;
    use crate::value::ElementType;

    #[derive(Debug, Default)]
    pub struct NoopHost;

    impl HostFactories for NoopHost {
        type Decimal = String;
        type NdArray = (Vec<usize>, ElementType, Vec<u8>);

        fn make_decimal(&mut self, text: &str) -> Result<Self::Decimal, DecodeError> {
            Ok(text.to_owned())
        }

        fn make_ndarray(
            &mut self,
            shape: &[usize],
            element: ElementType,
            bytes: &[u8],
        ) -> Result<Self::NdArray, DecodeError> {
            Ok((shape.to_vec(), element, bytes.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests;
