//! Abstraction over the two external value constructors the decoder
//! delegates to: a generic trait lets the core stay decoupled from a
//! concrete representation of the values it cannot itself construct.
//!
//! The arbitrary-precision decimal type and the N-dimensional numeric
//! array type are external collaborators with named contracts only: this
//! crate defines the contract, not the implementation.

use crate::error::DecodeError;
use crate::value::ElementType;

/// Host-supplied constructors for the two opaque value kinds this decoder
/// cannot build on its own.
pub trait HostFactories {
    /// The arbitrary-precision decimal type produced by [`Self::make_decimal`].
    type Decimal;
    /// The N-dimensional numeric array type produced by [`Self::make_ndarray`].
    type NdArray;

    /// Build a decimal value from its decoded numeric-string representation
    /// (the bytes of a BJData `H` high-precision value, already validated as
    /// UTF-8).
    ///
    /// # Errors
    ///
    /// Returns `DecodeErrorKind::HostFactoryFailure` wrapped in a
    /// [`DecodeError`] if `text` is not a value the host decimal type can
    /// represent.
    fn make_decimal(&mut self, text: &str) -> Result<Self::Decimal, DecodeError>;

    /// Build an N-dimensional array from its shape, element type, and raw
    /// payload bytes in native (wire) layout.
    ///
    /// `bytes` is handed over exactly as read
    /// from the wire in the endianness selected for this decode call; it is
    /// this factory's responsibility to interpret that layout.
    ///
    /// # Errors
    ///
    /// Returns `DecodeErrorKind::HostFactoryFailure` wrapped in a
    /// [`DecodeError`] if the shape/element type/byte length combination is
    /// not one the host array type can represent.
    fn make_ndarray(
        &mut self,
        shape: &[usize],
        element: ElementType,
        bytes: &[u8],
    ) -> Result<Self::NdArray, DecodeError>;

    /// Called on each decoded object key when
    /// [`DecoderOptions::intern_object_keys`](crate::DecoderOptions::intern_object_keys)
    /// is set, so the host can fold it into its own string table and hand
    /// back a (possibly shared) replacement.
    ///
    /// The default implementation returns `key` unchanged: interning is
    /// meaningful only to a host that keeps its own table, so this crate has
    /// nothing useful to do with the request on its own.
    fn intern_key(&mut self, key: String) -> String {
        key
    }
}
