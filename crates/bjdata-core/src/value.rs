//! The decoded value tree, generic over the host's opaque decimal and
//! N-dimensional array types (see [`crate::HostFactories`]).

use std::collections::BTreeMap;

use crate::factory::HostFactories;

/// Any value this decoder can produce.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(
            serialize = "H::Decimal: serde::Serialize, H::NdArray: serde::Serialize",
            deserialize = "H::Decimal: serde::Deserialize<'de>, H::NdArray: serde::Deserialize<'de>"
        )
    )
)]
pub enum DecoderValue<H: HostFactories> {
    Null,
    Bool(bool),
    /// A decoded integer, widened to the smallest native type that is always
    /// wide enough: `i64` covers every signed width in the type table, and
    /// `U`/`u`/`m` unsigned widths that do not fit in `i64` (namely `M`
    /// values `> i64::MAX`) are carried separately.
    Integer(Integer),
    Float(f64),
    /// A one-codepoint string, produced by the `char` decoder.
    Char(String),
    String(String),
    HighPrec(H::Decimal),
    Bytes(Vec<u8>),
    NdArray(H::NdArray),
    List(Vec<DecoderValue<H>>),
    Map(BTreeMap<String, DecoderValue<H>>),
    /// Ordered `(key, value)` pairs, produced instead of `Map` when
    /// `object_pairs_hook` is configured; duplicate keys are
    /// preserved, unlike `Map` where the last value wins.
    Pairs(Vec<(String, DecoderValue<H>)>),
}

/// A decoded integer value, widened per marker to the smallest native
/// integer always wide enough to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl Integer {
    /// Returns the value as an `i64`, if it fits.
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Integer::Signed(v) => Some(v),
            Integer::Unsigned(v) => i64::try_from(v).ok(),
        }
    }
}

impl<H: HostFactories> core::fmt::Debug for DecoderValue<H>
where
    H::Decimal: core::fmt::Debug,
    H::NdArray: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::HighPrec(d) => f.debug_tuple("HighPrec").field(d).finish(),
            Self::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Self::NdArray(a) => f.debug_tuple("NdArray").field(a).finish(),
            Self::List(l) => f.debug_tuple("List").field(l).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Self::Pairs(p) => f.debug_tuple("Pairs").field(p).finish(),
        }
    }
}

impl<H: HostFactories> PartialEq for DecoderValue<H>
where
    H::Decimal: PartialEq,
    H::NdArray: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Char(a), Self::Char(b)) | (Self::String(a), Self::String(b)) => a == b,
            (Self::HighPrec(a), Self::HighPrec(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::NdArray(a), Self::NdArray(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Pairs(a), Self::Pairs(b)) => a == b,
            _ => false,
        }
    }
}

/// The fixed-width element type table, used both for global container
/// types and for N-dimensional array payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float16,
    Float32,
    Float64,
    Char,
}

impl ElementType {
    /// Number of bytes a single element of this type occupies on the wire.
    #[must_use]
    pub fn byte_width(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 | ElementType::Char => 1,
            ElementType::Int16 | ElementType::Uint16 | ElementType::Float16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::Int64 | ElementType::Uint64 | ElementType::Float64 => 8,
        }
    }

    /// Maps a marker byte to its `ElementType`, if it names one of the
    /// one of the fixed-width types. Returns `None` for every other marker
    /// (including the no-data types and container markers, which are valid
    /// global types but not fixed-width element types).
    #[must_use]
    pub fn from_marker(marker: u8) -> Option<Self> {
        use crate::marker;
        Some(match marker {
            marker::INT8 => ElementType::Int8,
            marker::UINT8 => ElementType::Uint8,
            marker::INT16 => ElementType::Int16,
            marker::UINT16 => ElementType::Uint16,
            marker::INT32 => ElementType::Int32,
            marker::UINT32 => ElementType::Uint32,
            marker::INT64 => ElementType::Int64,
            marker::UINT64 => ElementType::Uint64,
            marker::FLOAT16 => ElementType::Float16,
            marker::FLOAT32 => ElementType::Float32,
            marker::FLOAT64 => ElementType::Float64,
            marker::CHAR => ElementType::Char,
            _ => return None,
        })
    }
}
