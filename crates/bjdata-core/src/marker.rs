//! Marker byte constants.
//!
//! BJData/UBJSON markers are single ASCII bytes; the wire format requires
//! bit-exact compatibility, so these are the literal byte values, not
//! internal enum discriminants chosen for convenience.

pub const NULL: u8 = b'Z';
pub const TRUE: u8 = b'T';
pub const FALSE: u8 = b'F';
pub const CHAR: u8 = b'C';
pub const STRING: u8 = b'S';
pub const HIGH_PREC: u8 = b'H';

pub const INT8: u8 = b'i';
pub const UINT8: u8 = b'U';
pub const INT16: u8 = b'I';
pub const UINT16: u8 = b'u';
pub const INT32: u8 = b'l';
pub const UINT32: u8 = b'm';
pub const INT64: u8 = b'L';
pub const UINT64: u8 = b'M';

pub const FLOAT16: u8 = b'h';
pub const FLOAT32: u8 = b'd';
pub const FLOAT64: u8 = b'D';

pub const ARRAY_START: u8 = b'[';
pub const ARRAY_END: u8 = b']';
pub const OBJECT_START: u8 = b'{';
pub const OBJECT_END: u8 = b'}';
pub const CONTAINER_TYPE: u8 = b'$';
pub const CONTAINER_COUNT: u8 = b'#';
pub const NOOP: u8 = b'N';

/// True for markers that may legally follow `$` as a container's global
/// element type.
pub fn is_valid_container_type(marker: u8) -> bool {
    matches!(
        marker,
        NULL | TRUE
            | FALSE
            | CHAR
            | STRING
            | INT8
            | UINT8
            | INT16
            | UINT16
            | INT32
            | UINT32
            | INT64
            | UINT64
            | FLOAT16
            | FLOAT32
            | FLOAT64
            | HIGH_PREC
            | ARRAY_START
            | OBJECT_START
    )
}

/// True for markers whose value carries no following bytes: it is implicit
/// in the marker itself.
pub fn is_no_data_type(marker: u8) -> bool {
    matches!(marker, NULL | TRUE | FALSE)
}

/// True for markers that are integer-decoding markers, i.e. valid targets for
/// decoding a non-negative length prefix.
pub fn is_integer_marker(marker: u8) -> bool {
    matches!(
        marker,
        INT8 | UINT8 | INT16 | UINT16 | INT32 | UINT32 | INT64 | UINT64
    )
}
