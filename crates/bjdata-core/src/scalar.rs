//! Scalar readers: fixed-width integers and floats, the 1-byte
//! `char`, length-prefixed strings, and length-prefixed high-precision
//! decimals.

use crate::decoder::DecoderBuffer;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::marker;
use crate::value::{DecoderValue, Integer};

/// Reads `N` bytes and assembles them per the `islittle` preference,
/// returning the bytes in a fixed-size array for the caller to interpret.
fn read_fixed<H: HostFactories, const N: usize>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<[u8; N], DecodeError> {
    let bytes = buf.read(N, false)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Decodes the integer named by `marker`. Widens to the smallest native
/// integer always wide enough: all
/// signed widths and unsigned widths up to 32 bits fit in `i64`/`u64`
/// respectively; `M` (`u64`) values are the only ones that may not fit in
/// `i64`, so they are carried as `Integer::Unsigned`.
pub(crate) fn decode_integer<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    marker: u8,
) -> Result<Integer, DecodeError> {
    let little = buf.options.islittle;
    Ok(match marker {
        marker::INT8 => Integer::Signed(i64::from(read_fixed::<H, 1>(buf)?[0] as i8)),
        marker::UINT8 => Integer::Unsigned(u64::from(read_fixed::<H, 1>(buf)?[0])),
        marker::INT16 => {
            let b = read_fixed::<H, 2>(buf)?;
            let v = if little {
                i16::from_le_bytes(b)
            } else {
                i16::from_be_bytes(b)
            };
            Integer::Signed(i64::from(v))
        }
        marker::UINT16 => {
            let b = read_fixed::<H, 2>(buf)?;
            let v = if little {
                u16::from_le_bytes(b)
            } else {
                u16::from_be_bytes(b)
            };
            Integer::Unsigned(u64::from(v))
        }
        marker::INT32 => {
            let b = read_fixed::<H, 4>(buf)?;
            let v = if little {
                i32::from_le_bytes(b)
            } else {
                i32::from_be_bytes(b)
            };
            Integer::Signed(i64::from(v))
        }
        marker::UINT32 => {
            let b = read_fixed::<H, 4>(buf)?;
            let v = if little {
                u32::from_le_bytes(b)
            } else {
                u32::from_be_bytes(b)
            };
            Integer::Unsigned(u64::from(v))
        }
        marker::INT64 => {
            let b = read_fixed::<H, 8>(buf)?;
            let v = if little {
                i64::from_le_bytes(b)
            } else {
                i64::from_be_bytes(b)
            };
            Integer::Signed(v)
        }
        marker::UINT64 => {
            let b = read_fixed::<H, 8>(buf)?;
            let v = if little {
                u64::from_le_bytes(b)
            } else {
                u64::from_be_bytes(b)
            };
            Integer::Unsigned(v)
        }
        other => return Err(buf.err(DecodeErrorKind::InvalidMarker(other))),
    })
}

pub(crate) fn decode_f16<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<f64, DecodeError> {
    let b = read_fixed::<H, 2>(buf)?;
    let bits = if buf.options.islittle {
        u16::from_le_bytes(b)
    } else {
        u16::from_be_bytes(b)
    };
    Ok(f64::from(half::f16::from_bits(bits).to_f32()))
}

pub(crate) fn decode_f32<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<f64, DecodeError> {
    let b = read_fixed::<H, 4>(buf)?;
    let v = if buf.options.islittle {
        f32::from_le_bytes(b)
    } else {
        f32::from_be_bytes(b)
    };
    Ok(f64::from(v))
}

pub(crate) fn decode_f64<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<f64, DecodeError> {
    let b = read_fixed::<H, 8>(buf)?;
    Ok(if buf.options.islittle {
        f64::from_le_bytes(b)
    } else {
        f64::from_be_bytes(b)
    })
}

/// Reads exactly one byte and presents it as a 1-codepoint UTF-8 string
/// (the producer is expected to use ASCII; a non-ASCII byte here
/// surfaces as an invalid-UTF-8 error).
pub(crate) fn decode_char<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<DecoderValue<H>, DecodeError> {
    let byte = buf.read(1, false)?;
    let s = core::str::from_utf8(&byte)
        .map_err(|e| buf.err(DecodeErrorKind::Utf8Decode(e)))?
        .to_owned();
    Ok(DecoderValue::Char(s))
}

/// Decodes a non-negative length-prefixed UTF-8 string.
pub(crate) fn decode_string<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<String, DecodeError> {
    let len = buf.decode_length(None)?;
    let bytes = buf.read(len as usize, false)?;
    String::from_utf8(bytes).map_err(|e| buf.err(DecodeErrorKind::Utf8Decode(e.utf8_error())))
}

/// Decodes a length-prefixed high-precision decimal string and hands it to
/// the host's [`HostFactories::make_decimal`].
pub(crate) fn decode_high_prec<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<DecoderValue<H>, DecodeError> {
    let text = decode_string(buf)?;
    let decimal = buf
        .host
        .make_decimal(&text)
        .map_err(|e| buf.err(e.kind))?;
    Ok(DecoderValue::HighPrec(decimal))
}
