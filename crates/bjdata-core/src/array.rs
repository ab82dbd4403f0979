//! Counted/typed/untyped arrays, with fast paths
//! for byte arrays, N-D packed arrays, fixed-width 1-D packed arrays, and
//! all-singleton no-data arrays.

use crate::container::{parse_array_container_header, ContainerParams};
use crate::decoder::DecoderBuffer;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::marker;
use crate::value::{DecoderValue, ElementType};

pub(crate) fn decode_array<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<DecoderValue<H>, DecodeError> {
    let (params, dims) = parse_array_container_header(buf)?;

    if !params.counting {
        return decode_uncounted(buf, params.marker);
    }

    let elem = params.type_marker.and_then(ElementType::from_marker);

    // Fast path 1: counted byte array.
    if params.type_marker == Some(marker::UINT8) && !buf.options.no_bytes && dims.is_none() {
        let count = usize::try_from(params.count)
            .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
        let bytes = buf.read(count, false)?;
        return Ok(DecoderValue::Bytes(bytes));
    }

    // Fast path 2: optimized N-D packed array.
    if let Some(dims) = dims {
        let elem = elem.expect("header validated the N-D element type is numeric");
        return decode_packed(buf, &dims, elem);
    }

    // Fast path 3: no-data element type, every slot is the same singleton.
    if let Some(t) = params.type_marker {
        if marker::is_no_data_type(t) {
            let count = usize::try_from(params.count)
                .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
            let v = match t {
                marker::NULL => DecoderValue::Null,
                marker::TRUE => DecoderValue::Bool(true),
                _ => DecoderValue::Bool(false),
            };
            let mut list = Vec::with_capacity(count);
            for _ in 0..count {
                list.push(clone_singleton(&v));
            }
            return Ok(DecoderValue::List(list));
        }
    }

    // Fast path 4: fixed-width 1-D packed array. Excludes `u8` under
    // `no_bytes`, which asks for a list of integers instead of a packed
    // array (fast path 1 handles `u8` when `no_bytes` is unset).
    if let Some(elem) = elem {
        if params.count > 0 && elem != ElementType::Uint8 {
            let count = usize::try_from(params.count)
                .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
            return decode_packed(buf, &[count], elem);
        }
    }

    // General path: element-by-element, possibly with per-element markers.
    decode_counted_general(buf, params)
}

fn clone_singleton<H: HostFactories>(v: &DecoderValue<H>) -> DecoderValue<H> {
    match v {
        DecoderValue::Null => DecoderValue::Null,
        DecoderValue::Bool(b) => DecoderValue::Bool(*b),
        _ => unreachable!("clone_singleton only used for Z/T/F fast path"),
    }
}

fn decode_packed<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    dims: &[usize],
    elem: ElementType,
) -> Result<DecoderValue<H>, DecodeError> {
    let total_elements = dims.iter().product::<usize>();
    let byte_len = total_elements
        .checked_mul(elem.byte_width())
        .ok_or_else(|| buf.err(DecodeErrorKind::NegativeLength(-1)))?;
    let bytes = buf.read(byte_len, false)?;
    let array = buf
        .host
        .make_ndarray(dims, elem, &bytes)
        .map_err(|e| buf.err(e.kind))?;
    Ok(DecoderValue::NdArray(array))
}

fn decode_counted_general<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    params: ContainerParams,
) -> Result<DecoderValue<H>, DecodeError> {
    let count = usize::try_from(params.count)
        .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
    let mut list = Vec::with_capacity(count);
    let mut marker_byte = params.marker;
    let mut remaining = count;

    while remaining > 0 {
        if marker_byte == marker::NOOP {
            marker_byte = buf.read_byte()?;
            continue;
        }
        let value = buf.decode_value(Some(marker_byte))?;
        list.push(value);
        remaining -= 1;
        if remaining > 0 && params.type_marker.is_none() {
            marker_byte = buf.read_byte()?;
        }
    }
    Ok(DecoderValue::List(list))
}

fn decode_uncounted<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    first_marker: u8,
) -> Result<DecoderValue<H>, DecodeError> {
    let mut list = Vec::new();
    let mut marker_byte = first_marker;
    loop {
        if marker_byte == marker::ARRAY_END {
            break;
        }
        if marker_byte == marker::NOOP {
            marker_byte = buf.read_byte()?;
            continue;
        }
        let value = buf.decode_value(Some(marker_byte))?;
        list.push(value);
        marker_byte = buf.read_byte()?;
    }
    Ok(DecoderValue::List(list))
}
