//! Counted/uncounted key-value containers, with
//! mapping mode (last-key-wins, `object_hook`) and pairs mode (duplicates
//! preserved, `object_pairs_hook`), selected by which hook is configured.

use std::collections::BTreeMap;

use crate::container::ContainerParams;
use crate::decoder::DecoderBuffer;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::marker;
use crate::value::DecoderValue;

pub(crate) fn decode_object<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<DecoderValue<H>, DecodeError> {
    let params = buf.parse_container_header(true)?;

    if buf.options.object_pairs_hook.is_some() {
        decode_pairs(buf, params)
    } else {
        decode_mapping(buf, params)
    }
}

fn decode_key<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    marker_byte: u8,
) -> Result<String, DecodeError> {
    let len = buf.decode_length(Some(marker_byte))?;
    let len = usize::try_from(len).map_err(|_| buf.err(DecodeErrorKind::NegativeLength(len)))?;
    let bytes = buf.read(len, false)?;
    let key = String::from_utf8(bytes)
        .map_err(|e| buf.err(DecodeErrorKind::Utf8Decode(e.utf8_error())))?;
    Ok(if buf.options.intern_object_keys {
        buf.host.intern_key(key)
    } else {
        key
    })
}

/// Decodes one key/value pair. `marker_byte` is the already-known marker for
/// the key's length prefix; the value is decoded using the container's
/// global type (if any) or a freshly read marker.
fn decode_pair<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    marker_byte: u8,
    type_marker: Option<u8>,
) -> Result<(String, DecoderValue<H>), DecodeError> {
    let key = decode_key(buf, marker_byte)?;
    let value = match type_marker {
        Some(t) => buf.decode_value(Some(t))?,
        None => buf.decode_value(None)?,
    };
    Ok((key, value))
}

fn decode_mapping<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    params: ContainerParams,
) -> Result<DecoderValue<H>, DecodeError> {
    let mut map = BTreeMap::new();

    if params.counting {
        let count = usize::try_from(params.count)
            .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
        let mut marker_byte = params.marker;
        let mut remaining = count;
        while remaining > 0 {
            if marker_byte == marker::NOOP {
                marker_byte = buf.read_byte()?;
                continue;
            }
            let (key, value) = decode_pair(buf, marker_byte, params.type_marker)?;
            map.insert(key, value);
            remaining -= 1;
            if remaining > 0 {
                marker_byte = buf.read_byte()?;
            }
        }
    } else {
        let mut marker_byte = params.marker;
        loop {
            if marker_byte == marker::OBJECT_END {
                break;
            }
            if marker_byte == marker::NOOP {
                marker_byte = buf.read_byte()?;
                continue;
            }
            let (key, value) = decode_pair(buf, marker_byte, None)?;
            map.insert(key, value);
            marker_byte = buf.read_byte()?;
        }
    }

    if let Some(hook) = buf.options.object_hook.as_mut() {
        Ok(hook(map))
    } else {
        Ok(DecoderValue::Map(map))
    }
}

fn decode_pairs<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    params: ContainerParams,
) -> Result<DecoderValue<H>, DecodeError> {
    let mut pairs = Vec::new();

    if params.counting {
        let count = usize::try_from(params.count)
            .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(params.count)))?;
        let mut marker_byte = params.marker;
        let mut remaining = count;
        while remaining > 0 {
            if marker_byte == marker::NOOP {
                marker_byte = buf.read_byte()?;
                continue;
            }
            pairs.push(decode_pair(buf, marker_byte, params.type_marker)?);
            remaining -= 1;
            if remaining > 0 {
                marker_byte = buf.read_byte()?;
            }
        }
    } else {
        let mut marker_byte = params.marker;
        loop {
            if marker_byte == marker::OBJECT_END {
                break;
            }
            if marker_byte == marker::NOOP {
                marker_byte = buf.read_byte()?;
                continue;
            }
            pairs.push(decode_pair(buf, marker_byte, None)?);
            marker_byte = buf.read_byte()?;
        }
    }

    if let Some(hook) = buf.options.object_pairs_hook.as_mut() {
        Ok(hook(pairs))
    } else {
        Ok(DecoderValue::Pairs(pairs))
    }
}
