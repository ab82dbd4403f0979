//! Parses the optional `$T` (global type) and
//! `#N` (count) preamble shared by arrays and objects, including the
//! optimized N-D array header `[$T#[<dims>]`.

use crate::decoder::DecoderBuffer;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::marker;

/// The result of parsing one container's `$T#N` preamble.
#[derive(Debug, Clone, Copy)]
pub struct ContainerParams {
    /// The byte to consume next as the first element's marker (or the
    /// container's closing marker, for an empty/terminated container).
    pub marker: u8,
    /// Whether a `#` count preamble was present.
    pub counting: bool,
    /// The element/pair count. Meaningless (a `1` placeholder) when
    /// `counting` is `false`.
    pub count: i64,
    /// The global element type set by `$T`, if any.
    pub type_marker: Option<u8>,
}

/// Parses the container preamble starting at the first byte inside `[` or
/// `{`. `want_ndim` enables the optimized N-D array header and is only ever
/// set by the array decoder; when it fires, the dimension vector is returned
/// alongside the params.
pub(crate) fn parse_container_header<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    in_mapping: bool,
) -> Result<ContainerParams, DecodeError> {
    parse_container_header_inner(buf, in_mapping, false).map(|(p, _)| p)
}

/// Array-path variant that also recognizes the optimized N-D header.
pub(crate) fn parse_array_container_header<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<(ContainerParams, Option<Vec<usize>>), DecodeError> {
    parse_container_header_inner(buf, false, true)
}

fn parse_container_header_inner<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
    in_mapping: bool,
    want_ndim: bool,
) -> Result<(ContainerParams, Option<Vec<usize>>), DecodeError> {
    let mut m = buf.read_byte()?;
    let mut type_marker: Option<u8> = None;

    if m == marker::CONTAINER_TYPE {
        let t = buf.read_byte()?;
        if !marker::is_valid_container_type(t) {
            return Err(buf.err(DecodeErrorKind::InvalidContainerType(t)));
        }
        type_marker = Some(t);
        m = buf.read_byte()?;
    }

    if m == marker::CONTAINER_COUNT {
        let m2 = buf.read_byte()?;

        if want_ndim && m2 == marker::ARRAY_START {
            let dims = parse_ndim_dims(buf)?;
            let count = dims.iter().try_fold(1i64, |acc, &d| {
                i64::try_from(d).ok().and_then(|d| acc.checked_mul(d))
            });
            let Some(type_marker) = type_marker else {
                return Err(buf.err(DecodeErrorKind::TypedContainerWithoutCount));
            };
            if crate::value::ElementType::from_marker(type_marker).is_none() {
                return Err(buf.err(DecodeErrorKind::InvalidContainerType(type_marker)));
            }
            let count = count.ok_or_else(|| buf.err(DecodeErrorKind::NegativeLength(-1)))?;
            return Ok((
                ContainerParams {
                    marker: type_marker,
                    counting: true,
                    count,
                    type_marker: Some(type_marker),
                },
                Some(dims),
            ));
        }

        let count = buf.decode_length(Some(m2))?;

        let marker = if count > 0 && (in_mapping || type_marker.is_none()) {
            buf.read_byte()?
        } else {
            type_marker.expect("count > 0 with no prefetch implies a global type was set")
        };

        Ok((
            ContainerParams {
                marker,
                counting: true,
                count,
                type_marker,
            },
            None,
        ))
    } else if type_marker.is_none() {
        Ok((
            ContainerParams {
                marker: m,
                counting: false,
                count: 1,
                type_marker: None,
            },
            None,
        ))
    } else {
        Err(buf.err(DecodeErrorKind::TypedContainerWithoutCount))
    }
}

/// Parses the dimension vector of an optimized N-D array header: itself a
/// (possibly typed, possibly counted) nested array header, whose elements
/// are integer lengths.
fn parse_ndim_dims<H: HostFactories>(
    buf: &mut DecoderBuffer<'_, H>,
) -> Result<Vec<usize>, DecodeError> {
    let (inner, _) = parse_container_header_inner(buf, false, false)?;

    if inner.counting {
        let ndim = usize::try_from(inner.count)
            .map_err(|_| buf.err(DecodeErrorKind::NegativeLength(inner.count)))?;
        let mut dims = Vec::with_capacity(ndim);
        for _ in 0..ndim {
            let len = buf.decode_length(Some(inner.marker))?;
            dims.push(
                usize::try_from(len).map_err(|_| buf.err(DecodeErrorKind::NegativeLength(len)))?,
            );
        }
        Ok(dims)
    } else {
        let mut dims = Vec::new();
        let mut next_marker = inner.marker;
        loop {
            if next_marker == marker::ARRAY_END {
                break;
            }
            let len = buf.decode_length(Some(next_marker))?;
            dims.push(
                usize::try_from(len).map_err(|_| buf.err(DecodeErrorKind::NegativeLength(len)))?,
            );
            next_marker = buf.read_byte()?;
        }
        Ok(dims)
    }
}
