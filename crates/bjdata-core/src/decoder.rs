//! `DecoderBuffer` and the top-level value dispatcher.
//!
//! `DecoderBuffer` is the long-lived, one-per-decode-call owner of the input
//! source: it owns the active [`Source`], the running `total_read` cursor,
//! the decoder [`DecoderOptions`], the host factories, and the
//! recursion-depth counter.

use crate::container::ContainerParams;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::options::DecoderOptions;
use crate::source::Source;
use crate::value::{DecoderValue, Integer};
use crate::{array, marker, object, scalar};

/// Maximum nested container depth, guarding against stack exhaustion from
/// adversarially deep input.
pub const MAX_DEPTH: u32 = 1000;

/// Owns one decode call's input source, cursor, preferences, and host
/// factories. Created fresh per top-level [`decode_value`] call and dropped
/// unconditionally on return, success or error.
pub struct DecoderBuffer<'a, H: HostFactories> {
    pub(crate) source: Source<'a>,
    pub(crate) total_read: u64,
    pub(crate) options: DecoderOptions<H>,
    pub(crate) host: H,
    pub(crate) depth: u32,
}

impl<'a, H: HostFactories> DecoderBuffer<'a, H> {
    #[must_use]
    pub fn new(source: Source<'a>, options: DecoderOptions<H>, host: H) -> Self {
        Self {
            source,
            total_read: 0,
            options,
            host,
            depth: 0,
        }
    }

    /// Total bytes the caller has observed so far. `total_read` is
    /// monotonically non-decreasing).
    #[must_use]
    pub fn total_read(&self) -> u64 {
        self.total_read
    }

    /// Reads exactly `len` bytes, or raises `InsufficientInput`. `allow_eof`
    /// permits a zero-length read to be reported back as a clean EOF instead
    /// of an error — only valid at a top-level value boundary.
    pub(crate) fn read(&mut self, len: usize, allow_eof: bool) -> Result<Vec<u8>, DecodeError> {
        let chunk = self
            .source
            .pull(len)
            .map_err(|e| self.err(DecodeErrorKind::Io(e)))?;
        let got = chunk.len();
        let bytes = chunk.into_owned();
        self.total_read += got as u64;

        if got == len {
            return Ok(bytes);
        }
        if got == 0 && allow_eof {
            return Ok(bytes);
        }
        Err(self.err(DecodeErrorKind::InsufficientInput {
            requested: len,
            available: got,
        }))
    }

    /// Reads exactly one byte, the common case for markers.
    pub(crate) fn read_byte(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read(1, false)?[0])
    }

    /// Builds a [`DecodeError`] stamped with the 0-indexed position of the
    /// last byte consumed so far (three bytes consumed means the offending
    /// byte sits at offset 2, not 3).
    pub(crate) fn err(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.total_read.saturating_sub(1))
    }

    fn enter_container(&mut self) -> Result<(), DecodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.err(DecodeErrorKind::RecursionExceeded));
        }
        self.depth += 1;
        log::trace!("entering container at depth {}", self.depth);
        Ok(())
    }

    fn leave_container(&mut self) {
        self.depth -= 1;
    }

    /// Runs the full decode-call teardown: releases the source's resources
    /// and, for a seekable backend, rewinds any unread look-ahead. A prior
    /// error takes precedence over a rewind failure.
    fn teardown(&mut self, prior_error: bool) -> Result<(), DecodeError> {
        self.source
            .teardown(prior_error)
            .map_err(|e| self.err(DecodeErrorKind::Io(e)))
    }

    /// Top-level entry point: decodes exactly one value from the start of
    /// the source, then tears the buffer down. Returns `Ok(None)` if the
    /// source is empty at the very first byte (clean EOF at a value
    /// boundary); any other short read is fatal.
    pub fn decode(&mut self) -> Result<Option<DecoderValue<H>>, DecodeError> {
        let marker = self.read(1, true)?;
        if marker.is_empty() {
            self.teardown(false)?;
            return Ok(None);
        }
        let result = self.decode_value(Some(marker[0]));
        match result {
            Ok(v) => {
                self.teardown(false)?;
                Ok(Some(v))
            }
            Err(e) => {
                self.teardown(true)?;
                Err(e)
            }
        }
    }

    /// Decodes one value. If `given_marker`
    /// is `None`, reads one marker byte first.
    pub(crate) fn decode_value(
        &mut self,
        given_marker: Option<u8>,
    ) -> Result<DecoderValue<H>, DecodeError> {
        let m = match given_marker {
            Some(m) => m,
            None => self.read_byte()?,
        };

        match m {
            marker::NULL => Ok(DecoderValue::Null),
            marker::TRUE => Ok(DecoderValue::Bool(true)),
            marker::FALSE => Ok(DecoderValue::Bool(false)),
            marker::CHAR => scalar::decode_char(self),
            marker::STRING => scalar::decode_string(self).map(DecoderValue::String),
            marker::HIGH_PREC => scalar::decode_high_prec(self),
            marker::INT8 | marker::UINT8 | marker::INT16 | marker::UINT16 | marker::INT32
            | marker::UINT32 | marker::INT64 | marker::UINT64 => {
                scalar::decode_integer(self, m).map(DecoderValue::Integer)
            }
            marker::FLOAT16 => scalar::decode_f16(self).map(DecoderValue::Float),
            marker::FLOAT32 => scalar::decode_f32(self).map(DecoderValue::Float),
            marker::FLOAT64 => scalar::decode_f64(self).map(DecoderValue::Float),
            marker::ARRAY_START => {
                self.enter_container()?;
                let result = array::decode_array(self);
                self.leave_container();
                result
            }
            marker::OBJECT_START => {
                self.enter_container()?;
                let result = object::decode_object(self);
                self.leave_container();
                result
            }
            other => Err(self.err(DecodeErrorKind::InvalidMarker(other))),
        }
    }

    /// Shared by array/object decoding: decodes a non-negative length,
    /// either reading a fresh marker byte or using one already known.
    pub(crate) fn decode_length(&mut self, given_marker: Option<u8>) -> Result<i64, DecodeError> {
        let m = match given_marker {
            Some(m) => m,
            None => self.read_byte()?,
        };
        if !marker::is_integer_marker(m) {
            return Err(self.err(DecodeErrorKind::InvalidMarker(m)));
        }
        let n = match scalar::decode_integer(self, m)? {
            Integer::Signed(v) => v,
            Integer::Unsigned(v) => i64::try_from(v)
                .map_err(|_| self.err(DecodeErrorKind::NegativeLength(i64::MIN)))?,
        };
        if n < 0 {
            return Err(self.err(DecodeErrorKind::NegativeLength(n)));
        }
        Ok(n)
    }

    pub(crate) fn parse_container_header(
        &mut self,
        in_mapping: bool,
    ) -> Result<ContainerParams, DecodeError> {
        crate::container::parse_container_header(self, in_mapping)
    }
}

/// Convenience free function wrapping [`DecoderBuffer::decode_value`].
pub fn decode_value<'a, H: HostFactories>(
    buffer: &mut DecoderBuffer<'a, H>,
    given_marker: Option<u8>,
) -> Result<DecoderValue<H>, DecodeError> {
    buffer.decode_value(given_marker)
}
