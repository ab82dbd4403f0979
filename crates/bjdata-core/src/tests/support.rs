//! A minimal [`HostFactories`] used only by this crate's own tests: real
//! callers supply their own arbitrary-precision decimal and N-D array types.

use crate::error::{DecodeError, DecodeErrorKind};
use crate::factory::HostFactories;
use crate::value::ElementType;

/// Records an N-D array's shape, element type, and raw wire bytes verbatim,
/// so tests can assert on the payload without depending on any particular
/// numeric-array crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNdArray {
    pub shape: Vec<usize>,
    pub element: ElementType,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct TestHost;

impl HostFactories for TestHost {
    type Decimal = String;
    type NdArray = RecordedNdArray;

    fn make_decimal(&mut self, text: &str) -> Result<Self::Decimal, DecodeError> {
        Ok(text.to_owned())
    }

    fn make_ndarray(
        &mut self,
        shape: &[usize],
        element: ElementType,
        bytes: &[u8],
    ) -> Result<Self::NdArray, DecodeError> {
        Ok(RecordedNdArray {
            shape: shape.to_vec(),
            element,
            bytes: bytes.to_vec(),
        })
    }
}

/// A host whose `make_decimal` always fails, for exercising
/// `DecodeErrorKind::HostFactoryFailure` propagation.
#[derive(Debug, Default)]
pub struct FailingHost;

impl HostFactories for FailingHost {
    type Decimal = String;
    type NdArray = RecordedNdArray;

    fn make_decimal(&mut self, _text: &str) -> Result<Self::Decimal, DecodeError> {
        Err(DecodeError::new(
            DecodeErrorKind::HostFactoryFailure("rejected by test host".to_owned()),
            0,
        ))
    }

    fn make_ndarray(
        &mut self,
        _shape: &[usize],
        _element: ElementType,
        _bytes: &[u8],
    ) -> Result<Self::NdArray, DecodeError> {
        unreachable!("not exercised alongside make_decimal failures")
    }
}

/// Decodes `input` with default options and a [`TestHost`], returning the one
/// top-level value it contains.
pub fn decode_one(input: &[u8]) -> Result<crate::DecoderValue<TestHost>, DecodeError> {
    decode_one_with_options(input, crate::DecoderOptions::default())
}

/// Decodes `input` with caller-supplied options and a [`TestHost`].
pub fn decode_one_with_options(
    input: &[u8],
    options: crate::DecoderOptions<TestHost>,
) -> Result<crate::DecoderValue<TestHost>, DecodeError> {
    decode_one_tracking(input, options).map(|(v, _)| v)
}

/// Like [`decode_one_with_options`], but also returns `total_read` so tests
/// can assert on exactly how many bytes a decode consumed.
pub fn decode_one_tracking(
    input: &[u8],
    options: crate::DecoderOptions<TestHost>,
) -> Result<(crate::DecoderValue<TestHost>, u64), DecodeError> {
    let mut buffer = crate::DecoderBuffer::new(crate::Source::fixed(input), options, TestHost);
    let value = buffer
        .decode()?
        .expect("non-empty input decodes to a value");
    Ok((value, buffer.total_read()))
}
