//! Round-trip and symmetry properties.

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::value::Integer;
use crate::{DecoderOptions, DecoderValue};

use super::support::{decode_one, decode_one_with_options};

fn decode_int16(bytes: &[u8], islittle: bool) -> DecoderValue<super::support::TestHost> {
    let opts = DecoderOptions {
        islittle,
        ..Default::default()
    };
    decode_one_with_options(bytes, opts).unwrap()
}

/// Endianness symmetry: the same logical value, encoded in its matching
/// endianness, decodes back to itself regardless of which endianness was
/// requested.
#[test]
fn int16_endianness_symmetry() {
    fn prop(n: i16) -> bool {
        let be = [b'I', n.to_be_bytes()[0], n.to_be_bytes()[1]];
        let le = [b'I', n.to_le_bytes()[0], n.to_le_bytes()[1]];
        let want = DecoderValue::Integer(Integer::Signed(i64::from(n)));
        decode_int16(&be, false) == want && decode_int16(&le, true) == want
    }
    QuickCheck::new().quickcheck(prop as fn(i16) -> bool);
}

#[test]
fn int32_endianness_symmetry() {
    fn prop(n: i32) -> bool {
        let opts_be = DecoderOptions::default();
        let opts_le = DecoderOptions {
            islittle: true,
            ..Default::default()
        };
        let mut be = std::vec![b'l'];
        be.extend_from_slice(&n.to_be_bytes());
        let mut le = std::vec![b'l'];
        le.extend_from_slice(&n.to_le_bytes());

        let want = DecoderValue::Integer(Integer::Signed(i64::from(n)));
        decode_one_with_options(&be, opts_be).unwrap() == want
            && decode_one_with_options(&le, opts_le).unwrap() == want
    }
    QuickCheck::new().quickcheck(prop as fn(i32) -> bool);
}

#[test]
fn float64_endianness_symmetry() {
    fn prop(n: f64) -> bool {
        if n.is_nan() {
            return true; // NaN != NaN, not meaningful to compare here.
        }
        let opts_be = DecoderOptions::default();
        let opts_le = DecoderOptions {
            islittle: true,
            ..Default::default()
        };
        let mut be = std::vec![b'D'];
        be.extend_from_slice(&n.to_be_bytes());
        let mut le = std::vec![b'D'];
        le.extend_from_slice(&n.to_le_bytes());

        let want = DecoderValue::Float(n);
        decode_one_with_options(&be, opts_be).unwrap() == want
            && decode_one_with_options(&le, opts_le).unwrap() == want
    }
    QuickCheck::new().quickcheck(prop as fn(f64) -> bool);
}

/// A counted `U`-typed array always decodes to exactly the bytes it was
/// given, regardless of how many there are.
#[test]
fn counted_byte_array_roundtrip() {
    fn prop(bytes: std::vec::Vec<u8>) -> bool {
        if bytes.len() > u32::MAX as usize {
            return true;
        }
        let mut input = std::vec![b'[', b'$', b'U', b'#', b'l'];
        input.extend_from_slice(&(bytes.len() as i32).to_be_bytes());
        input.extend_from_slice(&bytes);

        decode_one_with_options(&input, DecoderOptions::default()).unwrap()
            == DecoderValue::Bytes(bytes)
    }
    QuickCheck::new().quickcheck(prop as fn(std::vec::Vec<u8>) -> bool);
}

/// `total_read` never exceeds the number of bytes actually supplied, and
/// equals exactly the bytes consumed for a single well-formed scalar.
#[test]
fn total_read_matches_consumed_bytes_for_uint8() {
    fn prop(n: u8) -> bool {
        let input = [b'U', n];
        let (_, total_read) =
            super::support::decode_one_tracking(&input, DecoderOptions::default()).unwrap();
        total_read == input.len() as u64
    }
    QuickCheck::new().quickcheck(prop as fn(u8) -> bool);
}

/// A bare `U` scalar always decodes to its value widened to `u64`.
#[quickcheck]
fn uint8_scalar_roundtrip(n: u8) -> bool {
    let input = [b'U', n];
    decode_one(&input).unwrap() == DecoderValue::Integer(Integer::Unsigned(u64::from(n)))
}
