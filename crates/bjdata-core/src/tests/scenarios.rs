//! Concrete worked examples covering scalars, strings, arrays, and objects.

use crate::value::Integer;
use crate::{DecoderOptions, DecoderValue};

use super::support::{decode_one, decode_one_tracking, decode_one_with_options};

#[test]
fn scalars() {
    assert_eq!(
        decode_one(&[b'U', 0x2A]).unwrap(),
        DecoderValue::Integer(Integer::Unsigned(42))
    );
    assert_eq!(
        decode_one(&[b'I', 0x01, 0x00]).unwrap(),
        DecoderValue::Integer(Integer::Signed(256))
    );
    assert_eq!(decode_one(&[b'T']).unwrap(), DecoderValue::Bool(true));
    assert_eq!(decode_one(&[b'Z']).unwrap(), DecoderValue::Null);

    let DecoderValue::Float(f) = decode_one(&[b'd', 0x40, 0x49, 0x0f, 0xdb]).unwrap() else {
        panic!("expected a float");
    };
    assert!((f - core::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn string() {
    let input = [b'S', b'U', 0x05, b'h', b'e', b'l', b'l', b'o'];
    assert_eq!(
        decode_one(&input).unwrap(),
        DecoderValue::String("hello".to_owned())
    );
}

#[test]
fn untyped_array() {
    let input = [b'[', b'U', 0x01, b'U', 0x02, b']'];
    assert_eq!(
        decode_one(&input).unwrap(),
        DecoderValue::List(std::vec![
            DecoderValue::Integer(Integer::Unsigned(1)),
            DecoderValue::Integer(Integer::Unsigned(2)),
        ])
    );
}

#[test]
fn counted_typed_array_to_bytes() {
    // A counted container needs no closing marker; the count alone
    // terminates it.
    let input = [b'[', b'$', b'U', b'#', b'U', 0x03, 0x01, 0x02, 0x03];

    assert_eq!(
        decode_one(&input).unwrap(),
        DecoderValue::Bytes(std::vec![0x01, 0x02, 0x03])
    );

    let opts = DecoderOptions {
        no_bytes: true,
        ..Default::default()
    };
    assert_eq!(
        decode_one_with_options(&input, opts).unwrap(),
        DecoderValue::List(std::vec![
            DecoderValue::Integer(Integer::Unsigned(1)),
            DecoderValue::Integer(Integer::Unsigned(2)),
            DecoderValue::Integer(Integer::Unsigned(3)),
        ])
    );
}

#[test]
fn optimized_ndim_array() {
    // `[$d#[$U#U\x02` opens a 2-element (`U\x02`) dims vector of type `U`;
    // the two dim values themselves (2, 3) are then raw `U`-typed bytes with
    // no per-element marker, since the dims vector is a typed+counted array.
    let payload: std::vec::Vec<u8> = (0..24u8).collect();
    let mut input = std::vec![
        b'[', b'$', b'd', b'#', b'[', b'$', b'U', b'#', b'U', 0x02, 0x02, 0x03,
    ];
    input.extend_from_slice(&payload);

    let (value, total_read) =
        decode_one_tracking(&input, DecoderOptions::default()).unwrap();
    let DecoderValue::NdArray(array) = value else {
        panic!("expected an NdArray");
    };
    assert_eq!(array.shape, std::vec![2, 3]);
    assert_eq!(array.element, crate::ElementType::Float32);
    assert_eq!(array.bytes, payload);
    assert_eq!(total_read, input.len() as u64);
}

#[test]
fn object_with_duplicate_key_mapping_mode() {
    let input = [
        b'{', b'U', 0x01, b'a', b'U', 0x02, b'U', 0x01, b'a', b'U', 0x05, b'}',
    ];
    let DecoderValue::Map(map) = decode_one(&input).unwrap() else {
        panic!("expected a Map");
    };
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get("a"),
        Some(&DecoderValue::Integer(Integer::Unsigned(5)))
    );
}

#[test]
fn object_with_duplicate_key_pairs_mode() {
    let input = [
        b'{', b'U', 0x01, b'a', b'U', 0x02, b'U', 0x01, b'a', b'U', 0x05, b'}',
    ];
    let opts: DecoderOptions<super::support::TestHost> = DecoderOptions {
        object_pairs_hook: Some(Box::new(|pairs| DecoderValue::Pairs(pairs))),
        ..Default::default()
    };
    let DecoderValue::Pairs(pairs) = decode_one_with_options(&input, opts).unwrap() else {
        panic!("expected Pairs");
    };
    assert_eq!(
        pairs,
        std::vec![
            ("a".to_owned(), DecoderValue::Integer(Integer::Unsigned(2))),
            ("a".to_owned(), DecoderValue::Integer(Integer::Unsigned(5))),
        ]
    );
}
