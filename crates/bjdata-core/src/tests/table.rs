//! Table-driven marker tests for the fixed-width type table.

use rstest::rstest;

use crate::marker;
use crate::value::ElementType;

#[rstest]
#[case(marker::INT8, ElementType::Int8, 1)]
#[case(marker::UINT8, ElementType::Uint8, 1)]
#[case(marker::INT16, ElementType::Int16, 2)]
#[case(marker::UINT16, ElementType::Uint16, 2)]
#[case(marker::INT32, ElementType::Int32, 4)]
#[case(marker::UINT32, ElementType::Uint32, 4)]
#[case(marker::INT64, ElementType::Int64, 8)]
#[case(marker::UINT64, ElementType::Uint64, 8)]
#[case(marker::FLOAT16, ElementType::Float16, 2)]
#[case(marker::FLOAT32, ElementType::Float32, 4)]
#[case(marker::FLOAT64, ElementType::Float64, 8)]
#[case(marker::CHAR, ElementType::Char, 1)]
fn element_type_from_marker_and_width(
    #[case] byte: u8,
    #[case] expected: ElementType,
    #[case] width: usize,
) {
    assert_eq!(ElementType::from_marker(byte), Some(expected));
    assert_eq!(expected.byte_width(), width);
}

#[rstest]
#[case(marker::ARRAY_START)]
#[case(marker::OBJECT_START)]
#[case(marker::STRING)]
#[case(marker::NULL)]
#[case(marker::TRUE)]
#[case(marker::FALSE)]
#[case(marker::HIGH_PREC)]
fn non_fixed_width_markers_have_no_element_type(#[case] byte: u8) {
    assert_eq!(ElementType::from_marker(byte), None);
}

#[rstest]
#[case(marker::NOOP, false)]
#[case(marker::CONTAINER_TYPE, false)]
#[case(marker::CONTAINER_COUNT, false)]
#[case(marker::ARRAY_START, true)]
#[case(marker::OBJECT_START, true)]
#[case(marker::STRING, true)]
#[case(marker::INT8, true)]
fn valid_container_type_table(#[case] byte: u8, #[case] expected: bool) {
    assert_eq!(marker::is_valid_container_type(byte), expected);
}

#[rstest]
#[case(marker::NULL, true)]
#[case(marker::TRUE, true)]
#[case(marker::FALSE, true)]
#[case(marker::INT8, false)]
#[case(marker::STRING, false)]
fn no_data_type_table(#[case] byte: u8, #[case] expected: bool) {
    assert_eq!(marker::is_no_data_type(byte), expected);
}
