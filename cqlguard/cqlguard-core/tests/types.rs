use cqlguard_core::{CodecError, CqlType, ProtocolVersion};

#[test]
fn protocol_version_numeric_mapping() {
    assert_eq!(ProtocolVersion::try_from(3).unwrap(), ProtocolVersion::V3);
    assert_eq!(ProtocolVersion::try_from(4).unwrap(), ProtocolVersion::V4);
    assert_eq!(ProtocolVersion::try_from(5).unwrap(), ProtocolVersion::V5);
    assert_eq!(ProtocolVersion::V5.as_u8(), 5);
    assert_eq!(ProtocolVersion::default(), ProtocolVersion::V4);
}

#[test]
fn protocol_version_rejects_unknown_numbers() {
    let err = ProtocolVersion::try_from(2).expect_err("v2 is unsupported");
    assert!(matches!(err, CodecError::UnsupportedProtocolVersion(2)));
    assert_eq!(err.to_string(), "unsupported native protocol version: 2");
}

#[test]
fn protocol_version_display() {
    assert_eq!(ProtocolVersion::V4.to_string(), "v4");
}

#[test]
fn cql_type_fixed_widths() {
    assert_eq!(CqlType::Boolean.fixed_width(), Some(1));
    assert_eq!(CqlType::TinyInt.fixed_width(), Some(1));
    assert_eq!(CqlType::SmallInt.fixed_width(), Some(2));
    assert_eq!(CqlType::Int.fixed_width(), Some(4));
    assert_eq!(CqlType::Float.fixed_width(), Some(4));
    assert_eq!(CqlType::BigInt.fixed_width(), Some(8));
    assert_eq!(CqlType::Double.fixed_width(), Some(8));
    assert_eq!(CqlType::Timestamp.fixed_width(), Some(8));
    assert_eq!(CqlType::Uuid.fixed_width(), Some(16));
    assert_eq!(CqlType::Text.fixed_width(), None);
    assert_eq!(CqlType::List(Box::new(CqlType::Int)).fixed_width(), None);
    assert_eq!(CqlType::Frozen(Box::new(CqlType::Int)).fixed_width(), Some(4));
}

#[test]
fn cql_type_display_uses_cql_syntax() {
    let ty = CqlType::Map(
        Box::new(CqlType::Text),
        Box::new(CqlType::Frozen(Box::new(CqlType::List(Box::new(CqlType::Int))))),
    );
    assert_eq!(ty.to_string(), "map<text, frozen<list<int>>>");
    assert_eq!(
        CqlType::Tuple(vec![CqlType::Int, CqlType::Udt("address".to_string())]).to_string(),
        "tuple<int, address>"
    );
}

#[test]
fn cql_type_classification() {
    assert!(CqlType::VarChar.is_textual());
    assert!(CqlType::Counter.is_integral());
    assert!(CqlType::Decimal.is_numeric());
    assert!(!CqlType::Decimal.is_integral());
    assert!(CqlType::Frozen(Box::new(CqlType::Set(Box::new(CqlType::Int)))).is_collection());
    assert!(!CqlType::Blob.is_collection());
}
