use cqlguard_core::CqlType;
use cqlguard_rules::literal_fits;
use cqlguard_schema::{
    Catalog, CreateKeyspace, CreateType, DataDefinition, KeyspaceDef, Literal, QualifiedName,
    SchemaDefinition,
};

// ── helpers ──────────────────────────────────────────────────────────

fn keyspace_with_point() -> KeyspaceDef {
    let schema = SchemaDefinition::new(vec![
        DataDefinition::CreateKeyspace(CreateKeyspace {
            name: "geo".to_string(),
            if_not_exists: false,
            replication: vec![],
            durable_writes: true,
        }),
        DataDefinition::CreateType(CreateType {
            name: QualifiedName::qualified("geo", "point"),
            if_not_exists: false,
            fields: vec![
                ("x".to_string(), CqlType::Double),
                ("y".to_string(), CqlType::Double),
            ],
        }),
    ]);
    let catalog = Catalog::from_definition(&schema).unwrap();
    catalog.keyspace("geo").unwrap().clone()
}

fn fits(ty: CqlType, literal: Literal) -> bool {
    literal_fits(&ty, &literal, &keyspace_with_point())
}

fn list(elem: CqlType) -> CqlType {
    CqlType::List(Box::new(elem))
}

fn text(value: &str) -> Literal {
    Literal::String(value.to_string())
}

// ── scalars ──────────────────────────────────────────────────────────

#[test]
fn null_fits_every_type() {
    for ty in [
        CqlType::Int,
        CqlType::Blob,
        list(CqlType::Text),
        CqlType::Udt("point".to_string()),
    ] {
        assert!(fits(ty, Literal::Null));
    }
}

#[test]
fn integers_respect_fixed_width_ranges() {
    assert!(fits(CqlType::TinyInt, Literal::Integer(-128)));
    assert!(!fits(CqlType::TinyInt, Literal::Integer(128)));
    assert!(fits(CqlType::SmallInt, Literal::Integer(i16::MAX.into())));
    assert!(!fits(CqlType::SmallInt, Literal::Integer(40_000)));
    assert!(fits(CqlType::Int, Literal::Integer(i32::MIN.into())));
    assert!(!fits(CqlType::Int, Literal::Integer(1 << 31)));
    assert!(fits(CqlType::BigInt, Literal::Integer(i64::MAX)));
    assert!(fits(CqlType::Date, Literal::Integer(1 << 31)));
    assert!(!fits(CqlType::Date, Literal::Integer(-1)));
    assert!(fits(CqlType::Timestamp, Literal::Integer(1_700_000_000_000)));
    assert!(fits(CqlType::Double, Literal::Integer(3)));
    assert!(!fits(CqlType::Text, Literal::Integer(3)));
    assert!(!fits(CqlType::Boolean, Literal::Integer(1)));
}

#[test]
fn strings_fit_textual_and_temporal_types() {
    for ty in [
        CqlType::Ascii,
        CqlType::Text,
        CqlType::VarChar,
        CqlType::Timestamp,
        CqlType::Date,
        CqlType::Time,
        CqlType::Inet,
        CqlType::Duration,
    ] {
        assert!(fits(ty.clone(), text("x")), "{ty}");
    }
    assert!(!fits(CqlType::Uuid, text("x")));
    assert!(!fits(CqlType::Blob, text("x")));
}

#[test]
fn other_scalars_match_their_own_types() {
    assert!(fits(CqlType::Boolean, Literal::Boolean(false)));
    assert!(fits(CqlType::Decimal, Literal::Float(0.1)));
    assert!(!fits(CqlType::Int, Literal::Float(0.1)));
    assert!(fits(CqlType::Blob, Literal::Blob(vec![0xca, 0xfe])));
    assert!(fits(CqlType::TimeUuid, Literal::Uuid(1)));
    assert!(!fits(CqlType::Text, Literal::Uuid(1)));
}

// ── composites ───────────────────────────────────────────────────────

#[test]
fn collections_check_their_elements() {
    assert!(fits(
        list(CqlType::Int),
        Literal::List(vec![Literal::Integer(1), Literal::Null])
    ));
    assert!(!fits(list(CqlType::Int), Literal::List(vec![text("1")])));
    assert!(!fits(list(CqlType::Int), Literal::Set(vec![])));

    let tags = CqlType::Set(Box::new(CqlType::Text));
    assert!(fits(tags.clone(), Literal::Set(vec![text("a")])));
    assert!(!fits(tags, Literal::List(vec![text("a")])));

    let scores = CqlType::Map(Box::new(CqlType::Text), Box::new(CqlType::Int));
    assert!(fits(
        scores.clone(),
        Literal::Map(vec![(text("a"), Literal::Integer(1))])
    ));
    assert!(!fits(
        scores.clone(),
        Literal::Map(vec![(Literal::Integer(1), Literal::Integer(1))])
    ));
    assert!(fits(scores.clone(), Literal::Set(vec![])));
    assert!(!fits(scores, Literal::Set(vec![text("a")])));
}

#[test]
fn tuples_need_matching_arity() {
    let pair = CqlType::Tuple(vec![CqlType::Int, CqlType::Text]);
    assert!(fits(
        pair.clone(),
        Literal::Tuple(vec![Literal::Integer(1), text("a")])
    ));
    assert!(!fits(pair.clone(), Literal::Tuple(vec![Literal::Integer(1)])));
    assert!(!fits(pair, Literal::Tuple(vec![text("a"), Literal::Integer(1)])));
}

#[test]
fn frozen_wrappers_are_transparent() {
    let frozen = CqlType::Frozen(Box::new(list(CqlType::Int)));
    assert!(fits(frozen, Literal::List(vec![Literal::Integer(1)])));
}

#[test]
fn user_type_literals_resolve_through_the_keyspace() {
    let point = || CqlType::Udt("point".to_string());
    let field = |name: &str, value: Literal| (name.to_string(), value);

    assert!(fits(point(), Literal::Udt(vec![field("x", Literal::Float(1.0))])));
    assert!(fits(point(), Literal::Udt(vec![])));
    assert!(!fits(point(), Literal::Udt(vec![field("z", Literal::Float(1.0))])));
    assert!(!fits(point(), Literal::Udt(vec![field("y", text("up"))])));
    assert!(!fits(
        CqlType::Udt("polygon".to_string()),
        Literal::Udt(vec![field("x", Literal::Float(1.0))])
    ));
}
