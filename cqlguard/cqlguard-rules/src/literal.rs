//! Literal-to-column-type compatibility.

use cqlguard_core::CqlType;
use cqlguard_schema::{KeyspaceDef, Literal};

/// Whether `literal` is an acceptable value for a column of type `ty`.
///
/// `keyspace` resolves user-defined types. `NULL` fits every type; integer
/// literals must be in range for fixed-width integer types.
pub fn literal_fits(ty: &CqlType, literal: &Literal, keyspace: &KeyspaceDef) -> bool {
    let ty = ty.unfrozen();
    match literal {
        Literal::Null => true,
        Literal::Boolean(_) => *ty == CqlType::Boolean,
        Literal::Integer(v) => integer_fits(ty, *v),
        Literal::Float(_) => matches!(ty, CqlType::Float | CqlType::Double | CqlType::Decimal),
        Literal::String(_) => {
            ty.is_textual()
                || matches!(
                    ty,
                    CqlType::Timestamp
                        | CqlType::Date
                        | CqlType::Time
                        | CqlType::Inet
                        | CqlType::Duration
                )
        }
        Literal::Blob(_) => *ty == CqlType::Blob,
        Literal::Uuid(_) => matches!(ty, CqlType::Uuid | CqlType::TimeUuid),
        Literal::List(elems) => match ty {
            CqlType::List(elem) => all_fit(elem, elems, keyspace),
            _ => false,
        },
        Literal::Set(elems) => match ty {
            CqlType::Set(elem) => all_fit(elem, elems, keyspace),
            CqlType::Map(_, _) => elems.is_empty(),
            _ => false,
        },
        Literal::Map(entries) => match ty {
            CqlType::Map(key, value) => entries.iter().all(|(k, v)| {
                literal_fits(key, k, keyspace) && literal_fits(value, v, keyspace)
            }),
            _ => false,
        },
        Literal::Tuple(elems) => match ty {
            CqlType::Tuple(types) => {
                types.len() == elems.len()
                    && types
                        .iter()
                        .zip(elems)
                        .all(|(t, e)| literal_fits(t, e, keyspace))
            }
            _ => false,
        },
        Literal::Udt(fields) => match ty {
            CqlType::Udt(name) => keyspace.types.get(name).is_some_and(|udt| {
                fields.iter().all(|(field, value)| {
                    udt.field(field)
                        .is_some_and(|field_ty| literal_fits(field_ty, value, keyspace))
                })
            }),
            _ => false,
        },
    }
}

fn all_fit(elem: &CqlType, literals: &[Literal], keyspace: &KeyspaceDef) -> bool {
    literals.iter().all(|l| literal_fits(elem, l, keyspace))
}

fn integer_fits(ty: &CqlType, value: i64) -> bool {
    match ty {
        CqlType::TinyInt => i8::try_from(value).is_ok(),
        CqlType::SmallInt => i16::try_from(value).is_ok(),
        CqlType::Int => i32::try_from(value).is_ok(),
        // Days since -5877641-06-23, unsigned on the wire.
        CqlType::Date => u32::try_from(value).is_ok(),
        CqlType::BigInt
        | CqlType::Counter
        | CqlType::VarInt
        | CqlType::Timestamp
        | CqlType::Time
        | CqlType::Float
        | CqlType::Double
        | CqlType::Decimal => true,
        _ => false,
    }
}
