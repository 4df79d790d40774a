use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use cqlguard::{
    SchemaValidatorBuilder,
    core::CqlType,
    schema::{
        ColumnDefinition, CreateKeyspace, CreateTable, DataDefinition, NonEmpty, QualifiedName,
        SchemaCheck, SchemaDefinition, SchemaError, Select, Selection, Statement,
        StaticSchemaProvider, Validated,
    },
};

// ── helpers ──────────────────────────────────────────────────────────

fn metrics_schema() -> SchemaDefinition {
    SchemaDefinition::new(vec![
        DataDefinition::CreateKeyspace(CreateKeyspace {
            name: "telemetry".to_string(),
            if_not_exists: false,
            replication: vec![],
            durable_writes: true,
        }),
        DataDefinition::Use("telemetry".to_string()),
        DataDefinition::CreateTable(CreateTable {
            table: QualifiedName::new("samples"),
            if_not_exists: false,
            columns: vec![
                ColumnDefinition::new("sensor", CqlType::Int),
                ColumnDefinition::new("at", CqlType::Timestamp),
                ColumnDefinition::new("reading", CqlType::Double),
            ],
            partition_key: vec!["sensor".to_string()],
            clustering_columns: vec!["at".to_string()],
        }),
    ])
}

fn select_from(table: &str) -> Statement {
    Statement::Select(Select {
        table: QualifiedName::new(table),
        selection: Selection::All,
        where_clause: vec![],
        limit: Some(10),
        allow_filtering: false,
    })
}

fn messages(result: Validated) -> Vec<String> {
    match result {
        Ok(()) => vec![],
        Err(errors) => errors.iter().map(|e| e.message().to_string()).collect(),
    }
}

fn reject(message: &'static str) -> Box<dyn SchemaCheck> {
    Box::new(move |_: &SchemaDefinition, _: &Statement| -> Validated {
        Err(NonEmpty::new(SchemaError::validator(message)))
    })
}

struct CountingCheck(Arc<AtomicUsize>);

impl SchemaCheck for CountingCheck {
    fn check(&self, _schema: &SchemaDefinition, _statement: &Statement) -> Validated {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ── builder ──────────────────────────────────────────────────────────

#[test]
fn validator_without_checks_accepts_everything() {
    let validator =
        SchemaValidatorBuilder::new().build(StaticSchemaProvider::new(metrics_schema()));

    assert!(validator.check().is_empty());
    assert!(validator.validate(&select_from("nowhere")).is_ok());
}

#[test]
fn checks_run_in_registration_order() {
    let validator = SchemaValidatorBuilder::new()
        .with_check(reject("first"))
        .with_check(reject("second"))
        .build(StaticSchemaProvider::new(metrics_schema()));

    assert_eq!(
        messages(validator.validate(&select_from("samples"))),
        vec!["first", "second"]
    );
}

#[test]
fn shared_checks_stay_observable() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counting: Arc<dyn SchemaCheck> = Arc::new(CountingCheck(Arc::clone(&calls)));
    let validator = SchemaValidatorBuilder::new()
        .with_shared_check(Arc::clone(&counting))
        .with_shared_check(counting)
        .build(StaticSchemaProvider::new(metrics_schema()));

    validator.validate(&select_from("samples")).unwrap();

    assert_eq!(validator.check().len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[cfg(feature = "rules")]
#[test]
fn default_checks_come_before_custom_ones() {
    let validator = SchemaValidatorBuilder::new()
        .with_default_checks()
        .with_check(reject("read-only session"))
        .build(StaticSchemaProvider::new(metrics_schema()));

    assert_eq!(validator.check().len(), 2);
    assert_eq!(
        messages(validator.validate(&select_from("events"))),
        vec![
            "unknown table 'events' in keyspace 'telemetry'",
            "read-only session",
        ]
    );
    assert_eq!(
        messages(validator.validate(&select_from("samples"))),
        vec!["read-only session"]
    );
}

#[cfg(not(feature = "rules"))]
#[test]
fn default_checks_are_empty_without_rules() {
    let builder = SchemaValidatorBuilder::new().with_default_checks();
    let validator = builder.build(StaticSchemaProvider::new(metrics_schema()));

    assert!(validator.check().is_empty());
}
