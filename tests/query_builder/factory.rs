use crate::common::{shared_registry, strict_config, Ghost, User};
use little_orm::query_builder::{col, lit, BuilderFactory, BuilderKind, QueryBuilder};
use little_orm::OrmError;

#[test]
fn test_create_select_through_trait() {
    let factory = BuilderFactory::new(shared_registry());

    let mut builder = factory.create::<User>(BuilderKind::Select).unwrap();
    assert_eq!(builder.kind(), BuilderKind::Select);
    assert_eq!(builder.table(), "users");

    let (sql, args) = builder.build().unwrap();
    assert_eq!(sql, "SELECT id, name, email FROM users");
    assert!(args.is_empty());
}

#[test]
fn test_create_from_kind_text() {
    let factory = BuilderFactory::new(shared_registry());

    let kind: BuilderKind = "Insert".parse().unwrap();
    let builder = factory.create::<User>(kind).unwrap();
    assert_eq!(builder.kind(), BuilderKind::Insert);

    let err = "delete".parse::<BuilderKind>().unwrap_err();
    assert_eq!(err, OrmError::UnsupportedBuilderKind("delete".to_string()));
}

#[test]
fn test_factory_passes_configuration() {
    let factory = BuilderFactory::with_config(shared_registry(), strict_config());

    let err = factory
        .create_select::<User>()
        .unwrap()
        .order_asc("nickname")
        .unwrap_err();
    assert!(matches!(err, OrmError::UnknownColumn { .. }));

    let (sql, _) = factory
        .create_select::<User>()
        .unwrap()
        .filter(col("ID").eq(lit(3)))
        .unwrap()
        .order_asc("Name")
        .unwrap()
        .build()
        .unwrap();
    assert!(sql.ends_with("WHERE id = ? ORDER BY name ASC"));
}

#[test]
fn test_factory_rejects_unregistered_model() {
    let factory = BuilderFactory::new(shared_registry());
    assert!(factory.create::<Ghost>(BuilderKind::Insert).is_err());
    assert!(factory.create_select::<Ghost>().is_err());
}

#[test]
fn test_builders_share_registry() {
    let registry = shared_registry();
    let factory = BuilderFactory::new(registry.clone());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let factory = factory.clone();
            scope.spawn(move || {
                let mut builder: Box<dyn QueryBuilder> =
                    factory.create::<User>(BuilderKind::Select).unwrap();
                assert!(builder.build().is_ok());
            });
        }
    });

    assert_eq!(factory.registry().registered_tables(), registry.registered_tables());
}
