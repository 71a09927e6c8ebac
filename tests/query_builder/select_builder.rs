use crate::common::{strict_config, test_registry, Customer, Ghost, User};
use little_orm::config::QueryBuilderConfig;
use little_orm::query_builder::{
    between, col, lit, unary, BinaryExpr, ColumnExpr, Expr, Operator, SelectBuilder, SortOrder,
};
use little_orm::OrmError;
use serde_json::json;

fn user_builder() -> SelectBuilder {
    SelectBuilder::new::<User>(&test_registry()).unwrap()
}

#[test]
fn test_default_projection_lists_tagged_columns() {
    let (sql, args) = user_builder().build().unwrap();

    assert_eq!(sql, "SELECT id, name, email FROM users");
    assert!(args.is_empty());
}

#[test]
fn test_new_builder_state() {
    let builder = user_builder();
    assert_eq!(builder.table(), "users");
    assert_eq!(builder.projection(), &["id", "name", "email"]);
    assert!(builder.filter_expr().is_none());
    assert!(builder.args().is_empty());
}

#[test]
fn test_unregistered_model() {
    let err = SelectBuilder::new::<Ghost>(&test_registry()).unwrap_err();
    assert_eq!(
        err,
        OrmError::UnregisteredModel {
            model: "Ghost".to_string(),
            table: "ghosts".to_string(),
        }
    );
}

#[test]
fn test_equality_filter() {
    let (sql, args) = user_builder()
        .filter(col("Email").eq(lit("a@b.com")))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(sql, "SELECT id, name, email FROM users WHERE email = ?");
    assert_eq!(args, vec![json!("a@b.com")]);
}

#[test]
fn test_conjunction_with_null_check() {
    let filter = col("Email")
        .eq(lit("a@b.com"))
        .and(unary(Operator::IsNotNull, col("Name")));

    let (sql, args) = user_builder().filter(filter).unwrap().build().unwrap();

    assert_eq!(
        sql,
        "SELECT id, name, email FROM users WHERE (email = ? AND name IS NOT NULL)"
    );
    assert_eq!(args, vec![json!("a@b.com")]);
}

#[test]
fn test_zero_offset_is_suppressed() {
    let (sql, _) = user_builder().limit(10).offset(0).build().unwrap();
    assert!(sql.ends_with(" LIMIT 10"));
    assert!(!sql.contains("OFFSET"));
}

#[test]
fn test_negative_limit_and_offset_are_suppressed() {
    let (sql, _) = user_builder().limit(-1).offset(-5).build().unwrap();
    assert_eq!(sql, "SELECT id, name, email FROM users");
}

#[test]
fn test_offset_without_limit() {
    let (sql, _) = user_builder().offset(5).build().unwrap();
    assert_eq!(sql, "SELECT id, name, email FROM users OFFSET 5");
}

#[test]
fn test_unknown_column_in_any_position() {
    let filters = vec![
        col("DoesNotExist").eq(lit(1)),
        lit(1).eq(col("DoesNotExist")),
        col("ID").eq(lit(1)).and(col("DoesNotExist").is_null()),
        col("DoesNotExist").not(),
        between(col("ID"), lit(1), col("DoesNotExist")),
    ];

    for filter in filters {
        let err = user_builder().filter(filter).unwrap_err();
        assert_eq!(err, OrmError::unknown_column("DoesNotExist", "users"));
    }
}

#[test]
fn test_select_subset_and_unknown_field() {
    let (sql, _) = user_builder()
        .select(&["Email", "ID"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT email, id FROM users");

    let err = user_builder().select(&["NonExistentField"]).unwrap_err();
    assert_eq!(err, OrmError::unknown_column("NonExistentField", "users"));

    // Untagged fields are not columns
    assert!(user_builder().select(&["Password"]).is_err());
}

#[test]
fn test_logical_names_map_to_physical_columns() {
    let (sql, args) = SelectBuilder::new::<Customer>(&test_registry())
        .unwrap()
        .select(&["ID", "Email"])
        .unwrap()
        .filter(col("Age").gte(lit(18)).and(col("Email").like(lit("%@corp.com"))))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT customer_id, email_address FROM customers WHERE (age_years >= ? AND email_address LIKE ?)"
    );
    assert_eq!(args, vec![json!(18), json!("%@corp.com")]);
}

#[test]
fn test_order_by() {
    let (sql, _) = user_builder()
        .order_by("name", SortOrder::Asc)
        .unwrap()
        .order_by("id", SortOrder::Desc)
        .unwrap()
        .build()
        .unwrap();
    assert!(sql.ends_with(" ORDER BY name ASC, id DESC"));
}

#[test]
fn test_strict_order_by() {
    let registry = test_registry();

    let (sql, _) = SelectBuilder::with_config::<Customer>(&registry, strict_config())
        .unwrap()
        .order_desc("CreatedAt")
        .unwrap()
        .order_asc("customer_id")
        .unwrap()
        .build()
        .unwrap();
    assert!(sql.ends_with(" ORDER BY created_at DESC, customer_id ASC"));

    let err = SelectBuilder::with_config::<Customer>(&registry, strict_config())
        .unwrap()
        .order_asc("name; DROP TABLE customers")
        .unwrap_err();
    assert!(matches!(err, OrmError::UnknownColumn { .. }));
}

#[test]
fn test_complex_query() {
    let filter = col("Email")
        .like(lit("%@example.com"))
        .and(col("Name").not_eq(lit("Admin")))
        .and(col("ID").is_not_null());

    let (sql, args) = user_builder()
        .order_asc("name")
        .unwrap()
        .filter(filter)
        .unwrap()
        .order_desc("id")
        .unwrap()
        .limit(25)
        .offset(50)
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT id, name, email FROM users \
         WHERE ((email LIKE ? AND name != ?) AND id IS NOT NULL) \
         ORDER BY name ASC, id DESC LIMIT 25 OFFSET 50"
    );
    assert_eq!(args, vec![json!("%@example.com"), json!("Admin")]);
}

#[test]
fn test_membership_and_range() {
    let filter = col("ID")
        .in_list([1, 2, 3])
        .or(col("ID").between(lit(10), lit(20)));

    let (sql, args) = user_builder().filter(filter).unwrap().build().unwrap();

    assert!(sql.ends_with("WHERE ((id IN ?) OR id BETWEEN ? AND ?)"));
    assert_eq!(args, vec![json!([1, 2, 3]), json!(10), json!(20)]);
}

#[test]
fn test_negation() {
    let (sql, args) = user_builder()
        .filter(col("Name").eq(lit("root")).not())
        .unwrap()
        .build()
        .unwrap();

    assert!(sql.ends_with("WHERE NOT (name = ?)"));
    assert_eq!(args, vec![json!("root")]);
}

#[test]
fn test_unsupported_operator_fails_build() {
    let mut builder = user_builder()
        .filter(Expr::Binary(BinaryExpr::new(
            Operator::IsNull,
            col("ID"),
            lit(1),
        )))
        .unwrap();

    let err = builder.build().unwrap_err();
    assert!(matches!(err, OrmError::UnsupportedOperator { .. }));
    assert!(builder.args().is_empty());
}

#[test]
fn test_build_is_repeatable() {
    let mut builder = user_builder()
        .filter(col("Email").eq(lit("a@b.com")))
        .unwrap()
        .limit(5);

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(builder.args(), &[json!("a@b.com")]);
}

#[test]
fn test_validated_filter_can_be_reused() {
    let builder = user_builder().filter(col("Email").eq(lit("x"))).unwrap();
    let validated = builder.filter_expr().cloned().unwrap();

    // Already-resolved columns pass through a second validation untouched
    let (sql, _) = user_builder().filter(validated).unwrap().build().unwrap();
    assert!(sql.ends_with("WHERE email = ?"));
}

#[test]
fn test_unchecked_physical_column_is_rejected() {
    let filter = Expr::from(ColumnExpr::physical("1=1 OR secret")).eq(lit(1));

    let err = user_builder().filter(filter).unwrap_err();
    assert_eq!(err, OrmError::unknown_column("1=1 OR secret", "users"));
}

#[test]
fn test_filter_validated_for_other_table_is_rejected() {
    let customer_builder = SelectBuilder::new::<Customer>(&test_registry())
        .unwrap()
        .filter(col("Age").gt(lit(18)))
        .unwrap();
    let validated = customer_builder.filter_expr().cloned().unwrap();

    let err = user_builder().filter(validated).unwrap_err();
    assert_eq!(err, OrmError::unknown_column("age_years", "users"));
}

#[test]
fn test_physical_column_of_bound_table_is_accepted() {
    let filter = Expr::from(ColumnExpr::physical("email")).eq(lit("x"));

    let (sql, args) = user_builder().filter(filter).unwrap().build().unwrap();
    assert!(sql.ends_with("WHERE email = ?"));
    assert_eq!(args, vec![json!("x")]);
}

#[test]
fn test_configured_default_limit() {
    let config = QueryBuilderConfig {
        default_limit: Some(50),
        max_limit: Some(200),
        ..QueryBuilderConfig::default()
    };
    let registry = test_registry();

    let (sql, _) = SelectBuilder::with_config::<User>(&registry, config.clone())
        .unwrap()
        .build()
        .unwrap();
    assert!(sql.ends_with(" LIMIT 50"));

    let (sql, _) = SelectBuilder::with_config::<User>(&registry, config)
        .unwrap()
        .paginate(2, 1000)
        .build()
        .unwrap();
    assert!(sql.ends_with(" LIMIT 200 OFFSET 1000"));
}
