use little_orm::query_builder::{
    and_all, between, col, lit, or_all, BinaryExpr, Expr, Operator, TernaryExpr, UnaryExpr,
};
use little_orm::OrmError;
use serde_json::json;

#[test]
fn test_comparison_operators_render_bare() {
    let cases = [
        (Operator::Eq, "ID = ?"),
        (Operator::NotEq, "ID != ?"),
        (Operator::Gt, "ID > ?"),
        (Operator::Lt, "ID < ?"),
        (Operator::Gte, "ID >= ?"),
        (Operator::Lte, "ID <= ?"),
        (Operator::Like, "ID LIKE ?"),
    ];

    for (operator, expected) in cases {
        let (sql, args) = Expr::from(BinaryExpr::new(operator, col("ID"), lit(1)))
            .to_sql()
            .unwrap();
        assert_eq!(sql, expected);
        assert_eq!(args, vec![json!(1)]);
    }
}

#[test]
fn test_membership_operators_are_grouped() {
    let (sql, args) = col("ID").not_in(["a", "b"]).to_sql().unwrap();
    assert_eq!(sql, "(ID NOT IN ?)");
    assert_eq!(args, vec![json!(["a", "b"])]);
}

#[test]
fn test_column_and_literal_lowering() {
    assert_eq!(col("Name").to_sql().unwrap(), ("Name".to_string(), vec![]));
    assert_eq!(lit("x").to_sql().unwrap(), ("?".to_string(), vec![json!("x")]));
}

#[test]
fn test_literal_on_both_sides() {
    let (sql, args) = lit(1).eq(lit(2)).to_sql().unwrap();
    assert_eq!(sql, "? = ?");
    assert_eq!(args, vec![json!(1), json!(2)]);
}

#[test]
fn test_fold_helpers() {
    assert!(and_all(Vec::<Expr>::new()).is_none());

    let (sql, args) = and_all([
        col("a").eq(lit(1)),
        col("b").eq(lit(2)),
        col("c").eq(lit(3)),
    ])
    .unwrap()
    .to_sql()
    .unwrap();
    assert_eq!(sql, "((a = ? AND b = ?) AND c = ?)");
    assert_eq!(args, vec![json!(1), json!(2), json!(3)]);

    let single = or_all([col("a").is_null()]).unwrap();
    assert_eq!(single.to_sql().unwrap().0, "a IS NULL");
}

#[test]
fn test_between_argument_order() {
    let (sql, args) = between(col("age"), lit(18), lit(65)).to_sql().unwrap();
    assert_eq!(sql, "age BETWEEN ? AND ?");
    assert_eq!(args, vec![json!(18), json!(65)]);
}

#[test]
fn test_missing_operands_are_invalid() {
    let unary = Expr::Unary(UnaryExpr {
        operator: Operator::IsNull,
        operand: None,
    });
    let binary = Expr::Binary(BinaryExpr {
        operator: Operator::Eq,
        left: Some(Box::new(col("a"))),
        right: None,
    });
    let ternary = Expr::Ternary(TernaryExpr {
        expr: Some(Box::new(col("a"))),
        low: None,
        high: Some(Box::new(lit(1))),
    });

    for expr in [unary, binary, ternary] {
        assert!(matches!(
            expr.to_sql().unwrap_err(),
            OrmError::InvalidExpression { .. }
        ));
    }
}

#[test]
fn test_wrong_operator_class_is_rejected() {
    let unary = Expr::from(UnaryExpr::new(Operator::Eq, col("a")));
    let binary = Expr::from(BinaryExpr::new(Operator::Between, col("a"), lit(1)));

    assert_eq!(
        unary.to_sql().unwrap_err(),
        OrmError::unsupported_operator("=", "unary expression")
    );
    assert_eq!(
        binary.to_sql().unwrap_err(),
        OrmError::unsupported_operator("BETWEEN", "binary expression")
    );
}

#[test]
fn test_operator_parsing() {
    assert_eq!("<>".parse::<Operator>().unwrap(), Operator::NotEq);
    assert_eq!("is  not null".parse::<Operator>().unwrap(), Operator::IsNotNull);
    assert!(matches!(
        "~=".parse::<Operator>().unwrap_err(),
        OrmError::UnsupportedOperator { .. }
    ));
}
