//! End-to-end statements built through the public API.

use rayx_sql::{
    Columns, Predicate, SortDir, SqlError, StatementBuilder, Value, conditions, try_conditions,
};

#[test]
fn delete_statement() {
    let mut b = StatementBuilder::new();
    assert_eq!(b.delete_from("student").end(), "delete from student;");
}

#[test]
fn update_statement() {
    let mut b = StatementBuilder::new();
    let sql = b
        .update("student")
        .set([("age", Value::from(20)), ("name", Value::from("Tom"))])
        .end();
    assert_eq!(sql, "update student set age=20, name='Tom';");
}

#[test]
fn insert_statement() {
    let mut b = StatementBuilder::new();
    let sql = b
        .insert("student")
        .columns_with_values([("id", Value::from(1)), ("name", Value::from("Ann"))])
        .end();
    assert_eq!(sql, "insert into student (id, name) values (1, 'Ann');");
}

#[test]
fn select_statement() {
    let mut b = StatementBuilder::new();
    let sql = b
        .select(["age", "name"])
        .from("student")
        .where_(&[Predicate::eq("id", 123)])
        .order_by("age", SortDir::Asc)
        .end();
    assert_eq!(
        sql,
        "select age,name from student where id=123 order by age asc;"
    );
}

#[test]
fn conditions_quote_strings_only() {
    let preds = [Predicate::eq("id", "123"), Predicate::like("name", "Json")];
    assert_eq!(conditions(&preds), "id='123' and name like 'Json'");
}

#[test]
fn reset_after_end_disables_or() {
    let mut b = StatementBuilder::new();
    b.select(Columns::All)
        .from("student")
        .where_(&[Predicate::eq("id", 1)]);
    b.end();

    b.select(Columns::All).from("student");
    b.or(&[Predicate::eq("id", 2)]);
    assert_eq!(b.end(), "select * from student;");

    b.select(Columns::All)
        .from("student")
        .where_(&[Predicate::eq("id", 1)])
        .or(&[Predicate::eq("id", 2)]);
    assert_eq!(b.end(), "select * from student where id=1 or id=2;");
}

#[test]
fn predicates_from_json_request() {
    let filters: Vec<Predicate> = serde_json::from_str(
        r#"[
            {"key": "grade", "value": 3, "operator": "="},
            {"key": "name", "value": "A%", "operator": "like"},
            {"key": "age", "value": 12, "operator": "gt"}
        ]"#,
    )
    .unwrap();

    let mut b = StatementBuilder::new();
    let sql = b
        .select("id, name")
        .from("student")
        .where_(&filters)
        .order_by("id", None)
        .end();
    assert_eq!(
        sql,
        "select id, name from student where grade=3 and name like 'A%' order by id desc;"
    );

    let err = try_conditions(&filters).unwrap_err();
    assert!(err.is_unsupported_operator());
    assert_eq!(
        err.to_string(),
        "Unsupported operator 'gt' for key 'age'"
    );
}

#[test]
fn json_null_value_is_rejected() {
    let res: Result<Vec<Predicate>, _> =
        serde_json::from_str(r#"[{"key": "deleted_at", "value": null, "operator": "equals"}]"#);
    assert!(res.is_err());

    let err = Value::try_from(serde_json::Value::Null).unwrap_err();
    assert_eq!(err, SqlError::unsupported_literal("null"));
}

#[test]
fn one_builder_many_statements() {
    let mut b = StatementBuilder::new();
    let statements: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|t| b.select(Columns::All).from(t).end())
        .collect();
    assert_eq!(
        statements,
        vec!["select * from a;", "select * from b;", "select * from c;"]
    );
}
