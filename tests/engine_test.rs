//! Traversal-engine integration tests: path composition, per-property
//! short-circuiting, nested and collection descent, set semantics.

use pretty_assertions::assert_eq;

use validus::prelude::*;

#[derive(Debug, Clone)]
struct Employee {
    id: Option<i64>,
    name: Option<String>,
    address: Option<Address>,
    phones: Option<Vec<Phone>>,
}

#[derive(Debug, Clone)]
struct Address {
    city: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Clone)]
struct Phone {
    number: Option<String>,
}

fn valid_employee() -> Employee {
    Employee {
        id: Some(1),
        name: Some("Ada".into()),
        address: Some(Address {
            city: Some("London".into()),
            zip: Some("12345".into()),
        }),
        phones: Some(vec![
            Phone {
                number: Some("5550100".into()),
            },
            Phone {
                number: Some("5550101".into()),
            },
        ]),
    }
}

fn employee_rules(ctx: &mut Context<'_, Employee>) {
    ctx.property("id", |e: &Employee| e.id.as_ref())
        .is_not_null()
        .is_positive();
    ctx.property("name", |e: &Employee| e.name.as_ref())
        .is_not_null()
        .is_not_blank();
    ctx.property("address", |e: &Employee| e.address.as_ref())
        .validate_nested(|addr| {
            addr.property("city", |a: &Address| a.city.as_ref())
                .is_not_blank();
            addr.property("zip", |a: &Address| a.zip.as_ref())
                .has_size(5, 5);
        });
    ctx.property("phones", |e: &Employee| e.phones.as_ref())
        .validate_for_each(|phone| {
            phone
                .property("number", |p: &Phone| p.number.as_ref())
                .is_not_null()
                .has_size(7, 10);
        });
}

#[test]
fn valid_target_is_returned_unchanged() {
    let employee = valid_employee();
    let returned = validate(employee.clone(), employee_rules).unwrap();
    assert_eq!(returned.id, employee.id);
    assert_eq!(returned.name, employee.name);
}

#[test]
fn nested_failure_composes_dotted_path() {
    let mut employee = valid_employee();
    employee.address = Some(Address {
        city: Some("   ".into()),
        zip: Some("12345".into()),
    });
    let err = validate(employee, employee_rules).unwrap_err();
    assert_eq!(err.len(), 1);
    let violation = err.violation_for("address.city").unwrap();
    assert_eq!(violation.constraint, Constraint::NotBlank);
    assert_eq!(violation.value, Some(Value::Str("   ".into())));
}

#[test]
fn collection_failure_composes_indexed_path() {
    let mut employee = valid_employee();
    employee.phones = Some(vec![
        Phone {
            number: Some("5550100".into()),
        },
        Phone {
            number: Some("123".into()),
        },
    ]);
    let err = validate(employee, employee_rules).unwrap_err();
    assert_eq!(err.len(), 1);
    let violation = err.violation_for("phones[1].number").unwrap();
    assert_eq!(violation.constraint, Constraint::Size { min: 7, max: 10 });
}

#[test]
fn first_failing_rule_wins_per_property() {
    let mut employee = valid_employee();
    employee.id = None;
    let err = validate(employee, |ctx| {
        ctx.property("id", |e: &Employee| e.id.as_ref())
            .is_not_null()
            .is_positive();
    })
    .unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(
        err.violation_for("id").unwrap().constraint,
        Constraint::NotNull
    );
}

#[test]
fn absent_properties_satisfy_non_presence_rules() {
    let employee = Employee {
        id: None,
        name: None,
        address: None,
        phones: None,
    };
    let result = validate(employee, |ctx| {
        ctx.property("id", |e: &Employee| e.id.as_ref())
            .is_positive()
            .is_between(1, 100);
        ctx.property("name", |e: &Employee| e.name.as_ref())
            .is_not_blank()
            .contains("a");
        ctx.property("address", |e: &Employee| e.address.as_ref())
            .validate_nested(|addr| {
                addr.property("city", |a: &Address| a.city.as_ref())
                    .is_not_blank();
            });
        ctx.property("phones", |e: &Employee| e.phones.as_ref())
            .validate_for_each(|phone| {
                phone
                    .property("number", |p: &Phone| p.number.as_ref())
                    .is_not_null();
            });
    });
    assert!(result.is_ok());
}

#[test]
fn revalidation_yields_equal_sets() {
    let mut employee = valid_employee();
    employee.id = Some(-3);
    employee.name = Some("  ".into());

    let first = validate(employee.clone(), employee_rules).unwrap_err();
    let second = validate(employee, employee_rules).unwrap_err();

    let first: Vec<_> = first.violations().iter().cloned().collect();
    let second: Vec<_> = second.violations().iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn violations_accumulate_across_properties() {
    let employee = Employee {
        id: Some(-1),
        name: Some("  ".into()),
        address: Some(Address {
            city: Some(String::new()),
            zip: Some("123".into()),
        }),
        phones: Some(vec![Phone { number: None }]),
    };
    let err = validate(employee, employee_rules).unwrap_err();
    let paths: Vec<_> = err
        .violations()
        .iter()
        .map(|v| v.property_path.as_str())
        .collect();
    assert_eq!(
        paths,
        ["id", "name", "address.city", "address.zip", "phones[0].number"]
    );
}

#[test]
fn between_scenario_records_constraint_parameters() {
    #[derive(Debug)]
    struct Holder {
        value: Option<i64>,
    }
    let err = validate(Holder { value: Some(50) }, |ctx| {
        ctx.property("value", |h: &Holder| h.value.as_ref())
            .is_between(0, 10);
    })
    .unwrap_err();
    let violation = err.violation_for("value").unwrap();
    assert_eq!(violation.value, Some(Value::Int(50)));
    assert_eq!(
        violation.constraint,
        Constraint::Between {
            start: Value::Int(0),
            end: Value::Int(10),
        }
    );
}

#[test]
fn deeply_nested_paths_compose() {
    #[derive(Debug)]
    struct Company {
        hq: Option<Office>,
    }
    #[derive(Debug)]
    struct Office {
        address: Option<Address>,
    }

    let company = Company {
        hq: Some(Office {
            address: Some(Address {
                city: Some("  ".into()),
                zip: None,
            }),
        }),
    };
    let err = validate(company, |ctx| {
        ctx.property("hq", |c: &Company| c.hq.as_ref())
            .validate_nested(|office| {
                office
                    .property("address", |o: &Office| o.address.as_ref())
                    .validate_nested(|addr| {
                        addr.property("city", |a: &Address| a.city.as_ref())
                            .is_not_blank();
                    });
            });
    })
    .unwrap_err();
    assert!(err.violation_for("hq.address.city").is_some());
}

#[test]
fn violation_report_serializes_path_tag_and_params() {
    let mut employee = valid_employee();
    employee.id = Some(-3);
    let err = validate(employee, employee_rules).unwrap_err();
    let violation = err.violation_for("id").unwrap();
    let json = serde_json::to_value(violation).unwrap();
    assert_eq!(json["property_path"], "id");
    assert_eq!(json["value"], -3);
    assert_eq!(json["constraint"]["constraint"], "Greater");
    assert_eq!(json["constraint"]["bound"], 0);
}
