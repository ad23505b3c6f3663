use super::*;

#[test]
fn typed_operations_fold_left() {
    assert_eq!(sum(&[4, 2, 1]), Ok(7));
    assert_eq!(sub(&[4, 2, 1]), Ok(1));
    assert_eq!(mul(&[1, 2, 3]), Ok(6));
    assert_eq!(div(&[20, 2, 5]), Ok(2));
    assert_eq!(div(&[5.0, 2.0, 2.0]), Ok(1.25));
}

#[test]
fn fewer_than_two_values_is_an_arity_error() {
    assert_eq!(
        sum(&[1]),
        Err(Error::Arity {
            op: "sum",
            min: 2,
            got: 1
        })
    );
    assert_eq!(
        div::<f64>(&[]),
        Err(Error::Arity {
            op: "div",
            min: 2,
            got: 0
        })
    );
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(sum(&[u8::MAX, 1]), Err(Error::Overflow { op: "sum" }));
    assert_eq!(sub(&[0_u32, 1]), Err(Error::Overflow { op: "sub" }));
    assert_eq!(mul(&[i64::MAX, 2]), Err(Error::Overflow { op: "mul" }));
    assert_eq!(div(&[i32::MIN, -1]), Err(Error::Overflow { op: "div" }));
}

#[test]
fn integer_division_by_zero_is_an_error() {
    assert_eq!(div(&[1, 0]), Err(Error::DivisionByZero));
}

#[test]
fn float_division_by_zero_is_infinite() {
    assert_eq!(div(&[1.0_f64, 0.0]), Ok(f64::INFINITY));
}

#[cfg(feature = "json")]
mod dynamic {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_value_selects_integer_arithmetic() {
        assert_eq!(sum_dyn(&[json!(1), json!(2), json!(3)]), Ok(json!(6)));
        assert_eq!(sub_dyn(&[json!(1), json!(5)]), Ok(json!(-4)));
        assert_eq!(div_dyn(&[json!(7), json!(2)]), Ok(json!(3)));
    }

    #[test]
    fn first_value_selects_float_arithmetic() {
        assert_eq!(mul_dyn(&[json!(1.5), json!(2)]), Ok(json!(3.0)));
        assert_eq!(div_dyn(&[json!(5.0), json!(2), json!(2)]), Ok(json!(1.25)));
    }

    #[test]
    fn unsigned_values_beyond_i64_stay_unsigned() {
        let big = u64::MAX - 1;
        assert_eq!(sum_dyn(&[json!(big), json!(1)]), Ok(json!(u64::MAX)));
    }

    #[test]
    fn strings_concatenate_only_in_sum() {
        assert_eq!(sum_dyn(&[json!("foo"), json!("bar")]), Ok(json!("foobar")));
        assert_eq!(
            sub_dyn(&[json!("foo"), json!("bar")]),
            Err(Error::UnsupportedType {
                op: "sub",
                kind: "string"
            })
        );
    }

    #[test]
    fn mixed_kinds_are_a_mismatch() {
        assert_eq!(
            sum_dyn(&[json!(1), json!(2.5)]),
            Err(Error::TypeMismatch {
                op: "sum",
                expected: "signed integer",
                found: "float"
            })
        );
        assert_eq!(
            sum_dyn(&[json!("a"), json!(1)]),
            Err(Error::TypeMismatch {
                op: "sum",
                expected: "string",
                found: "integer"
            })
        );
    }

    #[test]
    fn non_finite_float_result_is_rejected() {
        assert!(matches!(
            div_dyn(&[json!(1.0), json!(0.0)]),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn integer_division_by_zero_is_an_error() {
        assert_eq!(div_dyn(&[json!(1), json!(0)]), Err(Error::DivisionByZero));
    }
}
