use fql_builder::{Arg, Expr, Func, args, normalize, q};
use proptest::prelude::*;
use serde_json::json;

fn identity_lambda(arity: usize) -> Expr {
    q::lambda_fn(Func::with_arity(arity, |vars| q::do_(vars))).unwrap()
}

proptest! {
    #[test]
    fn integers_normalize_idempotently(n in any::<i64>()) {
        let once = normalize::normalize(Arg::from(n), "test").unwrap();
        let twice = normalize::normalize(Arg::from(&once), "test").unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.to_wire(), json!(n));
    }

    #[test]
    fn strings_are_plain_data(s in ".*") {
        let expr = normalize::normalize(Arg::from(s.as_str()), "test").unwrap();
        prop_assert_eq!(expr.to_wire(), json!(s));
    }

    #[test]
    fn lists_keep_order_and_length(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let expr = normalize::normalize(Arg::from(items.clone()), "test").unwrap();
        prop_assert_eq!(expr.elements().map(<[Expr]>::len), Some(items.len()));
        prop_assert_eq!(expr.to_wire(), json!(items));
    }

    #[test]
    fn variadic_keeps_every_operand(items in prop::collection::vec(-1000i64..1000, 1..16)) {
        let expr = q::add(items.clone()).unwrap();
        prop_assert_eq!(expr.to_wire(), json!({"add": items}));
    }

    #[test]
    fn object_literal_keeps_every_field(
        fields in prop::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..8)
    ) {
        let expr = q::object(fields.clone()).unwrap();
        prop_assert_eq!(expr.object_fields().map(|f| f.len()), Some(fields.len()));
        prop_assert_eq!(expr.to_wire(), json!({"object": fields}));
    }

    #[test]
    fn lambda_names_ignore_prior_builds(prior in 0usize..8, arity in 1usize..5) {
        let fresh = identity_lambda(arity);
        for i in 0..prior {
            let _ = identity_lambda(arity + i);
        }
        prop_assert_eq!(identity_lambda(arity), fresh);
    }

    #[test]
    fn shared_node_is_unchanged_by_parents(n in any::<i64>(), parents in 1usize..6) {
        let shared = q::abs(n).unwrap();
        let before = shared.to_string();

        for i in 0..parents {
            let parent = q::add(args![&shared, i]).unwrap();
            let first = parent.field("add").and_then(|ops| ops.elements()).map(|ops| ops[0].clone());
            prop_assert_eq!(first, Some(shared.clone()));
        }
        prop_assert_eq!(shared.to_string(), before);
    }
}
