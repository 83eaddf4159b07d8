use quick_consume_rs::buffs::{builtin_table, lookup, BuffLookup};
use quick_consume_rs::decision::{evaluate, health_recovered, stamina_recovered};
use quick_consume_rs::models::{ConsumptionOutcome, IneligibleReason};

#[test]
fn test_nonpositive_edibility_always_ineligible() {
    let table = builtin_table();

    for edibility in [i32::MIN, -300, -1, 0] {
        for is_full in [false, true] {
            for allow_when_full in [false, true] {
                assert_eq!(
                    evaluate("Parsnip", edibility, is_full, allow_when_full, &table),
                    ConsumptionOutcome::Ineligible(IneligibleReason::NotFood)
                );
            }
        }
    }
}

#[test]
fn test_table_names_always_blocked_when_eligible() {
    let table = builtin_table();

    for name in table.names() {
        assert_eq!(
            evaluate(name, 20, false, true, &table),
            ConsumptionOutcome::BlockedHasBuffs,
            "{} should be blocked",
            name
        );

        let upper = name.to_uppercase();
        assert_eq!(
            evaluate(&upper, 20, false, true, &table),
            ConsumptionOutcome::BlockedHasBuffs,
            "{} should be blocked regardless of case",
            upper
        );
    }
}

#[test]
fn test_absent_names_applied_with_formula_gains() {
    let table = builtin_table();

    for (name, edibility) in [("Parsnip", 18), ("Melon", 45), ("Cheese", 50)] {
        assert!(table.lookup(name).is_none(), "{} should not be in the table", name);
        assert_eq!(
            evaluate(name, edibility, false, true, &table),
            ConsumptionOutcome::Applied {
                health_gain: health_recovered(edibility),
                stamina_gain: stamina_recovered(edibility),
            }
        );
    }
}

#[test]
fn test_fullness_gate() {
    let table = builtin_table();

    // Full and not allowed: ineligible for any edibility.
    for edibility in [1, 18, 300] {
        assert_eq!(
            evaluate("Parsnip", edibility, true, false, &table),
            ConsumptionOutcome::Ineligible(IneligibleReason::AlreadyFull)
        );
    }

    // Full but allowed: normal evaluation proceeds.
    assert!(evaluate("Parsnip", 18, true, true, &table).is_applied());
    assert_eq!(
        evaluate("Coffee", 3, true, true, &table),
        ConsumptionOutcome::BlockedHasBuffs
    );
}

#[test]
fn test_lookup_case_insensitive() {
    let coffee_lower = lookup("coffee").expect("coffee should be in the table");
    let coffee_upper = lookup("COFFEE").expect("COFFEE should be in the table");
    assert_eq!(coffee_lower, coffee_upper);
}

#[test]
fn test_fried_mushroom_example() {
    let table = builtin_table();
    assert_eq!(
        evaluate("Fried Mushroom", 20, false, true, &table),
        ConsumptionOutcome::BlockedHasBuffs
    );
}

#[test]
fn test_parsnip_example() {
    let table = builtin_table();

    // edibility 30: stamina = ceil(30 * 2.5) = 75, health = trunc(75 * 0.45) = 33
    assert_eq!(
        evaluate("Parsnip", 30, false, true, &table),
        ConsumptionOutcome::Applied {
            health_gain: 33,
            stamina_gain: 75,
        }
    );
}

#[test]
fn test_restoration_never_negative() {
    for edibility in -50..=200 {
        assert!(stamina_recovered(edibility) >= 0);
        assert!(health_recovered(edibility) >= 0);
    }
}
