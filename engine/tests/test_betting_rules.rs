use fivedraw_engine::player::Action as A;
use fivedraw_engine::rules::{resolve_action, Resolution};

#[test]
fn fold_is_always_honored() {
    let r = resolve_action(A::Fold, /*committed*/ 25, /*stack*/ 1000, 50, 50);
    assert_eq!(r, Resolution::Fold);
}

#[test]
fn check_with_nothing_owed_stands() {
    let r = resolve_action(A::Check, 50, 1000, /*current_bet*/ 50, 50);
    assert_eq!(r, Resolution::Check);
}

#[test]
fn check_facing_a_bet_becomes_a_fold() {
    let r = resolve_action(A::Check, 0, 1000, 50, 50);
    assert_eq!(r, Resolution::FoldInvalidCheck);
}

#[test]
fn call_pays_only_the_difference() {
    // small blind completing against the big blind
    let r = resolve_action(A::Call, 25, 1000, 50, 50);
    assert_eq!(r, Resolution::Call { pay: 25 });
}

#[test]
fn call_with_insufficient_stack_is_an_allin_call() {
    let r = resolve_action(A::Call, 0, /*stack*/ 60, /*current_bet*/ 100, 100);
    assert_eq!(r, Resolution::Call { pay: 60 });
}

#[test]
fn call_with_nothing_owed_pays_zero() {
    let r = resolve_action(A::Call, 50, 500, 50, 50);
    assert_eq!(r, Resolution::Call { pay: 0 });
}

#[test]
fn raise_over_stack_becomes_allin() {
    let r = resolve_action(A::Raise(5000), 0, /*stack*/ 500, 50, 50);
    assert_eq!(r, Resolution::Raise { total: 500, pay: 500 });
}

#[test]
fn exact_minimum_raise_is_legal() {
    let r = resolve_action(A::Raise(100), 0, 1000, /*current_bet*/ 50, /*min_raise*/ 50);
    assert_eq!(r, Resolution::Raise { total: 100, pay: 100 });
}

#[test]
fn raise_amount_is_the_total_commitment() {
    // already committed 50 this phase, so raising to 150 costs 100 more
    let r = resolve_action(A::Raise(150), 50, 1000, 50, 50);
    assert_eq!(r, Resolution::Raise { total: 150, pay: 100 });
}

#[test]
fn short_allin_raise_stands_without_error() {
    // to_call=100, min_raise=100, stack=130: the all-in cannot reach the
    // legal minimum, so it goes in as a raise to 130
    let r = resolve_action(A::Raise(130), 0, 130, 100, 100);
    assert_eq!(r, Resolution::Raise { total: 130, pay: 130 });
}

#[test]
fn underraise_with_chips_to_spare_downgrades_to_a_call() {
    // the seat could afford the legal minimum (75), so the short raise
    // becomes a plain call of the table bet
    let r = resolve_action(A::Raise(40), 0, /*stack*/ 200, /*current_bet*/ 50, /*min_raise*/ 25);
    assert_eq!(r, Resolution::CallReduced { pay: 50 });
}

#[test]
fn raise_that_cannot_beat_the_bet_calls_allin() {
    // stack too small to top the current bet at all
    let r = resolve_action(A::Raise(30), 0, /*stack*/ 40, /*current_bet*/ 100, 50);
    assert_eq!(r, Resolution::CallReduced { pay: 40 });
}

#[test]
fn raise_to_the_current_bet_is_just_a_call() {
    let r = resolve_action(A::Raise(50), 25, 1000, /*current_bet*/ 50, 50);
    assert_eq!(r, Resolution::CallReduced { pay: 25 });
}
