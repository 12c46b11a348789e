use pokersim_engine::player::{Decision, PlayerAction as A};
use pokersim_engine::rules::{forced_decision, validate_decision, Adjustment};

#[test]
fn empty_stack_folds_without_asking() {
    let v = forced_decision(0, 0).unwrap();
    assert_eq!(v.decision, Decision::fold());
    assert_eq!(v.adjustment, Some(Adjustment::ForcedFold));
}

#[test]
fn stack_below_min_bet_goes_all_in() {
    let v = forced_decision(15, 20).unwrap();
    assert_eq!(v.decision, Decision::new(A::AllIn, 15));
    assert_eq!(v.adjustment, Some(Adjustment::ForcedAllIn));
}

#[test]
fn stack_equal_to_min_bet_is_not_forced() {
    assert!(forced_decision(20, 20).is_none());
}

#[test]
fn call_over_stack_is_clamped() {
    let v = validate_decision(60, Decision::new(A::Call, 100));
    assert_eq!(v.decision, Decision::new(A::Call, 60));
    assert_eq!(v.adjustment, Some(Adjustment::ClampedToStack { requested: 100 }));
}

#[test]
fn bet_within_stack_is_unchanged() {
    let v = validate_decision(500, Decision::new(A::Bet, 120));
    assert_eq!(v.decision, Decision::new(A::Bet, 120));
    assert_eq!(v.adjustment, None);
}

#[test]
fn fold_with_chips_drops_the_amount() {
    let v = validate_decision(500, Decision::new(A::Fold, 30));
    assert_eq!(v.decision, Decision::fold());
    assert_eq!(v.adjustment, Some(Adjustment::AmountIgnored { requested: 30 }));
}

#[test]
fn all_in_always_commits_the_whole_stack() {
    let v = validate_decision(130, Decision::new(A::AllIn, 50));
    assert_eq!(v.decision, Decision::new(A::AllIn, 130));
    assert_eq!(v.adjustment, Some(Adjustment::AllInCorrected { requested: 50 }));

    let exact = validate_decision(130, Decision::new(A::AllIn, 130));
    assert_eq!(exact.adjustment, None);
}
