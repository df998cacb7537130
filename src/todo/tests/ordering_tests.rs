//! Unit tests for urgency scoring and priority ordering.

use super::support::{persisted, reference_now};
use crate::todo::domain::{
    Priority, Todo,
    ordering::{ALREADY_COMPLETED_REASON, can_complete, is_overdue, overdue, sort_by_priority, urgency_score},
};
use chrono::TimeDelta;
use rstest::rstest;

fn aged(priority: Priority, age: TimeDelta, completed: bool) -> Todo {
    persisted("Some chore", priority, reference_now() - age, completed)
}

#[rstest]
#[case(TimeDelta::days(7), false)]
#[case(TimeDelta::days(7) + TimeDelta::milliseconds(8_640), true)]
#[case(TimeDelta::days(6), false)]
#[case(TimeDelta::days(30), true)]
fn overdue_boundary_is_exclusive(#[case] age: TimeDelta, #[case] expected: bool) {
    let todo = aged(Priority::Medium, age, false);
    assert_eq!(is_overdue(&todo, reference_now()), expected);
}

#[test]
fn completed_todos_are_never_overdue() {
    let todo = aged(Priority::High, TimeDelta::days(60), true);
    assert!(!is_overdue(&todo, reference_now()));
}

#[rstest]
#[case(Priority::Low, TimeDelta::hours(1), 1)]
#[case(Priority::Medium, TimeDelta::hours(1), 2)]
#[case(Priority::High, TimeDelta::hours(1), 3)]
#[case(Priority::High, TimeDelta::days(7), 6)]
#[case(Priority::Medium, TimeDelta::days(15), 6)]
#[case(Priority::High, TimeDelta::days(21), 12)]
#[case(Priority::High, TimeDelta::days(400), 12)]
#[case(Priority::Low, TimeDelta::days(-3), 1)]
fn urgency_grows_with_weekly_age_up_to_a_cap(
    #[case] priority: Priority,
    #[case] age: TimeDelta,
    #[case] expected: u32,
) {
    let todo = aged(priority, age, false);
    assert_eq!(urgency_score(&todo, reference_now()), expected);
}

#[test]
fn completed_todos_score_zero() {
    let todo = aged(Priority::High, TimeDelta::days(20), true);
    assert_eq!(urgency_score(&todo, reference_now()), 0);
}

#[rstest]
#[case(TimeDelta::zero())]
#[case(TimeDelta::days(9))]
#[case(TimeDelta::days(90))]
fn high_priority_outranks_low_at_equal_age(#[case] age: TimeDelta) {
    let high = aged(Priority::High, age, false);
    let low = aged(Priority::Low, age, false);
    assert!(urgency_score(&high, reference_now()) > urgency_score(&low, reference_now()));
}

#[test]
fn can_complete_explains_refusal() {
    let open = aged(Priority::Low, TimeDelta::zero(), false);
    let done = open.toggled();

    assert!(can_complete(&open).can_complete);
    assert_eq!(can_complete(&open).reason, None);
    assert!(!can_complete(&done).can_complete);
    assert_eq!(can_complete(&done).reason, Some(ALREADY_COMPLETED_REASON));
}

#[test]
fn completed_todos_sort_last_regardless_of_priority() {
    let low_new = aged(Priority::Low, TimeDelta::hours(1), false);
    let high_old_done = aged(Priority::High, TimeDelta::days(30), true);
    let high_new = aged(Priority::High, TimeDelta::hours(1), false);
    let input = vec![low_new.clone(), high_old_done.clone(), high_new.clone()];

    let sorted = sort_by_priority(&input, reference_now());

    assert_eq!(sorted, vec![high_new, low_new, high_old_done]);
}

#[test]
fn sorting_is_stable_idempotent_and_leaves_input_untouched() {
    let first = aged(Priority::Medium, TimeDelta::days(1), false);
    let second = aged(Priority::Medium, TimeDelta::days(2), false);
    let done_a = aged(Priority::Low, TimeDelta::days(1), true);
    let done_b = aged(Priority::High, TimeDelta::days(1), true);
    let third = aged(Priority::Low, TimeDelta::days(8), false);
    let input = vec![done_a.clone(), first.clone(), done_b.clone(), second.clone(), third.clone()];
    let original = input.clone();

    let sorted = sort_by_priority(&input, reference_now());
    let resorted = sort_by_priority(&sorted, reference_now());

    assert_eq!(input, original);
    assert_eq!(sorted, vec![first, second, third, done_a, done_b]);
    assert_eq!(resorted, sorted);
    let first_completed = sorted.iter().position(Todo::is_completed).unwrap_or(sorted.len());
    assert!(sorted.iter().skip(first_completed).all(Todo::is_completed));
}

#[test]
fn overdue_keeps_input_order() {
    let stale = aged(Priority::Low, TimeDelta::days(10), false);
    let fresh = aged(Priority::High, TimeDelta::days(1), false);
    let stale_done = aged(Priority::Low, TimeDelta::days(10), true);
    let older = aged(Priority::Medium, TimeDelta::days(20), false);
    let input = vec![stale.clone(), fresh, stale_done, older.clone()];

    assert_eq!(overdue(&input, reference_now()), vec![stale, older]);
}
