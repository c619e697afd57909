use pretty_assertions::assert_eq;

use crate::services::generator::{GenerationAction, classify};

#[test]
fn new_lines_are_created_regardless_of_force() {
    assert_eq!(classify(false, false), GenerationAction::Create);
    assert_eq!(classify(false, true), GenerationAction::Create);
}

#[test]
fn existing_lines_are_skipped_without_force() {
    assert_eq!(classify(true, false), GenerationAction::Skip);
}

#[test]
fn force_regenerates_existing_lines_only() {
    assert_eq!(classify(true, true), GenerationAction::Regenerate);
}

#[test]
fn rerun_without_force_accounts_for_every_employee() {
    // First run: no lines exist yet, everyone lands in `success`. Second
    // run: every line exists, everyone lands in `skipped`. Either way the
    // buckets partition the active-employee set.
    let active_employees = 5;

    let first_run = (0..active_employees)
        .map(|_| classify(false, false))
        .filter(|action| *action == GenerationAction::Create)
        .count();
    assert_eq!(first_run, active_employees);

    let second_run = (0..active_employees)
        .map(|_| classify(true, false))
        .filter(|action| *action == GenerationAction::Skip)
        .count();
    assert_eq!(second_run, active_employees);
}

#[test]
fn force_rerun_reports_all_existing_lines_as_regenerated() {
    let existing_lines = 5;

    let regenerated = (0..existing_lines)
        .map(|_| classify(true, true))
        .filter(|action| *action == GenerationAction::Regenerate)
        .count();

    assert_eq!(regenerated, existing_lines);
}
