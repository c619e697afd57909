use payroll_be::database::models::PayrollStatus;
use pretty_assertions::assert_eq;

use PayrollStatus::*;

const ALL: [PayrollStatus; 6] = [Draft, PendingApproval, Approved, Paid, Cancelled, Projection];

#[test]
fn draft_moves_to_pending_approved_or_cancelled() {
    assert!(Draft.can_transition_to(PendingApproval));
    assert!(Draft.can_transition_to(Approved));
    assert!(Draft.can_transition_to(Cancelled));
    assert!(!Draft.can_transition_to(Paid));
}

#[test]
fn pending_approval_moves_to_approved_or_cancelled() {
    assert!(PendingApproval.can_transition_to(Approved));
    assert!(PendingApproval.can_transition_to(Cancelled));
    assert!(!PendingApproval.can_transition_to(Paid));
    assert!(!PendingApproval.can_transition_to(Draft));
}

#[test]
fn approved_moves_to_paid_or_cancelled() {
    assert!(Approved.can_transition_to(Paid));
    assert!(Approved.can_transition_to(Cancelled));
    assert!(!Approved.can_transition_to(Draft));
}

#[test]
fn paid_is_terminal() {
    for next in ALL {
        assert!(!Paid.can_transition_to(next), "paid must not move to {}", next);
    }
    assert!(Paid.terminal());
}

#[test]
fn cancelled_is_terminal() {
    for next in ALL {
        assert!(
            !Cancelled.can_transition_to(next),
            "cancelled must not move to {}",
            next
        );
    }
    assert!(Cancelled.terminal());
}

#[test]
fn a_projection_never_enters_the_lifecycle() {
    for next in ALL {
        assert!(!Projection.can_transition_to(next));
    }
    for from in ALL {
        assert!(!from.can_transition_to(Projection));
    }
}

#[test]
fn only_drafts_are_editable() {
    assert!(Draft.editable());
    for status in [PendingApproval, Approved, Paid, Cancelled, Projection] {
        assert!(!status.editable(), "{} must not be editable", status);
    }
}

#[test]
fn approving_a_paid_line_is_illegal() {
    assert!(!Paid.can_transition_to(Approved));
}

#[test]
fn paying_a_draft_line_is_illegal() {
    assert!(!Draft.can_transition_to(Paid));
}

#[test]
fn statuses_round_trip_through_their_storage_form() {
    for status in ALL {
        let stored = status.to_string();
        assert_eq!(stored.parse::<PayrollStatus>().unwrap(), status);
    }
}
