//! `resume`, per `spec.md` §4.9.

use slotwt::git::CliGit;
use slotwt::ops::ResumeOutcome;

use crate::common::TestContainer;

#[test]
fn resume_returns_to_the_most_recently_checked_out_branch() {
    let container = TestContainer::new(2);
    container.branch("feat1");

    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    let feat1 = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();

    match slotwt::ops::resume(container.container_root(), &CliGit).unwrap() {
        ResumeOutcome::Navigated { slot_name } => assert_eq!(slot_name, feat1.slot_name),
        other => panic!("expected Navigated, got {other:?}"),
    }
}

#[test]
fn resume_with_nothing_checked_out_fails() {
    let container = TestContainer::new(1);
    let err = slotwt::ops::resume(container.container_root(), &CliGit).unwrap_err();
    assert!(matches!(err, slotwt::Error::NoSlotsInUse));
}
