//! Reconciliation after an external `git checkout`, per `spec.md` §8
//! scenario S5, and idempotence (property 5) against a real repository.

use slotwt::git::CliGit;

use crate::common::TestContainer;

#[test]
fn s5_reconcile_picks_up_a_branch_switch_made_outside_the_tool() {
    let container = TestContainer::new(1);
    container.branch("other");

    let outcome = slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    let before = container.state();
    let recorded_last_used = before.slots.get(&outcome.slot_name).unwrap().last_used_at;

    let slot_path = container.paths.slot_path(&outcome.slot_name);
    let status = std::process::Command::new("git")
        .args(["checkout", "other"])
        .current_dir(&slot_path)
        .status()
        .unwrap();
    assert!(status.success());

    let state = slotwt::reconcile::reconcile(&container.paths, &CliGit, container.state()).unwrap();
    let slot = state.slots.get(&outcome.slot_name).unwrap();
    assert_eq!(slot.branch.as_deref(), Some("other"));
    assert_eq!(slot.last_used_at, recorded_last_used);
}

#[test]
fn reconciling_a_real_container_twice_is_idempotent() {
    let container = TestContainer::new(2);
    container.branch("feat1");
    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();

    let once = slotwt::reconcile::reconcile(&container.paths, &CliGit, container.state()).unwrap();
    let twice = slotwt::reconcile::reconcile(&container.paths, &CliGit, once.clone()).unwrap();
    assert_eq!(once, twice);
}
