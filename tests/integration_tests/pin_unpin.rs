//! Pin inviolability, per `spec.md` §8 property 8 and scenario S4.

use slotwt::git::CliGit;

use crate::common::TestContainer;

#[test]
fn s4_pinning_every_occupied_slot_blocks_further_eviction() {
    let container = TestContainer::new(2);
    container.branch("feat1");
    container.branch("feat2");

    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();

    slotwt::ops::pin(container.container_root(), &CliGit, None).unwrap_err(); // no slot arg, not inside a slot
    for name in &container.slot_names {
        slotwt::ops::pin(container.container_root(), &CliGit, Some(name)).unwrap();
    }

    let before = container.state();
    let err = slotwt::engine::checkout(container.container_root(), &CliGit, "feat2", false).unwrap_err();
    assert!(matches!(err, slotwt::Error::AllSlotsPinned));

    let after = container.state();
    assert_eq!(before, after);
}

#[test]
fn unpin_allows_eviction_again() {
    let container = TestContainer::new(1);
    container.branch("feat1");

    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    let only_slot = &container.slot_names[0];
    slotwt::ops::pin(container.container_root(), &CliGit, Some(only_slot)).unwrap();

    let err = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap_err();
    assert!(matches!(err, slotwt::Error::AllSlotsPinned));

    slotwt::ops::unpin(container.container_root(), &CliGit, Some(only_slot)).unwrap();
    slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();
}
