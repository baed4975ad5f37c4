//! Stash capture/restore across eviction, per `spec.md` §8 property 9 and
//! scenario S3.

use slotwt::git::CliGit;

use crate::common::TestContainer;

#[test]
fn s3_dirty_eviction_preserves_work_and_restores_it_on_return() {
    let container = TestContainer::new(1);
    container.branch("feat1");

    let first = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();
    container.write_uncommitted(&first.slot_name, "scratch.txt", "work in progress");

    // Only one slot, so checking out `main` must evict `feat1`.
    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    assert_eq!(container.read_file(&first.slot_name, "scratch.txt"), None);

    let second = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();
    assert_eq!(
        container.read_file(&second.slot_name, "scratch.txt"),
        Some("work in progress".to_string())
    );
    assert_eq!(second.stash_restore_warning, None, "a clean restore must not report a warning");

    let archive = slotwt::stash::StashArchive::read(&container.paths.control_dir).unwrap();
    assert!(archive.get("feat1").is_none(), "a successfully restored stash must be cleared from the archive");
}

#[test]
fn no_restore_leaves_working_tree_clean_and_keeps_the_stash_archived() {
    let container = TestContainer::new(1);
    container.branch("feat1");

    let first = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", false).unwrap();
    container.write_uncommitted(&first.slot_name, "scratch.txt", "work in progress");

    slotwt::engine::checkout(container.container_root(), &CliGit, "main", false).unwrap();
    let second = slotwt::engine::checkout(container.container_root(), &CliGit, "feat1", true).unwrap();

    assert_eq!(container.read_file(&second.slot_name, "scratch.txt"), None);

    let archive = slotwt::stash::StashArchive::read(&container.paths.control_dir).unwrap();
    assert!(archive.get("feat1").is_some());
}
