//! Short random suffixes for self-heal's fresh branch names (spec §4.E.6:
//! "creates a fresh branch name (slug + random suffix)").

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "brave", "calm", "clever", "cosmic", "crisp", "curious", "eager", "gentle", "glowing", "happy",
    "hidden", "jolly", "kind", "lucky", "mighty", "misty", "neon", "nimble", "playful", "proud",
];

const NOUNS: &[&str] = &[
    "cabin", "cactus", "canyon", "circuit", "comet", "eagle", "engine", "falcon", "forest",
    "garden", "harbor", "island", "knight", "lagoon", "meadow", "moon", "mountain", "nebula",
    "orchid", "otter",
];

/// Builds `<base_slug>-<adjective>-<noun>` so a heal attempt never collides
/// with the branch it is replacing.
pub fn heal_branch_name(base_slug: &str) -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{base_slug}-{adj}-{noun}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_branch_name_includes_base_slug() {
        let name = heal_branch_name("fix-tests");
        assert!(name.starts_with("fix-tests-"));
        assert_eq!(name.split('-').count(), 4);
    }

    #[test]
    fn heal_branch_name_is_mostly_unique() {
        let names: std::collections::HashSet<String> =
            (0..50).map(|_| heal_branch_name("repair")).collect();
        assert!(names.len() > 25);
    }
}
