//! Identity stack comparison
//!
//! Pairs two identity stacks by trait kind for the side-by-side overlay.
//! Display only; nothing here scores or ranks.

use crate::model::{IdentityTrait, Profile, TraitKind};

/// One row of the comparison: the same kind on both sides, either of which
/// may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitPairing {
    pub kind: TraitKind,
    pub mine: Option<IdentityTrait>,
    pub theirs: Option<IdentityTrait>,
}

/// Pair the stacks kind by kind, in the order kinds appear in `mine`
/// followed by kinds only `theirs` carries.
pub fn compare(mine: &Profile, theirs: &Profile) -> Vec<TraitPairing> {
    let mut kinds: Vec<TraitKind> = Vec::new();
    for t in mine.stack.iter().chain(theirs.stack.iter()) {
        if !kinds.contains(&t.kind) {
            kinds.push(t.kind);
        }
    }

    kinds
        .into_iter()
        .map(|kind| TraitPairing {
            kind,
            mine: mine.stack.iter().find(|t| t.kind == kind).cloned(),
            theirs: theirs.stack.iter().find(|t| t.kind == kind).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonId;

    fn profile(id: u64, traits: &[(TraitKind, &str)]) -> Profile {
        Profile {
            id: PersonId(id),
            name: String::new(),
            origin: String::new(),
            bio: String::new(),
            stack: traits
                .iter()
                .map(|(kind, value)| IdentityTrait {
                    kind: *kind,
                    value: value.to_string(),
                    accent: "#000000".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn pairs_matching_kinds_side_by_side() {
        let mine = profile(
            1,
            &[(TraitKind::Rhythm, "Ethio-Jazz"), (TraitKind::Spice, "Berbere")],
        );
        let theirs = profile(
            2,
            &[(TraitKind::Rhythm, "Highlife"), (TraitKind::Spice, "Scotch Bonnet")],
        );

        let pairs = compare(&mine, &theirs);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].kind, TraitKind::Rhythm);
        assert_eq!(pairs[0].mine.as_ref().unwrap().value, "Ethio-Jazz");
        assert_eq!(pairs[0].theirs.as_ref().unwrap().value, "Highlife");
    }

    #[test]
    fn unmatched_kinds_leave_one_side_empty() {
        let mine = profile(1, &[(TraitKind::Rhythm, "Cumbia")]);
        let theirs = profile(2, &[(TraitKind::Legacy, "Oaxacan")]);

        let pairs = compare(&mine, &theirs);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].theirs.is_none());
        assert!(pairs[1].mine.is_none());
        assert_eq!(pairs[1].kind, TraitKind::Legacy);
    }
}
