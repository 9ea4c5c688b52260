//! Match Queue
//!
//! Presents exactly one candidate at a time, records the user's verdict on
//! it, and advances. The queue is logically circular: reaching the end wraps
//! back to the first candidate, and each pass's decisions are independent.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{PersonId, ProfileRef, SwipeDecision, Verdict};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The decision raced ahead of the displayed candidate.
    #[error("decision for {got} does not match the current candidate {expected}")]
    StaleDecision { expected: PersonId, got: PersonId },
    #[error("the queue has no candidates")]
    EmptyQueue,
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Ordered, cyclic sequence of candidates plus the append-only decision log.
///
/// Invariant: the cursor always indexes a valid position modulo the sequence
/// length, and a decision for the candidate at the cursor is appended before
/// the cursor advances past it.
#[derive(Debug, Default)]
pub struct MatchQueue {
    profiles: Vec<ProfileRef>,
    cursor: usize,
    decisions: Vec<SwipeDecision>,
}

impl MatchQueue {
    pub fn new(profiles: Vec<ProfileRef>) -> Self {
        Self {
            profiles,
            cursor: 0,
            decisions: Vec::new(),
        }
    }

    /// Append a candidate at the end of the presentation order.
    pub fn push(&mut self, profile: ProfileRef) {
        self.profiles.push(profile);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The candidate at the cursor, or `None` when the queue is empty.
    pub fn current(&self) -> Option<&ProfileRef> {
        self.profiles.get(self.cursor)
    }

    /// Every decision ever recorded, oldest first.
    pub fn decisions(&self) -> &[SwipeDecision] {
        &self.decisions
    }

    /// Presentation order, by id.
    pub fn profile_ids(&self) -> Vec<PersonId> {
        self.profiles.iter().map(|p| p.id).collect()
    }

    pub(crate) fn restore(
        profiles: Vec<ProfileRef>,
        cursor: usize,
        decisions: Vec<SwipeDecision>,
    ) -> Result<Self, String> {
        if profiles.is_empty() && cursor != 0 {
            return Err("cursor out of range for an empty queue".to_string());
        }
        if !profiles.is_empty() && cursor >= profiles.len() {
            return Err(format!(
                "cursor {cursor} out of range for {} candidates",
                profiles.len()
            ));
        }
        Ok(Self {
            profiles,
            cursor,
            decisions,
        })
    }

    /// Record a verdict on the current candidate and advance one position.
    ///
    /// `person` must be the candidate at the cursor; a mismatch means the
    /// caller is acting on a card that is no longer displayed.
    pub fn decide(&mut self, person: PersonId, verdict: Verdict) -> Result<(), QueueError> {
        let expected = self.current().ok_or(QueueError::EmptyQueue)?.id;
        if expected != person {
            return Err(QueueError::StaleDecision {
                expected,
                got: person,
            });
        }

        self.decisions.push(SwipeDecision { person, verdict });
        self.cursor = (self.cursor + 1) % self.profiles.len();
        Ok(())
    }

    /// Remove the most recent decision and step the cursor back one position.
    ///
    /// Only valid while the last log entry still lines up with the candidate
    /// immediately behind the cursor.
    pub fn undo_last(&mut self) -> Result<PersonId, QueueError> {
        let last = *self.decisions.last().ok_or(QueueError::NothingToUndo)?;
        let len = self.profiles.len();
        if len == 0 {
            return Err(QueueError::NothingToUndo);
        }

        let prev = (self.cursor + len - 1) % len;
        if self.profiles[prev].id != last.person {
            return Err(QueueError::NothingToUndo);
        }

        self.decisions.pop();
        self.cursor = prev;
        Ok(last.person)
    }

    /// Ids whose most recent verdict is `liked`, ordered by the position of
    /// that decision in the log. The seam to a future mutual-match step.
    pub fn liked_profiles(&self) -> Vec<PersonId> {
        let mut latest: HashMap<PersonId, (usize, Verdict)> = HashMap::new();
        for (idx, decision) in self.decisions.iter().enumerate() {
            latest.insert(decision.person, (idx, decision.verdict));
        }

        let mut liked: Vec<(usize, PersonId)> = latest
            .into_iter()
            .filter(|(_, (_, verdict))| *verdict == Verdict::Liked)
            .map(|(person, (idx, _))| (idx, person))
            .collect();
        liked.sort_unstable_by_key(|(idx, _)| *idx);
        liked.into_iter().map(|(_, person)| person).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use std::sync::Arc;

    fn deck(count: u64) -> Vec<ProfileRef> {
        (1..=count)
            .map(|n| {
                Arc::new(Profile {
                    id: PersonId(n),
                    name: format!("Person {n}"),
                    origin: String::new(),
                    bio: String::new(),
                    stack: Vec::new(),
                })
            })
            .collect()
    }

    fn current_id(queue: &MatchQueue) -> PersonId {
        queue.current().expect("queue should not be empty").id
    }

    #[test]
    fn decide_advances_exactly_one_position() {
        let mut queue = MatchQueue::new(deck(3));
        assert_eq!(current_id(&queue), PersonId(1));

        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        assert_eq!(current_id(&queue), PersonId(2));
        assert_eq!(queue.cursor(), 1);

        queue.decide(PersonId(2), Verdict::Passed).unwrap();
        assert_eq!(current_id(&queue), PersonId(3));
        assert_eq!(queue.cursor(), 2);
    }

    #[test]
    fn stale_decision_leaves_cursor_and_log_unchanged() {
        let mut queue = MatchQueue::new(deck(3));

        let err = queue.decide(PersonId(2), Verdict::Liked).unwrap_err();
        assert_eq!(
            err,
            QueueError::StaleDecision {
                expected: PersonId(1),
                got: PersonId(2),
            }
        );
        assert_eq!(current_id(&queue), PersonId(1));
        assert!(queue.decisions().is_empty());
    }

    #[test]
    fn cursor_wraps_around_and_never_skips() {
        let mut queue = MatchQueue::new(deck(3));
        let expected_order = [1u64, 2, 3, 1, 2];

        for &id in &expected_order {
            assert_eq!(current_id(&queue), PersonId(id));
            queue.decide(PersonId(id), Verdict::Passed).unwrap();
        }

        // 5 decisions on a queue of 3: cursor = 5 mod 3
        assert_eq!(queue.cursor(), 2);
        assert_eq!(queue.decisions().len(), 5);
    }

    #[test]
    fn empty_queue_rejects_decisions() {
        let mut queue = MatchQueue::new(Vec::new());
        assert!(queue.current().is_none());
        assert_eq!(
            queue.decide(PersonId(1), Verdict::Liked),
            Err(QueueError::EmptyQueue)
        );
        assert_eq!(queue.undo_last(), Err(QueueError::NothingToUndo));
    }

    #[test]
    fn like_a_pass_b_wraps_back_to_a() {
        let mut queue = MatchQueue::new(deck(2));

        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        queue.decide(PersonId(2), Verdict::Passed).unwrap();

        assert_eq!(current_id(&queue), PersonId(1));
        assert_eq!(queue.liked_profiles(), vec![PersonId(1)]);
    }

    #[test]
    fn latest_verdict_per_profile_is_authoritative() {
        let mut queue = MatchQueue::new(deck(2));

        // First pass: like 1, pass 2. Second pass: pass 1, like 2.
        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        queue.decide(PersonId(2), Verdict::Passed).unwrap();
        queue.decide(PersonId(1), Verdict::Passed).unwrap();
        queue.decide(PersonId(2), Verdict::Liked).unwrap();

        assert_eq!(queue.liked_profiles(), vec![PersonId(2)]);
        assert_eq!(queue.decisions().len(), 4);
    }

    #[test]
    fn undo_steps_back_and_removes_the_entry() {
        let mut queue = MatchQueue::new(deck(2));

        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        assert_eq!(queue.undo_last(), Ok(PersonId(1)));
        assert_eq!(current_id(&queue), PersonId(1));
        assert!(queue.decisions().is_empty());

        assert_eq!(queue.undo_last(), Err(QueueError::NothingToUndo));
    }

    #[test]
    fn undo_chains_back_through_a_wrapped_pass() {
        let mut queue = MatchQueue::new(deck(2));

        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        queue.decide(PersonId(2), Verdict::Passed).unwrap();
        queue.decide(PersonId(1), Verdict::Passed).unwrap();

        assert_eq!(queue.undo_last(), Ok(PersonId(1)));
        assert_eq!(queue.undo_last(), Ok(PersonId(2)));
        assert_eq!(queue.undo_last(), Ok(PersonId(1)));
        assert_eq!(queue.undo_last(), Err(QueueError::NothingToUndo));
        assert_eq!(queue.cursor(), 0);
    }

    #[test]
    fn single_candidate_queue_cycles_on_itself() {
        let mut queue = MatchQueue::new(deck(1));

        queue.decide(PersonId(1), Verdict::Passed).unwrap();
        assert_eq!(current_id(&queue), PersonId(1));
        queue.decide(PersonId(1), Verdict::Liked).unwrap();
        assert_eq!(queue.liked_profiles(), vec![PersonId(1)]);
    }
}
