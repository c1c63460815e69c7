// Event is the sole domain entity: an (id, title) pair.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
}

/// Next id to assign: one past the highest id currently stored, `1` when the
/// store is empty. Recomputed per creation, so ids freed by deletions can be
/// handed out again.
pub fn next_event_id(events: &[Event]) -> u64 {
    events.iter().map(|event| event.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod event_tests {
    use super::*;
    use rstest::rstest;

    fn event(id: u64, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
        }
    }

    #[rstest]
    fn it_should_assign_one_for_an_empty_store() {
        assert_eq!(next_event_id(&[]), 1);
    }

    #[rstest]
    fn it_should_assign_one_past_the_highest_id() {
        let events = vec![event(1, "Tech Meetup"), event(2, "Python Workshop")];
        assert_eq!(next_event_id(&events), 3);
    }

    #[rstest]
    fn it_should_skip_over_gaps_left_by_deletions() {
        let events = vec![event(1, "Tech Meetup"), event(3, "Rust Meetup")];
        assert_eq!(next_event_id(&events), 4);
    }

    #[rstest]
    fn it_should_reuse_the_highest_id_after_it_was_deleted() {
        // Ids 1 and 2 existed, 2 was removed. The next assignment is 2 again.
        let events = vec![event(1, "Tech Meetup")];
        assert_eq!(next_event_id(&events), 2);
    }
}
