//! State for the alias lookup widget.
//!
//! Server data (the alias list) is fetched via the API and never modified
//! locally; the only UI-owned state is the pair of text buffers. Async
//! results land in a shared `ResponseSlot` that the UI drains each frame.

use std::sync::{Arc, Mutex};

/// Result of one alias lookup, as posted by a request future.
pub type LookupResult = Result<Vec<String>, String>;

/// Caption shown above a successfully fetched alias list.
pub const SUCCESS_CAPTION: &str = "These aliases can be used to ping you:";

/// Caption shown above a failed lookup.
pub const ERROR_CAPTION: &str = "An error has occurred:";

/// Live edit buffers for the two input fields.
#[derive(Default)]
pub struct LookupForm {
    pub username: String,
    pub nickname: String,
}

impl LookupForm {
    /// Usernames shorter than this never leave the client.
    pub const MIN_USERNAME_LEN: usize = 3;

    /// Whether triggering the lookup would actually send a request.
    /// Below the minimum length the trigger is a silent no-op.
    pub fn is_submittable(&self) -> bool {
        self.username.chars().count() >= Self::MIN_USERNAME_LEN
    }
}

/// What the output region currently shows. Each completed request replaces
/// the previous answer wholesale; success and error are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Nothing fetched yet; the output region stays empty.
    None,
    /// Alias list in backend order, rendered verbatim.
    Aliases(Vec<String>),
    /// Stringified transport or decode failure.
    Error(String),
}

impl Answer {
    pub fn from_result(result: LookupResult) -> Self {
        match result {
            Ok(aliases) => Self::Aliases(aliases),
            Err(e) => Self::Error(e),
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Aliases(_) => Some(SUCCESS_CAPTION),
            Self::Error(_) => Some(ERROR_CAPTION),
        }
    }

    /// Body text for the output region. Aliases are joined with `", "` in
    /// the order received; an empty list renders as an empty string.
    pub fn body(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Aliases(aliases) => aliases.join(", "),
            Self::Error(e) => e.clone(),
        }
    }
}

/// Single slot shared between the UI thread and every spawned request.
///
/// Each completing request posts into the slot, overwriting whatever an
/// earlier request left there. With overlapping requests the displayed
/// answer is whichever resolved last, not whichever was triggered first.
#[derive(Clone, Default)]
pub struct ResponseSlot {
    inner: Arc<Mutex<Option<LookupResult>>>,
}

impl ResponseSlot {
    pub fn post(&self, result: LookupResult) {
        *self.inner.lock().unwrap() = Some(result);
    }

    /// Take the most recently posted result, if any. Non-blocking so a
    /// request completing mid-frame just waits for the next drain.
    pub fn take(&self) -> Option<LookupResult> {
        self.inner
            .try_lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_usernames_are_not_submittable() {
        for username in ["", "a", "ab"] {
            let form = LookupForm {
                username: username.to_string(),
                nickname: String::new(),
            };
            assert!(!form.is_submittable(), "{username:?} should be rejected");
        }
    }

    #[test]
    fn test_three_chars_is_enough() {
        let form = LookupForm {
            username: "abc".to_string(),
            nickname: String::new(),
        };
        assert!(form.is_submittable());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // two characters, six bytes
        let form = LookupForm {
            username: "ää".to_string(),
            nickname: String::new(),
        };
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_aliases_render_in_backend_order() {
        let answer = Answer::from_result(Ok(vec![
            "alice#1".to_string(),
            "alice_2".to_string(),
            "ALICE".to_string(),
        ]));
        assert_eq!(answer.title(), Some(SUCCESS_CAPTION));
        assert_eq!(answer.body(), "alice#1, alice_2, ALICE");
    }

    #[test]
    fn test_empty_alias_list_renders_empty_body() {
        let answer = Answer::from_result(Ok(vec![]));
        assert_eq!(answer.title(), Some(SUCCESS_CAPTION));
        assert_eq!(answer.body(), "");
    }

    #[test]
    fn test_failure_renders_error_caption_and_message() {
        let answer = Answer::from_result(Err("error decoding response body".to_string()));
        assert_eq!(answer.title(), Some(ERROR_CAPTION));
        assert_eq!(answer.body(), "error decoding response body");
    }

    #[test]
    fn test_no_answer_renders_nothing() {
        assert_eq!(Answer::None.title(), None);
        assert_eq!(Answer::None.body(), "");
    }

    #[test]
    fn test_slot_keeps_last_posted_result() {
        let slot = ResponseSlot::default();
        slot.post(Ok(vec!["first".to_string()]));
        slot.post(Ok(vec!["second".to_string()]));
        assert_eq!(slot.take(), Some(Ok(vec!["second".to_string()])));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_empty_slot_yields_nothing() {
        let slot = ResponseSlot::default();
        assert_eq!(slot.take(), None);
    }
}
