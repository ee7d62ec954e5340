//! Candidate-list state and submit outcome classification for the
//! shipping-mark negotiation. Pure logic, exercised by the selection screen.

use contracts::domain::signup::{
    GenerateMarksResponse, SignupData, SignupDraft, SignupWithMarkResponse,
};

pub const GENERATION_FAILED: &str = "Failed to generate shipping marks. Please try again.";
pub const SIGNUP_FAILED: &str = "An error occurred during signup";

/// Entry guard for the selection screen: without a draft there is nothing to
/// negotiate, so the visitor is sent back to the form route.
pub fn entry_guard(draft: Option<SignupDraft>) -> Result<SignupDraft, &'static str> {
    draft.ok_or("/signup")
}

/// The candidate marks currently offered to the user, with at most one
/// selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkSelection {
    pub suggestions: Vec<String>,
    pub selected: Option<String>,
}

impl MarkSelection {
    /// Fold a generation result into the state.
    ///
    /// Success replaces the candidate list wholesale and auto-selects the
    /// first candidate; failure leaves the previous list (and selection)
    /// untouched and yields the message to surface.
    pub fn apply_generation(
        &mut self,
        result: Result<GenerateMarksResponse, String>,
    ) -> Result<(), String> {
        match result {
            Ok(resp) if resp.success => {
                self.selected = resp.suggestions.first().cloned();
                self.suggestions = resp.suggestions;
                Ok(())
            }
            Ok(resp) => Err(resp.message.unwrap_or_else(|| GENERATION_FAILED.to_string())),
            Err(_) => Err(GENERATION_FAILED.to_string()),
        }
    }

    pub fn select(&mut self, mark: &str) {
        if self.suggestions.iter().any(|s| s == mark) {
            self.selected = Some(mark.to_string());
        }
    }

    /// Submission is blocked while nothing is selected.
    pub fn selection_required(&self) -> bool {
        self.selected.is_none()
    }
}

/// What the selection screen does with a signup response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Account created: install the session and leave the flow.
    Completed(SignupData),
    /// The chosen mark was taken concurrently; regenerate candidates without
    /// further user action.
    RegenerateSuggestions,
    /// Terminal for this attempt: show the message, stay on the current list.
    Failed(String),
}

pub fn submit_outcome(response: SignupWithMarkResponse) -> SubmitOutcome {
    if response.success {
        if let Some(data) = response.data {
            return SubmitOutcome::Completed(data);
        }
    } else if response.is_mark_taken() {
        return SubmitOutcome::RegenerateSuggestions;
    }
    SubmitOutcome::Failed(
        response
            .message
            .unwrap_or_else(|| SIGNUP_FAILED.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(suggestions: &[&str]) -> GenerateMarksResponse {
        GenerateMarksResponse {
            success: true,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            message: None,
        }
    }

    #[test]
    fn missing_draft_redirects_to_the_form() {
        assert_eq!(entry_guard(None), Err("/signup"));

        let draft = SignupDraft {
            first_name: "Ama".to_string(),
            ..SignupDraft::default()
        };
        assert_eq!(entry_guard(Some(draft.clone())), Ok(draft));
    }

    #[test]
    fn first_candidate_is_auto_selected() {
        let mut state = MarkSelection::default();
        state
            .apply_generation(Ok(generation(&["JOHN1", "JOHN2"])))
            .unwrap();
        assert_eq!(state.selected.as_deref(), Some("JOHN1"));
        assert_eq!(state.suggestions, ["JOHN1", "JOHN2"]);
    }

    #[test]
    fn regeneration_replaces_list_wholesale() {
        let mut state = MarkSelection::default();
        state
            .apply_generation(Ok(generation(&["JOHN1", "JOHN2"])))
            .unwrap();
        state.select("JOHN2");

        state
            .apply_generation(Ok(generation(&["AMA1", "AMA2", "AMA3"])))
            .unwrap();
        assert_eq!(state.suggestions, ["AMA1", "AMA2", "AMA3"]);
        assert_eq!(state.selected.as_deref(), Some("AMA1"));
    }

    #[test]
    fn failed_generation_leaves_previous_list_untouched() {
        let mut state = MarkSelection::default();
        state
            .apply_generation(Ok(generation(&["JOHN1", "JOHN2"])))
            .unwrap();
        state.select("JOHN2");

        let err = state
            .apply_generation(Err("network down".to_string()))
            .unwrap_err();
        assert_eq!(err, GENERATION_FAILED);
        assert_eq!(state.suggestions, ["JOHN1", "JOHN2"]);
        assert_eq!(state.selected.as_deref(), Some("JOHN2"));
    }

    #[test]
    fn unsuccessful_generation_surfaces_server_message() {
        let mut state = MarkSelection::default();
        let err = state
            .apply_generation(Ok(GenerateMarksResponse {
                success: false,
                suggestions: vec![],
                message: Some("generator unavailable".to_string()),
            }))
            .unwrap_err();
        assert_eq!(err, "generator unavailable");
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn empty_state_blocks_submission() {
        let state = MarkSelection::default();
        assert!(state.selection_required());
    }

    #[test]
    fn selecting_an_unknown_mark_is_ignored() {
        let mut state = MarkSelection::default();
        state
            .apply_generation(Ok(generation(&["JOHN1"])))
            .unwrap();
        state.select("FORGED");
        assert_eq!(state.selected.as_deref(), Some("JOHN1"));
    }

    #[test]
    fn mark_taken_triggers_regeneration() {
        let response: SignupWithMarkResponse =
            serde_json::from_str(r#"{"success": false, "error": "shipping_mark_taken"}"#).unwrap();
        assert_eq!(submit_outcome(response), SubmitOutcome::RegenerateSuggestions);
    }

    #[test]
    fn other_failures_are_terminal_with_message() {
        let response: SignupWithMarkResponse =
            serde_json::from_str(r#"{"success": false, "message": "phone already registered"}"#)
                .unwrap();
        assert_eq!(
            submit_outcome(response),
            SubmitOutcome::Failed("phone already registered".to_string())
        );

        let bare: SignupWithMarkResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            submit_outcome(bare),
            SubmitOutcome::Failed(SIGNUP_FAILED.to_string())
        );
    }

    #[test]
    fn success_without_data_is_not_treated_as_completed() {
        let response: SignupWithMarkResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(submit_outcome(response), SubmitOutcome::Failed(_)));
    }
}
