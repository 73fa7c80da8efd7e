use tracing::debug;

use crate::provider::{StaticSuggestions, SuggestionProvider};
use crate::session::{ChatMessage, ChatSession, TicketPreview};

pub const PURPOSE_PROMPT: &str = "What is the purpose of this ticket?";
pub const TITLES_PROMPT: &str = "Based on your purpose, here are 4 suggested ticket titles:";
pub const CATEGORIES_PROMPT: &str = "Great choice! Here are 4 suggested categories:";
pub const DESCRIPTION_PROMPT: &str =
    "Please provide a brief description (when, whom, where, what, etc.)";
pub const DESCRIPTIONS_PROMPT: &str = "Here are 4 enhanced descriptions based on your input:";
pub const SUMMARIES_PROMPT: &str = "Based on your selections, here are 4 summary options:";
pub const DONE_PROMPT: &str =
    "Perfect! Your ticket has been created successfully. Here's a summary of what we've accomplished:";

/// The step after which the dialogue stops transitioning.
pub const TERMINAL_STEP: u8 = 7;

/// Strict linear dialogue over eight steps. Each user message advances the
/// session exactly one step; the flow never branches or goes backward, and
/// any input string is accepted at any step.
pub struct DialogueEngine<P: SuggestionProvider = StaticSuggestions> {
    provider: P,
}

impl DialogueEngine<StaticSuggestions> {
    pub fn new() -> Self {
        Self {
            provider: StaticSuggestions,
        }
    }
}

impl Default for DialogueEngine<StaticSuggestions> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SuggestionProvider> DialogueEngine<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Consume one user utterance: record it, run the current step's
    /// handler, record the reply, and return the recomputed preview.
    pub fn advance(&self, session: &mut ChatSession, input: &str) -> TicketPreview {
        session.messages.push(ChatMessage::user(input));

        match session.step {
            0 => {
                session.draft.purpose = input.to_string();
                session.messages.push(ChatMessage::assistant(PURPOSE_PROMPT));
                session.step = 1;
            }
            1 => {
                session.draft.purpose = input.to_string();
                let suggestions = self.provider.titles(&session.draft.purpose);
                session
                    .messages
                    .push(ChatMessage::assistant_with_suggestions(TITLES_PROMPT, suggestions));
                session.step = 2;
            }
            2 => {
                session.draft.selected_title = input.to_string();
                let suggestions = self.provider.categories(&session.draft.selected_title);
                session.messages.push(ChatMessage::assistant_with_suggestions(
                    CATEGORIES_PROMPT,
                    suggestions,
                ));
                session.step = 3;
            }
            3 => {
                session.draft.selected_category = input.to_string();
                session.messages.push(ChatMessage::assistant(DESCRIPTION_PROMPT));
                session.step = 4;
            }
            4 => {
                // The rough description is not kept; only the enhanced
                // variant chosen at the next step lands in the draft.
                let suggestions = self.provider.descriptions(input);
                session.messages.push(ChatMessage::assistant_with_suggestions(
                    DESCRIPTIONS_PROMPT,
                    suggestions,
                ));
                session.step = 5;
            }
            5 => {
                session.draft.selected_description = input.to_string();
                let suggestions = self.provider.summaries(&session.draft.selected_description);
                session.messages.push(ChatMessage::assistant_with_suggestions(
                    SUMMARIES_PROMPT,
                    suggestions,
                ));
                session.step = 6;
            }
            6 => {
                session.draft.summary = input.to_string();
                session.messages.push(ChatMessage::assistant(DONE_PROMPT));
                session.step = TERMINAL_STEP;
            }
            // Terminal: the transcript still records the message, but
            // there is no reply and no transition.
            _ => {}
        }

        debug!(step = session.step, "Dialogue advanced");
        session.preview()
    }
}
