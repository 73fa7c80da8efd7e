use ticketflow_assistant::engine::{
    CATEGORIES_PROMPT, DESCRIPTIONS_PROMPT, DESCRIPTION_PROMPT, DONE_PROMPT, PURPOSE_PROMPT,
    SUMMARIES_PROMPT, TERMINAL_STEP, TITLES_PROMPT,
};
use ticketflow_assistant::{
    ChatRole, ChatSession, DialogueEngine, SuggestionProvider,
};

fn last_assistant(session: &ChatSession) -> &ticketflow_assistant::ChatMessage {
    session
        .messages
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::Assistant)
        .expect("no assistant message")
}

#[test]
fn test_step_zero_asks_for_purpose() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    let preview = engine.advance(&mut session, "improve login");

    assert_eq!(session.step, 1);
    assert_eq!(session.draft.purpose, "improve login");
    let reply = last_assistant(&session);
    assert_eq!(reply.content, PURPOSE_PROMPT);
    assert!(reply.suggestions.is_none());
    assert!(preview.title_suggestions.is_empty());
}

#[test]
fn test_step_one_suggests_titles() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    engine.advance(&mut session, "improve login");
    let preview = engine.advance(&mut session, "faster login");

    assert_eq!(session.step, 2);
    assert_eq!(session.draft.purpose, "faster login");
    let reply = last_assistant(&session);
    assert_eq!(reply.content, TITLES_PROMPT);
    assert_eq!(
        reply.suggestions.as_deref().unwrap(),
        [
            "Bug Fix Request",
            "Feature Enhancement",
            "Performance Issue",
            "User Experience Improvement"
        ]
    );
    // Nothing has been selected yet, so the preview stays empty
    assert!(preview.title_suggestions.is_empty());
    assert_eq!(preview.description, "");
    assert_eq!(preview.summary, "");
}

#[test]
fn test_full_walk_reaches_terminal_step() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    engine.advance(&mut session, "something is broken");
    engine.advance(&mut session, "users cannot log in");
    let after_title = engine.advance(&mut session, "Bug Fix Request");
    assert_eq!(last_assistant(&session).content, CATEGORIES_PROMPT);
    assert_eq!(after_title.title_suggestions, vec!["Bug Fix Request"]);

    engine.advance(&mut session, "Backend");
    assert_eq!(last_assistant(&session).content, DESCRIPTION_PROMPT);
    assert_eq!(session.draft.selected_category, "Backend");

    engine.advance(&mut session, "login breaks every morning");
    assert_eq!(last_assistant(&session).content, DESCRIPTIONS_PROMPT);
    // The rough description only feeds suggestions; it is not stored
    assert_eq!(session.draft.selected_description, "");

    let after_description = engine.advance(
        &mut session,
        "Fix login authentication issue affecting users in the mobile app during peak hours",
    );
    assert_eq!(last_assistant(&session).content, SUMMARIES_PROMPT);
    assert_eq!(
        after_description.description,
        "Fix login authentication issue affecting users in the mobile app during peak hours"
    );

    let final_preview = engine.advance(&mut session, "Short summary of the work");
    assert_eq!(session.step, TERMINAL_STEP);
    assert_eq!(last_assistant(&session).content, DONE_PROMPT);
    assert_eq!(final_preview.summary, "Short summary of the work");
    assert_eq!(final_preview.title_suggestions, vec!["Bug Fix Request"]);

    // 7 user messages and 7 assistant replies so far
    assert_eq!(session.messages.len(), 14);
}

#[test]
fn test_terminal_step_accepts_input_without_reply() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();
    for input in ["a", "b", "c", "d", "e", "f", "g"] {
        engine.advance(&mut session, input);
    }
    assert_eq!(session.step, TERMINAL_STEP);
    let transcript_len = session.messages.len();

    let preview = engine.advance(&mut session, "anything else?");

    assert_eq!(session.step, TERMINAL_STEP);
    // The user message is still recorded, but nothing answers it
    assert_eq!(session.messages.len(), transcript_len + 1);
    assert_eq!(session.messages.last().unwrap().content, "anything else?");
    assert_eq!(preview.summary, "g");
}

#[test]
fn test_empty_input_is_accepted_everywhere() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    for _ in 0..8 {
        engine.advance(&mut session, "");
    }

    assert_eq!(session.step, TERMINAL_STEP);
    assert_eq!(session.draft.purpose, "");
    assert_eq!(session.draft.selected_title, "");
}

#[test]
fn test_preview_mirrors_selections() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    engine.advance(&mut session, "purpose");
    engine.advance(&mut session, "purpose again");
    let preview = engine.advance(&mut session, "My Custom Title");

    // Typed titles work exactly like clicked suggestions
    assert_eq!(preview.title_suggestions, vec!["My Custom Title"]);
    assert_eq!(preview.description, "");
    assert_eq!(preview.summary, "");
}

#[test]
fn test_custom_provider_is_used() {
    struct CannedProvider;

    impl SuggestionProvider for CannedProvider {
        fn titles(&self, _purpose: &str) -> Vec<String> {
            vec!["Only Title".to_string()]
        }
        fn categories(&self, _title: &str) -> Vec<String> {
            vec!["Only Category".to_string()]
        }
        fn descriptions(&self, _description: &str) -> Vec<String> {
            vec!["Only Description".to_string()]
        }
        fn summaries(&self, _description: &str) -> Vec<String> {
            vec!["Only Summary".to_string()]
        }
    }

    let engine = DialogueEngine::with_provider(CannedProvider);
    let mut session = ChatSession::new();

    engine.advance(&mut session, "first");
    engine.advance(&mut session, "second");

    let reply = session.messages.last().unwrap();
    assert_eq!(reply.suggestions.as_deref().unwrap(), ["Only Title"]);
}

#[test]
fn test_session_round_trips_through_json() {
    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();
    engine.advance(&mut session, "improve login");
    engine.advance(&mut session, "faster login");

    let json = serde_json::to_string(&session).unwrap();
    let mut restored: ChatSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.step, 2);
    assert_eq!(restored.draft.purpose, "faster login");

    // A restored session keeps advancing from where it left off
    engine.advance(&mut restored, "Bug Fix Request");
    assert_eq!(restored.step, 3);
    assert_eq!(restored.draft.selected_title, "Bug Fix Request");
}
