//! Guided ticket drafting example
//!
//! Walks the assistant dialogue end to end, then files the drafted
//! ticket into an in-memory store.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example guided_draft
//! ```

use ticketflow::prelude::*;
use ticketflow::related_categories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🎫 TicketFlow Guided Draft Example\n");

    let engine = DialogueEngine::new();
    let mut session = ChatSession::new();

    let inputs = [
        "our login page keeps failing",
        "make login reliable again",
        "Bug Fix Request",
        "Backend",
        "login fails for everyone since the last deploy",
        "Fix login authentication issue affecting users in the mobile app during peak hours",
        "This ticket addresses a critical authentication issue in the mobile app that affects user experience during peak usage hours.",
    ];

    for input in inputs {
        println!("> {}", input);
        engine.advance(&mut session, input);
        let reply = session.messages.last().unwrap();
        println!("  {}", reply.content);
        if let Some(suggestions) = &reply.suggestions {
            for suggestion in suggestions {
                println!("    - {}", suggestion);
            }
        }
    }

    let preview = session.preview();
    println!("\n📋 Draft preview");
    println!("  title:       {:?}", preview.title_suggestions);
    println!("  description: {}", preview.description);
    println!("  summary:     {}", preview.summary);
    println!("  related:     {:?}", related_categories(&session.draft.selected_title));

    // File the draft as a real ticket
    let store = SqliteStore::open_in_memory().await?;
    store.seed_demo_data().await?;

    let categories = store.list_categories().await?;
    let category = categories
        .iter()
        .find(|c| c.name == "Critical")
        .expect("seeded category");
    let author = store
        .list_tickets(TicketFilter::default(), PageRequest::default())
        .await?
        .tickets
        .remove(0)
        .ticket
        .user_id;

    let ticket = store
        .create_ticket(NewTicket {
            title: session.draft.selected_title.clone(),
            description: preview.description.clone(),
            summary: Some(preview.summary.clone()),
            category_id: category.id.clone(),
            user_id: author,
        })
        .await?;

    println!("\n✅ Filed ticket {} in {}", ticket.ticket.id, ticket.category.name);

    Ok(())
}
