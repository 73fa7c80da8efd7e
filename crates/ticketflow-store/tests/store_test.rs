use ticketflow_store::{
    NewTicket, PageRequest, SqliteStore, StoreError, TicketFilter, TicketPatch, TicketStore,
};

async fn seeded_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.seed_demo_data().await.unwrap();
    store
}

fn category_id(store_categories: &[ticketflow_store::Category], name: &str) -> String {
    store_categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("missing category {}", name))
        .id
        .clone()
}

#[tokio::test]
async fn test_list_respects_limit_and_total_pages() {
    let store = seeded_store().await;

    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 3))
        .await
        .unwrap();

    assert_eq!(page.tickets.len(), 3);
    assert_eq!(page.total, 10);
    assert_eq!(page.total_pages, 4); // ceil(10 / 3)
}

#[tokio::test]
async fn test_list_empty_store_has_zero_pages() {
    let store = SqliteStore::open_in_memory().await.unwrap();

    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::default())
        .await
        .unwrap();

    assert!(page.tickets.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_list_last_page_is_partial() {
    let store = seeded_store().await;

    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::new(4, 3))
        .await
        .unwrap();

    assert_eq!(page.tickets.len(), 1);
    assert_eq!(page.total, 10);
}

#[tokio::test]
async fn test_list_is_newest_first_with_stable_ties() {
    let store = seeded_store().await;

    // Seed inserts all tickets at the same instant, so the listing falls
    // back to insertion order within the tie, newest created_at first.
    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 10))
        .await
        .unwrap();

    let titles: Vec<&str> = page.tickets.iter().map(|t| t.ticket.title.as_str()).collect();
    assert_eq!(titles[0], "Bug Report: Login Issue");
    assert_eq!(titles[9], "User Permission Error");

    for pair in page.tickets.windows(2) {
        assert!(pair[0].ticket.created_at >= pair[1].ticket.created_at);
    }
}

#[tokio::test]
async fn test_category_filter_all_equals_no_filter() {
    let store = seeded_store().await;

    let unfiltered = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 50))
        .await
        .unwrap();
    let all = store
        .list_tickets(
            TicketFilter {
                category: Some("All".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();
    let empty = store
        .list_tickets(
            TicketFilter {
                category: Some(String::new()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();

    assert_eq!(all.total, unfiltered.total);
    assert_eq!(empty.total, unfiltered.total);
}

#[tokio::test]
async fn test_category_filter_matches_name_exactly() {
    let store = seeded_store().await;

    let page = store
        .list_tickets(
            TicketFilter {
                category: Some("Critical".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page.tickets.iter().all(|t| t.category.name == "Critical"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = seeded_store().await;

    let page = store
        .list_tickets(
            TicketFilter {
                search: Some("LOGIN".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();

    assert!(page.total >= 1);
    assert!(page
        .tickets
        .iter()
        .any(|t| t.ticket.title == "Bug Report: Login Issue"));
}

#[tokio::test]
async fn test_search_matches_description_and_summary() {
    let store = seeded_store().await;

    // "dark mode" appears in the Dark Mode ticket's description
    let by_description = store
        .list_tickets(
            TicketFilter {
                search: Some("dark mode".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();
    assert!(by_description.total >= 1);

    // "disruption" appears only in the email ticket's summary
    let by_summary = store
        .list_tickets(
            TicketFilter {
                search: Some("disruption".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await
        .unwrap();
    assert_eq!(by_summary.total, 1);
    assert_eq!(by_summary.tickets[0].ticket.title, "Email Notification Failure");
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let store = seeded_store().await;
    let categories = store.list_categories().await.unwrap();
    let critical = category_id(&categories, "Critical");
    let user_id = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets[0]
        .ticket
        .user_id
        .clone();

    let missing_title = store
        .create_ticket(NewTicket {
            title: String::new(),
            description: "desc".to_string(),
            summary: None,
            category_id: critical.clone(),
            user_id: user_id.clone(),
        })
        .await;
    assert!(matches!(missing_title, Err(StoreError::Validation(_))));

    let missing_description = store
        .create_ticket(NewTicket {
            title: "title".to_string(),
            description: String::new(),
            summary: None,
            category_id: critical,
            user_id,
        })
        .await;
    assert!(matches!(missing_description, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn test_create_rejects_unknown_references() {
    let store = seeded_store().await;
    let categories = store.list_categories().await.unwrap();
    let user_id = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets[0]
        .ticket
        .user_id
        .clone();

    let bad_category = store
        .create_ticket(NewTicket {
            title: "title".to_string(),
            description: "desc".to_string(),
            summary: None,
            category_id: "no-such-category".to_string(),
            user_id: user_id.clone(),
        })
        .await;
    assert!(matches!(bad_category, Err(StoreError::CategoryNotFound(_))));

    let bad_user = store
        .create_ticket(NewTicket {
            title: "title".to_string(),
            description: "desc".to_string(),
            summary: None,
            category_id: category_id(&categories, "Support"),
            user_id: "no-such-user".to_string(),
        })
        .await;
    assert!(matches!(bad_user, Err(StoreError::UserNotFound(_))));
}

#[tokio::test]
async fn test_create_returns_enriched_ticket() {
    let store = seeded_store().await;
    let categories = store.list_categories().await.unwrap();
    let user_id = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets[0]
        .ticket
        .user_id
        .clone();

    let created = store
        .create_ticket(NewTicket {
            title: "Printer on fire".to_string(),
            description: "The office printer caught fire again".to_string(),
            summary: Some("Printer incident".to_string()),
            category_id: category_id(&categories, "Support"),
            user_id,
        })
        .await
        .unwrap();

    assert_eq!(created.category.name, "Support");
    assert_eq!(created.user.username, "admin");
    assert!(!created.ticket.id.is_empty());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let store = seeded_store().await;
    let categories = store.list_categories().await.unwrap();
    let user_id = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets[0]
        .ticket
        .user_id
        .clone();

    let created = store
        .create_ticket(NewTicket {
            title: "Round trip".to_string(),
            description: "Created then fetched".to_string(),
            summary: None,
            category_id: category_id(&categories, "Performance"),
            user_id,
        })
        .await
        .unwrap();

    let fetched = store.get_ticket(&created.ticket.id).await.unwrap();
    assert_eq!(fetched.ticket.id, created.ticket.id);
    assert_eq!(fetched.ticket.title, created.ticket.title);
    assert_eq!(fetched.ticket.description, created.ticket.description);
    assert_eq!(fetched.ticket.summary, created.ticket.summary);
    assert_eq!(fetched.ticket.category_id, created.ticket.category_id);
    assert_eq!(fetched.ticket.user_id, created.ticket.user_id);
    assert_eq!(fetched.category.name, "Performance");
    assert_eq!(fetched.user.username, created.user.username);
}

#[tokio::test]
async fn test_update_ignores_empty_title_but_clears_summary() {
    let store = seeded_store().await;
    let ticket = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets
        .remove(0);

    let updated = store
        .update_ticket(
            &ticket.ticket.id,
            TicketPatch {
                title: Some(String::new()),
                summary: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.ticket.title, ticket.ticket.title);
    assert_eq!(updated.ticket.summary, Some(String::new()));
}

#[tokio::test]
async fn test_update_applies_supplied_fields() {
    let store = seeded_store().await;
    let categories = store.list_categories().await.unwrap();
    let ticket = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets
        .remove(0);

    let updated = store
        .update_ticket(
            &ticket.ticket.id,
            TicketPatch {
                title: Some("Retitled".to_string()),
                category_id: Some(category_id(&categories, "Campaign")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.ticket.title, "Retitled");
    assert_eq!(updated.category.name, "Campaign");
    // Untouched fields keep their values
    assert_eq!(updated.ticket.description, ticket.ticket.description);
    assert!(updated.ticket.updated_at >= ticket.ticket.updated_at);
}

#[tokio::test]
async fn test_update_unknown_category_fails() {
    let store = seeded_store().await;
    let ticket = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets
        .remove(0);

    let result = store
        .update_ticket(
            &ticket.ticket.id,
            TicketPatch {
                category_id: Some("no-such-category".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(StoreError::CategoryNotFound(_))));
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let store = seeded_store().await;

    let update = store
        .update_ticket("missing", TicketPatch::default())
        .await;
    assert!(matches!(update, Err(StoreError::TicketNotFound(_))));

    let delete = store.delete_ticket("missing").await;
    assert!(matches!(delete, Err(StoreError::TicketNotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_ticket() {
    let store = seeded_store().await;
    let ticket = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 1))
        .await
        .unwrap()
        .tickets
        .remove(0);

    store.delete_ticket(&ticket.ticket.id).await.unwrap();

    let fetched = store.get_ticket(&ticket.ticket.id).await;
    assert!(matches!(fetched, Err(StoreError::TicketNotFound(_))));

    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 50))
        .await
        .unwrap();
    assert_eq!(page.total, 9);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = seeded_store().await;
    store.seed_demo_data().await.unwrap();

    let categories = store.list_categories().await.unwrap();
    assert_eq!(categories.len(), 9);

    let page = store
        .list_tickets(TicketFilter::default(), PageRequest::new(1, 50))
        .await
        .unwrap();
    assert_eq!(page.total, 10);
}

#[tokio::test]
async fn test_list_categories_is_name_ordered() {
    let store = seeded_store().await;

    let categories = store.list_categories().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
