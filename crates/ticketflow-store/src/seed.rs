//! Idempotent demo data: categories and users are upserted on their
//! unique keys, sample tickets are only inserted into an empty table.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::store::SqliteStore;

const CATEGORIES: &[(&str, &str)] = &[
    ("Hotel", "Hotel-related tickets"),
    ("Restaurant", "Restaurant-related tickets"),
    ("Campaign", "Campaign-related tickets"),
    ("Critical", "Critical issues requiring immediate attention"),
    ("Feature Request", "New feature requests"),
    ("Performance", "Performance-related issues"),
    ("Security", "Security-related issues"),
    ("UI/UX", "User interface and experience issues"),
    ("Support", "General support requests"),
];

const USERS: &[&str] = &["admin", "user1", "user2"];

struct SampleTicket {
    title: &'static str,
    description: &'static str,
    summary: &'static str,
    category: &'static str,
    username: &'static str,
}

const SAMPLE_TICKETS: &[SampleTicket] = &[
    SampleTicket {
        title: "Bug Report: Login Issue",
        description: "Users are unable to log in to the system after entering correct credentials. This issue affects all user types and occurs across different browsers. The login form accepts the credentials but fails to authenticate properly.",
        summary: "Critical login functionality broken for all users",
        category: "Critical",
        username: "admin",
    },
    SampleTicket {
        title: "Feature Request: Dark Mode",
        description: "Add dark mode theme option for better user experience in low-light environments. This should include a toggle in the user settings and remember the user's preference across sessions.",
        summary: "Request for dark theme implementation",
        category: "Feature Request",
        username: "user1",
    },
    SampleTicket {
        title: "Performance Issue: Slow Loading",
        description: "Dashboard takes more than 10 seconds to load on mobile devices. The issue is particularly noticeable on slower network connections and older devices. Initial page load and subsequent navigation are both affected.",
        summary: "Mobile dashboard performance degradation",
        category: "Performance",
        username: "user2",
    },
    SampleTicket {
        title: "Security Vulnerability: XSS",
        description: "Cross-site scripting vulnerability found in comment section. Users can inject malicious scripts through the comment form. This poses a significant security risk and needs immediate attention.",
        summary: "Critical security issue requiring immediate attention",
        category: "Security",
        username: "admin",
    },
    SampleTicket {
        title: "UI Bug: Button Alignment",
        description: "Submit button is misaligned on the contact form page. The button appears to be shifted to the right and doesn't align properly with the form fields. This affects the visual consistency of the interface.",
        summary: "Minor UI alignment issue",
        category: "UI/UX",
        username: "user1",
    },
    SampleTicket {
        title: "Database Connection Error",
        description: "Application cannot connect to the database server. This is causing complete system downtime and preventing all database operations. Error logs indicate connection timeout issues.",
        summary: "Database connectivity issue affecting all operations",
        category: "Critical",
        username: "user2",
    },
    SampleTicket {
        title: "Email Notification Failure",
        description: "Email notifications are not being sent to users. The email service appears to be down or misconfigured. Users are not receiving important system notifications and updates.",
        summary: "Email service disruption",
        category: "Support",
        username: "admin",
    },
    SampleTicket {
        title: "Mobile Responsiveness Issue",
        description: "Website layout breaks on mobile devices with screen width less than 768px. Elements are overlapping, text is unreadable, and navigation becomes unusable on smaller screens.",
        summary: "Mobile responsive design problem",
        category: "UI/UX",
        username: "user1",
    },
    SampleTicket {
        title: "API Rate Limiting",
        description: "API endpoints are hitting rate limits too frequently. This is causing intermittent failures for users making multiple requests. The current rate limiting configuration appears to be too restrictive.",
        summary: "API performance optimization needed",
        category: "Performance",
        username: "user2",
    },
    SampleTicket {
        title: "User Permission Error",
        description: "Users cannot access features they should have permission for. The permission system is incorrectly denying access to authorized users. This affects user productivity and system usability.",
        summary: "Permission system malfunction",
        category: "Security",
        username: "admin",
    },
];

impl SqliteStore {
    /// Seed reference data and sample tickets. Safe to run on every start.
    pub async fn seed_demo_data(&self) -> Result<()> {
        self.with_conn(|conn| seed_demo_data_blocking(conn)).await
    }
}

fn seed_demo_data_blocking(conn: &mut Connection) -> Result<()> {
    for (name, description) in CATEGORIES {
        conn.execute(
            "INSERT OR IGNORE INTO categories (id, name, description) VALUES (?1, ?2, ?3)",
            params![Uuid::new_v4().to_string(), name, description],
        )?;
    }

    for username in USERS {
        conn.execute(
            "INSERT OR IGNORE INTO users (id, username) VALUES (?1, ?2)",
            params![Uuid::new_v4().to_string(), username],
        )?;
    }

    let ticket_count: i64 = conn.query_row("SELECT COUNT(*) FROM tickets", [], |row| row.get(0))?;
    if ticket_count > 0 {
        info!("Skipping sample tickets, table already populated");
        return Ok(());
    }

    let now = Utc::now();
    for sample in SAMPLE_TICKETS {
        let category_id = lookup_category(conn, sample.category)?;
        let user_id = lookup_user(conn, sample.username)?;
        conn.execute(
            "INSERT INTO tickets (id, title, description, summary, category_id, user_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                Uuid::new_v4().to_string(),
                sample.title,
                sample.description,
                sample.summary,
                category_id,
                user_id,
                now,
                now
            ],
        )?;
    }

    info!(
        categories = CATEGORIES.len(),
        users = USERS.len(),
        tickets = SAMPLE_TICKETS.len(),
        "Demo data seeded"
    );
    Ok(())
}

fn lookup_category(conn: &Connection, name: &str) -> Result<String> {
    conn.query_row("SELECT id FROM categories WHERE name = ?1", [name], |row| row.get(0))
        .optional()?
        .ok_or_else(|| StoreError::CategoryNotFound(name.to_string()))
}

fn lookup_user(conn: &Connection, username: &str) -> Result<String> {
    conn.query_row("SELECT id FROM users WHERE username = ?1", [username], |row| row.get(0))
        .optional()?
        .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
}
