//! Demo users loaded at startup unless seeding is disabled.

use chrono::{TimeZone, Utc};

use crate::models::{Role, User};

/// The five demo users, in store order.
pub fn demo_users() -> Vec<User> {
    [
        ("1", "john_doe", "john@example.com", Role::User),
        ("2", "jane_smith", "jane@example.com", Role::Admin),
        ("3", "mike_wilson", "mike@example.com", Role::User),
        ("4", "sarah_jones", "sarah@example.com", Role::Admin),
        ("5", "alex_brown", "alex@example.com", Role::User),
    ]
    .into_iter()
    .zip(10..)
    .map(|((id, username, email, role), hour)| User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        role,
        created_at: Utc
            .with_ymd_and_hms(2025, 8, 29, hour, 0, 0)
            .single()
            .unwrap_or_default(),
    })
    .collect()
}
