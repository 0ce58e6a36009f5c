//! Stateless read-side functions over the in-memory sequence.
//!
//! Every lookup is a linear scan; results keep insertion order.

use chrono::Local;
use std::collections::BTreeMap;

use crate::domain::{User, UserPage, UserStats};

/// Case-insensitive substring match on username, email, full name or phone.
pub fn matches_keyword(user: &User, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(user.username.as_str())
        || hit(user.email.as_str())
        || user.full_name.as_deref().is_some_and(hit)
        || user.phone.as_deref().is_some_and(hit)
}

/// All users matching `keyword`; an empty keyword matches everything.
pub fn filter_by_keyword<'a>(users: &'a [User], keyword: &str) -> Vec<&'a User> {
    if keyword.is_empty() {
        return users.iter().collect();
    }
    users.iter().filter(|u| matches_keyword(u, keyword)).collect()
}

/// Optional keyword filter followed by offset/limit slicing.
pub fn paginate(users: &[User], skip: usize, limit: usize, search: Option<&str>) -> UserPage {
    let filtered = filter_by_keyword(users, search.unwrap_or_default());
    let total = filtered.len();
    let page = filtered
        .into_iter()
        .skip(skip)
        .take(limit)
        .cloned()
        .collect();

    UserPage {
        total,
        skip,
        limit,
        users: page,
    }
}

pub fn find_by_id(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

pub fn active_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.is_active).cloned().collect()
}

pub fn compute_stats(users: &[User]) -> UserStats {
    let total_users = users.len();
    let active_users = users.iter().filter(|u| u.is_active).count();

    let mut email_domains = BTreeMap::new();
    for user in users {
        *email_domains
            .entry(user.email_domain().to_string())
            .or_insert(0) += 1;
    }

    UserStats {
        total_users,
        active_users,
        inactive_users: total_users - active_users,
        email_domains,
        generated_at: Local::now(),
    }
}
