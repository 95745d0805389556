//! The activity feed

use biblio_shared::{urls, Activity};
use leptos::logging::warn;

use super::get;

async fn load_list(endpoint: &str) -> Vec<Activity> {
    match get(endpoint).await {
        Ok(reply) if reply.ok() => reply.decode().unwrap_or_default(),
        Ok(_) => Vec::new(),
        Err(e) => {
            warn!("Failed to load activities from {endpoint}: {e}");
            Vec::new()
        }
    }
}

pub async fn load_all() -> Vec<Activity> {
    load_list(urls::ACTIVITIES_ALL).await
}

pub async fn load_recent() -> Vec<Activity> {
    load_list(urls::ACTIVITIES_RECENT).await
}

pub async fn load_by_limit() -> Vec<Activity> {
    load_list(urls::ACTIVITIES_LIMIT).await
}

pub async fn load_by_id(id: i64) -> Option<Activity> {
    match get(&urls::activity(id)).await {
        Ok(reply) if reply.ok() => reply.decode().ok(),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to load activity {id}: {e}");
            None
        }
    }
}
