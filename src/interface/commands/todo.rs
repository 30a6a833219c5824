//! # Todo Command
//!
//! Handles `/todo add|list|delete`. A bare `/todo` lists tasks. Storage
//! failures are logged here and surface as a generic error reply.

use crate::domain::errors::StoreError;
use crate::domain::traits::TaskStore;
use crate::domain::types::Reply;

pub async fn handle(store: &dyn TaskStore, owner_id: i64, args: &[String]) -> Reply {
    let Some(action) = args.first() else {
        return list(store, owner_id).await;
    };

    match action.to_ascii_lowercase().as_str() {
        "list" => list(store, owner_id).await,
        "add" => add(store, owner_id, args.get(1)).await,
        "delete" => delete(store, owner_id, args.get(1)).await,
        _ => Reply::TodoUnknownAction,
    }
}

async fn list(store: &dyn TaskStore, owner_id: i64) -> Reply {
    match store.list(owner_id).await {
        Ok(tasks) => Reply::TaskList { tasks },
        Err(e) => storage_error("list", e),
    }
}

async fn add(store: &dyn TaskStore, owner_id: i64, text: Option<&String>) -> Reply {
    let Some(text) = text else {
        return Reply::TodoAddUsage;
    };
    let text = text.trim();
    if text.is_empty() {
        return Reply::EmptyTaskText;
    }

    match store.add(owner_id, text).await {
        Ok(_) => Reply::TaskAdded {
            text: text.to_string(),
        },
        Err(e) => storage_error("add", e),
    }
}

async fn delete(store: &dyn TaskStore, owner_id: i64, id: Option<&String>) -> Reply {
    let Some(raw_id) = id else {
        return Reply::TodoDeleteUsage;
    };
    let Ok(id) = raw_id.trim().parse::<i64>() else {
        return Reply::InvalidTaskId;
    };

    match store.delete(owner_id, id).await {
        Ok(true) => Reply::TaskDeleted,
        Ok(false) => Reply::TaskNotFound,
        Err(e) => storage_error("delete", e),
    }
}

fn storage_error(operation: &str, e: StoreError) -> Reply {
    tracing::error!("Task store {} failed: {}", operation, e);
    Reply::StorageError
}
