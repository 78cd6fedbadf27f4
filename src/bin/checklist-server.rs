use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::{Context, Result};
use axum::extract::{Extension, Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tokio::sync::RwLock;

#[path = "checklist_server/types.rs"]
mod types;
use self::types::*;
#[path = "checklist_server/identity.rs"]
mod identity;
use self::identity::*;
#[path = "checklist_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "checklist_server/handlers_auth.rs"]
mod handlers_auth;
use self::handlers_auth::*;
#[path = "checklist_server/handlers_checklists.rs"]
mod handlers_checklists;
use self::handlers_checklists::*;
#[path = "checklist_server/handlers_items.rs"]
mod handlers_items;
use self::handlers_items::*;
#[path = "checklist_server/routes.rs"]
mod routes;
#[path = "checklist_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
