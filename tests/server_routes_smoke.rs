mod common;

use anyhow::{Context, Result};

#[test]
fn server_route_registration_smoke() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();

    // Public routes should be reachable.
    let health = client
        .get(format!("{}/healthz", guard.base_url))
        .send()
        .context("GET /api/healthz")?;
    assert!(health.status().is_success());

    let bad_register = client
        .post(format!("{}/register", guard.base_url))
        .json(&serde_json::json!({"username": "", "email": "", "password": ""}))
        .send()
        .context("POST /register with blank fields")?;
    assert_eq!(bad_register.status(), reqwest::StatusCode::BAD_REQUEST);

    // Authenticated routes should reject missing auth.
    let unauth = client
        .get(format!("{}/checklist", guard.base_url))
        .send()
        .context("GET /checklist without auth")?;
    assert_eq!(unauth.status(), reqwest::StatusCode::UNAUTHORIZED);

    let registered: serde_json::Value = client
        .post(format!("{}/register", guard.base_url))
        .json(&serde_json::json!({"username": "gina", "email": "g@example.com", "password": "pw"}))
        .send()
        .context("POST /register")?
        .json()
        .context("decode register response")?;
    let token = registered["data"]["token"]
        .as_str()
        .context("token in register response")?
        .to_string();
    assert_eq!(registered["data"]["username"], "gina");

    let lists: serde_json::Value = client
        .get(format!("{}/checklist", guard.base_url))
        .bearer_auth(&token)
        .send()
        .context("GET /checklist with auth")?
        .json()
        .context("decode checklist list")?;
    assert_eq!(lists["data"], serde_json::json!([]));

    let blank = client
        .post(format!("{}/checklist", guard.base_url))
        .bearer_auth(&token)
        .json(&serde_json::json!({"name": "   "}))
        .send()
        .context("POST /checklist with blank name")?;
    assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);

    // Unknown routes should still 404 through the composed router.
    let missing = client
        .get(format!("{}/definitely-not-a-route", guard.base_url))
        .bearer_auth(&token)
        .send()
        .context("GET unknown route")?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}
