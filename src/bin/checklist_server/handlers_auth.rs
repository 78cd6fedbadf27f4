use super::*;

fn auth_response(token: String, username: &str) -> Response {
    envelope(serde_json::json!({ "token": token, "username": username })).into_response()
}

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterBody>,
) -> Response {
    let username = body.username.trim();
    if username.is_empty() || body.email.trim().is_empty() || body.password.is_empty() {
        return bad_request("username, email and password are required");
    }

    {
        let mut users = state.users.write().await;
        if users.contains_key(username) {
            return conflict("username already taken");
        }
        users.insert(
            username.to_string(),
            User {
                username: username.to_string(),
                password_hash: hash_password(username, &body.password),
                created_at: now_ts(),
            },
        );
    }
    tracing::info!(username, "registered");

    match issue_token(&state, username).await {
        Ok(token) => auth_response(token, username),
        Err(err) => internal_error(err),
    }
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> Response {
    let username = body.username.trim();
    let ok = {
        let users = state.users.read().await;
        users
            .get(username)
            .is_some_and(|u| u.password_hash == hash_password(&u.username, &body.password))
    };
    if !ok {
        tracing::info!(username, "login rejected");
        return unauthorized();
    }

    if let Some(u) = state.users.read().await.get(username) {
        tracing::debug!(username, since = %u.created_at, "login");
    }
    match issue_token(&state, username).await {
        Ok(token) => auth_response(token, username),
        Err(err) => internal_error(err),
    }
}
