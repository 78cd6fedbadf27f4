use super::*;

pub(super) fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

pub(super) fn hash_token(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

/// Keyed by username so equal passwords do not share a hash.
pub(super) fn hash_password(username: &str, password: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(username.as_bytes());
    hasher.update(b"\0");
    hasher.update(password.as_bytes());
    hasher.finalize().to_hex().to_string()
}

pub(super) fn generate_token_secret() -> Result<String> {
    // 32 bytes of entropy, hex-encoded.
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

/// Mints a bearer token for `username` and records its hash.
pub(super) async fn issue_token(state: &AppState, username: &str) -> Result<String> {
    let secret = generate_token_secret().context("generate token")?;
    state
        .tokens
        .write()
        .await
        .insert(hash_token(&secret), username.to_string());
    Ok(secret)
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };

    let Ok(value) = value.to_str() else {
        return unauthorized();
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    let username = {
        let tokens = state.tokens.read().await;
        tokens.get(&hash_token(token)).cloned()
    };
    let Some(username) = username else {
        return unauthorized();
    };

    let mut req = req;
    req.extensions_mut().insert(Subject { username });
    next.run(req).await
}
