//! Registration and login. Neither call carries a bearer token.

use serde_json::Value;

use super::http_client::decode;
use super::*;

impl RemoteClient {
    pub fn register(&self, req: &RegisterRequest) -> Result<Value, GatewayError> {
        tracing::debug!(username = %req.username, "register");
        let body = self.execute(
            Operation::Register,
            self.client.post(self.url(&["register"])).json(req),
        )?;
        decode(Operation::Register, &body)
    }

    pub fn login(&self, req: &LoginRequest) -> Result<Value, GatewayError> {
        tracing::debug!(username = %req.username, "login");
        let body = self.execute(
            Operation::Login,
            self.client.post(self.url(&["login"])).json(req),
        )?;
        decode(Operation::Login, &body)
    }
}

/// Pulls the bearer token out of an auth payload.
///
/// The service contract is unconfirmed, so four shapes are accepted and the
/// first match wins: `token`, `access_token`, `data.token`, or a bare JSON
/// string body. Empty strings do not count as a token.
pub fn extract_token(payload: &Value) -> Option<String> {
    let candidates = [
        payload.get("token"),
        payload.get("access_token"),
        payload.get("data").and_then(|d| d.get("token")),
        Some(payload),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
