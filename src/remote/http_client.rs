use serde::de::DeserializeOwned;

use super::*;

const BODY_EXCERPT: usize = 200;

impl RemoteClient {
    pub(super) fn url(&self, segments: &[&str]) -> String {
        endpoint(&self.base_url, segments)
    }

    pub(super) fn authed(
        &self,
        method: reqwest::Method,
        segments: &[&str],
        session: &Session,
    ) -> reqwest::blocking::RequestBuilder {
        self.client
            .request(method, self.url(segments))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
    }

    /// Sends one request and returns the body of a success response.
    pub(super) fn execute(
        &self,
        op: Operation,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<String, GatewayError> {
        let resp = req.send().map_err(|err| {
            tracing::debug!(operation = %op, error = %err, "transport failure");
            GatewayError::new(ErrorKind::Network, op, err.to_string())
        })?;

        let status = resp.status();
        let url = resp.url().path().to_string();
        let body = resp
            .text()
            .map_err(|err| GatewayError::new(ErrorKind::Network, op, err.to_string()))?;
        tracing::debug!(operation = %op, path = %url, status = status.as_u16(), "response");

        classify_status(op, status, &body)?;
        Ok(body)
    }

    pub(super) fn execute_json<T: DeserializeOwned>(
        &self,
        op: Operation,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let body = self.execute(op, req)?;
        decode(op, &body)
    }

    pub(super) fn execute_envelope<T: DeserializeOwned>(
        &self,
        op: Operation,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let env: Envelope<T> = self.execute_json(op, req)?;
        Ok(env.data)
    }
}

/// Appends `segments` to the base URL, percent-encoding each one so an id
/// containing `/`, `?` or `#` stays a single path segment.
pub(super) fn endpoint(base_url: &str, segments: &[&str]) -> String {
    if let Ok(mut url) = reqwest::Url::parse(base_url) {
        let appended = match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
                true
            }
            Err(()) => false,
        };
        if appended {
            return url.to_string();
        }
    }
    // Unparseable base: reqwest rejects the request when it is built.
    format!("{}/{}", base_url.trim_end_matches('/'), segments.join("/"))
}

pub(super) fn classify_status(
    op: Operation,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<(), GatewayError> {
    if status.is_success() {
        return Ok(());
    }
    let detail = format!("HTTP {}: {}", status, excerpt(body));
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(GatewayError::new(ErrorKind::Auth, op, detail));
    }
    Err(GatewayError::new(ErrorKind::Server, op, detail))
}

pub(super) fn decode<T: DeserializeOwned>(op: Operation, body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body)
        .map_err(|err| GatewayError::new(ErrorKind::Parse, op, format!("decode body: {}", err)))
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_EXCERPT {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(BODY_EXCERPT).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_each_id_in_one_segment() {
        assert_eq!(
            endpoint("http://127.0.0.1:8080/api", &["checklist", "1/item/2"]),
            "http://127.0.0.1:8080/api/checklist/1%2Fitem%2F2"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080/api/", &["checklist", "a?b#c", "item"]),
            "http://127.0.0.1:8080/api/checklist/a%3Fb%23c/item"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080", &["login"]),
            "http://127.0.0.1:8080/login"
        );
    }

    #[test]
    fn unauthorized_and_forbidden_are_auth_failures() {
        let err = classify_status(
            Operation::ListChecklists,
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"error":"unauthorized"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Auth);

        let err = classify_status(
            Operation::DeleteItem,
            reqwest::StatusCode::FORBIDDEN,
            "",
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Auth);
    }

    #[test]
    fn other_statuses_are_server_failures_with_status_in_detail() {
        let err = classify_status(
            Operation::CreateItem,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Server);
        assert!(err.detail.contains("500"));
        assert_eq!(err.to_string(), "Failed to create item");

        assert!(classify_status(Operation::CreateItem, reqwest::StatusCode::CREATED, "").is_ok());
    }

    #[test]
    fn malformed_bodies_are_parse_failures() {
        let err = decode::<Envelope<Vec<crate::model::Item>>>(Operation::ListItems, "<html>")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);

        let err = decode::<Envelope<Vec<crate::model::Item>>>(Operation::ListItems, "{}")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
