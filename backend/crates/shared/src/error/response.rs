//! HTTP rendering of [`AppError`] as an RFC 7807 problem document

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::app_error::AppError;
use super::kind::ErrorKind;

#[derive(Debug, Serialize)]
struct Problem<'a> {
    #[serde(rename = "type")]
    type_uri: String,
    title: &'static str,
    status: u16,
    code: ErrorKind,
    detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let problem = Problem {
            type_uri: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind().as_str(),
            status: self.status_code(),
            code: self.kind(),
            detail: self.message(),
            action: self.action(),
        };
        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_problem_document() {
        let response = AppError::new(ErrorKind::Conflict, "No round in progress")
            .with_action("Start a new round")
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 409);
        assert_eq!(json["title"], "Conflict");
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["detail"], "No round in progress");
        assert_eq!(json["action"], "Start a new round");
    }
}
