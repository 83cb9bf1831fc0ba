use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid locale identifier {0:?}")]
    InvalidLocale(String),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Failed to serialize page data: {0}")]
    PageData(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><html><head><title>Server error</title></head><body><h1>500</h1><p>Something went wrong.</p></body></html>"),
        )
            .into_response()
    }
}
