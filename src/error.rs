use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::routes;

pub(crate) type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug)]
pub(crate) enum SiteError {
    #[error("asset not found: {name}")]
    AssetNotFound { name: String },

    /// Names with separators or a leading dot never reach the filesystem
    #[error("invalid asset name '{name}'")]
    InvalidAssetName { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::AssetNotFound { .. } | SiteError::InvalidAssetName { .. } => StatusCode::NOT_FOUND,
            SiteError::Io(_) | SiteError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.status_code() {
            StatusCode::NOT_FOUND => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(routes::render_not_found("")),
            status => HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_asset() -> () {
        let err = SiteError::AssetNotFound { name: "profile.jpeg".into() };
        assert_eq!(err.to_string(), "asset not found: profile.jpeg");
    }

    #[test]
    fn asset_errors_map_to_not_found() -> () {
        let err = SiteError::InvalidAssetName { name: "../secret".into() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = SiteError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
