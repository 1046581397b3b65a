use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oklch_match::catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure to turn a catalog file into a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor(_) | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::PaletteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Malformed query strings (missing `hex`, `shade=300`, `chroma=abc`) get
/// the same JSON body as every other client error.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParameter(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_color() {
        let error = ApiError::InvalidColor("#12".to_string());
        assert_eq!(error.to_string(), "Invalid color: #12");
    }

    #[test]
    fn test_api_error_palette_not_found() {
        let error = ApiError::PaletteNotFound("chartreuse".to_string());
        assert_eq!(error.to_string(), "Palette not found: chartreuse");
    }

    #[test]
    fn test_catalog_load_error_from_catalog_error() {
        let error: CatalogLoadError = CatalogError::DuplicatePalette("red".to_string()).into();
        assert!(matches!(error, CatalogLoadError::Invalid(_)));
        assert!(error.to_string().starts_with("Invalid catalog: "));
    }

    #[test]
    fn test_catalog_load_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<u8>("not a number").unwrap_err();
        let error: CatalogLoadError = yaml_error.into();
        assert!(matches!(error, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::InvalidColor("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidParameter("shade".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PaletteNotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
