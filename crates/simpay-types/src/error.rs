//! Error type shared by every Simple Pay crate

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type SpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	DbError,
	Parse,

	/// A registration is missing one of its required parameters
	MissingParameter(&'static str),
	/// A registration references a parent that is not registered
	UnknownParent { kind: &'static str, id: String },
	ValidationError(String),
	ConfigError(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::debug!("JSON: {}", err);
		Self::Parse
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::DbError => write!(f, "database error"),
			Error::Parse => write!(f, "parse error"),
			Error::MissingParameter(param) => {
				write!(f, "missing required parameter: {}", param)
			}
			Error::UnknownParent { kind, id } => write!(f, "unknown {}: {}", kind, id),
			Error::ValidationError(msg) | Error::ConfigError(msg) => write!(f, "{}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

#[derive(serde::Serialize)]
struct ErrorBody {
	code: &'static str,
	message: String,
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, code) = match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not_found"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "permission_denied"),
			Error::Parse => (StatusCode::BAD_REQUEST, "parse_error"),
			Error::ValidationError(_) | Error::MissingParameter(_) | Error::UnknownParent { .. } => {
				(StatusCode::BAD_REQUEST, "invalid_param")
			}
			_ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
		};
		let message = match status {
			StatusCode::INTERNAL_SERVER_ERROR => "internal server error".to_string(),
			_ => self.to_string(),
		};
		(status, Json(ErrorBody { code, message })).into_response()
	}
}


// vim: ts=4
