use crate::activities::{Directory, SignupError};
use crate::state::AppState;

use axum::Json;
use axum::extract::Path as AxumPath;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct SignupMessage {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

pub(crate) enum ApiError {
    MissingEmail,
    Signup(SignupError),
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        ApiError::Signup(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::MissingEmail => (StatusCode::BAD_REQUEST, "email is required".to_string()),
            ApiError::Signup(err) => {
                let status = match &err {
                    SignupError::UnknownActivity(_) => StatusCode::NOT_FOUND,
                    SignupError::AlreadySignedUp { .. } | SignupError::NotSignedUp { .. } => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, err.to_string())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignupQuery {
    pub(crate) email: String,
}

pub(crate) async fn activity_list(State(state): State<AppState>) -> Json<Directory> {
    let directory = state.directory.lock().expect("directory lock").clone();
    Json(directory)
}

pub(crate) async fn activity_signup(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<SignupMessage>, ApiError> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err(ApiError::MissingEmail);
    }

    let mut directory = state.directory.lock().expect("directory lock");
    directory.signup(&name, email)?;
    tracing::info!(activity = %name, email = %email, "signed up participant");

    Ok(Json(SignupMessage {
        message: format!("Signed up {email} for {name}"),
    }))
}

pub(crate) async fn activity_unregister(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<SignupMessage>, ApiError> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err(ApiError::MissingEmail);
    }

    let mut directory = state.directory.lock().expect("directory lock");
    directory.unregister(&name, email)?;
    tracing::info!(activity = %name, email = %email, "removed participant");

    Ok(Json(SignupMessage {
        message: format!("Removed {email} from {name}"),
    }))
}
