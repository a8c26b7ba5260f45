use std::sync::Arc;

use axum::{
    extract::rejection::FormRejection,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::error;

use service::catalog::domain::Bird;
use service::catalog::repository::BirdStore;

/// Shared handler state. The store is injected at construction time, by
/// `startup::run` in production and by the tests directly.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn BirdStore>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBirdForm {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub description: String,
}

/// GET /bird: every catalog entry as a JSON array.
pub async fn list_birds(State(state): State<ServerState>) -> Response {
    // The store result is checked before any serialization happens.
    match state.store.get_birds().await {
        Ok(birds) => Json(birds).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list birds");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /bird: create one entry from form fields, then send the client back
/// to the static page.
///
/// A store failure is logged but not surfaced: the client gets the redirect
/// either way, so a persistence miss only shows up in the logs. The create
/// path trades strict error signaling for an uninterrupted form flow.
pub async fn create_bird(
    State(state): State<ServerState>,
    form: Result<Form<CreateBirdForm>, FormRejection>,
) -> Response {
    let Form(input) = match form {
        Ok(form) => form,
        Err(e) => {
            error!(error = %e, "failed to parse bird form");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    // Missing form fields deserialize to empty strings; nothing else is
    // validated here.
    let bird = Bird {
        species: input.species,
        description: input.description,
    };

    if let Err(e) = state.store.create_bird(&bird).await {
        error!(error = %e, species = %bird.species, "failed to persist bird");
    }

    (StatusCode::FOUND, [(header::LOCATION, "/assets/")]).into_response()
}
