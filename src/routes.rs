use std::sync::Arc;

use axum::{Form, Json, extract::State, extract::rejection::FormRejection, response::Html};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::AppError, identity, queue::VoteRecord, render, state::State as AppState};

#[derive(Deserialize)]
pub struct Ballot {
    vote: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorSimStatus {
    enabled: bool,
}

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    hostname: String,
}

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let voter_id = identity::resolve(&jar);
    let page = render::voting_page(&state, &voter_id, None);

    (identity::remember(jar, &voter_id), page)
}

pub async fn vote_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    payload: Result<Form<Ballot>, FormRejection>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let voter_id = identity::resolve(&jar);

    // Checked before any validation or side effect, including the form
    // decode: while the switch is on, every submission fails and the queue
    // is never touched.
    if state.error_sim.enabled() {
        return Err(AppError::SimulatedError);
    }

    let Form(ballot) = payload.map_err(|_| AppError::MalformedSubmission)?;
    let vote = ballot.vote.ok_or(AppError::MalformedSubmission)?;
    info!("Received vote for {vote}");

    let record = VoteRecord {
        voter_id: voter_id.clone(),
        vote: vote.clone(),
    };
    state.queue.push(&record).await?;

    let page = render::voting_page(&state, &voter_id, Some(&vote));
    Ok((identity::remember(jar, &voter_id), page))
}

pub async fn error_sim_status_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ErrorSimStatus> {
    Json(ErrorSimStatus {
        enabled: state.error_sim.enabled(),
    })
}

pub async fn error_sim_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ErrorSimStatus> {
    let enabled = state.error_sim.toggle();
    info!(
        "Error simulation {}",
        if enabled { "ENABLED" } else { "DISABLED" }
    );

    Json(ErrorSimStatus { enabled })
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        hostname: state.hostname.clone(),
    })
}
