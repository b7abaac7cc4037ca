use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Wire payload of the rename endpoint, matching the client's field names.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeName {
    pub old_exercise_name: String,
    pub new_exercise_name: String,
}

/// Body of a successful rename response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub status: String,
}

/// Payload for seeding one exercise into the catalog.
#[derive(Deserialize)]
pub struct AddExercise {
    pub name: String,
}

/// In-memory catalog plus an in-order log of every rename payload received,
/// including ones that failed with 404. The log is what lets tests assert
/// request counts, pairing, and ordering.
#[derive(Default)]
pub struct Catalog {
    pub exercises: HashSet<String>,
    pub rename_log: Vec<ChangeName>,
}

pub type Db = Arc<RwLock<Catalog>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Catalog::default()));
    Router::new()
        .route("/changeName", post(change_name))
        .route("/exercises", get(list_exercises).post(add_exercise))
        .route("/requests", get(list_requests))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Rename one exercise. Unknown old names get a plain-text 404; either way
/// the payload is appended to the request log.
async fn change_name(
    State(db): State<Db>,
    Json(input): Json<ChangeName>,
) -> Result<Json<RenameResult>, (StatusCode, &'static str)> {
    let mut catalog = db.write().await;
    catalog.rename_log.push(input.clone());

    if !catalog.exercises.remove(&input.old_exercise_name) {
        return Err((StatusCode::NOT_FOUND, "not found"));
    }
    catalog.exercises.insert(input.new_exercise_name);
    Ok(Json(RenameResult {
        status: "ok".to_string(),
    }))
}

async fn list_exercises(State(db): State<Db>) -> Json<Vec<String>> {
    let catalog = db.read().await;
    let mut names: Vec<String> = catalog.exercises.iter().cloned().collect();
    names.sort();
    Json(names)
}

async fn add_exercise(
    State(db): State<Db>,
    Json(input): Json<AddExercise>,
) -> StatusCode {
    db.write().await.exercises.insert(input.name);
    StatusCode::CREATED
}

async fn list_requests(State(db): State<Db>) -> Json<Vec<ChangeName>> {
    let catalog = db.read().await;
    Json(catalog.rename_log.clone())
}
