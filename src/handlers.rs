use crate::dates::{day_key, today_key, DayKey};
use crate::errors::AppError;
use crate::models::{AppData, CreateHabitRequest, HabitView, MutationResponse, StatsResponse, ToggleRequest};
use crate::state::AppState;
use crate::stats::{build_stats_at, completed_on, habit_view};
use crate::storage::persist_data;
use crate::store::HabitStore;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today_key();
    let habits = state.store.lock().await.snapshot();
    Html(render_index(today, completed_on(&habits, today), habits.len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitView>> {
    let now = Local::now();
    let habits = state.store.lock().await.snapshot();
    Json(
        habits
            .iter()
            .map(|habit| habit_view(habit, &now, state.streak_horizon))
            .collect(),
    )
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let now = Local::now();
    let habits = state.store.lock().await.snapshot();
    Json(build_stats_at(&now, &habits, state.streak_horizon))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let response = apply_create(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<ToggleRequest>>,
) -> Result<Json<MutationResponse>, AppError> {
    let now = Local::now();
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let day = match request.date.as_deref() {
        Some(date) => date
            .parse::<DayKey>()
            .map_err(|_| AppError::bad_request("date must be formatted as YYYY-MM-DD"))?,
        None => day_key(&now),
    };

    apply_toggle(&state, &id, day, now)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no habit with id '{id}'")))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, AppError> {
    apply_delete(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no habit with id '{id}'")))
}

pub async fn create_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<CreateHabitRequest>,
) -> Result<Redirect, AppError> {
    apply_create(&state, payload).await?;
    Ok(Redirect::to("/"))
}

async fn apply_create(state: &AppState, payload: CreateHabitRequest) -> Result<MutationResponse, AppError> {
    let now = Local::now();
    let (habit, pending) = {
        let mut store = state.store.lock().await;
        let habit = store.create(payload, now.with_timezone(&Utc))?;
        (habit, PendingSave::of(&store))
    };
    info!(id = %habit.id, name = %habit.name, "habit created");

    let saved = save(state, pending).await;
    Ok(MutationResponse {
        habit: Some(habit_view(&habit, &now, state.streak_horizon)),
        saved,
    })
}

async fn apply_toggle(
    state: &AppState,
    id: &str,
    day: DayKey,
    now: DateTime<Local>,
) -> Option<MutationResponse> {
    let (habit, pending) = {
        let mut store = state.store.lock().await;
        let Some(habit) = store.toggle(id, day) else {
            debug!(id, "toggle ignored for unknown habit");
            return None;
        };
        (habit, PendingSave::of(&store))
    };
    debug!(id, %day, completed = habit.completed_dates.contains(&day), "habit toggled");

    let saved = save(state, pending).await;
    Some(MutationResponse {
        habit: Some(habit_view(&habit, &now, state.streak_horizon)),
        saved,
    })
}

async fn apply_delete(state: &AppState, id: &str) -> Option<MutationResponse> {
    let (removed, pending) = {
        let mut store = state.store.lock().await;
        let removed = store.delete(id)?;
        (removed, PendingSave::of(&store))
    };
    info!(id, name = %removed.name, "habit deleted");

    let saved = save(state, pending).await;
    Some(MutationResponse { habit: None, saved })
}

/// A copy of the collection taken under the store lock, written after the
/// lock is released.
struct PendingSave {
    revision: u64,
    data: AppData,
}

impl PendingSave {
    fn of(store: &HabitStore) -> Self {
        Self {
            revision: store.revision(),
            data: store.to_data(),
        }
    }
}

// Writes run one at a time under `persisted`. A copy older than what is
// already on disk is skipped. The in-memory snapshot stays authoritative when
// the write fails.
async fn save(state: &AppState, pending: PendingSave) -> bool {
    let mut persisted = state.persisted.lock().await;
    if *persisted >= pending.revision {
        return true;
    }
    match persist_data(&state.data_path, &pending.data).await {
        Ok(()) => {
            *persisted = pending.revision;
            true
        }
        Err(err) => {
            warn!(path = %state.data_path.display(), "failed to persist habits: {}", err.message);
            false
        }
    }
}
