use crate::models::AppData;
use crate::store::HabitStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub streak_horizon: u32,
    pub store: Arc<Mutex<HabitStore>>,
    /// Serializes disk writes and remembers the newest store revision on disk.
    /// Held separately from `store` so readers never wait on a write.
    pub persisted: Arc<Mutex<u64>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, streak_horizon: u32, data: AppData) -> Self {
        Self {
            data_path,
            streak_horizon,
            store: Arc::new(Mutex::new(HabitStore::new(data))),
            persisted: Arc::new(Mutex::new(0)),
        }
    }
}
