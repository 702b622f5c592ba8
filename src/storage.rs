use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const DEFAULT_DATA_PATH: &str = "data/habits.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Reads the saved collection. A missing file is a fresh start; an unreadable
/// or undecodable one is logged and also yields an empty collection.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!(path = %path.display(), "failed to parse data file, starting empty: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!(path = %path.display(), "failed to read data file, starting empty: {err}");
            AppData::default()
        }
    }
}

/// Writes to a sibling temp file and renames it over `path`, so a crash
/// mid-write leaves the previous file intact.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let temp = temp_path(path);
    fs::write(&temp, payload).await.map_err(AppError::internal)?;
    fs::rename(&temp, path).await.map_err(AppError::internal)?;
    Ok(())
}

pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::DayKey;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("habit_tracker_{}_{}.json", std::process::id(), name));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&scratch_path("missing")).await;
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_loads_empty() {
        let path = scratch_path("malformed");
        fs::write(&path, b"{\"habits\": [{\"id\": 1").await.unwrap();
        assert!(load_data(&path).await.habits.is_empty());

        fs::write(&path, br##"{"habits":[{"id":"1","name":"x","color":"#fff","completedDates":["not-a-day"],"createdAt":"2026-01-01T00:00:00Z"}]}"##)
            .await
            .unwrap();
        assert!(load_data(&path).await.habits.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn legacy_streak_field_is_ignored() {
        let path = scratch_path("legacy");
        let json = r##"{"habits":[{
            "id":"1718000000000","name":"Meditate","color":"#8b5cf6",
            "streak":42,"completedDates":["2026-01-02","2026-01-01","2026-01-02"],
            "createdAt":"2025-12-30T09:15:00.000Z"}]}"##;
        fs::write(&path, json).await.unwrap();

        let data = load_data(&path).await;
        assert_eq!(data.habits.len(), 1);
        let habit = &data.habits[0];
        assert_eq!(habit.name, "Meditate");
        assert!(habit.description.is_none());
        assert_eq!(habit.completed_dates.len(), 2);
        assert_eq!(
            habit.completed_dates.iter().next().copied(),
            DayKey::from_ymd(2026, 1, 1)
        );
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_data_reloads() {
        let path = scratch_path("persist");
        let data: AppData = serde_json::from_str(
            r##"{"habits":[{"id":"7","name":"Walk","color":"#10b981","completedDates":["2026-02-01"],"createdAt":"2026-01-01T00:00:00Z"}]}"##,
        )
        .unwrap();
        persist_data(&path, &data).await.unwrap();

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"completedDates\""));
        assert!(raw.contains("\"createdAt\""));

        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits, data.habits);
        assert!(!temp_path(&path).exists());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_replaces_existing_file_whole() {
        let path = scratch_path("replace");
        fs::write(&path, b"previous contents that are longer than the new payload .......")
            .await
            .unwrap();

        persist_data(&path, &AppData::default()).await.unwrap();
        let loaded: AppData = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert!(loaded.habits.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn failed_write_leaves_previous_file_intact() {
        let path = scratch_path("intact");
        let original = br#"{"habits":[]}"#;
        fs::write(&path, original).await.unwrap();
        // A directory squatting on the temp name makes the write fail.
        let blocker = temp_path(&path);
        fs::create_dir_all(&blocker).await.unwrap();

        assert!(persist_data(&path, &AppData::default()).await.is_err());
        assert_eq!(fs::read(&path).await.unwrap(), original.to_vec());

        let _ = fs::remove_dir_all(&blocker).await;
        let _ = fs::remove_file(&path).await;
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let temp = temp_path(Path::new("data/habits.json"));
        assert_eq!(temp, PathBuf::from("data/habits.json.tmp"));
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let mut path = scratch_path("nodir");
        path.push("nested/habits.json");
        assert!(persist_data(&path, &AppData::default()).await.is_err());
    }
}
