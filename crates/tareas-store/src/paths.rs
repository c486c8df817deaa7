use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Overrides the data directory when set to a non-empty path.
pub const DATA_DIR_ENV: &str = "TAREAS_DATA_DIR";

/// Resolves where the data lives: the environment override first, then the
/// platform data directory, then `.tareas` under the working directory.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Some(dirs) = ProjectDirs::from("", "", "tareas") {
        return dirs.data_dir().to_path_buf();
    }
    PathBuf::from(".tareas")
}
