use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tareas_core::error::{ProfileError, TaskError};
use tareas_core::profile::ProfileRepository;
use tareas_core::store::Store;
use tareas_core::tasks::TaskRepository;
use tareas_core::types::ids::TaskId;
use tareas_core::types::task::Task;

pub const TASKS_FILE: &str = "tasks.json";
pub const STUDENT_FILE: &str = "student.txt";

/// File-backed store: one JSON document for the whole task list and one
/// plain-text file for the student name, both under a single directory.
/// Every mutation rewrites the affected file as a whole.
#[derive(Debug, Clone)]
pub struct JsonStore {
    tasks_path: PathBuf,
    student_path: PathBuf,
}

impl JsonStore {
    /// Opens the data directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self, TaskError> {
        fs::create_dir_all(dir).map_err(|err| TaskError::Storage {
            message: format!("cannot create {}: {err}", dir.display()),
        })?;
        Ok(Self {
            tasks_path: dir.join(TASKS_FILE),
            student_path: dir.join(STUDENT_FILE),
        })
    }
}

impl Store for JsonStore {
    type Tasks<'a>
        = JsonTaskRepo<'a>
    where
        Self: 'a;
    type Profile<'a>
        = JsonProfileRepo<'a>
    where
        Self: 'a;

    fn tasks(&self) -> Self::Tasks<'_> {
        JsonTaskRepo {
            path: &self.tasks_path,
        }
    }

    fn profile(&self) -> Self::Profile<'_> {
        JsonProfileRepo {
            path: &self.student_path,
        }
    }
}

pub struct JsonTaskRepo<'a> {
    path: &'a Path,
}

impl TaskRepository for JsonTaskRepo<'_> {
    fn load(&self) -> Vec<Task> {
        read_tasks(self.path)
    }

    fn append(&self, task: Task) -> Result<(), TaskError> {
        let mut tasks = read_tasks(self.path);
        tasks.insert(0, task);
        write_tasks(self.path, &tasks)
    }

    fn remove_by_id(&self, id: TaskId) -> Result<bool, TaskError> {
        let mut tasks = read_tasks(self.path);
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        let removed = tasks.len() < before;
        if removed {
            write_tasks(self.path, &tasks)?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<(), TaskError> {
        write_tasks(self.path, &[])
    }
}

pub struct JsonProfileRepo<'a> {
    path: &'a Path,
}

impl ProfileRepository for JsonProfileRepo<'_> {
    fn student_name(&self) -> Option<String> {
        fs::read_to_string(self.path).ok()
    }

    fn set_student_name(&self, name: &str) -> Result<(), ProfileError> {
        write_atomic(self.path, name).map_err(|err| ProfileError::Storage {
            message: format!("cannot write {}: {err}", self.path.display()),
        })
    }
}

fn read_tasks(path: &Path) -> Vec<Task> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            tracing::warn!("discarding unreadable task list {}: {err}", path.display());
            Vec::new()
        }
    }
}

fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskError> {
    let json = serde_json::to_string(tasks).map_err(|err| TaskError::Storage {
        message: format!("cannot encode task list: {err}"),
    })?;
    write_atomic(path, &json).map_err(|err| TaskError::Storage {
        message: format!("cannot write {}: {err}", path.display()),
    })
}

// Write-then-rename so a crash mid-write never leaves a truncated file.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tareas_core::types::topic::Topic;
    use tempfile::tempdir;

    fn sample(id: i64, phrase: &str) -> Task {
        Task {
            id: TaskId::new(id),
            phrase: phrase.to_string(),
            lessons: vec![Topic::VerbPatterns, Topic::ReportedSpeech],
            created_at: "5/3/2026".to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.tasks().load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        fs::write(dir.path().join(TASKS_FILE), "{not json").unwrap();
        assert!(store.tasks().load().is_empty());
    }

    #[test]
    fn append_prepends_and_survives_reopen() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store.tasks().append(sample(1, "first")).unwrap();
        store.tasks().append(sample(2, "second")).unwrap();

        let reopened = JsonStore::open(dir.path()).unwrap();
        let tasks = reopened.tasks().load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].phrase, "second");
        assert_eq!(tasks[1].phrase, "first");
    }

    #[test]
    fn records_round_trip_unchanged() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let task = sample(1_700_000_000_123, "I have it done");
        store.tasks().append(task.clone()).unwrap();
        assert_eq!(store.tasks().load(), vec![task]);
    }

    #[test]
    fn stored_json_uses_the_durable_field_names() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store.tasks().append(sample(1, "I go home")).unwrap();

        let raw = fs::read_to_string(dir.path().join(TASKS_FILE)).unwrap();
        assert!(raw.contains("\"createdAt\":\"5/3/2026\""));
        assert!(raw.contains("\"Verb Patterns\""));
        assert!(!raw.contains("created_at"));
    }

    #[test]
    fn remove_reports_whether_anything_went_away() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store.tasks().append(sample(7, "only")).unwrap();

        assert!(store.tasks().remove_by_id(TaskId::new(7)).unwrap());
        assert!(!store.tasks().remove_by_id(TaskId::new(7)).unwrap());
        assert!(store.tasks().load().is_empty());
    }

    #[test]
    fn clear_rewrites_an_empty_list() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store.tasks().append(sample(1, "one")).unwrap();
        store.tasks().clear().unwrap();

        assert!(store.tasks().load().is_empty());
        let raw = fs::read_to_string(dir.path().join(TASKS_FILE)).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn student_name_round_trips_verbatim() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert_eq!(store.profile().student_name(), None);

        store.profile().set_student_name("Ana María").unwrap();
        assert_eq!(store.profile().student_name().as_deref(), Some("Ana María"));
    }
}
