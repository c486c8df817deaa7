use crate::error::TaskError;
use crate::types::ids::TaskId;
use crate::types::task::Task;

pub trait TaskRepository {
    /// Reads the stored list, newest first. Absent or unreadable data is
    /// an empty list, never an error.
    fn load(&self) -> Vec<Task>;

    /// Prepends the record and rewrites the stored list.
    fn append(&self, task: Task) -> Result<(), TaskError>;

    /// Drops the record with this id. Returns whether anything was
    /// removed; an absent id is a no-op, not an error.
    fn remove_by_id(&self, id: TaskId) -> Result<bool, TaskError>;

    fn clear(&self) -> Result<(), TaskError>;
}
