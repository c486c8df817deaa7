use crate::error::ProfileError;

pub trait ProfileRepository {
    /// The persisted student name, `None` when it was never set.
    fn student_name(&self) -> Option<String>;

    fn set_student_name(&self, name: &str) -> Result<(), ProfileError>;
}
