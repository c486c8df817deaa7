use crate::profile::ProfileRepository;
use crate::tasks::TaskRepository;

/// A durable backend exposing one repository per concern.
pub trait Store {
    type Tasks<'a>: TaskRepository
    where
        Self: 'a;
    type Profile<'a>: ProfileRepository
    where
        Self: 'a;

    fn tasks(&self) -> Self::Tasks<'_>;
    fn profile(&self) -> Self::Profile<'_>;
}
