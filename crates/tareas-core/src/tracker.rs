use crate::composer;
use crate::error::TrackerError;
use crate::export;
use crate::profile::ProfileRepository;
use crate::store::Store;
use crate::tasks::TaskRepository;
use crate::types::ids::{IdClock, TaskId};
use crate::types::io::CreateTaskInput;
use crate::types::task::Task;
use crate::types::topic::Topic;
use chrono::{Local, NaiveDate};

/// The tracker facade. Everything the surface does goes through here, over
/// whatever [`Store`] it was opened with.
pub struct Tracker<S: Store> {
    store: S,
    clock: IdClock,
}

impl<S: Store> Tracker<S> {
    /// Wraps a store, seeding the id clock from the ids already in it.
    pub fn new(store: S) -> Self {
        let clock = IdClock::new();
        for task in store.tasks().load() {
            clock.observe(task.id);
        }
        Self { store, clock }
    }

    pub fn tasks(&self) -> TasksApi<'_, S> {
        TasksApi { core: self }
    }

    pub fn profile(&self) -> ProfileApi<'_, S> {
        ProfileApi { core: self }
    }
}

pub struct TasksApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> TasksApi<'_, S> {
    /// Composes, validates and stores a new task, returning the record as
    /// stored. Duplicate topic tags collapse to their first occurrence.
    pub fn add(&self, input: CreateTaskInput) -> Result<Task, TrackerError> {
        let phrase = composer::compose(&input.phrase);
        let topics = dedup_topics(input.topics);
        composer::validate(&phrase, &topics)?;

        let task = Task {
            id: self.core.clock.next(),
            phrase,
            lessons: topics,
            created_at: today_stamp(),
        };
        self.core.store.tasks().append(task.clone())?;
        Ok(task)
    }

    pub fn list(&self) -> Vec<Task> {
        self.core.store.tasks().load()
    }

    pub fn remove(&self, id: TaskId) -> Result<bool, TrackerError> {
        self.core
            .store
            .tasks()
            .remove_by_id(id)
            .map_err(TrackerError::from)
    }

    pub fn clear(&self) -> Result<(), TrackerError> {
        self.core.store.tasks().clear().map_err(TrackerError::from)
    }

    /// Renders the submission transcript for the current list, dated
    /// today, or `None` when there are no tasks.
    pub fn transcript(&self, include_topics: bool) -> Option<String> {
        let tasks = self.list();
        let name = self.core.store.profile().student_name().unwrap_or_default();
        export::render_transcript(&tasks, &name, &today_stamp(), include_topics)
    }
}

pub struct ProfileApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> ProfileApi<'_, S> {
    pub fn student_name(&self) -> Option<String> {
        self.core.store.profile().student_name()
    }

    pub fn set_student_name(&self, name: &str) -> Result<(), TrackerError> {
        self.core
            .store
            .profile()
            .set_student_name(name)
            .map_err(TrackerError::from)
    }
}

fn dedup_topics(topics: Vec<Topic>) -> Vec<Topic> {
    let mut seen: Vec<Topic> = Vec::with_capacity(topics.len());
    for topic in topics {
        if !seen.contains(&topic) {
            seen.push(topic);
        }
    }
    seen
}

fn today_stamp() -> String {
    date_stamp(Local::now().date_naive())
}

// Day/month/year without zero padding, as the student is used to seeing.
fn date_stamp(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
