use thiserror::Error;

/// Rejections raised while composing and validating a new task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("the phrase is empty")]
    EmptyPhrase,
    #[error("no topic was selected")]
    NoTopicSelected,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task storage failed: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile storage failed: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("reference file unavailable: {message}")]
    Unavailable { message: String },
}

/// Umbrella error for the tracker facade.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Vocab(#[from] VocabError),
}
