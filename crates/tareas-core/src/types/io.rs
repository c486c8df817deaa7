use crate::types::topic::Topic;

/// How the phrase of a new task was authored.
#[derive(Debug, Clone)]
pub enum PhraseInput {
    Simple(String),
    /// Ordered fragments joined with single spaces; blank ones are skipped.
    Guided(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub phrase: PhraseInput,
    pub topics: Vec<Topic>,
}
