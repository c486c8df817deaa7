pub mod ids;
pub mod io;
pub mod task;
pub mod topic;
pub mod vocab;

pub use ids::{IdClock, TaskId};
pub use io::{CreateTaskInput, PhraseInput};
pub use task::Task;
pub use topic::Topic;
pub use vocab::{VocabBook, VocabEntry};
