use crate::types::ids::TaskId;
use crate::types::topic::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub phrase: String,
    pub lessons: Vec<Topic>,
    /// Creation date as shown to the user, fixed at creation time.
    pub created_at: String,
}
