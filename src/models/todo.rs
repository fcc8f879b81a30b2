use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A todo as stored in the `todos` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub completed: bool,
    pub body: String,
}

impl Todo {
    pub fn new(body: String) -> Self {
        Self {
            id: None,
            completed: false,
            body,
        }
    }
}

/// Wire shape of a todo, with the id rendered as a hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub completed: bool,
    pub body: String,
}

impl From<&Todo> for TodoDto {
    fn from(value: &Todo) -> Self {
        Self {
            id: value.id.map(|id| id.to_hex()),
            completed: value.completed,
            body: value.body.clone(),
        }
    }
}

/// Body accepted by create and full update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub body: String,
}
