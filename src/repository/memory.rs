use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::todo::Todo;
use crate::repository::{RepositoryError, TodoRepository};

/// Process-local store keeping todos in insertion order, backing the handler tests.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn todos(&self) -> MutexGuard<'_, Vec<Todo>> {
        self.todos.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TodoRepository for InMemoryDatabase {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        Ok(self.todos().clone())
    }

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>, RepositoryError> {
        let todos = self.todos();
        Ok(todos.iter().find(|todo| todo.id == Some(*id)).cloned())
    }

    async fn create(&self, body: String) -> Result<Todo, RepositoryError> {
        let todo = Todo {
            id: Some(ObjectId::new()),
            ..Todo::new(body)
        };
        self.todos().push(todo.clone());
        Ok(todo)
    }

    async fn update_body(&self, id: &ObjectId, body: String) -> Result<u64, RepositoryError> {
        let mut todos = self.todos();
        match todos.iter_mut().find(|todo| todo.id == Some(*id)) {
            Some(todo) => {
                todo.body = body;
                todo.completed = false;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn complete(&self, id: &ObjectId) -> Result<u64, RepositoryError> {
        let mut todos = self.todos();
        match todos.iter_mut().find(|todo| todo.id == Some(*id)) {
            Some(todo) => {
                todo.completed = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<u64, RepositoryError> {
        let mut todos = self.todos();
        let before = todos.len();
        todos.retain(|todo| todo.id != Some(*id));
        Ok((before - todos.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn list_keeps_insertion_order() {
        let db = InMemoryDatabase::new();
        db.create("first".to_string()).await.unwrap();
        db.create("second".to_string()).await.unwrap();

        let bodies: Vec<String> = db.list().await.unwrap().into_iter().map(|t| t.body).collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[actix_web::test]
    async fn created_ids_are_unique() {
        let db = InMemoryDatabase::new();
        let a = db.create("a".to_string()).await.unwrap();
        let b = db.create("b".to_string()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[actix_web::test]
    async fn update_resets_completed() {
        let db = InMemoryDatabase::new();
        let id = db.create("a".to_string()).await.unwrap().id.unwrap();
        assert_eq!(db.complete(&id).await.unwrap(), 1);
        assert_eq!(db.update_body(&id, "b".to_string()).await.unwrap(), 1);

        let todo = db.get(&id).await.unwrap().unwrap();
        assert_eq!(todo.body, "b");
        assert!(!todo.completed);
    }

    #[actix_web::test]
    async fn missing_id_matches_nothing() {
        let db = InMemoryDatabase::new();
        db.create("a".to_string()).await.unwrap();
        let id = ObjectId::new();

        assert_eq!(db.update_body(&id, "b".to_string()).await.unwrap(), 0);
        assert_eq!(db.complete(&id).await.unwrap(), 0);
        assert_eq!(db.delete(&id).await.unwrap(), 0);
        assert_eq!(db.list().await.unwrap().len(), 1);
    }
}
