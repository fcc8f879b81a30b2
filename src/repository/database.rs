use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::Config;
use crate::models::todo::Todo;
use crate::repository::{RepositoryError, TodoRepository};

const DB_NAME: &str = "react_go";
const COLLECTION_NAME: &str = "todos";

#[derive(Clone, Debug)]
pub struct MongoDbClient {
    client: Client,
}

impl MongoDbClient {
    pub async fn new(config: &Config) -> Result<Self, RepositoryError> {
        let client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        let client = Client::with_options(client_options)?;
        Ok(Self { client })
    }

    fn get_todos_collection(&self) -> Collection<Todo> {
        let db = self.client.database(DB_NAME);
        db.collection(COLLECTION_NAME)
    }
}

#[async_trait]
impl TodoRepository for MongoDbClient {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        let mut cursor = self.get_todos_collection().find(None, None).await?;
        let mut result = Vec::new();
        while cursor.advance().await? {
            result.push(cursor.deserialize_current()?);
        }
        Ok(result)
    }

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>, RepositoryError> {
        let filter = doc! { "_id": *id };
        Ok(self.get_todos_collection().find_one(filter, None).await?)
    }

    async fn create(&self, body: String) -> Result<Todo, RepositoryError> {
        let mut todo = Todo::new(body);
        let result = self.get_todos_collection().insert_one(&todo, None).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(RepositoryError::UnexpectedId)?;
        todo.id = Some(id);
        Ok(todo)
    }

    async fn update_body(&self, id: &ObjectId, body: String) -> Result<u64, RepositoryError> {
        let filter = doc! { "_id": *id };
        let update = doc! { "$set": { "body": body, "completed": false } };
        let result = self
            .get_todos_collection()
            .update_one(filter, update, None)
            .await?;
        Ok(result.matched_count)
    }

    async fn complete(&self, id: &ObjectId) -> Result<u64, RepositoryError> {
        let filter = doc! { "_id": *id };
        let update = doc! { "$set": { "completed": true } };
        let result = self
            .get_todos_collection()
            .update_one(filter, update, None)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: &ObjectId) -> Result<u64, RepositoryError> {
        let filter = doc! { "_id": *id };
        let result = self.get_todos_collection().delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }
}
