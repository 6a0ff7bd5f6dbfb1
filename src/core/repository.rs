use std::str::FromStr;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in storage iteration order
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;

    // get an entity if present
    async fn get(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // persists an entity and returns it with its assigned id
    async fn save(&self, entity: &Entity) -> LibraryResult<Entity>;

    // removes every entity, assigned ids are not handed out again
    async fn delete_all(&self) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(RepositoryStore::InMemory),
            other => Err(LibraryError::invalid_argument(
                format!("unknown repository store {}", other).as_str(), Some("BOOKSHELF_STORE".to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_parse_repository_store() {
        assert_eq!(RepositoryStore::InMemory, "memory".parse::<RepositoryStore>().expect("should parse store"));
        assert_eq!(RepositoryStore::InMemory, "In-Memory".parse::<RepositoryStore>().expect("should parse store"));
        assert!("dynamodb".parse::<RepositoryStore>().is_err());
    }
}
