use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct Shelf {
    books: BTreeMap<i64, BookEntity>,
    next_id: i64,
}

// ids grow monotonically so the btree order is the insertion order
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let shelf = self.shelf.read().await;
        Ok(shelf.books.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let shelf = self.shelf.read().await;
        Ok(shelf.books.get(&id).cloned())
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.write().await;
        let id = shelf.next_id;
        shelf.next_id = id.checked_add(1).ok_or_else(|| LibraryError::runtime(
            "book ids exhausted", Some("overflow".to_string())))?;
        let saved = BookEntity::new(id, entity.author.as_str());
        shelf.books.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_all(&self) -> LibraryResult<usize> {
        let mut shelf = self.shelf.write().await;
        let removed = shelf.books.len();
        shelf.books.clear();
        Ok(removed)
    }
}
