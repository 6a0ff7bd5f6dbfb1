use serde::{Deserialize, Serialize};

// BookEntity is the stored form of a book, its id is assigned by the repository on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub author: String,
}

impl BookEntity {
    pub fn new(id: i64, author: &str) -> Self {
        Self {
            id,
            author: author.to_string(),
        }
    }

    // a book that has not been saved yet
    pub fn draft(author: &str) -> Self {
        Self::new(0, author)
    }
}
