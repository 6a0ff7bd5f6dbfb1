use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the catalog http api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub author: String,
}

impl BookDto {
    pub fn new(author: &str) -> BookDto {
        BookDto {
            id: None,
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Tom");
        assert_eq!("Tom", book.author.as_str());
        assert_eq!(None, book.id);
    }

    #[tokio::test]
    async fn test_should_serialize_id_and_author() {
        let book = BookDto { id: Some(7), author: "Tom".to_string() };
        assert_eq!(r#"{"id":7,"author":"Tom"}"#, serde_json::to_string(&book).expect("should serialize"));
        assert_eq!(r#"{"id":null,"author":"Jerry"}"#, serde_json::to_string(&BookDto::new("Jerry")).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_deserialize_partial_payload() {
        let book: BookDto = serde_json::from_str(r#"{"author":"Tom"}"#).expect("should parse author only");
        assert_eq!(BookDto::new("Tom"), book);
        let book: BookDto = serde_json::from_str("{}").expect("should parse empty book");
        assert_eq!("", book.author.as_str());
    }
}
