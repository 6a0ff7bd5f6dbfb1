use async_trait::async_trait;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.author.as_str())
    }
}

pub type AddBookCommandResponse = BookDto;

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::factory::create_book_repository;
    use crate::core::repository::RepositoryStore;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), create_book_repository(RepositoryStore::InMemory));
                AddBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("Tom"))
            .await.expect("should add book");
        assert_eq!("Tom", res.author.as_str());
        assert!(res.id.is_some());
    }

    #[tokio::test]
    async fn test_should_parse_request_ignoring_id() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"id":12,"author":"Jerry"}"#)
            .expect("should parse request");
        let book = req.build_book();
        assert_eq!("Jerry", book.author.as_str());
        assert_eq!(None, book.id);
    }
}
