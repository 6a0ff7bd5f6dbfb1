use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.save(&BookEntity::from(book)).await?;
        Ok(BookDto::from(&saved))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.get_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        if id < 1 {
            return Err(LibraryError::invalid_argument(
                "Id must not be less than 1", Some(id.to_string())));
        }
        self.book_repository.get(id).await?
            .map(|b| BookDto::from(&b))
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: Some(other.id),
            author: other.author.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        match other.id {
            Some(id) => BookEntity::new(id, other.author.as_str()),
            None => BookEntity::draft(other.author.as_str()),
        }
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::core::repository::RepositoryStore;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), create_book_repository(RepositoryStore::InMemory))
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = BookDto::new("Tom");
        let saved = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(book.author, saved.author);

        let loaded = catalog_svc.find_book_by_id(saved.id.expect("should assign id")).await.expect("should return book");
        assert_eq!(saved, loaded);
    }

    #[tokio::test]
    async fn test_should_ignore_client_supplied_id() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), create_book_repository(RepositoryStore::InMemory));

        let book = BookDto { id: Some(99), author: "Tom".to_string() };
        let saved = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(Some(1), saved.id);
    }

    #[tokio::test]
    async fn test_should_find_books() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), create_book_repository(RepositoryStore::InMemory));
        assert!(catalog_svc.find_books().await.expect("should list books").is_empty());

        let first = catalog_svc.add_book(&BookDto::new("Tom")).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Jerry")).await.expect("should add book");

        let res = catalog_svc.find_books().await.expect("should list books");
        assert_eq!(2, res.len());
        assert_eq!(first, res[0]);
    }

    #[tokio::test]
    async fn test_should_reject_id_less_than_one() {
        let catalog_svc = SUT_SVC.get().await;
        assert!(matches!(catalog_svc.find_book_by_id(0).await, Err(LibraryError::InvalidArgument { .. })));
        assert!(matches!(catalog_svc.find_book_by_id(-5).await, Err(LibraryError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_should_not_find_missing_book() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), create_book_repository(RepositoryStore::InMemory));
        assert!(matches!(catalog_svc.find_book_by_id(1).await, Err(LibraryError::NotFound { .. })));
    }
}
