use axum::{
    body::HttpBody,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::Json,
    routing::get,
    BoxError, Router,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_books_cmd::{GetBooksCommand, GetBooksCommandRequest, GetBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ServerError};
use crate::core::domain::{Identifiable, BOOKS_PATH};
use crate::core::library::LibraryError;

pub fn routes<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route(BOOKS_PATH, get(find_books).post(add_book))
        .route(format!("{}/", BOOKS_PATH).as_str(), get(find_books).post(add_book))
        .route(format!("{}/:id", BOOKS_PATH).as_str(), get(find_book_by_id))
        .with_state(state)
}

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.books.clone())
}

pub(crate) async fn find_books(
    State(state): State<AppState>) -> Result<Json<GetBooksCommandResponse>, ServerError> {
    tracing::info!("GET {}", BOOKS_PATH);
    let svc = build_service(&state);
    let res = GetBooksCommand::new(svc).execute(GetBooksCommandRequest::default()).await.map_err(|err| {
        tracing::error!("failed to list books {:?}", err);
        err
    })?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    tracing::info!(book_id, "GET {}/:id", BOOKS_PATH);
    let req = GetBookCommandRequest::new(book_id);
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await.map_err(|err| {
        tracing::warn!(book_id, "failed to find book {:?}", err);
        err
    })?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<AddBookCommandResponse>), ServerError> {
    tracing::info!("POST {}", BOOKS_PATH);
    let req: AddBookCommandRequest = serde_json::from_value(json.0)
        .map_err(LibraryError::from)
        .map_err(|err| {
            tracing::warn!("invalid book payload {}", err);
            CommandError::from(err)
        })?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await.map_err(|err| {
        tracing::warn!("failed to add book {:?}", err);
        err
    })?;
    let location = location_of(&res)?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(res)))
}

// collection path followed by the assigned id
fn location_of(book: &BookDto) -> Result<HeaderValue, ServerError> {
    let id = book.id().ok_or_else(|| {
        tracing::error!("created book has no id {:?}", book);
        (StatusCode::INTERNAL_SERVER_ERROR, "created book has no id".to_string())
    })?;
    let uri = Uri::try_from(format!("{}/{}", BOOKS_PATH, id)).map_err(|err| {
        tracing::error!("failed to build location for {} due to {}", id, err);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
    })?;
    HeaderValue::try_from(uri.to_string())
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)))
}
