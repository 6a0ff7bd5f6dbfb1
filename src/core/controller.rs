use std::net::SocketAddr;
use std::sync::Arc;
use axum::http::StatusCode;
use axum::Router;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, books: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            books,
        }
    }
}

pub type ServerError = (StatusCode, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

// hosts the router on a plain hyper server, the lambda adapter is used otherwise
pub async fn serve_http(addr: SocketAddr, app: Router) -> Result<(), lambda_http::Error> {
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, _) = ServerError::from(CommandError::NotFound { message: "test".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Serialization { message: "test".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Runtime { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_map_json_error_to_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let (status, message) = ServerError::from(CommandError::from(LibraryError::from(err)));
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(!message.is_empty());
    }
}
