use axum::{
    body::HttpBody,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use crate::core::controller::ServerError;
use crate::core::domain::REDIRECT_PATH;
use crate::redirect::domain::{render_view, ModelMap, Navigation, RedirectTarget, TARGET_VIEW};

pub fn routes<B>() -> Router<(), B>
    where B: HttpBody + Send + 'static {
    Router::new()
        .route(path("redirectWithRedirectView").as_str(), get(redirect_with_redirect_view))
        .route(path("redirectWithRedirectPrefix").as_str(), get(redirect_with_redirect_prefix))
        .route(path("forwardWithForwardPrefix").as_str(), get(forward_with_forward_prefix))
        .route(path(TARGET_VIEW).as_str(), get(redirect_target))
        .route(path("redirectPostToGet").as_str(), post(redirect_post_to_get))
        .route(path("redirectPostToPost").as_str(), post(redirect_post_to_post))
        .route(path("redirectedPostToPost").as_str(), post(redirected_post_to_post))
}

fn path(endpoint: &str) -> String {
    format!("{}/{}", REDIRECT_PATH, endpoint)
}

fn model(attribute: &str) -> ModelMap {
    ModelMap::from([("attribute".to_string(), attribute.to_string())])
}

pub(crate) async fn redirect_with_redirect_view() -> Navigation {
    Navigation::Redirect(RedirectTarget::new(TARGET_VIEW)
        .add_flash_attribute("flashAttribute", "redirectWithRedirectView")
        .add_attribute("attribute", "redirectWithRedirectView"))
}

pub(crate) async fn redirect_with_redirect_prefix() -> Navigation {
    Navigation::from_view_name("redirect:targetView", model("redirectWithRedirectPrefix"))
}

pub(crate) async fn forward_with_forward_prefix() -> Navigation {
    Navigation::from_view_name("forward:targetView", model("forwardWithForwardPrefix"))
}

pub(crate) async fn redirect_target() -> Result<Response, ServerError> {
    render_view(TARGET_VIEW)
}

pub(crate) async fn redirect_post_to_get() -> Navigation {
    Navigation::from_view_name("redirect:targetView", ModelMap::new())
}

// 307 keeps the POST method on the next hop
pub(crate) async fn redirect_post_to_post() -> Navigation {
    Navigation::Redirect(RedirectTarget::new("redirectedPostToPost")
        .with_status(StatusCode::TEMPORARY_REDIRECT))
}

pub(crate) async fn redirected_post_to_post() -> Navigation {
    Navigation::from_view_name(TARGET_VIEW, ModelMap::new())
}
