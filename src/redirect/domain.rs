use std::collections::BTreeMap;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use cookie::time::Duration;
use cookie::Cookie;
use crate::core::controller::ServerError;
use crate::core::domain::REDIRECT_PATH;

pub const TARGET_VIEW: &str = "targetView";
pub const TARGET_VIEW_BODY: &str = "{'msg':'This is the Target View'}";

const REDIRECT_PREFIX: &str = "redirect:";
const FORWARD_PREFIX: &str = "forward:";
const FLASH_MAX_AGE_SECS: i64 = 180;

// ModelMap holds display attributes handed from a handler to the next hop
pub type ModelMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTarget {
    pub location: String,
    pub status: StatusCode,
    pub attributes: ModelMap,
    pub flash_attributes: ModelMap,
}

impl RedirectTarget {
    pub fn new(location: &str) -> Self {
        Self {
            location: resolve_path(location),
            status: StatusCode::FOUND,
            attributes: ModelMap::new(),
            flash_attributes: ModelMap::new(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn add_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn add_flash_attribute(mut self, name: &str, value: &str) -> Self {
        self.flash_attributes.insert(name.to_string(), value.to_string());
        self
    }

    // location with attributes appended as query parameters
    pub fn url(&self) -> Result<String, ServerError> {
        if self.attributes.is_empty() {
            return Ok(self.location.clone());
        }
        let query = serde_urlencoded::to_string(&self.attributes)
            .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)))?;
        let separator = if self.location.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", self.location, separator, query))
    }

    fn flash_cookies(&self) -> Vec<String> {
        self.flash_attributes.iter()
            .map(|(k, v)| Cookie::build((k.as_str(), v.as_str()))
                .path(REDIRECT_PATH)
                .max_age(Duration::seconds(FLASH_MAX_AGE_SECS))
                .http_only(true)
                .build()
                .encoded()
                .to_string())
            .collect()
    }

    fn to_response(&self) -> Result<Response, ServerError> {
        let location = header_value(self.url()?)?;
        tracing::info!(location = ?location, status = self.status.as_u16(), "redirecting");
        let mut response = self.status.into_response();
        let headers = response.headers_mut();
        headers.insert(header::LOCATION, location);
        for cookie in self.flash_cookies() {
            headers.append(header::SET_COOKIE, header_value(cookie)?);
        }
        Ok(response)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    // new client round trip to another location
    Redirect(RedirectTarget),
    // server side dispatch to a view, the client sees the view response
    Forward { view: String, model: ModelMap },
    View(String),
}

impl Navigation {
    // view names may carry a `redirect:` or `forward:` prefix, model attributes
    // become query parameters of a redirect
    pub fn from_view_name(name: &str, model: ModelMap) -> Self {
        if let Some(target) = name.strip_prefix(REDIRECT_PREFIX) {
            let mut redirect = RedirectTarget::new(target);
            redirect.attributes = model;
            Navigation::Redirect(redirect)
        } else if let Some(view) = name.strip_prefix(FORWARD_PREFIX) {
            Navigation::Forward { view: view.to_string(), model }
        } else {
            Navigation::View(name.to_string())
        }
    }

    fn to_response(&self) -> Result<Response, ServerError> {
        match self {
            Navigation::Redirect(target) => target.to_response(),
            Navigation::Forward { view, model } => {
                tracing::info!(view = %view, "forwarding with {:?}", model);
                render_view(view)
            }
            Navigation::View(view) => render_view(view),
        }
    }
}

impl IntoResponse for Navigation {
    fn into_response(self) -> Response {
        match self.to_response() {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("failed to navigate {:?} due to {:?}", self, err);
                err.into_response()
            }
        }
    }
}

fn target_view() -> Response {
    (StatusCode::OK, TARGET_VIEW_BODY).into_response()
}

fn resolve_view(name: &str) -> Option<fn() -> Response> {
    match name {
        TARGET_VIEW => Some(target_view),
        _ => None,
    }
}

pub fn render_view(name: &str) -> Result<Response, ServerError> {
    resolve_view(name)
        .map(|view| view())
        .ok_or_else(|| (StatusCode::INTERNAL_SERVER_ERROR, format!("unknown view {}", name)))
}

// relative targets resolve against the redirect controller path
fn resolve_path(target: &str) -> String {
    if target.starts_with('/') || target.contains("://") {
        target.to_string()
    } else {
        format!("{}/{}", REDIRECT_PATH, target)
    }
}

fn header_value(value: String) -> Result<HeaderValue, ServerError> {
    HeaderValue::try_from(value)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)))
}
