use crate::config::Config;
use crate::email::{EMAIL_ROUTE, EmailSender, send_email};
use axum::{
    Router,
    extract::{Extension, Request},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::{any, get},
};
use eyesentry_utils::version_info::format_version_for_runtime_env;
use opentelemetry::{global, propagation::Extractor};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub mod config;
pub mod email;
pub mod telemetry;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState<E> {
    pub sender: E,
}

impl<E: EmailSender> AppState<E> {
    pub fn new(sender: E) -> Self {
        Self { sender }
    }
}

struct HeaderExtractor<'a>(&'a axum::http::HeaderMap);

impl<'a> Extractor for HeaderExtractor<'a> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// Builds the service router around an email provider.
///
/// Every response, including errors and the 404 fallback, carries
/// `Access-Control-Allow-Origin: *`.
pub fn routes<E: EmailSender>(sender: E, config: Config) -> Router {
    Router::new()
        .route("/is-health", get(health_check))
        .route(EMAIL_ROUTE, any(send_email::<E>))
        .fallback(any(catch_all))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let parent_context = global::get_text_map_propagator(|propagator| {
                            propagator.extract(&HeaderExtractor(request.headers()))
                        });

                        let span = tracing::info_span!(
                            "http_request",
                            http_request.method = ?request.method(),
                            http_request.uri = ?request.uri(),
                            http_request.version = ?request.version(),
                            http_request.user_agent = ?request.headers().get(header::USER_AGENT),
                        );
                        span.set_parent(parent_context);
                        span
                    }),
                )
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(Extension(config)),
        )
        .with_state(AppState::new(sender))
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    if let Ok(env_value) = HeaderValue::from_str(&config.environment().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-env"), env_value);
    }

    let version_value = format_version_for_runtime_env(config.runtime_env());
    if let Ok(version_value) = HeaderValue::from_str(&version_value) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-version"), version_value);
    }

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
