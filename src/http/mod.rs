use crate::cli::Args;
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

pub mod middleware;
pub mod router;

/// The map client may be hosted anywhere (it is a static page), so the API
/// accepts cross-origin calls from any origin.
pub fn init(_args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
}
