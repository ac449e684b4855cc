//! HTTP request handlers for the web server.

mod api;
mod pages;
mod static_files;
mod upload;

// Re-export handlers for use by the router
pub use api::api_status;
pub use pages::index;
pub use static_files::{serve_css, serve_js, serve_upload};
pub use upload::upload_image;
