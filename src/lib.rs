pub mod app;
pub mod config;
pub mod domain;
pub mod http;

#[derive(Clone)]
pub struct AppState {
    pub body_limit_bytes: usize,
    pub batch_max_items: usize,
}
