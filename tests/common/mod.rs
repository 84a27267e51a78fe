#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use tinylink::application::services::LinkStore;
use tinylink::infrastructure::persistence::MemoryLinkRepository;
use tinylink::routes::app_router;
use tinylink::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LinkStore::new(MemoryLinkRepository::new())))
}

pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub fn is_generated_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= 8
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
