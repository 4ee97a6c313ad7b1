use crate::backend::DynBackend;
use crate::config::Shared;
use crate::web::routes;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: Shared,
    pub backend: DynBackend,
}

/// Binds the configured address and serves the front end until the process
/// exits or the server fails.
pub fn new(config: Shared, backend: DynBackend) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.bind_addr)
        .serve(routes::new(AppState { config, backend }).into_make_service())
}
