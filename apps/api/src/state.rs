use crate::config::Config;
use crate::layout::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry used by the default line estimator in the autofit loop.
    pub geometry: PageGeometry,
}
