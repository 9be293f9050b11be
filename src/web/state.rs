use std::sync::Arc;

use refract_site::site::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}
