use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use refract_site::common::SiteError;

/// Stylesheet href as seen by the browser when served from `/static`.
pub const STYLESHEET_HREF: &str = "/static/css/custom.css";

pub fn render(status: StatusCode, page: Result<String, SiteError>) -> HttpResponse {
    match page {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render page: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}
