use actix_web::{get, web, HttpResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Prometheus text exposition of everything the `Metrics` middleware records.
#[get("/metrics")]
pub async fn metrics_endpoint(handle: web::Data<PrometheusHandle>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(handle.render())
}
