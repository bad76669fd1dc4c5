//-------------------------------------------------------------
// src/middleware/metrics.rs
//-------------------------------------------------------------
use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{self, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use metrics::{histogram, increment_counter};

/// Records `http_requests_total` and `http_latency_ms` for every request.
pub struct Metrics;

impl<S, B> Transform<S, ServiceRequest> for Metrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MetricsSvc<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, srv: S) -> Self::Future {
        ready(Ok(MetricsSvc { inner: srv }))
    }
}

pub struct MetricsSvc<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for MetricsSvc<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().as_str().to_owned();

        let fut = self.inner.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let latency = start.elapsed().as_secs_f64() * 1_000.0; // → ms

            // label by route pattern so the path set stays bounded
            let path = res
                .request()
                .match_pattern()
                .unwrap_or_else(|| "unmatched".to_owned());
            let status = res.status().as_u16().to_string();

            increment_counter!(
                "http_requests_total",
                "method" => method.clone(),
                "path"   => path.clone(),
                "status" => status,
            );

            histogram!(
                "http_latency_ms",
                latency,
                "method" => method,
                "path"   => path,
            );

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    use actix_web::{test, web, App, HttpResponse};
    use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

    use crate::{routes::activities::activities_scope, services::activity_store::ActivityStore};

    // the `metrics` facade holds one process-wide recorder
    fn recorder() -> &'static PrometheusHandle {
        static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
        HANDLE.get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("install test recorder")
        })
    }

    #[actix_rt::test]
    async fn passes_responses_through() {
        let app = test::init_service(
            App::new()
                .wrap(Metrics)
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().body("pong") })),
        )
        .await;

        let req = test::TestRequest::get().uri("/ping").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"pong"));

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_rt::test]
    async fn labels_requests_by_route_pattern() {
        let handle = recorder();
        let app = test::init_service(
            App::new()
                .wrap(Metrics)
                .app_data(web::Data::new(ActivityStore::seeded()))
                .service(activities_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/activities/Chess%20Club/signup?email=counted@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let rendered = handle.render();
        let line = rendered
            .lines()
            .find(|l| {
                l.starts_with("http_requests_total{")
                    && l.contains(r#"path="/activities/{activity_name}/signup""#)
            })
            .unwrap_or_else(|| panic!("no signup counter in:\n{rendered}"));
        assert!(line.contains(r#"method="POST""#), "{line}");
        assert!(line.contains(r#"status="200""#), "{line}");
        assert!(!rendered.contains("Chess"), "raw path leaked into labels");
    }
}
