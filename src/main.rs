use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;

use activities_backend::{
    config::settings::Settings,
    db::seed::load_seed_file,
    middleware::metrics::Metrics,
    routes::{activities::activities_scope, health::health_check, metrics::metrics_endpoint},
    services::activity_store::ActivityStore,
};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Settings::new().unwrap_or_else(|e| {
        eprintln!("Failed to load settings: {e}");
        std::process::exit(1);
    });

    let store = match &settings.activities_file {
        Some(path) => {
            let seed = load_seed_file(path)
                .with_context(|| format!("loading activities from {}", path.display()))?;
            ActivityStore::from_activities(seed)
        }
        None => ActivityStore::seeded(),
    };
    log::info!("activity store ready with {} activities", store.len());

    // One store for every worker; `Data` is an `Arc`.
    let store = web::Data::new(store);

    let prometheus = if settings.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("installing prometheus recorder")?;
        Some(web::Data::new(handle))
    } else {
        None
    };

    log::info!(
        "starting activities backend on {}:{}",
        settings.server_host,
        settings.server_port
    );

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .wrap(Metrics)
            .app_data(store.clone())
            .service(health_check)
            .service(activities_scope());

        match &prometheus {
            Some(handle) => app.app_data(handle.clone()).service(metrics_endpoint),
            None => app,
        }
    })
        .bind((settings.server_host.as_str(), settings.server_port))?
        .run()
        .await?;

    Ok(())
}
