use actix_web::{middleware, web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use kfservice_snapshot::{crd, errors, init_controller, views, Config, ControllerEnvironmentConfig};
use kube::client::Client;
use log::{debug, info, warn};
use prometheus::Registry;

#[actix_rt::main]
async fn main() -> Result<(), errors::Error> {
    env_logger::init();

    let env_config: ControllerEnvironmentConfig = envy::from_env::<ControllerEnvironmentConfig>()?;
    debug!("Environment config: {:?}", &env_config);
    let config = Config::from_env_config(env_config)?;
    info!("Starting with config: {:?}", config);

    let bind_address = config.bind_address();

    let client = Client::try_default().await?;
    let (controller, watch) = init_controller(client, &config);

    let registry = Registry::new();
    crd::metrics::custom_metrics(&registry)?;
    let prometheus = PrometheusMetricsBuilder::new(crd::metrics::METRICS_NAMESPACE)
        .registry(registry)
        .endpoint("/metrics")
        .build()
        .map_err(|err| errors::Error::Metrics(err.to_string()))?;

    let data = web::Data::new(controller);
    let run = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(prometheus.clone())
            .wrap(middleware::Logger::default().exclude("/health").exclude("/metrics"))
            .wrap(middleware::Compress::default())
            .service(web::resource("/health").to(views::health))
            .service(web::resource("/kfservices").to(views::kfservices))
            .service(web::resource("/kfservices/{name}").to(views::get_kfservice))
    })
    .bind(&bind_address)?
    .run();

    tokio::select! {
        _ = watch => warn!("kfservice watch drained"),
        result = run => {
            info!("actix exited");
            result?;
        }
    }
    Ok(())
}
