mod classifier;
mod config;
mod database;
mod doctor;
mod error;
mod models;
mod pages;
mod patient;
mod protocol;
mod schema;
mod session;
mod uploads;
mod utils;

#[cfg(test)]
mod test_utils;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, SqliteConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Settings, error::AppError};

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,actix_web=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();
    let pool = database::create_pool(&settings.database_url, settings.db_pool_size)?;
    database::migrate(&pool)?;
    std::fs::create_dir_all(&settings.upload_dir)?;

    if !settings.ai_analysis {
        info!("AI analysis disabled, /patient/ai is not served");
    }
    info!("Listening on {}", settings.bind_addr);

    let bind = settings.bind_addr.clone();
    let pool = web::Data::new(pool);
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure(cfg, &pool, &settings))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

pub fn configure(
    cfg: &mut web::ServiceConfig,
    pool: &web::Data<DbPool>,
    settings: &web::Data<Settings>,
) {
    let ai_analysis = settings.ai_analysis;

    pages::config(cfg);
    cfg.app_data(pool.clone())
        .app_data(settings.clone())
        .app_data(web::FormConfig::default().error_handler(|err, _req| {
            AppError::BadRequest(err.to_string()).into()
        }))
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            AppError::NotFound(err.to_string()).into()
        }))
        // patient
        .service(
            web::scope("/patient")
                .configure(|cfg| patient::config(cfg, ai_analysis)),
        )
        // doctor
        .service(
            web::scope("/doctor")
                .configure(doctor::config),
        )
        // uploaded reports
        .service(Files::new("/static/uploads", &settings.upload_dir));
}
