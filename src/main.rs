use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use ride_booking::config::{DatabaseConfig, EnvironmentConfig};
use ride_booking::database::{seed, DatabaseConnection};
use ride_booking::routes::create_app_router;
use ride_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚕 Ride Booking API");
    info!("==================");
    info!("🌍 Entorno: {}", config.environment);
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se aceptan todos los orígenes");
    }

    // Inicializar base de datos
    let database_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    let pool = db_connection.pool().clone();

    if config.seed_sample_data {
        seed::seed_sample_data(&pool).await?;
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   POST|GET /api/users, GET|DELETE /api/users/:id");
    info!("   POST|GET /api/vehicles, GET|DELETE /api/vehicles/:id");
    info!("   POST|GET /api/rides, GET /api/rides/:id, PATCH /api/rides/:id/status");
    info!("   POST|GET /api/payments, GET /api/payments/:id, PATCH /api/payments/:id/status");
    info!("   POST|GET /api/ratings, GET /api/ratings/:id");
    info!("📊 Reportes: GET /api/reports/{{users-by-type, drivers-with-vehicles, riders-without-rides,");
    info!("   rides-by-status, completed-ride-averages, top-driver, popular-pickup, total-revenue,");
    info!("   pending-payments, top-rated-driver, negative-feedback}}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
