use anyhow::Result;
use axum::{middleware, response::Json, routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dotenvy::dotenv;
use serde_json::json;

use car_hire::config::environment::EnvironmentConfig;
use car_hire::database::DatabaseConnection;
use car_hire::middleware::auth::auth_middleware;
use car_hire::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_hire::routes;
use car_hire::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Hire Management - Booking API");
    info!("====================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    let pool = db_connection.pool().clone();

    let state = AppState::new(pool, config.clone());

    // CORS permisivo solo fuera de producción
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    // Rutas protegidas por el middleware de autenticación
    let protected = Router::new()
        .nest("/api/client", routes::client_routes::create_client_router())
        .nest(
            "/api/vehicle",
            routes::vehicle_routes::create_vehicle_router(),
        )
        .nest(
            "/api/booking",
            routes::booking_routes::create_booking_router(),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let app = Router::new()
        .route("/health", get(health))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(state.clone()),
        )
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("👤 Clients:");
    info!("   POST /api/client - Registrar cliente");
    info!("   GET  /api/client - Listar clientes");
    info!("   GET  /api/client/:id - Obtener cliente");
    info!("   PUT  /api/client/:id - Actualizar cliente");
    info!("   DELETE /api/client/:id - Eliminar cliente");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("📅 Bookings:");
    info!("   POST /api/booking - Crear booking");
    info!("   GET  /api/booking - Listar bookings");
    info!("   GET  /api/booking/availability - Consultar disponibilidad");
    info!("   GET  /api/booking/:id - Obtener booking");
    info!("   PUT  /api/booking/:id - Actualizar booking");
    info!("   PATCH /api/booking/:id/status - Cambiar estado");
    info!("   DELETE /api/booking/:id - Eliminar booking");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check con ping a la base de datos
async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_ok = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    Json(json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "database": db_ok,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
