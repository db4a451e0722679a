use application::EmployeeApp;
use std::sync::Arc;
use tracing::info;

mod config;
mod routes;

use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    info!("🚀 Starting Employee API Server");
    info!("💾 Using database: {}", config.database_path);

    let employee_app = Arc::new(EmployeeApp::new(&config.database_path)?);
    let app = routes::router(AppState { employee_app });

    // Run the server
    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET    /api/employees      - List all employees");
    info!("   POST   /api/employees      - Create employee");
    info!("   GET    /api/employees/:id  - Get employee");
    info!("   PUT    /api/employees/:id  - Update employee");
    info!("   DELETE /api/employees/:id  - Delete employee");
    info!("   GET    /health             - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
