//! Binary entry point: wire the stores to the bus and serve

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use vitrine::config::AppConfig;
use vitrine::core::events::EventBus;
use vitrine::server::ServerBuilder;
use vitrine::storage::{InMemoryContactStore, InMemorySettingsStore, InMemoryVehicleStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("VITRINE_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    let bus = EventBus::new(config.server.event_capacity);
    let vehicles = InMemoryVehicleStore::new().with_event_bus(bus.clone());
    let contacts = InMemoryContactStore::new().with_event_bus(bus.clone());
    let settings =
        InMemorySettingsStore::new(config.settings.clone()).with_event_bus(bus.clone());

    let listen_addr = config.server.listen_addr.clone();
    let app = ServerBuilder::new()
        .with_config(config)
        .with_vehicle_store(vehicles)
        .with_contact_store(contacts)
        .with_settings_store(settings)
        .with_event_bus(bus)
        .build()?;

    let listener = TcpListener::bind(&listen_addr).await?;
    tracing::info!(addr = %listen_addr, "vitrine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
