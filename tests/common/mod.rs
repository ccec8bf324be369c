use portfolio_api::adapters::http;
use portfolio_api::{resolve_store, AppState, Catalog, Settings};

/// Starts the full router on an ephemeral port and returns its base URL.
pub async fn spawn_app(settings: Settings) -> String {
    let store = resolve_store(&settings);
    let app = http::router(AppState::new(Catalog::portfolio(), store, &settings));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        http::serve(listener, app, std::future::pending()).await.unwrap();
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn store_settings(base_url: &str) -> Settings {
    Settings {
        database_url: Some(base_url.to_string()),
        database_name: Some("portfolio".to_string()),
        ..Default::default()
    }
}
