use std::sync::Once;
use vestibule_server::config::{AuthConfig, Config, LogFormat, ServerConfig, TelemetryConfig};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("vestibule_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

#[allow(dead_code)]
pub fn get_test_config() -> Config {
    Config {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        auth: AuthConfig {
            token_secret: "test_secret".to_string(),
            token_ttl_secs: 3600,
            token_issuer: "vestibule-test".to_string(),
            cookie_secure: false,
            password_min_length: 8,
            password_max_length: 32,
            username_min_length: 3,
            username_max_length: 32,
        },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    #[allow(dead_code)]
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(get_test_config()).await
    }

    pub async fn spawn_with_config(config: Config) -> Self {
        setup_tracing();

        let router = vestibule_server::api::app_router(config.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read test listener address");

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service()).await.expect("Test server crashed");
        });

        let client = reqwest::Client::builder().cookie_store(true).build().expect("Failed to build test client");

        Self { server_url: format!("http://{addr}"), client, config }
    }
}
