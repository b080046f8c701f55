//! Application state wiring the chat service together.
//!
//! The chat service is generic over repository and completion-client
//! traits; AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;
use tracing::warn;

use palaver_core::chat::service::ChatService;
use palaver_infra::config::{default_data_dir, load_config};
use palaver_infra::llm::openai::OpenAiCompatClient;
use palaver_infra::sqlite::chat::SqliteChatRepository;
use palaver_infra::sqlite::pool::{DatabasePool, database_url};

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteChatRepository, OpenAiCompatClient>;

/// Shared application state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// configuration, connect to the database, wire the chat service.
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        // Initialize database (runs migrations)
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;
        let chat_repo = SqliteChatRepository::new(db_pool);

        // A missing key does not prevent startup; completion requests fail
        // at call time instead.
        let api_key = match std::env::var(&config.provider.api_key_env) {
            Ok(key) => SecretString::from(key),
            Err(_) => {
                warn!(
                    env_var = %config.provider.api_key_env,
                    "Provider API key not set; completion requests will fail"
                );
                SecretString::from(String::new())
            }
        };
        let client = OpenAiCompatClient::new(&config.provider, api_key);

        let chat_service = ChatService::new(chat_repo, client);

        Ok(Self {
            chat_service: Arc::new(chat_service),
        })
    }
}
