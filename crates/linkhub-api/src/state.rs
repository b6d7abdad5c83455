//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use linkhub_auth::jwt::{JwtDecoder, JwtEncoder};
use linkhub_auth::password::{CredentialValidator, PasswordHasher};
use linkhub_core::config::AppConfig;
use linkhub_database::store::{LinkStore, UserStore};
use linkhub_service::account::AccountService;
use linkhub_service::link::{AlphanumericGenerator, LinkService};

use crate::middleware::session::TokenTransport;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Session token issuer
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Session token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// How tokens travel between client and server
    pub transport: TokenTransport,

    /// Registration and login
    pub account_service: Arc<AccountService>,
    /// Short link management and resolution
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wires services over the given stores.
    pub fn new(
        config: AppConfig,
        user_store: Arc<dyn UserStore>,
        link_store: Arc<dyn LinkStore>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let account_service = Arc::new(AccountService::new(
            user_store,
            Arc::new(PasswordHasher::new()),
            Arc::new(CredentialValidator::new(&config.auth)),
            Arc::clone(&jwt_encoder),
        ));
        let link_service = Arc::new(LinkService::new(
            link_store,
            Arc::new(AlphanumericGenerator::new(config.links.code_length)),
            config.links.max_attempts,
        ));

        Self {
            transport: TokenTransport::from_config(&config.auth),
            config: Arc::new(config),
            jwt_encoder,
            jwt_decoder,
            account_service,
            link_service,
        }
    }
}
