//! Per-request gateway resolution.
//!
//! The data mode and the BB client both derive from the persisted API
//! settings row. Resolving them here, once per request, is what guarantees
//! a settings save takes effect immediately and that every screen applies
//! the same fallback rules (no per-handler mode inference).

use creatorhub_bb::BbClient;
use creatorhub_core::mode::{DataMode, ModeInputs};
use creatorhub_db::models::api_settings::ApiSettings;
use creatorhub_db::repositories::ApiSettingsRepo;
use creatorhub_db::DbPool;

/// The resolved external-data context for one request.
pub struct GatewayContext {
    /// The resolved operating mode.
    pub mode: DataMode,
    /// A client for the platform. Present only in live mode.
    pub client: Option<BbClient>,
    /// The raw settings row, when one was readable.
    pub settings: Option<ApiSettings>,
}

impl GatewayContext {
    /// Resolve mode and client from the settings row. Never errors: a
    /// failed settings read resolves to `DataMode::Error`, which gates
    /// exactly like mock mode.
    pub async fn resolve(pool: &DbPool) -> Self {
        let read = ApiSettingsRepo::get(pool).await;

        let mode = match &read {
            Ok(settings) => {
                let inputs = settings.as_ref().map(|s| ModeInputs {
                    base_url: s.base_url.clone(),
                    has_api_key: !s.api_key.is_empty(),
                    mock_mode: s.mock_mode,
                });
                DataMode::resolve(Ok(inputs.as_ref()))
            }
            Err(err) => {
                tracing::error!(error = %err, "API settings read failed; resolving mode to error");
                DataMode::resolve(Err(()))
            }
        };

        let settings = read.ok().flatten();
        let client = if mode.allows_live_sync() {
            settings
                .as_ref()
                .map(|s| BbClient::new(&s.base_url, &s.api_key))
        } else {
            None
        };

        Self {
            mode,
            client,
            settings,
        }
    }
}
