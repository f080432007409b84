//! Backend wiring: picks the store, builds the booking manager and the admin
//! token issuer from configuration.

use std::sync::Arc;

use hotelier_auth::{Hs256Jwt, JwtValidator};
use hotelier_infra::{
    AppConfig, AuthSettings, BookingManager, HotelStore, InMemoryHotelStore, PostgresHotelStore,
    StoreResult, db,
};

/// Admin login settings plus the token issuer derived from them.
pub struct AdminAuth {
    admin_password: String,
    jwt: Arc<Hs256Jwt>,
}

impl AdminAuth {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            admin_password: settings.admin_password.clone(),
            jwt: Arc::new(Hs256Jwt::new(settings.jwt_secret.as_bytes(), settings.token_ttl)),
        }
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn jwt(&self) -> &Hs256Jwt {
        &self.jwt
    }
}

/// Shared handles every handler reaches through `Extension<Arc<AppServices>>`.
pub struct AppServices {
    store: Arc<dyn HotelStore>,
    bookings: BookingManager<dyn HotelStore>,
    admin: Option<AdminAuth>,
}

impl AppServices {
    pub fn new(store: Arc<dyn HotelStore>, auth: Option<&AuthSettings>) -> Self {
        Self {
            bookings: BookingManager::new(Arc::clone(&store)),
            store,
            admin: auth.map(AdminAuth::new),
        }
    }

    pub fn store(&self) -> &dyn HotelStore {
        self.store.as_ref()
    }

    pub fn bookings(&self) -> &BookingManager<dyn HotelStore> {
        &self.bookings
    }

    /// `None` when admin auth is disabled.
    pub fn admin(&self) -> Option<&AdminAuth> {
        self.admin.as_ref()
    }

    pub fn jwt_validator(&self) -> Option<Arc<dyn JwtValidator>> {
        self.admin
            .as_ref()
            .map(|admin| Arc::clone(&admin.jwt) as Arc<dyn JwtValidator>)
    }
}

/// Connect to Postgres when `DATABASE_URL` is set, otherwise fall back to the
/// in-memory store.
pub async fn build_services(config: &AppConfig) -> StoreResult<AppServices> {
    let store: Arc<dyn HotelStore> = match &config.database_url {
        Some(url) => {
            let pool = db::connect(url, config.db_max_connections).await?;
            Arc::new(PostgresHotelStore::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set; using the in-memory store");
            Arc::new(InMemoryHotelStore::new())
        }
    };

    Ok(AppServices::new(store, config.auth.as_ref()))
}
