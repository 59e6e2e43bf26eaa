use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::datastore::JsonDataStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    store: JsonDataStore,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_datastore(&self) -> bool {
        self.store.is_readable().await
    }
}
