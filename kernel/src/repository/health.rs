use async_trait::async_trait;

#[async_trait]
pub trait HealthCheckRepository: Send + Sync {
    /// データディレクトリが読めるかどうか
    async fn check_datastore(&self) -> bool;
}
