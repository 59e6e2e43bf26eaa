use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::{
    config::DataConfig,
    error::{AppError, AppResult},
};

pub mod model;

/// フラットな JSON ファイル群を置いたディレクトリへのハンドル。
/// キャッシュは持たず、リポジトリの呼び出しごとにファイルを読み直す。
/// 書き込み経路がないため、リクエスト間で共有する可変状態も存在しない。
#[derive(Clone)]
pub struct JsonDataStore {
    root: Arc<PathBuf>,
}

impl JsonDataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub(crate) async fn load<D: DeserializeOwned>(&self, file_name: &str) -> AppResult<D> {
        let path = self.root.join(file_name);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::DataStoreError)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// ヘルスチェック用。データディレクトリが読めるかだけを見る。
    pub(crate) async fn is_readable(&self) -> bool {
        tokio::fs::read_dir(self.root.as_ref()).await.is_ok()
    }
}

pub fn connect_datastore_with(cfg: &DataConfig) -> JsonDataStore {
    JsonDataStore::new(cfg.root.clone())
}
