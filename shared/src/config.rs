use anyhow::Result;
use std::path::PathBuf;

pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
        };
        let data = DataConfig {
            root: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        };
        Ok(Self { server, data })
    }
}

pub struct ServerConfig {
    pub port: u16,
}

/// JSON データファイルを置くディレクトリ
pub struct DataConfig {
    pub root: PathBuf,
}
