pub enum Environment {
    Development,
    Production,
}

/// 環境変数 ENV から実行環境を判定する。未設定なら開発環境扱い。
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development".into();
    #[cfg(not(debug_assertions))]
    let default_env = "production".into();

    match std::env::var("ENV").unwrap_or(default_env).as_str() {
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}
