use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// データファイルの時刻表現。ISO 8601 風の固定幅文字列で、
/// 辞書順の比較が時刻順の比較と一致することを前提にしている。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 空き確認リクエストで指定される時間帯。start < end を構築時に強制する。
#[derive(Debug, Clone)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::UnprocessableEntity(format!(
                "start time ({start}) must be before end time ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    pub fn end(&self) -> &Timestamp {
        &self.end
    }

    /// 二つの時間帯が交差するかどうか。
    /// 境界の一致（片方の終了時刻 = もう片方の開始時刻）は交差とみなさない。
    pub fn overlaps(&self, other_start: &Timestamp, other_end: &Timestamp) -> bool {
        self.start < *other_end && self.end > *other_start
    }
}
