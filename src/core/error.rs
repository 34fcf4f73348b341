// Custom error types for object construction
// ビルダー・ファクトリー共通のエラー型定義

use std::fmt;
use thiserror::Error;

/// オブジェクト生成時のエラー型
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("不正な引数: {field} = {value:?} - {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("必須フィールド未設定: {field}")]
    MissingField { field: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("シリアライズエラー: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ConstructionError {
    /// 不正な引数エラーの作成
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 必須フィールド未設定エラーの作成
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// エラーに関係するフィールド名を取得
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } | Self::MissingField { field } => Some(field),
            Self::Configuration { .. } | Self::Serialization { .. } => None,
        }
    }

    /// 呼び出し側が値を直して再試行できるかどうか
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } | Self::MissingField { .. } => true,
            Self::Configuration { .. } | Self::Serialization { .. } => false,
        }
    }
}

/// 生成処理の結果型
pub type ConstructionResult<T> = std::result::Result<T, ConstructionError>;

/// セッターに拒否された入力
///
/// 消費型ビルダーはセッター呼び出しで自身を手放すため、
/// 失敗時は受け取ったビルダーを変更せずにエラーと一緒に返す。
pub struct Rejected<B> {
    builder: B,
    error: ConstructionError,
}

impl<B> Rejected<B> {
    pub fn new(builder: B, error: ConstructionError) -> Self {
        Self { builder, error }
    }

    /// 拒否の原因
    pub fn error(&self) -> &ConstructionError {
        &self.error
    }

    /// 変更されていないビルダーを取り戻す
    pub fn into_builder(self) -> B {
        self.builder
    }

    pub fn into_parts(self) -> (B, ConstructionError) {
        (self.builder, self.error)
    }
}

impl<B> fmt::Debug for Rejected<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("builder", &std::any::type_name::<B>())
            .field("error", &self.error)
            .finish()
    }
}

impl<B> fmt::Display for Rejected<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<B> std::error::Error for Rejected<B> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<B> From<Rejected<B>> for ConstructionError {
    fn from(rejected: Rejected<B>) -> Self {
        rejected.error
    }
}
