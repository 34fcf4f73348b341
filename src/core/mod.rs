// コアレイヤー - エラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ConstructionError, ConstructionResult, Rejected};
