// src/error.rs
//
// 有理数型のエラー定義
// 構築・除算・パースの失敗を呼び出し元へそのまま返す

use std::fmt;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// 分母がゼロになる構築、またはゼロでの除算
    DivisionByZero,
    /// 文字列が `integer ("/" integer)?` の形になっていない
    InvalidFormat { input: String, reason: String },
}

impl RationalError {
    /// パースエラーを生成する
    pub fn invalid_format(input: &str, reason: &str) -> Self {
        RationalError::InvalidFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::InvalidFormat { input, reason } => {
                write!(f, "Invalid rational format '{}': {}", input, reason)
            },
        }
    }
}

impl std::error::Error for RationalError {}
