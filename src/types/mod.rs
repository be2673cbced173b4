// src/types/mod.rs
//
// 有理数型（Rational）
//
// ============================================================================
// 内部表現
// ============================================================================
//
// | 構築                    | 内部表現      | 表示     |
// |-------------------------|---------------|----------|
// | Rational::new(2, 4)     | (2, 4)        | 1/2      |
// | Rational::new(-2, 4)    | (-2, 4)       | -1/2     |
// | Rational::new(3, -6)    | (3, -6)       | -1/2     |
// | Rational::new(0, -5)    | (0, -5)       | 0        |
// | Rational::new(2, 1)     | (2, 1)        | 2        |
//
// 内部表現は構築時のまま保持され、演算結果も約分されない。
// 既約形が必要な箇所（表示・ハッシュ・丸め）は simplify() を経由する。

pub mod rational;
pub mod arithmetic;
pub mod display;

#[cfg(test)]
mod tests;

use crate::error::Result;
use num_bigint::BigInt;

pub use self::rational::Rational;

/// 整数型から分数を組み立てる補助トレイト
///
/// `Into<BigInt>` を実装する任意の整数型で `n.div_by(d)` と書ける。
///
/// ```
/// use rational_core::DivBy;
///
/// let half = 1i64.div_by(2).unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// ```
pub trait DivBy<D> {
    fn div_by(self, denominator: D) -> Result<Rational>;
}

impl<N, D> DivBy<D> for N
where
    N: Into<BigInt>,
    D: Into<BigInt>,
{
    fn div_by(self, denominator: D) -> Result<Rational> {
        Rational::new(self.into(), denominator.into())
    }
}
