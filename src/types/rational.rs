// src/types/rational.rs
//
// 有理数の値型
//
// 分子・分母は構築時に約分も符号の正規化もしない。
// 既約形（分母が正で gcd = 1）への変換は simplify() が行い、
// 表示・ハッシュ・丸めはすべて simplify() 後の値を使う。

use crate::error::{RationalError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// f64 に変換しても無限大にならないビット数
const F64_SAFE_BITS: u64 = 1000;

/// 任意精度整数の組 (numerator, denominator) で表す有理数
#[derive(Debug, Clone)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// numerator/denominator を生成する。分母がゼロなら DivisionByZero
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            log::debug!("rejected rational with zero denominator: {}/0", numerator);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational { numerator, denominator })
    }

    /// 分母が非ゼロであることが呼び出し側で保証されている場合の構築
    pub(crate) fn from_nonzero(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero(), "denominator must be non-zero");
        Rational { numerator, denominator }
    }

    /// 整数 n を n/1 として生成する
    pub fn from_integer(n: BigInt) -> Self {
        Rational::from_nonzero(n, BigInt::one())
    }

    /// 格納されている分子（約分前）
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// 格納されている分母（約分前、負の場合もある）
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// 通分: 両者の分母の積を共通分母として書き直す（約分はしない）
    pub fn normalize(a: &Rational, b: &Rational) -> (Rational, Rational) {
        let common = &a.denominator * &b.denominator;
        (
            Rational::from_nonzero(&a.numerator * &b.denominator, common.clone()),
            Rational::from_nonzero(&b.numerator * &a.denominator, common),
        )
    }

    /// 既約形に変換する
    ///
    /// g = gcd(|n|, |d|) で割り、元の分母が負なら分子の符号を反転して分母を正にする。
    /// 分子が 0 の場合は g = |d| となり 0/1 になる。
    pub fn simplify(&self) -> Rational {
        let g = self.numerator.gcd(&self.denominator);
        let numerator = &self.numerator / &g;
        let denominator = &self.denominator / &g;
        if denominator.is_negative() {
            Rational::from_nonzero(-numerator, -denominator)
        } else {
            Rational::from_nonzero(numerator, denominator)
        }
    }

    /// 既約形かどうか
    pub fn is_canonical(&self) -> bool {
        self.denominator.is_positive() && self.numerator.gcd(&self.denominator).is_one()
    }

    /// 分母の符号だけを正に揃える（約分はしない）
    fn with_positive_denominator(&self) -> Rational {
        if self.denominator.is_negative() {
            Rational::from_nonzero(-&self.numerator, -&self.denominator)
        } else {
            self.clone()
        }
    }

    pub fn is_negative(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() == self.denominator.is_negative()
    }

    /// 比較結果を -1 / 0 / 1 で返す
    pub fn compare_to(&self, other: &Rational) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// 値が整数かどうか
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// 切り捨て（負の無限大方向への丸め）
    pub fn floor(&self) -> Rational {
        let canonical = self.simplify();
        if canonical.denominator.is_one() {
            return canonical;
        }
        Rational::from_integer(canonical.numerator.div_floor(&canonical.denominator))
    }

    /// 切り上げ（正の無限大方向への丸め）
    pub fn ceil(&self) -> Rational {
        let canonical = self.simplify();
        if canonical.denominator.is_one() {
            return canonical;
        }
        let negated = -&canonical.numerator;
        Rational::from_integer(-negated.div_floor(&canonical.denominator))
    }

    /// ゼロ方向への丸め
    pub fn trunc(&self) -> Rational {
        Rational::from_integer(&self.numerator / &self.denominator)
    }

    /// 四捨五入（0.5 は 0 から遠い方向へ: round half away from zero）
    ///
    /// |x| + 1/2 = (2|n| + d) / 2d を floor して符号を戻す
    pub fn round(&self) -> Rational {
        let canonical = self.simplify();
        if canonical.denominator.is_one() {
            return canonical;
        }
        let is_negative = canonical.numerator.is_negative();
        let two = BigInt::from(2);
        let abs_num = canonical.numerator.abs();
        let result = (&abs_num * &two + &canonical.denominator) / (&two * &canonical.denominator);
        Rational::from_integer(if is_negative { -result } else { result })
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = Rational::normalize(self, other);
        a.numerator == b.numerator && a.denominator == b.denominator
    }
}

impl Eq for Rational {}

impl PartialEq<BigInt> for Rational {
    fn eq(&self, other: &BigInt) -> bool {
        self.numerator == other * &self.denominator
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // 整数同士の場合は乗算をスキップ
        if self.denominator.is_one() && other.denominator.is_one() {
            return self.numerator.cmp(&other.numerator);
        }
        // 共通分母が負だと大小が反転するため、先に分母を正に揃えてから通分する
        let (a, b) = Rational::normalize(
            &self.with_positive_denominator(),
            &other.with_positive_denominator(),
        );
        a.numerator.cmp(&b.numerator)
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.simplify();
        canonical.numerator.hash(state);
        canonical.denominator.hash(state);
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(BigInt::zero())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Rational::from_integer(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, BigInt);

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        (&self.numerator / &self.denominator).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            (&self.numerator / &self.denominator).to_u64()
        }
    }

    /// 既約形に直してから割る。既約形でも f64 の範囲を超える場合は
    /// 両方を同じビット数だけ右シフトして桁を揃える
    fn to_f64(&self) -> Option<f64> {
        let canonical = self.simplify();
        let bits = canonical.numerator.bits().max(canonical.denominator.bits());
        let excess = bits.saturating_sub(F64_SAFE_BITS);
        let num_f64 = (&canonical.numerator >> excess).to_f64()?;
        let den_f64 = (&canonical.denominator >> excess).to_f64()?;
        Some(num_f64 / den_f64)
    }
}
