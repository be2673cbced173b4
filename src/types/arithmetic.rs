// src/types/arithmetic.rs
//
// 四則演算と符号反転
// 結果は約分しない。既約形が必要なら simplify() を呼ぶ。

use super::rational::Rational;
use crate::error::Result;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! trace_arith {
    ($op:expr, $lhs:expr, $rhs:expr) => {
        #[cfg(feature = "trace-arith")]
        log::trace!("{} {:?} {:?}", $op, $lhs, $rhs);
    };
}

impl Rational {
    /// 加算: 通分してから分子を足す
    pub fn add(&self, other: &Rational) -> Rational {
        trace_arith!("add", self, other);
        let (a, b) = Rational::normalize(self, other);
        let (a_num, common) = a.into_parts();
        let (b_num, _) = b.into_parts();
        Rational::from_nonzero(a_num + b_num, common)
    }

    /// 減算: 通分してから分子を引く
    pub fn sub(&self, other: &Rational) -> Rational {
        trace_arith!("sub", self, other);
        let (a, b) = Rational::normalize(self, other);
        let (a_num, common) = a.into_parts();
        let (b_num, _) = b.into_parts();
        Rational::from_nonzero(a_num - b_num, common)
    }

    /// 乗算: (a/b) × (c/d) = (a×c)/(b×d)
    pub fn mul(&self, other: &Rational) -> Rational {
        trace_arith!("mul", self, other);
        Rational::from_nonzero(
            self.numerator() * other.numerator(),
            self.denominator() * other.denominator(),
        )
    }

    /// 除算: (a/b) ÷ (c/d) = (a×d)/(b×c)
    /// c = 0 のとき分母がゼロになり DivisionByZero
    pub fn div(&self, other: &Rational) -> Result<Rational> {
        trace_arith!("div", self, other);
        Rational::new(
            self.numerator() * other.denominator(),
            self.denominator() * other.numerator(),
        )
    }

    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        self.div(other).ok()
    }

    pub fn neg(&self) -> Rational {
        Rational::from_nonzero(-self.numerator(), self.denominator().clone())
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            Rational::neg(self)
        } else {
            self.clone()
        }
    }

    /// 逆数。ゼロの逆数は DivisionByZero
    pub fn recip(&self) -> Result<Rational> {
        Rational::new(self.denominator().clone(), self.numerator().clone())
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational::$method(self, rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational::$method(&self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational::$method(&self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::neg(&self)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(BigInt::one())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, &x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, x))
    }
}
