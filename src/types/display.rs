// src/types/display.rs
//
// 文字列表現
//
// 文法: rational := integer ("/" integer)?,  integer := "-"? digit+
// 出力は常に既約形。分母が 1 のときは分子のみを表示する。

use super::rational::Rational;
use crate::error::{RationalError, Result};
use num_bigint::BigInt;
use num_traits::One;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

impl Rational {
    /// "n" または "n/d" をパースする
    pub fn parse(text: &str) -> Result<Self> {
        log::trace!("parsing rational '{}'", text);
        let mut parts = text.split('/');
        let numerator_text = parts.next().unwrap_or_default();
        let denominator_text = parts.next();
        if parts.next().is_some() {
            log::debug!("rejected '{}': more than one '/'", text);
            return Err(RationalError::invalid_format(text, "more than one '/' separator"));
        }

        let numerator = parse_integer(text, numerator_text, "numerator")?;
        let denominator = match denominator_text {
            Some(part) => parse_integer(text, part, "denominator")?,
            None => BigInt::one(),
        };
        Rational::new(numerator, denominator)
    }
}

/// 整数リテラル（符号は先頭の '-' のみ）を BigInt に変換する
pub(crate) fn parse_integer(input: &str, part: &str, role: &str) -> Result<BigInt> {
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        log::debug!("rejected '{}': {} '{}' is not an integer literal", input, role, part);
        return Err(RationalError::invalid_format(
            input,
            &format!("{} '{}' is not an integer literal", role, part),
        ));
    }
    BigInt::from_str(part).map_err(|e| RationalError::invalid_format(input, &e.to_string()))
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        Rational::parse(s)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.simplify();
        if canonical.denominator().is_one() {
            write!(f, "{}", canonical.numerator())
        } else {
            write!(f, "{}/{}", canonical.numerator(), canonical.denominator())
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Rational::parse(&text).map_err(de::Error::custom)
    }
}
