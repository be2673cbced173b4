// src/wasm_api.rs
//
// JavaScript 向けの Rational クラス
// エラーは文字列として返す

use crate::logging;
use crate::types::display::parse_integer;
use crate::types::Rational;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// parts() が返すオブジェクト（既約形の10進文字列）
#[derive(Debug, PartialEq, Serialize)]
struct RationalParts {
    numerator: String,
    denominator: String,
}

impl RationalParts {
    fn canonical(value: &Rational) -> Self {
        let canonical = value.simplify();
        RationalParts {
            numerator: canonical.numerator().to_string(),
            denominator: canonical.denominator().to_string(),
        }
    }

    fn raw(value: &Rational) -> Self {
        RationalParts {
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
        }
    }
}

#[wasm_bindgen(js_name = Rational)]
pub struct JsRational {
    inner: Rational,
}

impl JsRational {
    pub fn as_rational(&self) -> &Rational {
        &self.inner
    }
}

impl From<Rational> for JsRational {
    fn from(inner: Rational) -> Self {
        JsRational { inner }
    }
}

#[wasm_bindgen(js_class = Rational)]
impl JsRational {
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: &str, denominator: &str) -> Result<JsRational, String> {
        let input = format!("{}/{}", numerator, denominator);
        let numerator = parse_integer(&input, numerator, "numerator").map_err(|e| e.to_string())?;
        let denominator = parse_integer(&input, denominator, "denominator").map_err(|e| e.to_string())?;
        Rational::new(numerator, denominator)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<JsRational, String> {
        Rational::parse(text)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn add(&self, other: &JsRational) -> JsRational {
        self.inner.add(&other.inner).into()
    }

    #[wasm_bindgen]
    pub fn sub(&self, other: &JsRational) -> JsRational {
        self.inner.sub(&other.inner).into()
    }

    #[wasm_bindgen]
    pub fn mul(&self, other: &JsRational) -> JsRational {
        self.inner.mul(&other.inner).into()
    }

    #[wasm_bindgen]
    pub fn div(&self, other: &JsRational) -> Result<JsRational, String> {
        self.inner
            .div(&other.inner)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn neg(&self) -> JsRational {
        self.inner.neg().into()
    }

    #[wasm_bindgen]
    pub fn simplify(&self) -> JsRational {
        self.inner.simplify().into()
    }

    /// -1 / 0 / 1
    #[wasm_bindgen]
    pub fn compare(&self, other: &JsRational) -> i32 {
        self.inner.compare_to(&other.inner)
    }

    /// 値として等しいか
    ///
    /// 引数は Rational インスタンスに限る。数値や文字列など他の値を渡すと
    /// wasm-bindgen の型検査で例外になる（false は返さない）。
    /// 任意の値と比べる場合は JS 側で `other instanceof Rational` を先に確認する。
    #[wasm_bindgen]
    pub fn equals(&self, other: &JsRational) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = isInteger)]
    pub fn is_integer(&self) -> bool {
        self.inner.is_integer()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.inner.to_string()
    }

    /// 既約形の { numerator, denominator }
    #[wasm_bindgen]
    pub fn parts(&self) -> Result<JsValue, String> {
        to_value(&RationalParts::canonical(&self.inner)).map_err(|e| e.to_string())
    }

    /// 約分前の [numerator, denominator]
    #[wasm_bindgen(js_name = rawParts)]
    pub fn raw_parts(&self) -> js_sys::Array {
        let parts = RationalParts::raw(&self.inner);
        js_sys::Array::of2(
            &JsValue::from_str(&parts.numerator),
            &JsValue::from_str(&parts.denominator),
        )
    }
}

#[wasm_bindgen(js_name = initConsoleLogging)]
pub fn init_console_logging(level: &str) -> Result<(), String> {
    logging::install(level)
}
