//! 任意精度整数による厳密な有理数型
//!
//! ```
//! use rational_core::Rational;
//!
//! let a: Rational = "1/2".parse().unwrap();
//! let b: Rational = "1/3".parse().unwrap();
//! assert_eq!(a.add(&b).to_string(), "5/6");
//! assert_eq!(Rational::parse("117/1098").unwrap().to_string(), "13/122");
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod wasm_api;

pub use error::{RationalError, Result};
pub use types::{DivBy, Rational};
