// src/logging.rs
//
// log ファサードの出力先をブラウザのコンソールにする

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        ConsoleLogger { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// "off" / "error" / "warn" / "info" / "debug" / "trace"（大文字小文字は問わない）
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level).map_err(|_| format!("Unknown log level: {}", level))
}

/// ConsoleLogger をグローバルロガーとして登録する。二度目以降はエラー文字列を返す
pub fn install(level: &str) -> Result<(), String> {
    let filter = parse_level(level)?;
    log::set_boxed_logger(Box::new(ConsoleLogger::new(filter))).map_err(|e| e.to_string())?;
    log::set_max_level(filter);
    Ok(())
}
