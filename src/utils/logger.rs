use crate::shared::constants;
use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => f.write_str("DEBUG"),
            Level::Info => f.write_str("INFO"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

#[derive(Clone)]
struct Sinks {
    error_path: PathBuf,
    debug_path: PathBuf,
}

lazy_static! {
    static ref SINKS: Mutex<Option<Sinks>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_fresh(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(file, "=== {} Started: {} ===", title, chrono::Local::now());
    }
}

/// Open `error.log` and `debug.log` in the working directory and install a
/// panic hook that records the backtrace before the process dies.
pub fn init() {
    let cwd = std::env::current_dir().unwrap_or_default();
    let sinks = Sinks {
        error_path: cwd.join(constants::ERROR_LOG_FILE),
        debug_path: cwd.join(constants::DEBUG_LOG_FILE),
    };

    start_fresh(&sinks.error_path, "Error Log");
    start_fresh(&sinks.debug_path, "Debug Log");

    *SINKS.lock().unwrap() = Some(sinks.clone());

    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::capture();
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &s[..],
                None => "Box<Any>",
            },
        };
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let report = format!(
            "\nCRITICAL PANIC at {}:\nMessage: {}\nBacktrace:\n{:?}\n",
            location, msg, backtrace
        );
        append_line(&sinks.error_path, &report);
        append_line(&sinks.debug_path, &report);

        println!(
            "Application crashed. See {} for details.",
            sinks.error_path.display()
        );
    }));
}

pub fn log(level: Level, msg: &str) {
    if let Some(sinks) = SINKS.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let line = format!("[{}][{}] {}", timestamp, level, msg);
        append_line(&sinks.debug_path, &line);

        if level == Level::Error {
            append_line(&sinks.error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log(Level::Info, msg);
}

pub fn error(msg: &str) {
    log(Level::Error, msg);
}

pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}
