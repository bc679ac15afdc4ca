//! Rolling Logger
//!
//! File logger for the desktop host:
//! - one log file per day, newest `MAX_LOG_FILES` kept
//! - the last `BUFFER_CAPACITY` lines kept in memory for diagnostics
//! - `log` records are bridged into `tracing`, so callers can use either facade

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

mod buffer;
mod writer;

pub use buffer::RingBuffer;
pub use writer::RollingFileWriter;

/// Daily files kept on disk
pub const MAX_LOG_FILES: usize = 7;
/// Lines kept in memory
pub const BUFFER_CAPACITY: usize = 500;

static RECENT: OnceLock<Arc<Mutex<RingBuffer>>> = OnceLock::new();

/// Initialize the global logger writing into `log_dir`.
///
/// Can be called once per process; later calls return an error.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    #[cfg(target_os = "android")]
    {
        let _ = log_dir;
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        return Ok(());
    }

    #[cfg(not(target_os = "android"))]
    {
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;

        let buffer = Arc::new(Mutex::new(RingBuffer::new(BUFFER_CAPACITY)));
        RECENT
            .set(buffer.clone())
            .map_err(|_| "Logger already initialized".to_string())?;

        let sink = LogSink {
            file: Arc::new(Mutex::new(RollingFileWriter::new(log_dir, app_name, MAX_LOG_FILES))),
            buffer,
        };

        tracing_subscriber::fmt()
            .with_writer(sink)
            .with_ansi(false)
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .map_err(|e| format!("Failed to install logger: {}", e))
    }
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_logs() -> Vec<String> {
    RECENT
        .get()
        .and_then(|b| b.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}

fn ensure_initialized() -> Result<(), String> {
    if cfg!(target_os = "android") || RECENT.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

/// Fan-out target for the fmt layer: daily file + ring buffer
#[derive(Clone)]
struct LogSink {
    file: Arc<Mutex<RollingFileWriter>>,
    buffer: Arc<Mutex<RingBuffer>>,
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.buffer.lock() {
            for line in String::from_utf8_lossy(buf).lines() {
                buffer.push(line.to_string());
            }
        }
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_for_date(buf, chrono::Local::now().date_naive())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    // The subscriber is process-global, so the whole lifecycle lives in one test
    #[test]
    fn test_free_functions_follow_init() {
        assert!(info("too early").is_err());
        assert!(recent_logs().is_empty());

        let dir = tempfile::tempdir().unwrap();
        init_logger(dir.path().to_path_buf(), "QuillForge").unwrap();
        assert!(init_logger(dir.path().to_path_buf(), "QuillForge").is_err());

        info("board ready").unwrap();
        warn("storage slow").unwrap();
        error("assistant failed").unwrap();
        log::info!("via log facade");

        let lines = recent_logs();
        for expected in ["board ready", "storage slow", "assistant failed", "via log facade"] {
            assert!(lines.iter().any(|l| l.contains(expected)), "missing {}", expected);
        }
        assert!(lines.iter().any(|l| l.contains("WARN") && l.contains("storage slow")));

        let files = RollingFileWriter::new(dir.path().to_path_buf(), "QuillForge", MAX_LOG_FILES)
            .log_files()
            .unwrap();
        assert_eq!(files.len(), 1);
        let written = std::fs::read_to_string(&files[0]).unwrap();
        assert!(written.contains("assistant failed"));
    }
}
