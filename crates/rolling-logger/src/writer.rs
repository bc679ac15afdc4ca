//! Daily rolling log file

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Appends to `<dir>/<prefix>.<YYYY-MM-DD>.log`, switching files when the
/// date changes and deleting the oldest files beyond `max_files`.
pub struct RollingFileWriter {
    dir: PathBuf,
    prefix: String,
    max_files: usize,
    current: Option<(NaiveDate, File)>,
}

impl RollingFileWriter {
    pub fn new(dir: PathBuf, prefix: &str, max_files: usize) -> Self {
        Self {
            dir,
            prefix: prefix.to_string(),
            max_files: max_files.max(1),
            current: None,
        }
    }

    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.prefix, date.format("%Y-%m-%d")))
    }

    pub fn write_for_date(&mut self, buf: &[u8], date: NaiveDate) -> io::Result<usize> {
        let needs_roll = !matches!(&self.current, Some((d, _)) if *d == date);
        if needs_roll {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.file_path(date))?;
            self.current = Some((date, file));
            self.prune()?;
        }
        match self.current.as_mut() {
            Some((_, file)) => file.write(buf),
            None => Ok(0),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.current.as_mut() {
            Some((_, file)) => file.flush(),
            None => Ok(()),
        }
    }

    /// Log files written by this writer, oldest first
    pub fn log_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| self.is_own_file(path))
            .collect();
        // Date-stamped names sort chronologically
        files.sort();
        Ok(files)
    }

    fn is_own_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| name.starts_with(&format!("{}.", self.prefix)) && name.ends_with(".log"))
            .unwrap_or(false)
    }

    fn prune(&self) -> io::Result<()> {
        let files = self.log_files()?;
        if files.len() > self.max_files {
            for path in &files[..files.len() - self.max_files] {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_writes_to_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::new(dir.path().to_path_buf(), "QuillForge", 3);

        writer.write_for_date(b"hello\n", day(1)).unwrap();
        writer.write_for_date(b"again\n", day(1)).unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(writer.file_path(day(1))).unwrap();
        assert_eq!(content, "hello\nagain\n");
    }

    #[test]
    fn test_rolls_and_prunes_old_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::new(dir.path().to_path_buf(), "QuillForge", 2);

        for d in 1..=4 {
            writer.write_for_date(b"x\n", day(d)).unwrap();
        }

        let files = writer.log_files().unwrap();
        assert_eq!(files, vec![writer.file_path(day(3)), writer.file_path(day(4))]);
    }

    #[test]
    fn test_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.log"), "keep").unwrap();
        let mut writer = RollingFileWriter::new(dir.path().to_path_buf(), "QuillForge", 1);

        writer.write_for_date(b"x\n", day(1)).unwrap();
        writer.write_for_date(b"x\n", day(2)).unwrap();

        assert!(dir.path().join("other.log").exists());
        assert_eq!(writer.log_files().unwrap().len(), 1);
    }
}
