use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Duplicates every log record to the console and to the runtime log file.
/// A failing console (closed stdout pipe) never costs the file its record.
struct TeeWriter {
    console: Box<dyn Write + Send>,
    file: Option<File>,
}

impl TeeWriter {
    fn new(file: Option<File>) -> Self {
        Self {
            console: Box::new(io::stdout()),
            file,
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let console = self.console.write_all(buf);
        let file = match self.file.as_mut() {
            Some(file) => file.write_all(buf),
            None => Ok(()),
        };
        console.and(file)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let console = self.console.flush();
        let file = match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        };
        console.and(file)
    }
}

/// Installs env_logger with a stdout + file target. The file is truncated on
/// every start. When it cannot be created, logging falls back to stdout.
pub fn init(log_file: Option<&Path>) {
    let mut file_error = None;
    let file = log_file.and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            file_error = Some((path.to_path_buf(), e));
            None
        }
    });

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .write_style(env_logger::WriteStyle::Never)
        .init();

    if let Some((path, e)) = file_error {
        log::warn!("Error opening log file {}: {}", path.display(), e);
    }
}

/// Flushes buffered records. Called right before the process exits.
pub fn flush() {
    log::logger().flush();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_writer_copies_bytes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        let mut writer = TeeWriter::new(Some(open_log_file(&path).unwrap()));

        writer.write_all(b"first line\n").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn closed_console_still_reaches_log_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        let mut writer = TeeWriter {
            console: Box::new(ClosedPipe),
            file: Some(open_log_file(&path).unwrap()),
        };

        // Act
        let write = writer.write(b"poll failed\n");
        let flush = writer.flush();

        // Assert
        assert_eq!(write.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(flush.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "poll failed\n");
    }

    #[test]
    fn open_log_file_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("runtime.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn open_log_file_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        std::fs::write(&path, "old contents").unwrap();

        open_log_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
