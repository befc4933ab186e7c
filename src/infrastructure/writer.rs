//! Output sinks for rendered tag sections

use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

/// A sink that receives one named section per tag.
///
/// `create` is called before a tag's content is written and `close` after it.
pub trait TagWriter: Write {
    /// Start the output for `tag` (including its leading `#`)
    fn create(&mut self, tag: &str) -> io::Result<()>;

    /// Finish the output started by the last `create`
    fn close(&mut self) -> io::Result<()>;

    /// Where the current section goes, for error reporting
    fn destination(&self) -> PathBuf;
}

/// Writes every section back to back into one stream
#[derive(Debug)]
pub struct ConsoleWriter<W: Write = Stdout> {
    out: W,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        ConsoleWriter { out: io::stdout() }
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        ConsoleWriter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for ConsoleWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> TagWriter for ConsoleWriter<W> {
    fn create(&mut self, _tag: &str) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn destination(&self) -> PathBuf {
        PathBuf::from("<stdout>")
    }
}

/// Writes each section to `<dir>/<tag without #>.md`
#[derive(Debug)]
pub struct FileWriter {
    dir: PathBuf,
    current: Option<(PathBuf, BufWriter<File>)>,
}

impl FileWriter {
    /// Create a writer for `dir`, creating the directory if needed
    pub fn new(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(FileWriter {
            dir: dir.to_path_buf(),
            current: None,
        })
    }

    /// Output file path for `tag`
    pub fn path_for(&self, tag: &str) -> PathBuf {
        let name = tag.strip_prefix('#').unwrap_or(tag);
        self.dir.join(format!("{}.md", name))
    }

    fn open_file(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.current
            .as_mut()
            .map(|(_, file)| file)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no output file open"))
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open_file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.current.as_mut() {
            Some((_, file)) => file.flush(),
            None => Ok(()),
        }
    }
}

impl TagWriter for FileWriter {
    fn create(&mut self, tag: &str) -> io::Result<()> {
        // Finish any file left open by a caller that skipped close
        self.close()?;

        let path = self.path_for(tag);
        let file = File::create(&path)?;
        self.current = Some((path, BufWriter::new(file)));
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        // On a failed flush the file stays current so destination() still names it
        if let Some((_, file)) = self.current.as_mut() {
            file.flush()?;
        }
        if let Some((path, _)) = self.current.take() {
            tracing::info!("Wrote {}", path.display());
        }
        Ok(())
    }

    fn destination(&self) -> PathBuf {
        match &self.current {
            Some((path, _)) => path.clone(),
            None => self.dir.clone(),
        }
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
