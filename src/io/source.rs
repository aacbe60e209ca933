//! Where markup comes from

use std::path::PathBuf;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::IoError;

/// Supplies the raw markup for one run
#[async_trait::async_trait]
pub trait DocumentSource: Send {
    /// Read the whole document
    async fn acquire(&mut self) -> Result<String, IoError>;

    /// Human readable origin, for logs and errors
    fn describe(&self) -> String;
}

// Pages in legacy encodings are still validated; undecodable bytes become U+FFFD.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reads markup from a file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DocumentSource for FileSource {
    async fn acquire(&mut self) -> Result<String, IoError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| IoError::Read {
                origin: self.describe(),
                source: e,
            })?;
        Ok(decode(&bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads markup from any async reader until end of stream
pub struct StreamSource<R> {
    reader: R,
    label: String,
}

impl<R> StreamSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
        }
    }
}

impl StreamSource<tokio::io::Stdin> {
    /// Read from standard input
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin(), "<stdin>")
    }
}

#[async_trait::async_trait]
impl<R> DocumentSource for StreamSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn acquire(&mut self) -> Result<String, IoError> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| IoError::Read {
                origin: self.label.clone(),
                source: e,
            })?;
        Ok(decode(&bytes))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Markup already in memory
pub struct StringSource {
    markup: String,
}

impl StringSource {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentSource for StringSource {
    async fn acquire(&mut self) -> Result<String, IoError> {
        Ok(self.markup.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
