use crate::error::InputError;
use crate::interfaces::json::document::PaymentDocument;
use std::io::Write;

/// Writes payment documents to a JSON Lines sink, one document per line.
pub struct DocumentWriter<W: Write> {
    writer: W,
}

impl<W: Write> DocumentWriter<W> {
    /// Creates a new `DocumentWriter` over any `Write` sink (e.g., File, Stdout).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serializes one document and terminates it with a newline.
    pub fn write_document(&mut self, document: &PaymentDocument) -> Result<(), InputError> {
        serde_json::to_writer(&mut self.writer, document)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), InputError> {
        self.writer.flush()?;
        Ok(())
    }
}
