//! JSON document writer

use sketch_export::OutputDocument;
use sketch_format::Result;
use std::io::{self, BufWriter, Write};

/// Serialization options for output documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Indent the output instead of writing it on one line
    pub pretty: bool,
}

/// Serialize `document` to `output`, returning the number of bytes written.
pub fn write_document<W: Write>(
    document: &OutputDocument,
    output: W,
    opts: &WriteOptions,
) -> Result<u64> {
    let mut writer = BufWriter::new(CountingWriter::new(output));
    if opts.pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.flush()?;

    let counter = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counter.bytes_written())
}

/// Write adapter tracking how many bytes reached the inner writer
struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes_written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
