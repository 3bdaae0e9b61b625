//! Word vector file handles.
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};
use log::debug;

use crate::error::Error;

pub fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Opens a word vector file for reading.
///
/// Gzipped files may hold several members, hence the [MultiGzDecoder].
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path)?;
    if is_gzip(path) {
        debug!("reading {:?} as gzip", path);
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Creates (or truncates) a word vector file.
pub fn create_output(path: &Path) -> Result<VectorWriter, Error> {
    let file = BufWriter::new(File::create(path)?);
    if is_gzip(path) {
        debug!("writing {:?} as gzip", path);
        Ok(VectorWriter::Gzip(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(VectorWriter::Plain(file))
    }
}

/// Writer over a plain or gzipped file.
///
/// [VectorWriter::finish] has to be called once every write is done.
pub enum VectorWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl VectorWriter {
    /// Flushes buffered content and, for gzip, writes the trailer.
    pub fn finish(self) -> Result<(), Error> {
        match self {
            VectorWriter::Plain(mut w) => w.flush()?,
            VectorWriter::Gzip(w) => w.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for VectorWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            VectorWriter::Plain(w) => w.write(buf),
            VectorWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            VectorWriter::Plain(w) => w.flush(),
            VectorWriter::Gzip(w) => w.flush(),
        }
    }
}
