//! Convenience wrappers that locate or decompress a byte stream before handing
//! it to the binary codec.
//!
//! Nothing here touches the format itself. These are thin adapters over
//! [`from_binary`] and [`to_binary`] for the common cases of files on disk
//! and gzip-compressed data, which is how most NBT files are stored.

use std::fs::File;
#[cfg(feature = "gzip")]
use std::io::Read;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(feature = "gzip")]
use flate2::read::GzDecoder;
#[cfg(feature = "gzip")]
use flate2::write::GzEncoder;
#[cfg(feature = "gzip")]
use flate2::Compression;

use crate::{from_binary, to_binary, Compound, Result};

/// Reads an uncompressed root compound from the file at `path`.
pub fn from_path(path: impl AsRef<Path>) -> Result<Compound> {
    from_binary(BufReader::new(File::open(path)?))
}

/// Writes `comp` uncompressed to the file at `path`, replacing any existing
/// file.
pub fn to_path(comp: &Compound, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_binary(comp, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Reads a gzip-compressed root compound from `reader`.
#[cfg(feature = "gzip")]
#[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Compound> {
    from_binary(GzDecoder::new(reader))
}

/// Writes `comp` gzip-compressed to `writer`.
#[cfg(feature = "gzip")]
#[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
pub fn to_gzip_writer<W: Write>(comp: &Compound, writer: W) -> Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    to_binary(comp, &mut encoder)?;
    encoder.finish()?;
    Ok(())
}

/// Reads a gzip-compressed root compound from the file at `path`.
#[cfg(feature = "gzip")]
#[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
pub fn from_gzip_path(path: impl AsRef<Path>) -> Result<Compound> {
    from_gzip_reader(BufReader::new(File::open(path)?))
}

/// Writes `comp` gzip-compressed to the file at `path`, replacing any
/// existing file.
#[cfg(feature = "gzip")]
#[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
pub fn to_gzip_path(comp: &Compound, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_gzip_writer(comp, &mut writer)?;
    writer.flush()?;
    Ok(())
}
