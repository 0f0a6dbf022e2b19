//! File and byte-buffer entry points for catalog parsing.

use std::path::Path;

use crate::catalog::{Catalog, parse_catalog};
use crate::error::Result;
use crate::resolver::ImageResolver;
use crate::util::decode_text;

/// Read an exercise catalog from an XML file on disk.
///
/// # Example
///
/// ```no_run
/// use gymcat::{ImageCatalog, read_catalog};
///
/// let images = ImageCatalog::from_gif_dir("assets/gifs")?;
/// let catalog = read_catalog("exercises.xml", &images)?;
/// println!("{} exercises", catalog.exercises.len());
/// for name in &catalog.missing_images {
///     eprintln!("no gif for {name}");
/// }
/// # Ok::<(), gymcat::Error>(())
/// ```
pub fn read_catalog<P: AsRef<Path>, R: ImageResolver>(path: P, resolver: &R) -> Result<Catalog> {
    let bytes = std::fs::read(path)?;
    parse_catalog_bytes(&bytes, resolver)
}

/// Parse a catalog from raw bytes.
///
/// Bytes are decoded before parsing: UTF-8 first (a BOM is tolerated),
/// falling back to Windows-1252 for older bundled catalogs.
pub fn parse_catalog_bytes<R: ImageResolver>(bytes: &[u8], resolver: &R) -> Result<Catalog> {
    let text = decode_text(bytes);
    parse_catalog(&text, resolver)
}
