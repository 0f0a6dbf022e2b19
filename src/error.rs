//! Error types for gymcat operations.

use thiserror::Error;

/// Errors that can occur while reading or parsing an exercise catalog.
///
/// Malformed attributes and unresolved image references inside an otherwise
/// well-formed document are not errors; they degrade to defaults or end up
/// in [`Catalog::missing_images`](crate::Catalog::missing_images). Only
/// document-level failures reach this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
