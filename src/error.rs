//! Error types for scene loading and mesh reconstruction.

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by scene I/O and the mesh reconstruction path
#[derive(Error, Debug)]
pub enum Error {
    /// An index value does not fit the 16-bit element storage used when
    /// writing a mesh back into a geometry
    #[error("index {index} exceeds the 16-bit element limit of {limit}", limit = u16::MAX)]
    IndexOverflow { index: u32 },

    /// The mesh index list does not describe whole triangles
    #[error("index count {len} is not a multiple of 3")]
    PartialTriangle { len: usize },

    /// Scene file extension not recognized by the loader or writer
    #[error("unsupported scene format: {0}")]
    UnsupportedFormat(String),

    /// OBJ parsing error
    #[error("OBJ load error: {0}")]
    ObjLoad(#[from] tobj::LoadError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
