//! All data types for the edgemap library.

pub mod edge;
pub mod error;
pub mod header;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use header::{FileHeader, HEADER_SIZE};

/// Magic bytes at the start of every .egm file.
pub const EDGEMAP_MAGIC: [u8; 4] = [0x45, 0x44, 0x47, 0x4D]; // "EDGM"

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Maximum edge label size in bytes: 64KB.
pub const MAX_LABEL_SIZE: usize = 65_536;
