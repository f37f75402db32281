//! File header for .egm binary files.

use std::io::{Read, Write};

use crate::types::error::{GraphError, GraphResult};
use crate::types::{EDGEMAP_MAGIC, FORMAT_VERSION};

/// Header of an .egm file. Fixed size: 24 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes: [0x45, 0x44, 0x47, 0x4D] ("EDGM").
    pub magic: [u8; 4],
    /// Format version (currently 1).
    pub version: u32,
    /// Total number of edge records in the file.
    pub edge_count: u64,
}

/// The fixed size of a FileHeader on disk: 24 bytes.
pub const HEADER_SIZE: u64 = 24;

impl FileHeader {
    /// Create a new header with default magic and version.
    pub fn new(edge_count: u64) -> Self {
        Self {
            magic: EDGEMAP_MAGIC,
            version: FORMAT_VERSION,
            edge_count,
        }
    }

    /// Write this header to the given writer. Writes exactly 24 bytes.
    ///
    /// Layout (all little-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04..0x08: version (u32, 4 bytes)
    /// - 0x08..0x10: edge_count (u64, 8 bytes)
    /// - 0x10..0x18: _reserved (u64, 8 bytes, written as 0)
    ///   Total: 24 bytes
    pub fn write_to(&self, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.edge_count.to_le_bytes())?;
        writer.write_all(&0u64.to_le_bytes())?; // _reserved
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 24 bytes.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Self> {
        let mut buf = [0u8; 24];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                GraphError::Truncated
            } else {
                GraphError::Io(e)
            }
        })?;

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != EDGEMAP_MAGIC {
            return Err(GraphError::InvalidMagic);
        }

        let version = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        if version != FORMAT_VERSION {
            return Err(GraphError::UnsupportedVersion(version));
        }

        let edge_count = u64::from_le_bytes(buf[8..16].try_into().unwrap());
        // bytes 16..24 are reserved

        Ok(Self {
            magic,
            version,
            edge_count,
        })
    }
}
