//! Memory-mapped read access to .egm files.

use std::path::Path;

use memmap2::Mmap;

use crate::graph::DirectedGraph;
use crate::types::error::GraphResult;
use crate::types::header::FileHeader;
use crate::types::HEADER_SIZE;

use super::reader::{parse_edge_record, EdgeRecord};

/// Read-only memory-mapped access to an .egm file.
///
/// Lets a consumer walk the edge records without pulling the whole file
/// through a buffer first. Records are variable length, so access is
/// sequential via [`edges`](Self::edges).
pub struct MmapReader {
    mmap: Mmap,
    header: FileHeader,
}

impl MmapReader {
    /// Open an .egm file for memory-mapped read access.
    pub fn open(path: &Path) -> GraphResult<Self> {
        let file = std::fs::File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let header = FileHeader::read_from(&mut std::io::Cursor::new(&mmap[..]))?;

        Ok(Self { mmap, header })
    }

    /// Get the file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Number of edge records in the file.
    pub fn edge_count(&self) -> u64 {
        self.header.edge_count
    }

    /// Iterate over the edge records in file order.
    pub fn edges(&self) -> EdgeIter<'_> {
        EdgeIter {
            data: &self.mmap,
            offset: HEADER_SIZE as usize,
            remaining: self.header.edge_count,
        }
    }

    /// Materialize the file as an in-memory graph, replaying `add_edge` per
    /// record like [`GraphReader`](super::GraphReader).
    pub fn load(&self) -> GraphResult<DirectedGraph<u64>> {
        let graph = DirectedGraph::new();
        for record in self.edges() {
            let record = record?;
            graph.add_edge(record.from, record.to, record.label, record.weight);
        }
        Ok(graph)
    }
}

/// Iterator over the edge records of a mapped file.
pub struct EdgeIter<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: u64,
}

impl Iterator for EdgeIter<'_> {
    type Item = GraphResult<EdgeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match parse_edge_record(self.data, self.offset) {
            Ok((record, next)) => {
                self.offset = next;
                Some(Ok(record))
            }
            Err(e) => {
                // Stop after the first bad record.
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }
}
