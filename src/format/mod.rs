//! The .egm binary file format: header + edge records.
//!
//! A file is a [`FileHeader`](crate::types::FileHeader) followed by
//! `edge_count` variable-length edge records. Only integer-vertex graphs
//! (`DirectedGraph<u64>`) are persisted; record order carries no meaning.
//! Isolated vertices have no record and are not preserved by a round-trip.

pub mod mmap;
pub mod reader;
pub mod writer;

pub use mmap::MmapReader;
pub use reader::{EdgeRecord, GraphReader};
pub use writer::GraphWriter;
