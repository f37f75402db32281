//! Reads .egm files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::graph::DirectedGraph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::FileHeader;

/// The fixed-size prefix of an edge record: from + to + weight + label_len.
pub(crate) const RECORD_FIXED_SIZE: usize = 28;

/// One decoded edge record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    /// Source vertex id.
    pub from: u64,
    /// Destination vertex id.
    pub to: u64,
    /// Edge weight.
    pub weight: f64,
    /// Edge label.
    pub label: String,
}

/// Reader for .egm binary files.
pub struct GraphReader;

impl GraphReader {
    /// Read an .egm file into a graph.
    pub fn read_from_file(path: &Path) -> GraphResult<DirectedGraph<u64>> {
        let data = std::fs::read(path)?;
        let mut cursor = std::io::Cursor::new(data);
        Self::read_from(&mut cursor)
    }

    /// Read from any reader into a graph.
    ///
    /// Replays `add_edge` for every record into a fresh graph, so every
    /// vertex mentioned by a record is recreated; vertices that had no
    /// incident edge at write time do not come back.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<DirectedGraph<u64>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let header = FileHeader::read_from(&mut std::io::Cursor::new(&data))?;

        let graph = DirectedGraph::new();
        let mut offset = crate::types::HEADER_SIZE as usize;
        for _ in 0..header.edge_count {
            let (record, next) = parse_edge_record(&data, offset)?;
            graph.add_edge(record.from, record.to, record.label, record.weight);
            offset = next;
        }

        log::debug!("read {} edge records", header.edge_count);
        Ok(graph)
    }
}

/// Parse one edge record at `offset`; returns the record and the offset of
/// the next one.
pub(crate) fn parse_edge_record(data: &[u8], offset: usize) -> GraphResult<(EdgeRecord, usize)> {
    if offset + RECORD_FIXED_SIZE > data.len() {
        return Err(GraphError::Truncated);
    }
    let fixed = &data[offset..offset + RECORD_FIXED_SIZE];
    let from = u64::from_le_bytes(fixed[0..8].try_into().unwrap());
    let to = u64::from_le_bytes(fixed[8..16].try_into().unwrap());
    let weight = f64::from_le_bytes(fixed[16..24].try_into().unwrap());
    let label_len = u32::from_le_bytes(fixed[24..28].try_into().unwrap()) as usize;

    let label_start = offset + RECORD_FIXED_SIZE;
    let label_end = label_start + label_len;
    if label_end > data.len() {
        return Err(GraphError::Truncated);
    }
    let label = std::str::from_utf8(&data[label_start..label_end])
        .map_err(|_| GraphError::Corrupt(label_start as u64))?
        .to_owned();

    Ok((
        EdgeRecord {
            from,
            to,
            weight,
            label,
        },
        label_end,
    ))
}
