//! Writes .egm files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::DirectedGraph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::FileHeader;
use crate::types::{Edge, MAX_LABEL_SIZE};

/// Writer for .egm binary files.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to an .egm file.
    pub fn write_to_file(graph: &DirectedGraph<u64>, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)
    }

    /// Write a graph to any writer.
    ///
    /// Emits one record per directed edge, sorted by (from, to) so identical
    /// graphs produce identical bytes. Vertices without incident edges have
    /// no record and are lost.
    pub fn write_to(graph: &DirectedGraph<u64>, writer: &mut impl Write) -> GraphResult<()> {
        // Collect the edge list through the public queries; each copy is a
        // consistent per-vertex snapshot.
        let mut edges: Vec<(u64, u64, Edge)> = Vec::new();
        for u in graph.nodes() {
            for (v, edge) in graph.outgoing_edges(&u) {
                if edge.label.len() > MAX_LABEL_SIZE {
                    return Err(GraphError::LabelTooLarge {
                        size: edge.label.len(),
                        max: MAX_LABEL_SIZE,
                    });
                }
                edges.push((u, v, edge));
            }
        }
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let header = FileHeader::new(edges.len() as u64);
        header.write_to(writer)?;

        for (from, to, edge) in &edges {
            write_edge_record(writer, *from, *to, edge)?;
        }

        writer.flush()?;
        log::debug!("wrote {} edge records", edges.len());
        Ok(())
    }
}

/// Write a single edge record.
///
/// Layout (little-endian): from (u64, 8 bytes) · to (u64, 8 bytes) · weight
/// (f64, 8 bytes) · label_len (u32, 4 bytes) · label (UTF-8 bytes).
fn write_edge_record(writer: &mut impl Write, from: u64, to: u64, edge: &Edge) -> GraphResult<()> {
    writer.write_all(&from.to_le_bytes())?;
    writer.write_all(&to.to_le_bytes())?;
    writer.write_all(&edge.weight.to_le_bytes())?;
    writer.write_all(&(edge.label.len() as u32).to_le_bytes())?;
    writer.write_all(edge.label.as_bytes())?;
    Ok(())
}
