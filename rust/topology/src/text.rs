// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text Topology Extractor
//!
//! Line-oriented reader for the plain-text model format. Only `v` (vertex)
//! and `f` (face) directives matter; everything else is skipped.
//!
//! Face tokens may carry texture and normal sub-indices (`7/8/9`); only the
//! part before the first `/` is used. Indices are 1-based, negative indices
//! count back from the most recent vertex.

use crate::builder::TopologyBuilder;
use crate::data::TopologyData;

/// Extract topology from the text of a model file.
///
/// Positions are kept as written; this path already shares the renderer's
/// coordinate space, so no normalization is requested.
pub fn extract_text_topology(text: &str) -> TopologyData {
    let mut builder = TopologyBuilder::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => builder.push_vertex(parse_vertex(tokens, line_no + 1)),
            Some("f") => {
                if let Some(face) = parse_face(tokens, builder.vertex_count()) {
                    builder.push_face(face);
                } else {
                    tracing::warn!(line = line_no + 1, "Skipping face with invalid index");
                }
            }
            _ => {}
        }
    }

    builder.finish(false)
}

/// Read three coordinates; missing or malformed components become 0.0 so
/// later face indices stay aligned with vertex order.
fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> [f64; 3] {
    let mut position = [0.0; 3];
    for component in position.iter_mut() {
        match tokens.next().map(str::parse::<f64>) {
            Some(Ok(value)) => *component = value,
            _ => tracing::warn!(line, "Malformed vertex component"),
        }
    }
    position
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>, vertex_count: usize) -> Option<Vec<u32>> {
    tokens
        .map(|token| {
            let head = token.split('/').next().unwrap_or(token);
            resolve_index(head.parse::<i64>().ok()?, vertex_count)
        })
        .collect()
}

/// 1-based index to 0-based; negative indices are relative to `vertex_count`.
fn resolve_index(index: i64, vertex_count: usize) -> Option<u32> {
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => vertex_count as i64 + i,
        _ => return None,
    };
    u32::try_from(resolved).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_ignores_sub_indices() {
        let text = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
f 1/2/3 4/5/6 7/8/9
";
        let topology = extract_text_topology(text);
        assert_eq!(topology.faces, vec![vec![0, 3, 6]]);
        assert_eq!(topology.stats.tris, 1);
        assert_eq!(topology.stats.edges, 3);
        assert!(!topology.needs_normalization);
    }

    #[test]
    fn vertices_in_file_order() {
        let topology = extract_text_topology("v 1.5 -2 3e2\nvn 0 1 0\nvt 0.5 0.5\nv 4 5 6\n");
        assert_eq!(topology.vertices, vec![[1.5, -2.0, 300.0], [4.0, 5.0, 6.0]]);
        assert!(topology.faces.is_empty());
    }

    #[test]
    fn quads_and_ngons() {
        let text = "\
# comment
o Plane
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 2 0 0
v 2 1 0
f 1 2 3 4
f 2//1 5//1 6//1 3//1
f 1 2 5 6 3 4
s off
";
        let topology = extract_text_topology(text);
        assert_eq!(topology.stats.quads, 2);
        assert_eq!(topology.stats.ngons, 1);
        assert_eq!(topology.stats.tris, 0);
        // First quad has 4 edges, the second adds 3, the hexagon adds none
        assert_eq!(topology.stats.edges, 7);
    }

    #[test]
    fn negative_indices_are_relative() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        assert_eq!(extract_text_topology(text).faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn invalid_faces_are_skipped() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\nf a b c\nf 1 2 9\nf 1 2\nf 1 2 3\n";
        let topology = extract_text_topology(text);
        assert_eq!(topology.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn malformed_vertex_keeps_slot() {
        let topology = extract_text_topology("v 1 x\nv 0 0 0\nv 1 1 1\nf 1 2 3\n");
        assert_eq!(topology.vertices[0], [1.0, 0.0, 0.0]);
        assert_eq!(topology.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn crlf_line_endings() {
        let text = "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r\n";
        assert_eq!(extract_text_topology(text).stats.tris, 1);
    }
}
