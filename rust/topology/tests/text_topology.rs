// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use meshtopo_topology::{count_edges, edge_segments, extract_text_topology, TopologyData};

const CUBE: &str = "\
# unit cube, quads only
mtllib cube.mtl
o Cube
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 -1
usemtl Default
f 1/1/1 2/2/1 3/3/1 4/4/1
f 5/1/1 8/2/1 7/3/1 6/4/1
f 1/1/1 5/2/1 6/3/1 2/4/1
f 2/1/1 6/2/1 7/3/1 3/4/1
f 3/1/1 7/2/1 8/3/1 4/4/1
f 4/1/1 8/2/1 5/3/1 1/4/1
";

#[test]
fn cube_file() {
    let topology = extract_text_topology(CUBE);
    assert_eq!(topology.vertices.len(), 8);
    assert_eq!(topology.stats.quads, 6);
    assert_eq!(topology.stats.edges, 12);
    assert_eq!(topology.stats.edges as usize, count_edges(&topology.faces));
    assert_eq!(topology.faces[1], vec![4, 7, 6, 5]);
    assert!(!topology.needs_normalization);
}

#[test]
fn overlay_segments_use_raw_positions() {
    let topology = extract_text_topology(CUBE);
    let segments = edge_segments(&topology, None);
    assert_eq!(segments.len(), 12 * 6);
    assert_eq!(&segments[..6], &[-1.0, -1.0, -1.0, 1.0, -1.0, -1.0]);
}

#[test]
fn json_round_trip_of_extracted_cube() {
    let topology = extract_text_topology(CUBE);
    let json = topology.to_json().unwrap();
    assert!(json.contains("\"needsNormalization\":false"));
    assert_eq!(TopologyData::from_json(&json).unwrap(), topology);
}

#[test]
fn empty_input() {
    let topology = extract_text_topology("");
    assert!(topology.is_empty());
    assert_eq!(topology.stats.edges, 0);
}
