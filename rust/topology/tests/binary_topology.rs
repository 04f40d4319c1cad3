// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use meshtopo_core::fixture::{encode_document, RecordSpec};
use meshtopo_core::{decode, detect_up_axis, Property, PropertyArray};
use meshtopo_topology::{parse_binary_topology, Error, UpAxis};

const CUBE_VERTICES: [f64; 24] = [
    -1.0, -1.0, -1.0, //
    1.0, -1.0, -1.0, //
    1.0, 1.0, -1.0, //
    -1.0, 1.0, -1.0, //
    -1.0, -1.0, 1.0, //
    1.0, -1.0, 1.0, //
    1.0, 1.0, 1.0, //
    -1.0, 1.0, 1.0, //
];

/// Six quads, last index of each stored as its complement
fn cube_indices() -> Vec<i32> {
    let quads = [
        [0, 1, 2, 3],
        [4, 7, 6, 5],
        [0, 4, 5, 1],
        [1, 5, 6, 2],
        [2, 6, 7, 3],
        [3, 7, 4, 0],
    ];
    quads
        .iter()
        .flat_map(|q| [q[0], q[1], q[2], !q[3]])
        .collect()
}

fn geometry(id: i64, vertices: &[f64], indices: Vec<i32>, compress: bool) -> RecordSpec {
    let mut vertex_record =
        RecordSpec::new("Vertices").prop(Property::Array(PropertyArray::F64(vertices.to_vec())));
    let mut index_record =
        RecordSpec::new("PolygonVertexIndex").prop(Property::Array(PropertyArray::I32(indices)));
    if compress {
        vertex_record = vertex_record.compressed();
        index_record = index_record.compressed();
    }
    RecordSpec::new("Geometry")
        .prop(Property::I64(id))
        .prop(Property::String("Geometry::\u{0}\u{1}Mesh".into()))
        .prop(Property::String("Mesh".into()))
        .child(RecordSpec::new("GeometryVersion").prop(Property::I32(124)))
        .child(vertex_record)
        .child(index_record)
}

fn global_settings(up_axis: i32) -> RecordSpec {
    RecordSpec::new("GlobalSettings")
        .child(RecordSpec::new("Version").prop(Property::I32(1000)))
        .child(
            RecordSpec::new("Properties70").child(
                RecordSpec::new("P")
                    .prop(Property::String("UpAxis".into()))
                    .prop(Property::String("int".into()))
                    .prop(Property::String("Integer".into()))
                    .prop(Property::String(String::new()))
                    .prop(Property::I32(up_axis)),
            ),
        )
}

#[test]
fn cube_topology() {
    for (version, compress) in [(7400, false), (7400, true), (7500, false), (7700, true)] {
        let data = encode_document(
            version,
            &[
                global_settings(1),
                RecordSpec::new("Objects").child(geometry(
                    2_000_000_001,
                    &CUBE_VERTICES,
                    cube_indices(),
                    compress,
                )),
            ],
        );

        let topology = parse_binary_topology(&data, UpAxis::Y).unwrap();
        assert_eq!(topology.vertices.len(), 8, "version {version}");
        assert_eq!(topology.faces.len(), 6);
        assert_eq!(topology.faces[0], vec![0, 1, 2, 3]);
        assert_eq!(topology.faces[5], vec![3, 7, 4, 0]);
        assert_eq!(topology.stats.quads, 6);
        assert_eq!(topology.stats.tris, 0);
        assert_eq!(topology.stats.ngons, 0);
        assert_eq!(topology.stats.edges, 12);
        assert!(topology.needs_normalization);
        assert_eq!(topology.vertices[6], [1.0, 1.0, 1.0]);
    }
}

#[test]
fn geometries_are_offset_into_one_vertex_list() {
    let triangle = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let pentagon = [
        0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 1.0, 0.0, 1.0, 2.0, 0.0, -1.0, 1.0, 0.0,
    ];
    let data = encode_document(
        7400,
        &[RecordSpec::new("Objects")
            .child(geometry(10, &triangle, vec![0, 1, !2], false))
            .child(RecordSpec::new("Model").prop(Property::I64(11)))
            .child(geometry(12, &pentagon, vec![0, 1, 2, 3, !4], true))],
    );

    let topology = parse_binary_topology(&data, UpAxis::Y).unwrap();
    assert_eq!(topology.vertices.len(), 8);
    assert_eq!(topology.faces, vec![vec![0, 1, 2], vec![3, 4, 5, 6, 7]]);
    assert_eq!(topology.stats.tris, 1);
    assert_eq!(topology.stats.ngons, 1);
    assert_eq!(topology.stats.edges, 8);
}

#[test]
fn selected_axis_remaps_positions() {
    let vertices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let data = encode_document(
        7400,
        &[RecordSpec::new("Objects").child(geometry(1, &vertices, vec![0, 1, !2], false))],
    );

    let x_up = parse_binary_topology(&data, UpAxis::X).unwrap();
    assert_eq!(x_up.vertices[0], [2.0, 1.0, 3.0]);

    let z_up = parse_binary_topology(&data, UpAxis::Z).unwrap();
    assert_eq!(z_up.vertices[0], [1.0, 3.0, -2.0]);

    for (p, original) in z_up.vertices.iter().zip(vertices.chunks_exact(3)) {
        let back = UpAxis::Z.unmap(*p);
        for i in 0..3 {
            assert_relative_eq!(back[i], original[i], epsilon = 1e-6);
        }
    }
}

#[test]
fn wrapped_and_missing_arrays() {
    // Vertices carrying an extra child record stay a mapping, not a bare array
    let wrapped = RecordSpec::new("Geometry")
        .prop(Property::I64(5))
        .child(
            RecordSpec::new("Vertices")
                .prop(Property::Array(PropertyArray::F64(vec![
                    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
                ])))
                .child(RecordSpec::new("Note").prop(Property::String("x".into()))),
        )
        .child(
            RecordSpec::new("PolygonVertexIndex")
                .prop(Property::Array(PropertyArray::I64(vec![0, 1, !2]))),
        );
    let no_indices = RecordSpec::new("Geometry")
        .prop(Property::I64(6))
        .child(RecordSpec::new("Vertices").prop(Property::Array(PropertyArray::F64(vec![0.0; 9]))));
    let empty_indices = geometry(7, &[0.0; 9], vec![], false);

    let data = encode_document(
        7500,
        &[RecordSpec::new("Objects")
            .child(wrapped)
            .child(no_indices)
            .child(empty_indices)],
    );

    let topology = parse_binary_topology(&data, UpAxis::Y).unwrap();
    assert_eq!(topology.vertices.len(), 3);
    assert_eq!(topology.faces, vec![vec![0, 1, 2]]);
    assert_eq!(topology.stats.edges, 3);
}

#[test]
fn out_of_range_faces_are_dropped() {
    let data = encode_document(
        7400,
        &[RecordSpec::new("Objects").child(geometry(
            1,
            &[0.0; 9],
            vec![0, 1, !2, 0, 1, !3],
            false,
        ))],
    );
    let topology = parse_binary_topology(&data, UpAxis::Y).unwrap();
    assert_eq!(topology.faces, vec![vec![0, 1, 2]]);
    assert_eq!(topology.stats.tris, 1);
}

#[test]
fn failures_are_recoverable_errors() {
    assert!(matches!(
        parse_binary_topology(b"Kaydara FBX ASCII, not binary", UpAxis::Y),
        Err(Error::Decode(meshtopo_core::Error::FormatError(_)))
    ));

    let data = encode_document(
        7400,
        &[RecordSpec::new("Objects").child(geometry(1, &CUBE_VERTICES, cube_indices(), true))],
    );
    let truncated = &data[..data.len() / 2];
    assert!(parse_binary_topology(truncated, UpAxis::Y).is_err());
}

#[test]
fn declared_axis_is_independent_of_selection() {
    let data = encode_document(
        7400,
        &[
            global_settings(2),
            RecordSpec::new("Objects").child(geometry(1, &CUBE_VERTICES, cube_indices(), false)),
        ],
    );
    assert_eq!(detect_up_axis(&data), Some(UpAxis::Z));
    assert_eq!(decode(&data).unwrap().version, 7400);

    let topology = parse_binary_topology(&data, UpAxis::Y).unwrap();
    assert_eq!(topology.vertices[0], [-1.0, -1.0, -1.0]);
}
