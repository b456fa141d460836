use glam::IVec3;
use voxpack_core::batch::decode_all;
use voxpack_core::face::ALL_FACES;
use voxpack_core::{CodecError, CodecProfile, DecodeContext, DecodedVertex, LayoutVersion};
use voxpack_persist::{load, PersistError};

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("vertex decode failed: {0}")]
    Decode(#[from] CodecError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the inspector prints about one mesh file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InspectReport {
    pub layout: LayoutVersion,
    pub chunk_origin: IVec3,
    pub compressed: bool,
    pub vertex_count: u32,
    pub index_count: u32,
    pub warnings: Vec<String>,
    /// Vertices per face, in normal-table order.
    pub face_counts: [usize; 6],
    /// Decoded vertices, possibly cut short by `limit`.
    pub vertices: Vec<DecodedVertex>,
}

/// Load a mesh file and decode its vertices under `profile`.
/// Every vertex is decoded; `limit` only caps how many are kept.
pub fn inspect(
    bytes: &[u8],
    profile: &CodecProfile,
    limit: Option<usize>,
) -> Result<InspectReport, InspectError> {
    let loaded = load(bytes)?;
    let mut warnings = loaded.warnings;

    if loaded.mesh.layout != profile.layout {
        let warning = format!(
            "Mesh layout {:?} differs from profile layout {:?}",
            loaded.mesh.layout, profile.layout
        );
        log::warn!("{warning}");
        warnings.push(warning);
    }

    let ctx = DecodeContext::from_profile(profile, loaded.mesh.origin);
    let mut vertices = decode_all(&loaded.mesh.vertices, &ctx)?;

    let mut face_counts = [0usize; 6];
    for v in &vertices {
        face_counts[v.face.index() as usize] += 1;
    }

    if let Some(limit) = limit {
        vertices.truncate(limit);
    }

    Ok(InspectReport {
        layout: loaded.mesh.layout,
        chunk_origin: loaded.mesh.origin,
        compressed: loaded.header.is_compressed(),
        vertex_count: loaded.header.vertex_count,
        index_count: loaded.header.index_count,
        warnings,
        face_counts,
        vertices,
    })
}

/// Format a report as a markdown summary plus a vertex table.
pub fn format_markdown(report: &InspectReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Layout: {:?} | Chunk: {} | Vertices: {} | Indices: {} | LZ4: {}\n\n",
        report.layout,
        report.chunk_origin,
        report.vertex_count,
        report.index_count,
        if report.compressed { "yes" } else { "no" },
    ));

    let faces: Vec<String> = ALL_FACES
        .iter()
        .map(|f| format!("{:?}: {}", f, report.face_counts[f.index() as usize]))
        .collect();
    out.push_str(&format!("Faces: {}\n\n", faces.join(", ")));

    for warning in &report.warnings {
        out.push_str(&format!("WARNING: {warning}\n"));
    }
    if !report.warnings.is_empty() {
        out.push('\n');
    }

    out.push_str("| # | Block | Grid | Face | World | Texel | Flip | UV | Foliage |\n");
    out.push_str("|---|-------|------|------|-------|-------|------|----|---------|\n");

    for (i, v) in report.vertices.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | ({}, {}, {}) | {:?} | ({:.0}, {:.0}, {:.0}) | ({}, {}) | {} | ({:.5}, {:.5}) | ({:.3}, {:.3}, {:.3}) |\n",
            i,
            v.block_type.0,
            v.grid.x,
            v.grid.y,
            v.grid.z,
            v.face,
            v.world_position.x,
            v.world_position.y,
            v.world_position.z,
            v.texel.x,
            v.texel.y,
            v.flip,
            v.uv.x,
            v.uv.y,
            v.foliage.x,
            v.foliage.y,
            v.foliage.z,
        ));
    }

    let shown = report.vertices.len() as u32;
    if shown < report.vertex_count {
        out.push_str(&format!(
            "\n({} of {} vertices shown)\n",
            shown, report.vertex_count
        ));
    }

    out
}

/// Format a report as pretty JSON.
pub fn format_json(report: &InspectReport) -> Result<String, InspectError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use voxpack_core::mesh::{FaceQuad, MeshBuffers, UvRect};
    use voxpack_core::{BlockTypeId, Face, FoliageTint, InvalidNormalPolicy, PackedVertex};
    use voxpack_persist::{save, ChunkMesh};

    fn mesh_bytes(layout: LayoutVersion) -> Vec<u8> {
        let mut buffers = MeshBuffers::new();
        buffers.push_face(&FaceQuad {
            cell: UVec3::new(1, 2, 3),
            face: Face::Up,
            block_type: BlockTypeId(4),
            uv: UvRect::default(),
            foliage: FoliageTint::WHITE,
        })
            .expect("room for quad");
        buffers.push_face(&FaceQuad {
            cell: UVec3::new(1, 2, 3),
            face: Face::West,
            block_type: BlockTypeId(13),
            uv: UvRect::default(),
            foliage: FoliageTint::new(20, 90, 10),
        })
            .expect("room for quad");
        let mut mesh = ChunkMesh::new(IVec3::new(1, 0, -1), buffers.vertices, buffers.indices);
        mesh.layout = layout;
        save(&mesh, true).expect("save should succeed")
    }

    #[test]
    fn test_inspect_counts_faces() {
        let report = inspect(&mesh_bytes(LayoutVersion::V2Split), &CodecProfile::default(), None)
            .expect("inspect should succeed");
        assert_eq!(report.vertex_count, 8);
        assert_eq!(report.index_count, 12);
        assert!(report.compressed);
        assert!(report.warnings.is_empty());
        assert_eq!(report.face_counts[Face::Up.index() as usize], 4);
        assert_eq!(report.face_counts[Face::West.index() as usize], 4);
        assert_eq!(report.face_counts.iter().sum::<usize>(), 8);
        assert_eq!(report.vertices.len(), 8);
        // Chunk (1, 0, -1) with 16-block side
        assert_eq!(report.vertices[0].world_position.x, 16.0 + report.vertices[0].grid.x as f32);
        assert_eq!(report.vertices[0].world_position.z, -16.0 + report.vertices[0].grid.z as f32);
    }

    #[test]
    fn test_limit_keeps_counts() {
        let report = inspect(&mesh_bytes(LayoutVersion::V2Split), &CodecProfile::default(), Some(3))
            .expect("inspect should succeed");
        assert_eq!(report.vertices.len(), 3);
        assert_eq!(report.face_counts.iter().sum::<usize>(), 8);

        let md = format_markdown(&report);
        assert!(md.contains("(3 of 8 vertices shown)"));
    }

    #[test]
    fn test_layout_mismatch_warns() {
        let report = inspect(&mesh_bytes(LayoutVersion::V1SingleWord), &CodecProfile::default(), None)
            .expect("inspect should succeed");
        assert_eq!(report.layout, LayoutVersion::V1SingleWord);
        // Legacy layout warning plus the profile mismatch
        assert_eq!(report.warnings.len(), 2);
        assert!(report.vertices.iter().all(|v| v.foliage == glam::Vec3::ONE));
    }

    #[test]
    fn test_markdown_table_rows() {
        let report = inspect(&mesh_bytes(LayoutVersion::V2Split), &CodecProfile::default(), None)
            .expect("inspect should succeed");
        let md = format_markdown(&report);
        assert!(md.contains("| # | Block | Grid |"));
        assert!(md.contains("Up: 4"));
        assert!(md.contains("West: 4"));
        assert_eq!(md.lines().filter(|l| l.starts_with("| ") && !l.starts_with("| #")).count(), 8);
        assert!(!md.contains("vertices shown"));
    }

    #[test]
    fn test_json_output() {
        let report = inspect(&mesh_bytes(LayoutVersion::V2Split), &CodecProfile::default(), Some(1))
            .expect("inspect should succeed");
        let json = format_json(&report).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["vertex_count"], 8);
        assert_eq!(value["vertices"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["vertices"][0]["block_type"], 4);
        assert_eq!(value["vertices"][0]["face"], "Up");
    }

    #[test]
    fn test_invalid_normal_policy() {
        // Normal index 7 in an otherwise valid vertex
        let bad = PackedVertex::new(0, 7 << 15);
        let mesh = ChunkMesh::new(IVec3::ZERO, vec![bad], vec![0, 0, 0]);
        let bytes = save(&mesh, false).expect("save should succeed");

        let result = inspect(&bytes, &CodecProfile::default(), None);
        assert!(matches!(
            result,
            Err(InspectError::Decode(CodecError::InvalidNormalIndex(7)))
        ));

        let lenient = CodecProfile {
            invalid_normal: InvalidNormalPolicy::Fallback(Face::Up),
            ..CodecProfile::default()
        };
        let report = inspect(&bytes, &lenient, None).expect("fallback decodes");
        assert_eq!(report.vertices[0].face, Face::Up);
    }

    #[test]
    fn test_bad_file_is_persist_error() {
        let result = inspect(b"not a mesh", &CodecProfile::default(), None);
        assert!(matches!(result, Err(InspectError::Persist(_))));
    }
}
