//! Entry point: load an OBJ file and report the vertex buffer a renderer
//! would upload.

use anyhow::{Context, Result, bail};
use asset::{IndexedMesh, LoadOptions, MissingComponents, VERTEX_LAYOUT};

fn parse_missing_arg() -> MissingComponents {
    // Accept: --missing=reject|zero, --strict=on|off
    let mut policy = MissingComponents::default();
    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--missing=") {
            policy = match val.to_ascii_lowercase().as_str() {
                "reject" | "error" => MissingComponents::Reject,
                "zero" | "zero-fill" => MissingComponents::ZeroFill,
                other => {
                    log::warn!("Unknown missing-component policy '{}', using reject.", other);
                    MissingComponents::Reject
                }
            };
        } else if let Some(val) = arg.strip_prefix("--strict=") {
            policy = if matches!(
                val.to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ) {
                MissingComponents::ZeroFill
            } else {
                MissingComponents::Reject
            };
        }
    }
    policy
}

fn parse_dedup_arg() -> bool {
    std::env::args().skip(1).any(|arg| arg == "--dedup")
}

fn parse_path_arg() -> Option<String> {
    std::env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = parse_path_arg() else {
        bail!("usage: app <mesh.obj> [--missing=reject|zero] [--strict=on|off] [--dedup]");
    };
    let options = LoadOptions::new().with_missing_components(parse_missing_arg());
    let dedup = parse_dedup_arg();
    log::debug!("Options: {:?}, dedup={}", options, dedup);

    let (buffer, stats) = asset::load_obj_from_path_with_stats(&path, &options)
        .with_context(|| format!("Failed to load mesh {path}"))?;

    log::info!(
        "{}: {} vertices ({} triangles), {} bytes, stride {} bytes",
        path,
        buffer.vertex_count(),
        buffer.triangle_count(),
        buffer.as_bytes().len(),
        VERTEX_LAYOUT.stride_bytes()
    );
    for slot in VERTEX_LAYOUT.slots {
        log::info!(
            "  location {}: {} x{} at byte offset {}",
            slot.location,
            slot.attribute,
            slot.components,
            slot.byte_offset()
        );
    }
    log::info!(
        "Tables: {} positions, {} texcoords, {} normals; {} faces ({} skipped)",
        stats.positions,
        stats.texcoords,
        stats.normals,
        stats.faces,
        stats.skipped_faces
    );

    if dedup {
        let indexed = IndexedMesh::from_buffer(&buffer)
            .with_context(|| format!("Failed to deduplicate mesh {path}"))?;
        log::info!(
            "Deduplicated: {} unique vertices, {} indices",
            indexed.vertices.len(),
            indexed.indices.len()
        );
    }

    Ok(())
}
