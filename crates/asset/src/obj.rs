//! OBJ loader producing a flat, fan-triangulated interleaved vertex buffer.
//!
//! Supports `v`, `vt`, `vn` and `f`; every other directive is skipped.
//! Faces are resolved as they are read, so attributes must be declared
//! before the faces that reference them.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use meshcore::{Attribute, LoadError, LoadResult};

use crate::{
    face,
    line::{self, ObjLine},
    mesh::VertexBuffer,
    options::LoadOptions,
    tables::AttributeTables,
};

/// Counters gathered during one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub positions: usize,
    pub texcoords: usize,
    pub normals: usize,
    pub faces: usize,
    /// Faces with fewer than three corners.
    pub skipped_faces: usize,
    pub ignored_lines: usize,
    pub triangles: usize,
}

/// Load an OBJ mesh from a file path with default options.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> LoadResult<VertexBuffer> {
    load_obj_from_path_with(path, &LoadOptions::default())
}

pub fn load_obj_from_path_with(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> LoadResult<VertexBuffer> {
    load_obj_from_path_with_stats(path, options).map(|(buffer, _)| buffer)
}

pub fn load_obj_from_path_with_stats(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> LoadResult<(VertexBuffer, LoadStats)> {
    let path = path.as_ref();
    log::info!("Loading OBJ mesh from {:?}", path);
    let file = File::open(path).map_err(|source| LoadError::ResourceUnavailable {
        source_name: path.display().to_string(),
        source,
    })?;
    let (buffer, stats) = parse_obj(BufReader::new(file), &path.display().to_string(), options)?;
    log::info!(
        "Loaded {:?}: {} vertices, {} triangles",
        path,
        buffer.vertex_count(),
        stats.triangles
    );
    Ok((buffer, stats))
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> LoadResult<VertexBuffer> {
    load_obj_from_reader_with(reader, &LoadOptions::default())
}

pub fn load_obj_from_reader_with<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> LoadResult<VertexBuffer> {
    load_obj_from_reader_with_stats(reader, options).map(|(buffer, _)| buffer)
}

pub fn load_obj_from_reader_with_stats<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> LoadResult<(VertexBuffer, LoadStats)> {
    parse_obj(reader, "<reader>", options)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> LoadResult<VertexBuffer> {
    load_obj_from_str_with(contents, &LoadOptions::default())
}

pub fn load_obj_from_str_with(contents: &str, options: &LoadOptions) -> LoadResult<VertexBuffer> {
    parse_obj(io::Cursor::new(contents), "<string>", options).map(|(buffer, _)| buffer)
}

fn parse_obj<R: BufRead>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> LoadResult<(VertexBuffer, LoadStats)> {
    let mut tables = AttributeTables::new();
    let mut scalars: Vec<f32> = Vec::new();
    let mut stats = LoadStats::default();

    for (idx, text) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let text = text.map_err(|source| LoadError::ResourceUnavailable {
            source_name: format!("{source_name} (line {line_no})"),
            source,
        })?;

        match line::classify(&text, line_no)? {
            ObjLine::Position(p) => tables.push_position(p),
            ObjLine::TexCoord(t) => tables.push_texcoord(t),
            ObjLine::Normal(n) => tables.push_normal(n),
            ObjLine::Face(corners) => {
                stats.faces += 1;
                if corners.len() < 3 {
                    log::warn!(
                        "Skipping face with {} corner(s) on line {}",
                        corners.len(),
                        line_no
                    );
                    stats.skipped_faces += 1;
                    continue;
                }
                stats.triangles += face::emit_face(
                    &corners,
                    &tables,
                    options.missing_components,
                    line_no,
                    &mut scalars,
                )?;
            }
            ObjLine::Ignored(tag) => {
                if let Some(tag) = tag {
                    log::trace!("Ignoring '{}' directive on line {}", tag, line_no);
                }
                stats.ignored_lines += 1;
            }
        }
    }

    stats.positions = tables.len(Attribute::Position);
    stats.texcoords = tables.len(Attribute::TexCoord);
    stats.normals = tables.len(Attribute::Normal);
    log::debug!("OBJ {} parsed: {:?}", source_name, stats);

    Ok((VertexBuffer::from_scalars(scalars), stats))
}
