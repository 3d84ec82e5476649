//! Face corners, fan triangulation and interleaved vertex emission.

use std::num::IntErrorKind;

use meshcore::{Attribute, LoadError, LoadResult};

use crate::{mesh::VertexRecord, options::MissingComponents, tables::AttributeTables};

/// Raw 1-based index triple of one face corner (`v`, `v/vt`, `v/vt/vn`, `v//vn`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerRef<'a> {
    pub token: &'a str,
    pub position: i64,
    pub texcoord: Option<i64>,
    pub normal: Option<i64>,
}

impl<'a> CornerRef<'a> {
    pub fn parse(token: &'a str, line_no: usize) -> LoadResult<Self> {
        let malformed = || LoadError::MalformedIndex {
            line: line_no,
            token: token.to_owned(),
        };
        let mut split = token.split('/');
        let position = split
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(malformed)?;
        let position = parse_index(position, line_no)?;
        let texcoord = optional_index(split.next(), line_no)?;
        let normal = optional_index(split.next(), line_no)?;
        if split.next().is_some() {
            return Err(malformed());
        }
        Ok(Self {
            token,
            position,
            texcoord,
            normal,
        })
    }

    /// Resolve against the tables into a concrete record.
    pub fn resolve(
        &self,
        tables: &AttributeTables,
        missing: MissingComponents,
        line_no: usize,
    ) -> LoadResult<VertexRecord> {
        let position = tables.position(self.position, line_no)?;
        let texcoord = match self.texcoord {
            Some(i) => tables.texcoord(i, line_no)?,
            None => self.missing(Attribute::TexCoord, missing, line_no)?,
        };
        let normal = match self.normal {
            Some(i) => tables.normal(i, line_no)?,
            None => self.missing(Attribute::Normal, missing, line_no)?,
        };
        Ok(VertexRecord::new(position, texcoord, normal))
    }

    fn missing<const N: usize>(
        &self,
        attribute: Attribute,
        policy: MissingComponents,
        line_no: usize,
    ) -> LoadResult<[f32; N]> {
        match policy {
            MissingComponents::ZeroFill => Ok([0.0; N]),
            MissingComponents::Reject => Err(LoadError::UnsupportedCornerForm {
                line: line_no,
                corner: self.token.to_owned(),
                attribute,
            }),
        }
    }
}

/// Integers too large for `i64` saturate, so the table lookup reports them
/// as out of range rather than malformed.
fn parse_index(token: &str, line_no: usize) -> LoadResult<i64> {
    match token.parse::<i64>() {
        Ok(index) => Ok(index),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(LoadError::MalformedIndex {
                line: line_no,
                token: token.to_owned(),
            }),
        },
    }
}

fn optional_index(value: Option<&str>, line_no: usize) -> LoadResult<Option<i64>> {
    match value {
        Some(v) if !v.is_empty() => parse_index(v, line_no).map(Some),
        _ => Ok(None),
    }
}

/// Corner triples of the fan anchored at corner 0: `(0, 1+i, 2+i)` for
/// `i in 0..k-2`. Yields nothing for `k < 3`.
///
/// Concave polygons are not detected and triangulate incorrectly.
pub fn fan_triangles(k: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..k.saturating_sub(2)).map(|i| [0, 1 + i, 2 + i])
}

/// Resolve every corner of one face and append its fan triangles to `out`.
///
/// Returns the number of triangles emitted. Nothing is appended if any
/// corner fails to resolve.
pub fn emit_face(
    corners: &[CornerRef<'_>],
    tables: &AttributeTables,
    missing: MissingComponents,
    line_no: usize,
    out: &mut Vec<f32>,
) -> LoadResult<usize> {
    let resolved = corners
        .iter()
        .map(|c| c.resolve(tables, missing, line_no))
        .collect::<LoadResult<Vec<_>>>()?;

    let mut triangles = 0;
    for tri in fan_triangles(resolved.len()) {
        for corner in tri {
            resolved[corner].write_to(out);
        }
        triangles += 1;
    }
    Ok(triangles)
}
