//! Append-only attribute tables filled by `v`, `vt` and `vn` lines.

use meshcore::{Attribute, LoadError, LoadResult};

/// Positions, texture coordinates and normals in declaration order.
///
/// OBJ indices are 1-based; lookups take the raw index from the source,
/// apply one uniform decrement and bounds-check against the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeTables {
    positions: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
}

impl AttributeTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_position(&mut self, p: [f32; 3]) {
        self.positions.push(p);
    }

    pub fn push_texcoord(&mut self, t: [f32; 2]) {
        self.texcoords.push(t);
    }

    pub fn push_normal(&mut self, n: [f32; 3]) {
        self.normals.push(n);
    }

    /// Number of declared elements for `attribute`.
    pub fn len(&self, attribute: Attribute) -> usize {
        match attribute {
            Attribute::Position => self.positions.len(),
            Attribute::TexCoord => self.texcoords.len(),
            Attribute::Normal => self.normals.len(),
        }
    }

    pub fn position(&self, index: i64, line: usize) -> LoadResult<[f32; 3]> {
        let slot = self.slot(Attribute::Position, index, line)?;
        Ok(self.positions[slot])
    }

    pub fn texcoord(&self, index: i64, line: usize) -> LoadResult<[f32; 2]> {
        let slot = self.slot(Attribute::TexCoord, index, line)?;
        Ok(self.texcoords[slot])
    }

    pub fn normal(&self, index: i64, line: usize) -> LoadResult<[f32; 3]> {
        let slot = self.slot(Attribute::Normal, index, line)?;
        Ok(self.normals[slot])
    }

    /// Map a 1-based source index to a checked 0-based slot.
    fn slot(&self, attribute: Attribute, index: i64, line: usize) -> LoadResult<usize> {
        let len = self.len(attribute);
        let out_of_range = || LoadError::IndexOutOfRange {
            line,
            attribute,
            index,
            len,
        };
        let slot = index.checked_sub(1).ok_or_else(out_of_range)?;
        match usize::try_from(slot) {
            Ok(slot) if slot < len => Ok(slot),
            _ => Err(out_of_range()),
        }
    }
}
