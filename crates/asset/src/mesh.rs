//! CPU-side mesh representation produced by loaders.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use meshcore::{LoadError, LoadResult};

/// Scalars in one interleaved vertex: position(3) + texcoord(2) + normal(3).
pub const FLOATS_PER_VERTEX: usize = 8;

/// One resolved triangle corner: `(x, y, z, s, t, nx, ny, nz)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexRecord {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
    pub normal: [f32; 3],
}

impl VertexRecord {
    pub fn new(position: [f32; 3], texcoord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// Append the record's scalars in interleaved order.
    pub fn write_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(self)));
    }

    fn bit_key(&self) -> [u32; FLOATS_PER_VERTEX] {
        bytemuck::cast(*self)
    }
}

/// Flat interleaved vertex buffer, ready for upload as a triangle list.
///
/// Always holds a whole number of records; `vertex_count() == len / 8`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    /// Wrap scalars produced by the emitter. Length must be a multiple of 8.
    pub(crate) fn from_scalars(data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len() % FLOATS_PER_VERTEX, 0);
        Self { data }
    }

    pub fn from_records(records: &[VertexRecord]) -> Self {
        Self {
            data: bytemuck::cast_slice(records).to_vec(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes for a GPU buffer upload (32 bytes per vertex).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// View as typed records.
    pub fn records(&self) -> &[VertexRecord] {
        bytemuck::cast_slice(&self.data)
    }
}

/// Deduplicated alternative to [`VertexBuffer`]: unique records plus a
/// triangle-list index buffer.
///
/// Opt-in only. Records are merged when all eight scalars are bit-identical.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    pub vertices: Vec<VertexRecord>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn from_buffer(buffer: &VertexBuffer) -> LoadResult<Self> {
        let mut unique: HashMap<[u32; FLOATS_PER_VERTEX], u32> = HashMap::new();
        let mut vertices = Vec::new();
        let mut indices = Vec::with_capacity(buffer.vertex_count());

        for record in buffer.records() {
            let index = match unique.get(&record.bit_key()) {
                Some(&idx) => idx,
                None => {
                    let idx = next_index(vertices.len())?;
                    vertices.push(*record);
                    unique.insert(record.bit_key(), idx);
                    idx
                }
            };
            indices.push(index);
        }

        log::debug!(
            "Deduplicated {} vertices into {} unique records",
            indices.len(),
            vertices.len()
        );
        Ok(Self { vertices, indices })
    }

    /// Rebuild the flat, non-indexed buffer.
    pub fn expand(&self) -> VertexBuffer {
        let mut data = Vec::with_capacity(self.indices.len() * FLOATS_PER_VERTEX);
        for &i in &self.indices {
            self.vertices[i as usize].write_to(&mut data);
        }
        VertexBuffer::from_scalars(data)
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }
}

/// Index the next unique vertex will get, if it fits in `u32`.
fn next_index(len: usize) -> LoadResult<u32> {
    u32::try_from(len).map_err(|_| LoadError::TooManyVertices {
        count: len.saturating_add(1),
        max: u32::MAX as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(x: f32) -> VertexRecord {
        VertexRecord::new([x, 0.0, 0.0], [0.5, 1.0], [0.0, 0.0, 1.0])
    }

    #[test]
    fn record_is_32_bytes_in_interleaved_order() {
        assert_eq!(std::mem::size_of::<VertexRecord>(), 32);
        let mut out = Vec::new();
        VertexRecord::new([1.0, 2.0, 3.0], [4.0, 5.0], [6.0, 7.0, 8.0]).write_to(&mut out);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn buffer_counts_and_views() {
        let buf = VertexBuffer::from_records(&[rec(0.0), rec(1.0), rec(2.0)]);
        assert_eq!(buf.vertex_count(), 3);
        assert_eq!(buf.triangle_count(), 1);
        assert_eq!(buf.as_slice().len(), 24);
        assert_eq!(buf.as_bytes().len(), 96);
        assert_eq!(buf.records()[2], rec(2.0));
        assert!(VertexBuffer::default().is_empty());
    }

    #[test]
    fn dedup_shares_identical_records() {
        // Quad as two triangles: corners 0 and 2 repeat.
        let recs = [rec(0.0), rec(1.0), rec(2.0), rec(0.0), rec(2.0), rec(3.0)];
        let buf = VertexBuffer::from_records(&recs);
        let indexed = IndexedMesh::from_buffer(&buf).unwrap();
        assert!(indexed.is_valid());
        assert_eq!(indexed.vertices.len(), 4);
        assert_eq!(indexed.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(indexed.expand(), buf);
    }

    #[test]
    fn dedup_of_empty_buffer() {
        let indexed = IndexedMesh::from_buffer(&VertexBuffer::default()).unwrap();
        assert!(!indexed.is_valid());
        assert!(indexed.expand().is_empty());
    }

    #[test]
    fn index_past_u32_range_is_an_error() {
        assert_eq!(next_index(0).unwrap(), 0);
        assert_eq!(next_index(u32::MAX as usize).unwrap(), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            next_index(u32::MAX as usize + 1),
            Err(LoadError::TooManyVertices { .. })
        ));
    }
}
