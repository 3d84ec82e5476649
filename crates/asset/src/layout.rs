//! Interleaved vertex layout consumed by the renderer when binding a
//! [`VertexBuffer`](crate::mesh::VertexBuffer).

use meshcore::Attribute;

use crate::mesh::{FLOATS_PER_VERTEX, VertexRecord};

/// One attribute slot inside a vertex record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSlot {
    pub attribute: Attribute,
    /// Shader location the slot is bound to.
    pub location: u32,
    /// Offset in scalars from the start of the record.
    pub offset: usize,
    pub components: usize,
}

impl AttributeSlot {
    pub const fn byte_offset(&self) -> usize {
        self.offset * size_of::<f32>()
    }
}

/// Stride and attribute slots of an interleaved buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    /// Stride in scalars.
    pub stride: usize,
    pub slots: &'static [AttributeSlot],
}

impl VertexLayout {
    pub const fn stride_bytes(&self) -> usize {
        self.stride * size_of::<f32>()
    }

    pub fn slot(&self, attribute: Attribute) -> Option<&AttributeSlot> {
        self.slots.iter().find(|s| s.attribute == attribute)
    }
}

/// Position at 0 (3-wide), texcoord at 3 (2-wide), normal at 5 (3-wide).
pub const VERTEX_LAYOUT: VertexLayout = VertexLayout {
    stride: FLOATS_PER_VERTEX,
    slots: &[
        AttributeSlot {
            attribute: Attribute::Position,
            location: 0,
            offset: 0,
            components: 3,
        },
        AttributeSlot {
            attribute: Attribute::TexCoord,
            location: 1,
            offset: 3,
            components: 2,
        },
        AttributeSlot {
            attribute: Attribute::Normal,
            location: 2,
            offset: 5,
            components: 3,
        },
    ],
};

const _: () = assert!(VERTEX_LAYOUT.stride_bytes() == size_of::<VertexRecord>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_record_fields() {
        assert_eq!(VERTEX_LAYOUT.stride_bytes(), 32);
        let pos = VERTEX_LAYOUT.slot(Attribute::Position).unwrap();
        let uv = VERTEX_LAYOUT.slot(Attribute::TexCoord).unwrap();
        let n = VERTEX_LAYOUT.slot(Attribute::Normal).unwrap();
        assert_eq!(pos.byte_offset(), std::mem::offset_of!(VertexRecord, position));
        assert_eq!(uv.byte_offset(), std::mem::offset_of!(VertexRecord, texcoord));
        assert_eq!(n.byte_offset(), std::mem::offset_of!(VertexRecord, normal));
    }

    #[test]
    fn slots_tile_the_record() {
        let mut next = 0;
        for slot in VERTEX_LAYOUT.slots {
            assert_eq!(slot.offset, next);
            assert_eq!(slot.components, slot.attribute.components());
            next += slot.components;
        }
        assert_eq!(next, VERTEX_LAYOUT.stride);
    }
}
