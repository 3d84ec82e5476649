//! Asset loading: OBJ meshes into interleaved vertex buffers.
//!
//! Each load owns its attribute tables and output buffer; nothing is shared
//! between calls, so independent files may be loaded in parallel by the
//! caller.

pub mod face;
pub mod layout;
pub mod line;
pub mod mesh;
pub mod obj;
pub mod options;
pub mod tables;

pub use layout::{AttributeSlot, VERTEX_LAYOUT, VertexLayout};
pub use mesh::{FLOATS_PER_VERTEX, IndexedMesh, VertexBuffer, VertexRecord};
pub use obj::{
    LoadStats, load_obj_from_path, load_obj_from_path_with, load_obj_from_path_with_stats,
    load_obj_from_reader, load_obj_from_reader_with, load_obj_from_reader_with_stats,
    load_obj_from_str, load_obj_from_str_with,
};
pub use options::{LoadOptions, MissingComponents};
