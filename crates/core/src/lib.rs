//! Core shared types and errors (renderer-agnostic).

use std::{fmt, io};

use thiserror::Error;

/// Per-vertex attribute kinds carried by an OBJ source and by the
/// interleaved output layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl Attribute {
    /// Number of scalars one element of this attribute occupies.
    pub const fn components(self) -> usize {
        match self {
            Attribute::Position | Attribute::Normal => 3,
            Attribute::TexCoord => 2,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Position => "position",
            Attribute::TexCoord => "texture coordinate",
            Attribute::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Errors raised while turning an OBJ source into a vertex buffer.
///
/// Loads are all-or-nothing: any of these aborts the load and no partial
/// buffer is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("Failed to read OBJ source {source_name}: {source}")]
    ResourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// A token expected to be a floating-point scalar is not one.
    #[error("Failed to parse {what} on line {line}: '{token}' is not a number")]
    MalformedNumericToken {
        line: usize,
        what: &'static str,
        token: String,
    },

    /// A `v`/`vt`/`vn` line ended before all of its scalars.
    #[error("Missing {what} on line {line}")]
    MissingScalar { line: usize, what: &'static str },

    /// A face corner component is not an integer.
    #[error("Invalid index '{token}' on line {line}")]
    MalformedIndex { line: usize, token: String },

    /// A corner references an element that was never declared.
    #[error("OBJ {attribute} index {index} out of range (declared {len}) on line {line}")]
    IndexOutOfRange {
        line: usize,
        attribute: Attribute,
        index: i64,
        len: usize,
    },

    /// A corner omits a component the load configuration requires.
    #[error("Face corner '{corner}' on line {line} has no usable {attribute} index")]
    UnsupportedCornerForm {
        line: usize,
        corner: String,
        attribute: Attribute,
    },

    /// More unique vertices than a `u32` index buffer can address.
    #[error("Too many vertices for a u32 index buffer: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl LoadError {
    /// Source line (1-based) the error was raised on, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::ResourceUnavailable { .. } | LoadError::TooManyVertices { .. } => None,
            LoadError::MalformedNumericToken { line, .. }
            | LoadError::MissingScalar { line, .. }
            | LoadError::MalformedIndex { line, .. }
            | LoadError::IndexOutOfRange { line, .. }
            | LoadError::UnsupportedCornerForm { line, .. } => Some(*line),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_widths_match_interleaved_record() {
        let total: usize = [Attribute::Position, Attribute::TexCoord, Attribute::Normal]
            .iter()
            .map(|a| a.components())
            .sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn out_of_range_message_names_attribute() {
        let err = LoadError::IndexOutOfRange {
            line: 7,
            attribute: Attribute::Position,
            index: 5,
            len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("position index 5"));
        assert!(msg.contains("line 7"));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn too_many_vertices_reports_limit() {
        let err = LoadError::TooManyVertices {
            count: 5_000_000_000,
            max: u32::MAX as usize,
        };
        assert!(err.to_string().contains("4294967295"));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn resource_errors_have_no_line() {
        let err = LoadError::ResourceUnavailable {
            source_name: "missing.obj".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.line(), None);
        assert!(std::error::Error::source(&err).is_some());
    }
}
