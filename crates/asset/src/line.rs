//! Per-line classification of OBJ text.

use meshcore::{LoadError, LoadResult};

use crate::face::CornerRef;

/// One classified source line with its parsed payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjLine<'a> {
    Position([f32; 3]),
    TexCoord([f32; 2]),
    Normal([f32; 3]),
    Face(Vec<CornerRef<'a>>),
    /// Blank lines, comments and unsupported directives (o/g/s/usemtl/...).
    Ignored(Option<&'a str>),
}

/// Classify `line` by its leading token. `line_no` is 1-based.
pub fn classify(line: &str, line_no: usize) -> LoadResult<ObjLine<'_>> {
    let data = match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    };
    let mut parts = data.split_whitespace();
    let Some(tag) = parts.next() else {
        return Ok(ObjLine::Ignored(None));
    };

    let parsed = match tag {
        "v" => ObjLine::Position([
            parse_f32(parts.next(), line_no, "x coordinate")?,
            parse_f32(parts.next(), line_no, "y coordinate")?,
            parse_f32(parts.next(), line_no, "z coordinate")?,
        ]),
        "vt" => ObjLine::TexCoord([
            parse_f32(parts.next(), line_no, "s coordinate")?,
            parse_f32(parts.next(), line_no, "t coordinate")?,
        ]),
        "vn" => ObjLine::Normal([
            parse_f32(parts.next(), line_no, "nx coordinate")?,
            parse_f32(parts.next(), line_no, "ny coordinate")?,
            parse_f32(parts.next(), line_no, "nz coordinate")?,
        ]),
        "f" => ObjLine::Face(
            parts
                .map(|token| CornerRef::parse(token, line_no))
                .collect::<LoadResult<Vec<_>>>()?,
        ),
        other => ObjLine::Ignored(Some(other)),
    };
    Ok(parsed)
}

fn parse_f32(value: Option<&str>, line_no: usize, what: &'static str) -> LoadResult<f32> {
    let token = value.ok_or(LoadError::MissingScalar {
        line: line_no,
        what,
    })?;
    token
        .parse::<f32>()
        .map_err(|_| LoadError::MalformedNumericToken {
            line: line_no,
            what,
            token: token.to_owned(),
        })
}
