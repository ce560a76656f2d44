use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::HeightField;
use crate::error::{LabError, LabResult};

/// Leading tokens of the header line that carry no meaning for the grid.
pub const HEADER_SKIPPED_TOKENS: usize = 7;

/// Reads a height field from a text file.
///
/// I/O failures become [`LabError::AssetLoadFailed`], shape or number
/// problems [`LabError::MalformedHeightField`].
pub fn read_height_field(path: impl AsRef<Path>) -> LabResult<HeightField> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LabError::AssetLoadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let field = parse_height_field(&text)?;
    log::info!(
        "Loaded height field {:?}: {} x {} samples",
        path,
        field.rows(),
        field.cols()
    );
    Ok(field)
}

/// Parses the height field text format.
///
/// The first line holds 7 ignored tokens followed by `x_step z_step cols rows`.
/// Then come `rows` lines of `cols` whitespace separated heights each. Blank
/// lines are skipped; anything after the last row is ignored with a warning.
pub fn parse_height_field(text: &str) -> LabResult<HeightField> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| LabError::malformed(0, "file is empty"))?;
    let mut tokens = header.split_whitespace().skip(HEADER_SKIPPED_TOKENS);
    let x_step: f32 = next_number(&mut tokens, header_no, "x step")?;
    let z_step: f32 = next_number(&mut tokens, header_no, "z step")?;
    let cols: usize = next_number(&mut tokens, header_no, "column count")?;
    let rows: usize = next_number(&mut tokens, header_no, "row count")?;
    if tokens.next().is_some() {
        log::warn!("Ignoring extra tokens on height field header line {}", header_no);
    }
    if rows == 0 || cols == 0 {
        return Err(LabError::malformed(
            header_no,
            format!("declared size {} x {} is empty", rows, cols),
        ));
    }

    // the declared row count is untrusted, grow with the data actually present
    let mut grid = Vec::new();
    for (line_no, line) in lines.by_ref().take(rows) {
        let row = line
            .split_whitespace()
            .map(|tok| parse_number::<f32>(tok, line_no, "height"))
            .collect::<LabResult<Vec<f32>>>()?;
        if row.len() != cols {
            return Err(LabError::malformed(
                line_no,
                format!("expected {} heights, found {}", cols, row.len()),
            ));
        }
        grid.push(row);
    }

    if grid.len() != rows {
        return Err(LabError::malformed(
            0,
            format!("expected {} rows, found {}", rows, grid.len()),
        ));
    }
    if let Some((line_no, _)) = lines.next() {
        log::warn!("Ignoring trailing height field data from line {}", line_no);
    }

    HeightField::new(x_step, z_step, grid)
}

fn next_number<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> LabResult<T> {
    let tok = tokens
        .next()
        .ok_or_else(|| LabError::malformed(line_no, format!("missing {}", what)))?;
    parse_number(tok, line_no, what)
}

fn parse_number<T: FromStr>(tok: &str, line_no: usize, what: &str) -> LabResult<T> {
    tok.parse()
        .map_err(|_| LabError::malformed(line_no, format!("invalid {} {:?}", what, tok)))
}
