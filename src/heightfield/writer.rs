use std::fmt::Write as _;
use std::io;

use super::{HeightField, HEADER_SKIPPED_TOKENS};

/// Self-describing filler for the ignored header tokens.
const HEADER_LABELS: [&str; HEADER_SKIPPED_TOKENS] =
    ["#", "labkit", "heightfield", "x_step", "z_step", "cols", "rows"];

/// Renders a height field in the text format read by
/// [`super::parse_height_field`].
///
/// Floats use the shortest representation that parses back to the same
/// value, so a write/read cycle is lossless.
pub fn format_height_field(field: &HeightField) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        HEADER_LABELS.join(" "),
        field.x_step(),
        field.z_step(),
        field.cols(),
        field.rows()
    );
    for row in field.iter_rows() {
        let mut first = true;
        for h in row {
            if !first {
                out.push(' ');
            }
            let _ = write!(out, "{}", h);
            first = false;
        }
        out.push('\n');
    }
    out
}

pub fn write_height_field(field: &HeightField, mut writer: impl io::Write) -> io::Result<()> {
    writer.write_all(format_height_field(field).as_bytes())
}
