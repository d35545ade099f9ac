//! XML member reformatting
//!
//! Office archives store their XML members on a single line. Members copied
//! out of directory subtrees are rewritten in place with one element per
//! line and two-space indentation so the itemized copies are readable.
//! Reformatting is idempotent: a reformatted file re-emits byte-for-byte.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use super::error::{ItemizerError, Result};

/// Rewrite `path` with indented XML. Malformed content is an error and
/// leaves the file untouched.
pub fn reformat_xml_file(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|source| ItemizerError::io(path, source))?;

    let pretty = reformat_xml(&raw).map_err(|detail| ItemizerError::Reformat {
        path: path.to_path_buf(),
        detail,
    })?;

    fs::write(path, pretty).map_err(|source| ItemizerError::io(path, source))
}

fn reformat_xml(xml: &str) -> std::result::Result<String, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| format!("failed to write event: {e}"))?,
            Err(e) => return Err(format!("failed to parse XML: {e}")),
        }
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| format!("reformatted XML is not UTF-8: {e}"))
}
