//! Shared fixture helpers for the integration tests.
//!
//! Builds synthetic Office-shaped ZIP archives on disk so the tests can
//! exercise discovery, extraction, and collection without binary fixtures.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;

/// A few recognizable non-XML bytes standing in for image data.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3, 4];

pub const DOCUMENT_XML: &[u8] =
    br#"<?xml version="1.0"?><document><body><p>hello</p></body></document>"#;
pub const STYLES_XML: &[u8] = br#"<styles><style name="Normal"/></styles>"#;
pub const CORE_XML: &[u8] = br#"<coreProperties><title>fixture</title></coreProperties>"#;

/// Write a ZIP archive at `path` containing the given member name/byte pairs.
pub fn write_archive(path: &Path, members: &[(&str, &[u8])]) {
    let file = File::create(path).expect("failed to create archive file");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, bytes) in members {
        writer
            .start_file(*name, options)
            .expect("failed to start archive member");
        writer
            .write_all(bytes)
            .expect("failed to write archive member");
    }
    writer.finish().expect("failed to finish archive");
}

/// A minimal Word document archive with one member per component category.
pub fn write_docx(path: &Path) {
    write_archive(
        path,
        &[
            ("word/document.xml", DOCUMENT_XML),
            ("word/styles.xml", STYLES_XML),
            ("word/media/pic1.png", PNG_BYTES),
            ("docProps/core.xml", CORE_XML),
        ],
    );
}
