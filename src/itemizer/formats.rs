//! Per-format component path tables
//!
//! Each Office family keeps its members in well-known locations inside the
//! archive. This table maps a `(format, category)` pair to the archive-relative
//! paths the collector should look at. Pure lookup, no state, no I/O.

use super::models::{ComponentCategory, DocumentFormat, PathSpec};
use PathSpec::{SingleFile, Subtree};

/// Archive paths holding a format's members for one component category.
///
/// Total over both enums: every pair yields a defined (possibly empty,
/// never absent) ordered slice. Subtree entries are walked recursively by
/// the collector; single files are picked up if present.
pub fn component_paths(
    format: DocumentFormat,
    category: ComponentCategory,
) -> &'static [PathSpec] {
    use ComponentCategory::*;
    use DocumentFormat::*;

    match (format, category) {
        (Word, StructuralXml) => &[
            Subtree("customXML"),
            Subtree("docProps"),
            Subtree("word"),
        ],
        (Word, Style) => &[SingleFile("word/styles.xml")],
        (Word, Image) => &[Subtree("word/media")],
        (Word, Content) => &[SingleFile("word/document.xml")],

        (Spreadsheet, StructuralXml) => &[Subtree("docProps"), Subtree("xl")],
        (Spreadsheet, Style) => &[SingleFile("xl/styles.xml")],
        (Spreadsheet, Image) => &[Subtree("xl/media")],
        (Spreadsheet, Content) => &[
            SingleFile("xl/workbook.xml"),
            Subtree("xl/worksheets"),
        ],

        (Presentation, StructuralXml) => &[Subtree("docProps"), Subtree("ppt")],
        (Presentation, Style) => &[SingleFile("ppt/tableStyles.xml")],
        (Presentation, Image) => &[Subtree("ppt/media")],
        (Presentation, Content) => &[
            SingleFile("ppt/presentation.xml"),
            Subtree("ppt/slides"),
            Subtree("ppt/slideMasters"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_an_entry() {
        for format in DocumentFormat::ALL {
            for category in ComponentCategory::ALL {
                // Totality is enforced by the match; the table also never
                // declares an empty slice for the supported families.
                assert!(
                    !component_paths(format, category).is_empty(),
                    "no paths for {format:?}/{category:?}"
                );
            }
        }
    }

    #[test]
    fn style_entries_are_single_files() {
        for format in DocumentFormat::ALL {
            let paths = component_paths(format, ComponentCategory::Style);
            assert_eq!(paths.len(), 1);
            assert!(matches!(paths[0], SingleFile(_)));
        }
    }

    #[test]
    fn image_entries_are_media_subtrees() {
        for format in DocumentFormat::ALL {
            let paths = component_paths(format, ComponentCategory::Image);
            assert_eq!(paths.len(), 1);
            match paths[0] {
                Subtree(path) => assert!(path.ends_with("media")),
                SingleFile(path) => panic!("expected subtree, got file `{path}`"),
            }
        }
    }

    #[test]
    fn presentation_content_covers_slides_and_masters() {
        let paths = component_paths(
            DocumentFormat::Presentation,
            ComponentCategory::Content,
        );
        assert_eq!(
            paths,
            &[
                SingleFile("ppt/presentation.xml"),
                Subtree("ppt/slides"),
                Subtree("ppt/slideMasters"),
            ]
        );
    }
}
