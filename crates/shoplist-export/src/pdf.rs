//! PDF document assembly.

use crate::encoding::win_ansi;
use crate::error::{ExportError, Result};
use crate::layout::PageLayout;
use chrono::{DateTime, Local};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use shoplist_core::ExportConfig;
use shoplist_list::ShoppingItem;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Producer string written into the document info dictionary.
const PRODUCER: &str = concat!("shoplist ", env!("CARGO_PKG_VERSION"));

/// Header row fill.
const HEADER_FILL: (f32, f32, f32) = (41.0 / 255.0, 128.0 / 255.0, 185.0 / 255.0);
/// Fill of every other body row.
const STRIPE_FILL: (f32, f32, f32) = (245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
/// Body text color.
const BODY_TEXT: (f32, f32, f32) = (80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);

/// Text printed into an exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Line above the table
    pub title: String,
    /// Header of the first column
    pub name_header: String,
    /// Header of the second column
    pub category_header: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            title: config.title.clone(),
            name_header: config.name_header.clone(),
            category_header: config.category_header.clone(),
        }
    }
}

/// Renders the displayed list as a titled two-column table.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    options: ExportOptions,
    layout: PageLayout,
    created_at: DateTime<Local>,
}

impl PdfExporter {
    /// Create an exporter stamped with the current time.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            layout: PageLayout::default(),
            created_at: Local::now(),
        }
    }

    /// Override the page geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Text options in use.
    #[must_use]
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Build the document in memory.
    ///
    /// Rows appear in the order given, which should be the display order.
    pub fn render(&self, items: &[&ShoppingItem]) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular = doc.add_object(helvetica("Helvetica"));
        let bold = doc.add_object(helvetica("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular,
                "F2" => bold,
            },
        });

        let ranges = self.layout.paginate(items.len());
        let mut kids: Vec<Object> = Vec::with_capacity(ranges.len());
        for (page, range) in ranges.into_iter().enumerate() {
            let content = self.page_content(page, &items[range])?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => i64::try_from(page_count).unwrap_or(i64::MAX),
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.layout.width.into(),
                    self.layout.height.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = self.info(&mut doc);
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        debug!(rows = items.len(), pages = page_count, bytes = bytes.len(), "rendered PDF");
        Ok(bytes)
    }

    /// Render and write the document to `path`.
    pub fn write_to(&self, path: &Path, items: &[&ShoppingItem]) -> Result<()> {
        let bytes = self.render(items)?;
        fs::write(path, bytes)?;
        info!(path = %path.display(), rows = items.len(), "exported list");
        Ok(())
    }

    fn info(&self, doc: &mut Document) -> ObjectId {
        let created = self.created_at.format("D:%Y%m%d%H%M%S").to_string();
        doc.add_object(dictionary! {
            "Title" => Object::string_literal(win_ansi(&self.options.title)),
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(created),
        })
    }

    fn page_content(&self, page: usize, rows: &[&ShoppingItem]) -> Result<Vec<u8>> {
        let layout = &self.layout;
        let mut ops = Vec::new();

        if page == 0 {
            text(
                &mut ops,
                "F1",
                layout.title_size,
                layout.margin,
                layout.height - layout.title_baseline,
                &self.options.title,
            );
        }

        let column = layout.column_width();
        let mut top = layout.table_top_on(page);

        fill_rect(&mut ops, HEADER_FILL, layout.margin, top, 2.0 * column, layout);
        set_fill(&mut ops, (1.0, 1.0, 1.0));
        self.row_text(&mut ops, "F2", top, &self.options.name_header, &self.options.category_header);
        top += layout.row_height;

        for (index, item) in rows.iter().enumerate() {
            if index % 2 == 1 {
                fill_rect(&mut ops, STRIPE_FILL, layout.margin, top, 2.0 * column, layout);
            }
            set_fill(&mut ops, BODY_TEXT);
            self.row_text(&mut ops, "F1", top, item.name(), item.category());
            top += layout.row_height;
        }

        Content { operations: ops }
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }

    fn row_text(&self, ops: &mut Vec<Operation>, font: &str, top: f32, first: &str, second: &str) {
        let layout = &self.layout;
        let baseline = layout.height - top - layout.row_height / 2.0 - layout.font_size * 0.35;
        let left = layout.margin + layout.cell_padding;

        text(ops, font, layout.font_size, left, baseline, &layout.fit_cell(first));
        text(
            ops,
            font,
            layout.font_size,
            left + layout.column_width(),
            baseline,
            &layout.fit_cell(second),
        );
    }
}

fn helvetica(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn set_fill(ops: &mut Vec<Operation>, (r, g, b): (f32, f32, f32)) {
    ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
}

/// Filled rectangle one row high whose top edge is `top` points below the page top.
fn fill_rect(
    ops: &mut Vec<Operation>,
    color: (f32, f32, f32),
    left: f32,
    top: f32,
    width: f32,
    layout: &PageLayout,
) {
    set_fill(ops, color);
    let bottom = layout.height - top - layout.row_height;
    ops.push(Operation::new(
        "re",
        vec![left.into(), bottom.into(), width.into(), layout.row_height.into()],
    ));
    ops.push(Operation::new("f", vec![]));
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(value))]));
    ops.push(Operation::new("ET", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shoplist_core::ItemId;

    fn item(id: &str, name: &str, category: &str) -> ShoppingItem {
        ShoppingItem::with_id(ItemId::new(id).expect("valid id"), name, category)
    }

    /// All `Tj` operands on page `number`, decoded as Latin-1.
    fn page_strings(doc: &Document, number: u32) -> Vec<String> {
        let page_id = doc.get_pages()[&number];
        let raw = doc.get_page_content(page_id).expect("page content");
        let content = Content::decode(&raw).expect("decode content");
        content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first())
            .filter_map(|operand| operand.as_str().ok())
            .map(|bytes| bytes.iter().map(|&b| char::from(b)).collect())
            .collect()
    }

    #[test]
    fn test_options_from_config() {
        let config = ExportConfig {
            title: "Lista de compras".to_string(),
            name_header: "Nome".to_string(),
            category_header: "Categoria".to_string(),
            file_name: "Lista-de-compras.pdf".to_string(),
        };
        let options = ExportOptions::from(&config);
        assert_eq!(options.title, "Lista de compras");
        assert_eq!(options.name_header, "Nome");
        assert_eq!(options.category_header, "Categoria");
    }

    #[test]
    fn test_render_single_page_in_order() {
        let leite = item("1", "Leite", "Laticínios");
        let pao = item("2", "Pão", "Padaria");
        let bytes = PdfExporter::new(ExportOptions::default())
            .render(&[&leite, &pao])
            .expect("render");

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).expect("parse rendered PDF");
        assert_eq!(doc.get_pages().len(), 1);
        assert_eq!(
            page_strings(&doc, 1),
            ["Shopping List", "Name", "Category", "leite", "laticínios", "pão", "padaria"]
        );
    }

    #[test]
    fn test_render_empty_list() {
        let bytes = PdfExporter::new(ExportOptions::default())
            .render(&[])
            .expect("render");
        let doc = Document::load_mem(&bytes).expect("parse rendered PDF");

        assert_eq!(doc.get_pages().len(), 1);
        assert_eq!(page_strings(&doc, 1), ["Shopping List", "Name", "Category"]);
    }

    #[test]
    fn test_render_paginates_with_repeated_header() {
        let items: Vec<ShoppingItem> = (0..50)
            .map(|i| item(&format!("id-{i}"), &format!("item {i}"), "mercearia"))
            .collect();
        let refs: Vec<&ShoppingItem> = items.iter().collect();

        let bytes = PdfExporter::new(ExportOptions::default())
            .render(&refs)
            .expect("render");
        let doc = Document::load_mem(&bytes).expect("parse rendered PDF");
        assert_eq!(doc.get_pages().len(), 2);

        let second = page_strings(&doc, 2);
        assert_eq!(&second[..2], ["Name", "Category"]);
        assert_eq!(second[2], "item 36");
        assert_eq!(second.len(), 2 + 2 * 14);
    }

    #[test]
    fn test_info_dictionary() {
        let created = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 0)
            .single()
            .expect("valid timestamp");
        let bytes = PdfExporter::new(ExportOptions::default())
            .with_created_at(created)
            .render(&[])
            .expect("render");
        let doc = Document::load_mem(&bytes).expect("parse rendered PDF");

        let info_id = doc
            .trailer
            .get(b"Info")
            .and_then(Object::as_reference)
            .expect("info reference");
        let info = doc.get_dictionary(info_id).expect("info dictionary");
        let field = |key: &[u8]| {
            info.get(key)
                .and_then(Object::as_str)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .expect("info field")
        };

        assert_eq!(field(b"Title"), "Shopping List");
        assert!(field(b"Producer").starts_with("shoplist "));
        assert_eq!(field(b"CreationDate"), "D:20240309140500");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("list.pdf");
        let leite = item("1", "leite", "laticínios");

        PdfExporter::new(ExportOptions::default())
            .write_to(&path, &[&leite])
            .expect("write");

        let doc = Document::load(&path).expect("load written PDF");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("list.pdf");

        let err = PdfExporter::new(ExportOptions::default())
            .write_to(&path, &[])
            .expect_err("parent directory does not exist");
        assert!(matches!(err, ExportError::Io(_)));
    }
}
