//! Output page rendering
//!
//! [`PdfPageWriter`] collects pages as the paginator emits them and
//! assembles the page tree once pagination is finished.

use crate::bitmap::SourceBitmap;
use crate::constants::{HELVETICA_CHAR_WIDTH_RATIO, PAGE_NUMBER_FONT_SIZE, mm_to_pt};
use crate::layout::{PlacementResult, SubRegion};
use crate::options::PaginationOptions;
use crate::paginate::PageWriter;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::create_image_xobject;

/// A page that has been started but not yet added to the document
struct PendingPage {
    width_pt: f32,
    height_pt: f32,
    content_ops: Vec<String>,
    xobjects: Dictionary,
    image_count: usize,
}

/// Writes paginated segments into a new PDF document
pub struct PdfPageWriter {
    document: Document,
    pages_tree_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<PendingPage>,
    margin_mm: f32,
    add_page_numbers: bool,
    page_number_start: usize,
    font_id: Option<ObjectId>,
}

impl PdfPageWriter {
    pub fn new(options: &PaginationOptions) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_tree_id = document.new_object_id();

        Self {
            document,
            pages_tree_id,
            page_ids: Vec::new(),
            current: None,
            margin_mm: options.margin_mm,
            add_page_numbers: options.add_page_numbers,
            page_number_start: options.page_number_start,
            font_id: None,
        }
    }

    /// Pages started so far, including the one in progress
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.current.is_some())
    }

    /// Close the last page and build the page tree and catalog.
    pub fn finish(mut self) -> Result<Document> {
        self.flush_page();

        let page_refs: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.document
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.document.trailer.set("Root", catalog_id);

        Ok(self.document)
    }

    fn flush_page(&mut self) {
        let Some(mut page) = self.current.take() else {
            return;
        };

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(page.xobjects));

        if self.add_page_numbers {
            let page_number = self.page_number_start + self.page_ids.len();
            page.content_ops.push(page_number_command(
                page_number,
                page.width_pt,
                mm_to_pt(self.margin_mm),
            ));

            let font_id = self.helvetica();
            let mut fonts = Dictionary::new();
            fonts.set("F1", Object::Reference(font_id));
            resources.set("Font", Object::Dictionary(fonts));
        }

        let content = page.content_ops.join("");
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width_pt),
                Object::Real(page.height_pt),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
    }

    /// Shared Helvetica font object, created on first use
    fn helvetica(&mut self) -> ObjectId {
        if let Some(id) = self.font_id {
            return id;
        }

        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        let id = self.document.add_object(font_dict);
        self.font_id = Some(id);
        id
    }
}

impl PageWriter for PdfPageWriter {
    fn start_page(&mut self, page: PageSize) -> Result<()> {
        self.flush_page();
        self.current = Some(PendingPage {
            width_pt: mm_to_pt(page.width_mm),
            height_pt: mm_to_pt(page.height_mm),
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
            image_count: 0,
        });
        Ok(())
    }

    fn draw_segment(
        &mut self,
        bitmap: &SourceBitmap,
        subregion: SubRegion,
        placement: PlacementResult,
    ) -> Result<()> {
        let page = self
            .current
            .as_mut()
            .ok_or_else(|| PaginateError::Config("draw_segment called before start_page".into()))?;

        let pixels = bitmap.extract(subregion)?;
        let xobject_id = create_image_xobject(&mut self.document, &pixels)?;

        let xobject_name = format!("Im{}", page.image_count);
        page.image_count += 1;
        page.xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        page.content_ops.push(placement_command(
            &xobject_name,
            &placement,
            page.height_pt,
        ));

        Ok(())
    }
}

/// Generate the content stream command that paints an image at a placement.
///
/// Placements are measured from the top-left corner; PDF user space starts
/// at the bottom-left.
fn placement_command(xobject_name: &str, placement: &PlacementResult, page_height_pt: f32) -> String {
    let width = mm_to_pt(placement.width_mm);
    let height = mm_to_pt(placement.height_mm);
    let x = mm_to_pt(placement.x_mm);
    let y = page_height_pt - mm_to_pt(placement.y_mm + placement.height_mm);
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        width, height, x, y, xobject_name
    )
}

/// Page number centred in the bottom margin
fn page_number_command(page_number: usize, page_width_pt: f32, margin_pt: f32) -> String {
    let text = page_number.to_string();
    let text_width = text.len() as f32 * PAGE_NUMBER_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
    let x = page_width_pt / 2.0 - text_width / 2.0;
    let y = ((margin_pt - PAGE_NUMBER_FONT_SIZE) / 2.0).max(0.0);
    format!(
        "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
        PAGE_NUMBER_FONT_SIZE, x, y, text
    )
}
