use crate::helpers;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;
use std::io::Write;
use zoo_layout::Canvas;
use zoo_render_core::utils::{BASE_FONT, styled_font_name};
use zoo_render_core::{DocumentRenderer, PageBand, RenderError};

const PDF_VERSION: &str = "1.7";

/// State that only exists between `begin_document` and `finish`.
struct OpenDocument<W> {
    writer: W,
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
}

/// A PDF renderer using the `lopdf` library.
///
/// Pages are assembled in memory and serialized in one go by `finish`, so a
/// failure part-way never leaves a truncated document in the writer.
pub struct LopdfRenderer<W: Write> {
    open: Option<OpenDocument<W>>,
    font_map: HashMap<String, String>,
}

impl<W: Write> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LopdfRenderer<W> {
    pub fn new() -> Self {
        let mut font_map = HashMap::new();
        for (i, bold) in [false, true].into_iter().enumerate() {
            font_map.insert(styled_font_name(BASE_FONT, bold), format!("F{}", i + 1));
        }
        Self {
            open: None,
            font_map,
        }
    }

    fn open_mut(&mut self) -> Result<&mut OpenDocument<W>, RenderError> {
        self.open
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (postscript_name, internal_name) in &self.font_map {
            font_dict.set(
                internal_name.as_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => Object::Name(postscript_name.as_bytes().to_vec()),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        self.open = Some(OpenDocument {
            writer,
            doc,
            pages_id,
            resources_id,
        });
        Ok(())
    }

    fn render_page_content(
        &mut self,
        canvas: &Canvas,
        band: &PageBand,
        _page_width: f32,
    ) -> Result<ObjectId, RenderError> {
        let content = helpers::render_band_to_content(canvas, band, &self.font_map)?;
        let open = self.open_mut()?;
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(open.doc.add_object(stream))
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let open = self.open_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => open.pages_id,
            "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), page_width.into(), page_height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => open.resources_id,
        };
        Ok(open.doc.add_object(page_dict))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let renderer = *self;
        let Some(OpenDocument {
            mut writer,
            mut doc,
            pages_id,
            ..
        }) = renderer.open
        else {
            return Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ));
        };

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        doc.save_to(&mut writer)?;
        writer.flush()?;
        log::debug!("Wrote PDF with {} pages", page_ids.len());
        Ok(writer)
    }
}
