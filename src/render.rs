//! The output sink: renders a formatted page sequence into PDF bytes.
//!
//! Pages come in as positioned text runs in millimetres from the top-left
//! corner; this module flips them into the PDF coordinate space, encodes the
//! text for the unembedded base fonts, and assembles the object graph
//! (catalog, page tree, fonts, per-page content streams) with [pdf_writer].

use crate::colour::Colour;
use crate::error::DocError;
use crate::info::Info;
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::page::Page;
use crate::refs::{ObjectReferences, RefType};
use crate::style::Face;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use std::io::Write;

fn base_font_name(face: Face) -> Name<'static> {
    match face {
        Face::Regular => Name(b"Helvetica"),
        Face::Bold => Name(b"Helvetica-Bold"),
    }
}

fn resource_name(face: Face) -> Name<'static> {
    match face {
        Face::Regular => Name(b"F0"),
        Face::Bold => Name(b"F1"),
    }
}

/// Map run text into the StandardEncoding byte set of the unembedded base
/// fonts. Characters without a mapping degrade to `?`.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{2022}' => 0o267,
            _ => b'?',
        })
        .collect()
}

/// Render the entire page sequence to a complete, self-contained PDF byte
/// stream. The whole document is assembled in memory; for the handful of
/// pages these resources run to, that is fine.
pub fn render(pages: &[Page], info: Option<&Info>) -> Vec<u8> {
    let mut refs = ObjectReferences::new();
    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut writer = Pdf::new();
    if let Some(info) = info {
        info.write(&mut refs, &mut writer);
    }

    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();
    writer
        .pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs.iter().copied());

    let faces = [Face::Regular, Face::Bold];
    for face in faces {
        let id = refs.gen(RefType::Font(face));
        writer.type1_font(id).base_font(base_font_name(face));
    }

    for (index, page) in pages.iter().enumerate() {
        let content_id = refs.gen(RefType::ContentForPage(index));

        let mut page_writer = writer.page(page_refs[index]);
        page_writer.media_box(Rect::new(
            0.0,
            0.0,
            PAGE_WIDTH.to_pt().0,
            PAGE_HEIGHT.to_pt().0,
        ));
        page_writer.parent(page_tree_id);
        page_writer.contents(content_id);

        let mut resources = page_writer.resources();
        let mut resource_fonts = resources.fonts();
        for face in faces {
            if let Some(font_ref) = refs.get(RefType::Font(face)) {
                resource_fonts.pair(resource_name(face), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page_writer.finish();

        writer.stream(content_id, &render_content(page));
    }

    writer.catalog(catalog_id).pages(page_tree_id);

    writer.finish()
}

/// Render and write the page sequence to the writer, typically a file.
pub fn write<W: Write>(pages: &[Page], info: Option<&Info>, mut w: W) -> Result<(), DocError> {
    w.write_all(render(pages, info).as_slice()).map_err(Into::into)
}

fn render_content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    for run in &page.runs {
        content.begin_text();
        content.set_font(resource_name(run.style.face), run.style.size.0);
        match run.style.colour {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
        // layout offsets grow downward from the top edge; PDF's origin is
        // the bottom-left corner
        content.next_line(run.x.to_pt().0, (PAGE_HEIGHT - run.y).to_pt().0);
        content.show(Str(&encode_text(&run.text)));
        content.end_text();
    }
    content.finish()
}
