use crate::document::Document;
use crate::error::DocError;
use crate::layout::wrap::{wrap, Measure};
use crate::page::{Page, TextRun};
use crate::style::styles;
use crate::units::Mm;

/// Page dimensions, A4
pub const PAGE_WIDTH: Mm = Mm(210.0);
pub const PAGE_HEIGHT: Mm = Mm(297.0);

/// The cursor reset value at the top of every fresh page, and the left edge
/// of every run
pub const TOP_MARGIN: Mm = Mm(14.0);
pub const LEFT_MARGIN: Mm = Mm(14.0);

/// No run is ever placed below this vertical offset
pub const MAX_PRINTABLE: Mm = Mm(280.0);

/// The printable width lines are wrapped to before placement
pub const WRAP_WIDTH: Mm = Mm(180.0);

/// The fixed vertical offset of the footer run on the last page
pub const FOOTER_OFFSET: Mm = Mm(280.0);

/// The marker prefixed to every body sub-line
pub const BULLET: &str = "\u{2022} ";

/// Indent of body lines relative to the left margin
const LINE_INDENT: Mm = Mm(4.0);

const TITLE_ADVANCE: Mm = Mm(8.0);
const SUBTITLE_ADVANCE: Mm = Mm(10.0);
const HEADING_ADVANCE: Mm = Mm(7.0);
const LINE_HEIGHT: Mm = Mm(6.0);
const SECTION_GAP: Mm = Mm(4.0);

/// Convert a document into an ordered sequence of pages of positioned text
/// runs, honoring pagination, word wrapping, and last-page footer placement.
///
/// Section and line order are preserved exactly; nothing is dropped,
/// reordered, or truncated. Headings are never split from the top of their
/// section across a page boundary, while body lines break at sub-line
/// granularity. The transformation is pure and deterministic: equal inputs
/// produce structurally identical output, and the caller owns handing the
/// pages to an output sink.
pub fn format<M: Measure>(document: &Document, measure: &M) -> Result<Vec<Page>, DocError> {
    document.validate()?;

    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::new();
    let mut cursor = TOP_MARGIN;

    page.add_run(TextRun {
        text: document.title.clone(),
        x: LEFT_MARGIN,
        y: cursor,
        style: styles::TITLE,
    });
    cursor += TITLE_ADVANCE;

    page.add_run(TextRun {
        text: document.subtitle.clone(),
        x: LEFT_MARGIN,
        y: cursor,
        style: styles::SUBTITLE,
    });
    cursor += SUBTITLE_ADVANCE;

    // body lines are indented and carry the bullet marker, so they wrap to
    // what is left of the printable width
    let bullet_width = measure.text_width(BULLET, &styles::BODY);
    let line_width = WRAP_WIDTH - LINE_INDENT - bullet_width;

    for section in &document.sections {
        // headings are never split from their section across a boundary
        if cursor + HEADING_ADVANCE > MAX_PRINTABLE {
            pages.push(std::mem::take(&mut page));
            cursor = TOP_MARGIN;
        }
        page.add_run(TextRun {
            text: section.title.clone(),
            x: LEFT_MARGIN,
            y: cursor,
            style: styles::HEADING,
        });
        cursor += HEADING_ADVANCE;

        for line in &section.lines {
            for sub in wrap(line, line_width, styles::BODY, measure) {
                if cursor + LINE_HEIGHT > MAX_PRINTABLE {
                    // the heading is not re-emitted after a break
                    pages.push(std::mem::take(&mut page));
                    cursor = TOP_MARGIN;
                }
                page.add_run(TextRun {
                    text: format!("{BULLET}{sub}"),
                    x: LEFT_MARGIN + LINE_INDENT,
                    y: cursor,
                    style: styles::BODY,
                });
                cursor += LINE_HEIGHT;
            }
        }

        cursor += SECTION_GAP;
    }
    pages.push(page);

    // the footer lands on the last page only; if content already passed the
    // footer offset, it gets a fresh page so it is not overwritten
    if cursor > FOOTER_OFFSET {
        pages.push(Page::new());
    }
    if let Some(last) = pages.last_mut() {
        last.add_run(TextRun {
            text: document.footer.clone(),
            x: LEFT_MARGIN,
            y: FOOTER_OFFSET,
            style: styles::FOOTER,
        });
    }

    log::debug!(
        "formatted \"{}\" into {} page(s)",
        document.title,
        pages.len()
    );
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Section;
    use crate::style::{Face, RunStyle};

    /// every character is 2 mm wide, so the sums below stay exact
    struct CharWidth;

    impl Measure for CharWidth {
        fn text_width(&self, text: &str, _style: &RunStyle) -> Mm {
            Mm(text.chars().count() as f32 * 2.0)
        }
    }

    fn doc_with(sections: Vec<Section>) -> Document {
        let mut doc = Document::new(
            "HealthTrack Beginner Workout Chart",
            "Weekly template and exercise reference",
            "(c) 2026 HealthTrack. Built for students in India.",
        );
        for section in sections {
            doc.add_section(section);
        }
        doc
    }

    /// a section of `n` lines that each wrap to a single sub-line
    fn filler(title: &str, n: usize) -> Section {
        Section::new(title, (0..n).map(|i| format!("line {i}")))
    }

    #[test]
    fn single_page_scenario() {
        // one short section: title, subtitle, heading, 4 bullets, footer,
        // all on one page with strictly increasing offsets
        let doc = doc_with(vec![Section::new(
            "Warm-up",
            ["March in place", "Arm circles", "Leg swings", "Neck rolls"],
        )]);
        let pages = format(&doc, &CharWidth).unwrap();

        assert_eq!(pages.len(), 1);
        let runs = &pages[0].runs;
        assert_eq!(runs.len(), 8);
        assert_eq!(runs[0].text, doc.title);
        assert_eq!(runs[0].style, styles::TITLE);
        assert_eq!(runs[1].text, doc.subtitle);
        assert_eq!(runs[2].text, "Warm-up");
        assert_eq!(runs[2].style, styles::HEADING);
        for (run, line) in runs[3..7].iter().zip(&doc.sections[0].lines) {
            assert_eq!(run.text, format!("{BULLET}{line}"));
            assert_eq!(run.style, styles::BODY);
        }
        assert_eq!(runs[6].y, Mm(57.0));

        let footer = runs.last().unwrap();
        assert_eq!(footer.text, doc.footer);
        assert_eq!(footer.y, FOOTER_OFFSET);

        for pair in runs.windows(2) {
            assert!(pair[0].y < pair[1].y, "offsets must strictly increase");
        }
    }

    #[test]
    fn wrapped_line_splits_across_pages_at_sub_line_granularity() {
        // after the title block and heading the cursor sits at 39; 38 filler
        // lines move it to 267, leaving room for exactly two more lines
        // before the 280 limit. The long line wraps into three sub-lines:
        // two close out page one, the third opens page two at the top margin.
        let mut lines: Vec<String> = (0..38).map(|i| format!("line {i}")).collect();
        let word = "aaaaaaaaaa"; // 10 chars; 7 words fit per 172 mm sub-line
        lines.push(vec![word; 21].join(" "));
        let doc = doc_with(vec![Section::new("Endurance", lines)]);

        let pages = format(&doc, &CharWidth).unwrap();
        assert_eq!(pages.len(), 2);

        let first = &pages[0].runs;
        let sub = format!("{BULLET}{}", vec![word; 7].join(" "));
        assert_eq!(first[first.len() - 2].text, sub);
        assert_eq!(first[first.len() - 2].y, Mm(267.0));
        assert_eq!(first.last().unwrap().text, sub);
        assert_eq!(first.last().unwrap().y, Mm(273.0));

        let second = &pages[1].runs;
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].text, sub);
        assert_eq!(second[0].y, TOP_MARGIN);
        assert_eq!(second[1].text, doc.footer);
        assert_eq!(second[1].y, FOOTER_OFFSET);
    }

    #[test]
    fn footer_gets_a_fresh_page_when_content_passes_its_offset() {
        // 40 filler lines put the last body run at 273 and the cursor past
        // the footer offset, so the footer must not share that page
        let doc = doc_with(vec![filler("Full Week", 40)]);
        let pages = format(&doc, &CharWidth).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].runs.last().unwrap().y, Mm(273.0));
        assert_eq!(pages[1].runs.len(), 1);
        assert_eq!(pages[1].runs[0].text, doc.footer);
        assert_eq!(pages[1].runs[0].y, FOOTER_OFFSET);
    }

    #[test]
    fn heading_is_never_split_from_its_section() {
        // the first section fills the page; the second section's heading
        // would not fit, so it opens the next page instead
        let doc = doc_with(vec![filler("Week One", 40), filler("Week Two", 2)]);
        let pages = format(&doc, &CharWidth).unwrap();

        assert_eq!(pages.len(), 2);
        let second = &pages[1].runs;
        assert_eq!(second[0].text, "Week Two");
        assert_eq!(second[0].style, styles::HEADING);
        assert_eq!(second[0].y, TOP_MARGIN);
    }

    #[test]
    fn every_run_stays_within_the_printable_band() {
        let doc = doc_with(vec![
            filler("One", 50),
            Section::new("Two", [vec!["wrap"; 200].join(" ")]),
            filler("Three", 33),
        ]);
        let pages = format(&doc, &CharWidth).unwrap();

        assert!(!pages.is_empty());
        for page in &pages {
            assert!(!page.runs.is_empty());
            for run in &page.runs {
                assert!(run.y >= TOP_MARGIN, "{} above top margin", run.text);
                assert!(run.y <= MAX_PRINTABLE, "{} below printable band", run.text);
            }
        }
    }

    #[test]
    fn section_and_line_order_is_preserved() {
        let doc = doc_with(vec![
            Section::new("A", ["a1", "a2"]),
            Section::new("B", Vec::<String>::new()),
            Section::new("C", ["c1"]),
        ]);
        let pages = format(&doc, &CharWidth).unwrap();

        let texts: Vec<&str> = pages
            .iter()
            .flat_map(|page| page.runs.iter())
            .filter(|run| run.style == styles::HEADING || run.style == styles::BODY)
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "A",
                "\u{2022} a1",
                "\u{2022} a2",
                "B",
                "C",
                "\u{2022} c1"
            ]
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let doc = doc_with(vec![filler("One", 45), Section::new("Two", ["done"])]);
        let first = format(&doc, &CharWidth).unwrap();
        let second = format(&doc, &CharWidth).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn footer_appears_exactly_once_on_the_last_page() {
        let doc = doc_with(vec![filler("One", 90)]);
        let pages = format(&doc, &CharWidth).unwrap();
        assert!(pages.len() > 1);

        let footers: Vec<(usize, &TextRun)> = pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.runs.iter().map(move |run| (i, run)))
            .filter(|(_, run)| run.text == doc.footer)
            .collect();
        assert_eq!(footers.len(), 1);
        assert_eq!(footers[0].0, pages.len() - 1);
        assert_eq!(footers[0].1.y, FOOTER_OFFSET);
    }

    #[test]
    fn title_only_section_emits_just_its_heading() {
        let base = doc_with(vec![Section::new("Rest Day", Vec::<String>::new())]);
        let pages = format(&base, &CharWidth).unwrap();
        assert_eq!(pages.len(), 1);
        // title, subtitle, heading, footer
        assert_eq!(pages[0].runs.len(), 4);
        assert_eq!(pages[0].runs[2].text, "Rest Day");

        // the empty section consumes only heading height plus the gap: a
        // following heading lands exactly one advance plus gap further down
        let mut two = base.clone();
        two.add_section(Section::new("Next", Vec::<String>::new()));
        let pages = format(&two, &CharWidth).unwrap();
        let runs = &pages[0].runs;
        assert_eq!(runs[3].text, "Next");
        assert_eq!(runs[3].y, runs[2].y + HEADING_ADVANCE + SECTION_GAP);
    }

    #[test]
    fn malformed_documents_fail_before_any_page_is_produced() {
        let empty = Document::new("Chart", "sub", "footer");
        assert!(matches!(
            format(&empty, &CharWidth),
            Err(DocError::NoSections(_))
        ));

        let mut untitled = Document::new("  ", "sub", "footer");
        untitled.add_section(Section::new("A", ["a"]));
        assert!(matches!(
            format(&untitled, &CharWidth),
            Err(DocError::MissingTitle)
        ));
    }

    #[test]
    fn body_runs_are_indented_and_bulleted() {
        let doc = doc_with(vec![Section::new("A", ["a1"])]);
        let pages = format(&doc, &CharWidth).unwrap();
        let body = pages[0]
            .runs
            .iter()
            .find(|run| run.style == styles::BODY)
            .unwrap();
        assert_eq!(body.x, LEFT_MARGIN + Mm(4.0));
        assert!(body.text.starts_with(BULLET));
        assert_eq!(body.style.face, Face::Regular);
    }
}
