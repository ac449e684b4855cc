//! Typed document model for hOCR markup.
//!
//! The engine emits HTML nesting page → line → word spans, each
//! carrying its geometry in a `title` attribute. Parsing here is
//! lenient by construction (html5ever recovers from any input); the
//! resulting typed tree is what the traversal in [`super::words`]
//! walks, so admission rules operate on `Option<BBox>` fields instead
//! of ad hoc attribute lookups.

use scraper::{ElementRef, Html, Selector};

use super::geometry::{parse_bbox, BBox};

/// A parsed hOCR document: zero or more recognized pages.
///
/// An empty `pages` list means the markup contained no `ocr_page`
/// element at all — the pipeline treats that as a fatal processing
/// failure rather than an empty result.
#[derive(Debug, Clone, Default)]
pub struct HocrDocument {
    pub pages: Vec<HocrPage>,
}

/// One recognized page, with its text lines in document order.
#[derive(Debug, Clone)]
pub struct HocrPage {
    pub lines: Vec<HocrLine>,
}

/// One text line: its own geometry plus word spans in document order.
///
/// `geometry` is `None` when the line's annotation had no parseable
/// bbox; the traversal drops such lines wholesale.
#[derive(Debug, Clone)]
pub struct HocrLine {
    pub geometry: Option<BBox>,
    pub words: Vec<HocrWord>,
}

/// One word span with its recognized text as it appears in the markup
/// (untrimmed; trimming is the record builder's concern).
#[derive(Debug, Clone)]
pub struct HocrWord {
    pub geometry: Option<BBox>,
    pub text: String,
}

impl HocrDocument {
    /// Parse engine markup into the typed page/line/word tree.
    ///
    /// Never fails: unrecognizable input simply produces a document
    /// with no pages.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);

        let (Ok(page_selector), Ok(line_selector), Ok(word_selector)) = (
            Selector::parse("div.ocr_page"),
            Selector::parse("span.ocr_line"),
            Selector::parse("span.ocrx_word"),
        ) else {
            return Self::default();
        };

        let pages = html
            .select(&page_selector)
            .map(|page| HocrPage {
                lines: page
                    .select(&line_selector)
                    .map(|line| parse_line(line, &word_selector))
                    .collect(),
            })
            .collect();

        Self { pages }
    }
}

fn parse_line(line: ElementRef<'_>, word_selector: &Selector) -> HocrLine {
    let words = line
        .select(word_selector)
        .map(|word| HocrWord {
            geometry: parse_bbox(title_of(word)),
            text: word.text().collect(),
        })
        .collect();

    HocrLine {
        geometry: parse_bbox(title_of(line)),
        words,
    }
}

fn title_of(element: ElementRef<'_>) -> &str {
    element.value().attr("title").unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html>
 <body>
  <div class="ocr_page" id="page_1" title='image "scan.png"; bbox 0 0 800 600; ppageno 0'>
   <span class="ocr_line" id="line_1_1" title="bbox 10 10 500 40; baseline 0 -5">
    <span class="ocrx_word" id="word_1_1" title="bbox 10 10 100 40; x_wconf 95">Hello</span>
    <span class="ocrx_word" id="word_1_2" title="bbox 110 10 200 40; x_wconf 91">World</span>
   </span>
   <span class="ocr_line" id="line_1_2" title="no geometry here">
    <span class="ocrx_word" id="word_2_1" title="bbox 10 50 60 80; x_wconf 88">orphan</span>
   </span>
  </div>
 </body>
</html>"#;

    #[test]
    fn parses_page_line_word_hierarchy() {
        let document = HocrDocument::parse(SAMPLE);
        assert_eq!(document.pages.len(), 1);

        let page = &document.pages[0];
        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.lines[0].words.len(), 2);
        assert_eq!(page.lines[0].words[0].text, "Hello");
        assert_eq!(page.lines[0].words[1].text, "World");
    }

    #[test]
    fn line_without_bbox_keeps_children_but_no_geometry() {
        let document = HocrDocument::parse(SAMPLE);
        let line = &document.pages[0].lines[1];
        assert!(line.geometry.is_none());
        assert_eq!(line.words.len(), 1);
    }

    #[test]
    fn word_geometry_is_parsed() {
        let document = HocrDocument::parse(SAMPLE);
        let word = &document.pages[0].lines[0].words[0];
        let bbox = word.geometry.unwrap();
        assert_eq!((bbox.x1, bbox.y1, bbox.x2, bbox.y2), (10, 10, 100, 40));
    }

    #[test]
    fn no_page_markup_yields_empty_document() {
        let document = HocrDocument::parse("<html><body><p>not ocr output</p></body></html>");
        assert!(document.pages.is_empty());

        let document = HocrDocument::parse("garbage \x01 bytes");
        assert!(document.pages.is_empty());
    }

    #[test]
    fn nested_markup_inside_word_is_flattened_to_text() {
        let markup = r#"<div class="ocr_page" title="bbox 0 0 100 100">
          <span class="ocr_line" title="bbox 0 0 100 20">
           <span class="ocrx_word" title="bbox 0 0 50 20"><strong>Bold</strong></span>
          </span></div>"#;
        let document = HocrDocument::parse(markup);
        assert_eq!(document.pages[0].lines[0].words[0].text, "Bold");
    }
}
