use crate::error::DocError;

/// A titled, ordered run of content lines. A section with an empty line
/// list is valid and produces just its heading in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new<S, L, I>(title: S, lines: L) -> Section
    where
        S: ToString,
        L: IntoIterator<Item = I>,
        I: ToString,
    {
        Section {
            title: title.to_string(),
            lines: lines.into_iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// The content model the formatter consumes: a title block, an ordered
/// sequence of sections, and a fixed footer string for the last page.
/// Documents are built once per generation request from static data and
/// discarded after their pages are handed to the output sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document with an empty section list. At least one section
    /// must be added before the document can be formatted.
    pub fn new<T, S, F>(title: T, subtitle: S, footer: F) -> Document
    where
        T: ToString,
        S: ToString,
        F: ToString,
    {
        Document {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            footer: footer.to_string(),
            sections: Vec::new(),
        }
    }

    /// Append a section to the end of the document
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Fail fast on malformed content before any page is produced
    pub fn validate(&self) -> Result<(), DocError> {
        if self.title.trim().is_empty() {
            return Err(DocError::MissingTitle);
        }
        if self.sections.is_empty() {
            return Err(DocError::NoSections(self.title.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_title() {
        let mut doc = Document::new("", "sub", "footer");
        doc.add_section(Section::new("Warm-up", ["March in place"]));
        assert!(matches!(doc.validate(), Err(DocError::MissingTitle)));
    }

    #[test]
    fn rejects_empty_section_list() {
        let doc = Document::new("Chart", "sub", "footer");
        assert!(matches!(doc.validate(), Err(DocError::NoSections(_))));
    }

    #[test]
    fn accepts_title_only_sections() {
        let mut doc = Document::new("Chart", "sub", "footer");
        doc.add_section(Section::new("Rest Day", Vec::<String>::new()));
        assert!(doc.validate().is_ok());
    }
}
