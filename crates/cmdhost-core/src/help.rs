//! Help document rendering
//!
//! Commands describe their help page through [`HelpSections`]; the host
//! calls the sections in a fixed order (title, then description) and
//! collects the output in a [`HelpDocument`].

/// Text document built up from styled sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpDocument {
    buf: String,
}

impl HelpDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level-1 heading, underlined with `=`
    pub fn h1(&mut self, text: &str) {
        self.heading(text, '=');
    }

    /// Level-2 heading, underlined with `-`
    pub fn h2(&mut self, text: &str) {
        self.heading(text, '-');
    }

    /// Append a documentation string as one paragraph per blank-line block.
    ///
    /// Leading indentation is stripped from every line.
    pub fn include_doc_string(&mut self, text: &str) {
        let mut paragraph: Vec<&str> = Vec::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                self.paragraph(&paragraph);
                paragraph.clear();
            } else {
                paragraph.push(line);
            }
        }
        self.paragraph(&paragraph);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn heading(&mut self, text: &str, underline: char) {
        let width = text.chars().count();
        self.buf.push_str(text);
        self.buf.push('\n');
        self.buf.extend(std::iter::repeat(underline).take(width));
        self.buf.push_str("\n\n");
    }

    fn paragraph(&mut self, lines: &[&str]) {
        if lines.is_empty() {
            return;
        }
        self.buf.push_str(&lines.join(" "));
        self.buf.push_str("\n\n");
    }
}

/// What a help page is about.
pub trait HelpTopic {
    fn name(&self) -> &str;
    fn documentation(&self) -> &str;
}

/// Section renderers for one kind of help page.
pub trait HelpSections {
    fn title(&self, topic: &dyn HelpTopic, doc: &mut HelpDocument);
    fn description(&self, topic: &dyn HelpTopic, doc: &mut HelpDocument);
}

/// Render every section of `topic` in page order.
pub fn render_help(sections: &impl HelpSections, topic: &impl HelpTopic) -> HelpDocument {
    let mut doc = HelpDocument::new();
    sections.title(topic, &mut doc);
    sections.description(topic, &mut doc);
    doc
}
