use std::fmt;

/// One run of description text with its inline formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Emphasis(&'static str),
    Code(&'static str),
    Link {
        label: &'static str,
        href: &'static str,
    },
}

impl Inline {
    /// Visible text of the run, without markup.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Text(s) | Self::Strong(s) | Self::Emphasis(s) | Self::Code(s) => s,
            Self::Link { label, .. } => label,
        }
    }
}

/// Description text made of inline runs, rendered inside a single paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RichText(&'static [Inline]);

impl RichText {
    pub const fn new(inlines: &'static [Inline]) -> Self {
        Self(inlines)
    }

    pub fn inlines(&self) -> &'static [Inline] {
        self.0
    }

    /// True when no run carries visible text.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|inline| inline.text().trim().is_empty())
    }

    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inline in self.0 {
            f.write_str(inline.text())?;
        }
        Ok(())
    }
}
