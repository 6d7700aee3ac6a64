/// Separator written between forwarded-elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementSeparator {
    #[default]
    Comma,
    /// `", "`, the spacing used by the RFC 7239 examples.
    CommaSpace,
}

impl ElementSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementSeparator::Comma => ",",
            ElementSeparator::CommaSpace => ", ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quoting {
    /// Bare token whenever every byte is a `tchar`.
    #[default]
    Minimal,
    Always,
}

/// Encoder settings. The default produces the canonical form.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub element_separator: ElementSeparator,
    pub quoting: Quoting,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element_separator(mut self, element_separator: ElementSeparator) -> Self {
        self.element_separator = element_separator;
        self
    }

    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }
}
