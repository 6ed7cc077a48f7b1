use std::fmt;

/// Target shape the particle field morphs into.
///
/// Glyph shapes are only reachable through gestures on the variants whose
/// gesture table includes them, but every variant can generate all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeLabel {
    #[default]
    Sphere,
    Heart,
    Flower,
    Saturn,
    LoveSign,
    TextI,
    TextYou,
    TextLove,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 8] = [
        ShapeLabel::Sphere,
        ShapeLabel::Heart,
        ShapeLabel::Flower,
        ShapeLabel::Saturn,
        ShapeLabel::LoveSign,
        ShapeLabel::TextI,
        ShapeLabel::TextYou,
        ShapeLabel::TextLove,
    ];

    /// Lower snake-case identifier, as used by the page and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Heart => "heart",
            Self::Flower => "flower",
            Self::Saturn => "saturn",
            Self::LoveSign => "love_sign",
            Self::TextI => "text_i",
            Self::TextYou => "text_you",
            Self::TextLove => "text_love",
        }
    }

    /// Upper-case name shown in the status label.
    pub fn display_name(self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(name))
    }

    /// Like [`ShapeLabel::parse`], but anything unrecognized becomes `Sphere`.
    pub fn parse_lenient(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Status label text for this shape, e.g. `Mode: LOVE_SIGN`.
    pub fn status_text(self) -> String {
        format!("Mode: {}", self.display_name())
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ShapeLabel {
    fn from(name: &str) -> Self {
        Self::parse_lenient(name)
    }
}
