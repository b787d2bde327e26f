use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn parse(s: String) -> Result<DisplayName, String> {
        let is_empty = s.trim().is_empty();
        let too_long = s.graphemes(true).count() > 256;
        // These would break out of a `Name <email>` header.
        let forbidden_characters = ['<', '>', '"', '\\', '\r', '\n'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));
        if is_empty || too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid display name", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
