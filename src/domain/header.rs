#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    pub fn new(name: &str, value: &str) -> Result<Header, String> {
        let is_empty = name.is_empty();
        let is_malformed = name
            .chars()
            .any(|c| c == ':' || c.is_whitespace() || c.is_control());
        if is_empty || is_malformed {
            Err(format!("{} is not a valid header name", name))
        } else {
            Ok(Self {
                name: name.to_string(),
                value: value.to_string(),
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
