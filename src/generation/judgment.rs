/// Tri-state reading of a judge completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    True,
    False,
    Unknown,
}

impl Judgment {
    /// Lowercases `completion`; any `"true"` wins over any `"false"`.
    pub fn parse(completion: &str) -> Self {
        let lowered = completion.to_lowercase();
        if lowered.contains("true") {
            Judgment::True
        } else if lowered.contains("false") {
            Judgment::False
        } else {
            Judgment::Unknown
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Judgment::True => Some(true),
            Judgment::False => Some(false),
            Judgment::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Judgment::True => "true",
            Judgment::False => "false",
            Judgment::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Judgment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
