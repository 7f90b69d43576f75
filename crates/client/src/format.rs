use std::fmt;
use std::str::FromStr;

/// Display styles for a digest. The stored value stays lowercase hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestFormat {
    #[default]
    Lowercase,
    Uppercase,
    /// Hex byte pairs separated by single spaces: `ab cd ef ...`.
    Spaced,
}

impl DigestFormat {
    pub fn render(self, digest: &str) -> String {
        match self {
            DigestFormat::Lowercase => digest.to_owned(),
            DigestFormat::Uppercase => digest.to_uppercase(),
            DigestFormat::Spaced => digest
                .as_bytes()
                .chunks(2)
                .map(|pair| String::from_utf8_lossy(pair))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl FromStr for DigestFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" | "lowercase" | "plain" => Ok(DigestFormat::Lowercase),
            "upper" | "uppercase" => Ok(DigestFormat::Uppercase),
            "spaced" | "spaces" | "pairs" => Ok(DigestFormat::Spaced),
            other => Err(format!("unknown digest format: {other}")),
        }
    }
}

impl fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DigestFormat::Lowercase => "lower",
            DigestFormat::Uppercase => "upper",
            DigestFormat::Spaced => "spaced",
        };
        f.write_str(name)
    }
}

/// Compares an operator-supplied hash with a computed one, ignoring case and
/// surrounding whitespace.
pub fn digests_match(candidate: &str, current: &str) -> bool {
    candidate.trim().to_lowercase() == current.to_lowercase()
}
