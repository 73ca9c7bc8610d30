use serde::{Deserialize, Serialize};

/// Age rating of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

impl Rating {
    /// Resolve a rating from its wire label. Unknown labels yield `None`;
    /// the caller decides whether that is a validation failure.
    pub fn of(label: &str) -> Option<Rating> {
        match label {
            "ER" => Some(Rating::Er),
            "L" => Some(Rating::L),
            "10" => Some(Rating::Age10),
            "12" => Some(Rating::Age12),
            "14" => Some(Rating::Age14),
            "16" => Some(Rating::Age16),
            "18" => Some(Rating::Age18),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_round_trips_every_label() {
        for label in ["ER", "L", "10", "12", "14", "16", "18"] {
            let rating = Rating::of(label).unwrap();
            assert_eq!(rating.label(), label);
        }
    }

    #[test]
    fn test_of_rejects_unknown_labels() {
        assert!(Rating::of("PG-13").is_none());
        assert!(Rating::of("").is_none());
    }
}
