use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseYear {
    #[serde(rename = "Year 1")]
    Year1,
    #[serde(rename = "Year 2")]
    Year2,
    #[serde(rename = "Year 3")]
    Year3,
}

impl LeaseYear {
    pub fn all() -> &'static [LeaseYear] {
        &[LeaseYear::Year1, LeaseYear::Year2, LeaseYear::Year3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year1 => "Year 1",
            Self::Year2 => "Year 2",
            Self::Year3 => "Year 3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Year 1" | "Y1" => Some(Self::Year1),
            "Year 2" | "Y2" => Some(Self::Year2),
            "Year 3" | "Y3" => Some(Self::Year3),
            _ => None,
        }
    }
}
