use serde::{Deserialize, Serialize};

/// Metal purity grade, the key into the rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purity {
    #[serde(rename = "22K")]
    Gold22K,
    #[serde(rename = "18K")]
    Gold18K,
    #[serde(rename = "14K")]
    Gold14K,
    Silver,
    Platinum,
}

impl Purity {
    /// All purities the rate feed is expected to quote
    pub const ALL: [Purity; 5] = [
        Purity::Gold22K,
        Purity::Gold18K,
        Purity::Gold14K,
        Purity::Silver,
        Purity::Platinum,
    ];

    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "22k" => Ok(Purity::Gold22K),
            "18k" => Ok(Purity::Gold18K),
            "14k" => Ok(Purity::Gold14K),
            "silver" => Ok(Purity::Silver),
            "platinum" => Ok(Purity::Platinum),
            _ => Err(format!("Invalid purity: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            Purity::Gold22K => "22K",
            Purity::Gold18K => "18K",
            Purity::Gold14K => "14K",
            Purity::Silver => "Silver",
            Purity::Platinum => "Platinum",
        }
    }
}

impl From<Purity> for String {
    fn from(purity: Purity) -> Self {
        purity.as_str().to_string()
    }
}

impl std::fmt::Display for Purity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
