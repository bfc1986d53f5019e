use serde::{Deserialize, Serialize};

/// Coarse consumption progress of an item.
///
/// Variants are declared in consumption order so `Ord` follows it. The
/// progress is independent of the expiry and use-by status.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EatenStatus {
    #[default]
    #[serde(rename = "fresh")]
    Fresh,
    #[serde(rename = "half eaten")]
    HalfEaten,
    #[serde(rename = "nearly eaten")]
    NearlyEaten,
    #[serde(rename = "eaten")]
    Eaten,
}

impl std::fmt::Display for EatenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EatenStatus::Fresh => write!(f, "fresh"),
            EatenStatus::HalfEaten => write!(f, "half eaten"),
            EatenStatus::NearlyEaten => write!(f, "nearly eaten"),
            EatenStatus::Eaten => write!(f, "eaten"),
        }
    }
}

impl std::str::FromStr for EatenStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(EatenStatus::Fresh),
            "half eaten" => Ok(EatenStatus::HalfEaten),
            "nearly eaten" => Ok(EatenStatus::NearlyEaten),
            "eaten" => Ok(EatenStatus::Eaten),
            _ => Err(format!("Invalid eaten status: {}", s)),
        }
    }
}
