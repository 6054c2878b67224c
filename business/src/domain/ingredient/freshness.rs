use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Freshness of an ingredient derived from its purchase date and shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Freshness {
    /// Less than 60% of the shelf life has elapsed.
    Fresh,
    /// Past 60% of the shelf life but not yet expired.
    UseSoon,
    /// Shelf life fully elapsed.
    Expired,
    /// Purchase date or a positive shelf life is missing.
    Unknown,
}

impl Freshness {
    /// Expired ingredients never count as available food.
    pub fn is_available(&self) -> bool {
        !matches!(self, Freshness::Expired)
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::Fresh => write!(f, "FRESH"),
            Freshness::UseSoon => write!(f, "USE_SOON"),
            Freshness::Expired => write!(f, "EXPIRED"),
            Freshness::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

const USE_SOON_FRACTION: f64 = 0.6;

/// Classifies freshness relative to `today`.
///
/// Business rules:
/// - No purchase date, no shelf life, or shelf life <= 0 -> Unknown
/// - days stored < 0.6 x shelf life -> Fresh
/// - days stored < shelf life -> UseSoon
/// - otherwise -> Expired
pub fn classify(
    purchase_date: Option<NaiveDate>,
    shelf_life_days: Option<i64>,
    today: NaiveDate,
) -> Freshness {
    let (Some(purchased), Some(shelf_life)) = (purchase_date, shelf_life_days) else {
        return Freshness::Unknown;
    };
    if shelf_life <= 0 {
        return Freshness::Unknown;
    }

    let days_stored = (today - purchased).num_days() as f64;
    let shelf_life = shelf_life as f64;

    if days_stored < shelf_life * USE_SOON_FRACTION {
        Freshness::Fresh
    } else if days_stored < shelf_life {
        Freshness::UseSoon
    } else {
        Freshness::Expired
    }
}
