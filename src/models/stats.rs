//! Derived statistics shown on the dashboard and progress charts.
//!
//! Nothing here is persisted: every value is recomputed from the owner's
//! records each time it is requested.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A record attributed to a calendar day.
pub trait DatedRecord {
    /// Occurrence instant, or `None` when the stored document has no usable date.
    fn occurred_at(&self) -> Option<DateTime<Utc>>;
}

/// Summary values for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    /// Consecutive days with a workout, ending today
    pub current_streak: u32,
    /// Workouts dated within the trailing seven days
    pub workouts_this_week: u32,
    /// Calories over the most recently fetched meals
    pub calories_logged: u64,
    /// All workouts on record
    pub total_workouts: u32,
}

/// One calendar day of chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Records on this day
    pub count: u32,
    /// Sum of the bucketed field (minutes or calories)
    pub total: u64,
}

/// Progress chart window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
}

impl Timeframe {
    pub fn days_back(self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
        }
    }

    /// First instant included in the window ending at `now`.
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days_back())
    }
}
