//! Recommendation engine for Mein Garten
//!
//! Pure functions over a weather snapshot and a calendar date. No I/O in
//! this crate; callers fetch weather and pass "now" in, which keeps every
//! rule deterministic and testable.

pub mod advisory;
pub mod dosage;
pub mod recommend;
pub mod tables;

pub use advisory::{
    advisory_for, is_good_for_activity, monthly_plan_summary, optimal_fertilizer_date,
    should_aerate, should_fertilize, should_mow, Activity, Advisory, AdvisoryKind, Priority,
    SeasonStatus, SeasonalWindows,
};
pub use dosage::{fertilizer_amount, seed_amount};
pub use recommend::{better_fertilizer_dates, garden_recommendations, Category, DatedSuggestion, Recommendation};
pub use tables::{
    fertilizer_default, lawn_type, monthly_care, monthly_task, seed_default, LawnType, MonthlyCare,
    ScheduledFertilizing, FERTILIZER_SCHEDULE, LAWN_TYPES, MONTHLY_LAWN_CARE,
};
