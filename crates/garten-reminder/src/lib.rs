//! Reminder scheduling for Mein Garten
//!
//! Two recurring timers (monthly care task, daily smart tip) plus a startup
//! replay of per-entry reminders. All timers run as tokio tasks holding a
//! cancellation token, so disabling a reminder stops it deterministically
//! instead of waiting out the armed sleep.

pub mod notify;
pub mod schedule;

pub use notify::{Notifier, TracingNotifier};
pub use schedule::{
    delay_until_hour, delay_until_month_start, delay_until_next_month_start, ReminderHandle,
    ReminderScheduler,
};
