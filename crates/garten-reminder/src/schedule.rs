//! Timer arithmetic and the reminder scheduler.
//!
//! The delay computations are pure functions over a local wall-clock
//! reading; the scheduler wires them to tokio timers. Every started timer
//! hands back a `ReminderHandle` whose `cancel()` stops all future firings,
//! including one already armed.

use crate::notify::Notifier;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use garten_advisor::{advisory_for, monthly_task, SeasonalWindows};
use garten_core::{Clock, ReminderConfig};
use garten_store::GardenStore;
use garten_weather::WeatherService;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Delay until the monthly reminder should next fire: zero on the 1st,
/// otherwise the time remaining to the first of next month.
pub fn delay_until_month_start(now: NaiveDateTime) -> Duration {
    if now.day() == 1 {
        return Duration::zero();
    }
    delay_until_next_month_start(now)
}

/// Time remaining to midnight on the first of the following month. Always
/// positive; used to re-arm after a firing.
pub fn delay_until_next_month_start(now: NaiveDateTime) -> Duration {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    let target = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| now.date())
        .and_time(NaiveTime::MIN);
    target - now
}

/// Time remaining to the next occurrence of `hour`:00 local, rolling to
/// tomorrow when that time has already passed today.
pub fn delay_until_hour(now: NaiveDateTime, hour: u32) -> Duration {
    let target_time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let today_target = now.date().and_time(target_time);
    if now < today_target {
        today_target - now
    } else {
        today_target + Duration::days(1) - now
    }
}

/// Cancellation handle for a started reminder timer.
#[derive(Debug, Clone)]
pub struct ReminderHandle {
    token: CancellationToken,
}

impl ReminderHandle {
    /// Stop the timer. An armed sleep is interrupted, not waited out.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Spawns and owns the recurring reminder tasks.
#[derive(Clone)]
pub struct ReminderScheduler {
    store: GardenStore,
    weather: WeatherService,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    windows: SeasonalWindows,
    daily_tip_hour: u32,
}

impl ReminderScheduler {
    pub fn new(
        store: GardenStore,
        weather: WeatherService,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        windows: SeasonalWindows,
        config: &ReminderConfig,
    ) -> Self {
        Self {
            store,
            weather,
            notifier,
            clock,
            windows,
            daily_tip_hour: config.daily_tip_hour,
        }
    }

    fn sleep_or_cancel(
        token: &CancellationToken,
        delay: Duration,
    ) -> impl std::future::Future<Output = bool> + '_ {
        let delay = delay.to_std().unwrap_or_default();
        async move {
            tokio::select! {
                _ = token.cancelled() => false,
                _ = tokio::time::sleep(delay) => true,
            }
        }
    }

    /// Fire the fixed per-month garden task on the first of each month
    /// (immediately when started on the 1st), then re-arm.
    pub fn start_monthly(&self) -> ReminderHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let scheduler = self.clone();

        tokio::spawn(async move {
            let mut delay = delay_until_month_start(scheduler.clock.now_local());
            loop {
                if !Self::sleep_or_cancel(&task_token, delay).await {
                    tracing::debug!("Monthly reminder cancelled");
                    return;
                }

                let settings = scheduler.store.settings();
                if settings.notifications_enabled && settings.monthly_reminders_enabled {
                    let month = scheduler.clock.now_local().month();
                    scheduler.notifier.notify(
                        "Monatliche Gartenpflege-Erinnerung",
                        monthly_task(month),
                        "monthly-reminder",
                    );
                } else {
                    tracing::debug!("Monthly reminder disabled, skipping firing");
                }

                delay = delay_until_next_month_start(scheduler.clock.now_local());
            }
        });

        ReminderHandle { token }
    }

    /// Fire the engine's top advisory every day at the configured hour.
    /// Weather is fetched fresh on each firing.
    pub fn start_daily_tips(&self) -> ReminderHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let scheduler = self.clone();

        tokio::spawn(async move {
            loop {
                let delay =
                    delay_until_hour(scheduler.clock.now_local(), scheduler.daily_tip_hour);
                if !Self::sleep_or_cancel(&task_token, delay).await {
                    tracing::debug!("Daily tip reminder cancelled");
                    return;
                }

                let settings = scheduler.store.settings();
                if !(settings.notifications_enabled && settings.daily_tips_enabled) {
                    tracing::debug!("Daily tips disabled, skipping firing");
                    continue;
                }

                let weather = scheduler.weather.complete_weather().await;
                let advisory = advisory_for(
                    &weather,
                    scheduler.clock.now_local().date(),
                    &scheduler.windows,
                );
                scheduler
                    .notifier
                    .notify(&advisory.title, &advisory.body, "daily-tip");
            }
        });

        ReminderHandle { token }
    }

    /// Re-establish per-entry reminders after a restart: entries whose
    /// reminder datetime is still ahead get a one-shot notification, past
    /// reminders are dropped.
    pub fn replay_entry_reminders(&self) -> ReminderHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let scheduler = self.clone();

        tokio::spawn(async move {
            let now = scheduler.clock.now_local();
            let mut pending: Vec<(Duration, String, String)> = scheduler
                .store
                .entries()
                .into_iter()
                .filter_map(|entry| {
                    let reminder = entry.reminder?;
                    if reminder <= now {
                        tracing::debug!("Skipping past reminder for entry '{}'", entry.id);
                        return None;
                    }
                    let body = format!("{}: {}", entry.kind.label(), entry.plant);
                    Some((reminder - now, format!("entry-{}", entry.id), body))
                })
                .collect();
            pending.sort_by_key(|(delay, _, _)| *delay);

            let mut elapsed = Duration::zero();
            for (delay, tag, body) in pending {
                if !Self::sleep_or_cancel(&task_token, delay - elapsed).await {
                    tracing::debug!("Entry reminder replay cancelled");
                    return;
                }
                elapsed = delay;

                if scheduler.store.settings().notifications_enabled {
                    scheduler.notifier.notify("Garten-Erinnerung", &body, &tag);
                }
            }
        });

        ReminderHandle { token }
    }
}
