use anyhow::Result;
use garten_advisor::{advisory_for, garden_recommendations, SeasonalWindows};
use garten_core::{Clock, Config, SystemClock};
use garten_reminder::{ReminderScheduler, TracingNotifier};
use garten_store::{GardenStore, JsonStore};
use garten_weather::WeatherService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    garten_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    let clock = Arc::new(SystemClock);

    let store = GardenStore::new(JsonStore::new(&config.data_dir), clock.clone());
    let weather = WeatherService::new(&config.weather, store.clone(), clock.clone())?;
    let windows = SeasonalWindows::from(&config.advisor);

    tracing::info!("Mein Garten started");

    let snapshot = weather.complete_weather().await;
    let today = clock.now_local().date();

    println!("Mein Garten - Rasenpflege-Tagebuch");
    println!(
        "\nWetter: {}°C, {} ({}% Luftfeuchtigkeit)",
        snapshot.current.temp, snapshot.current.description, snapshot.current.humidity
    );
    for day in &snapshot.forecast {
        println!(
            "  {}: {}-{}°C, {:.1} mm Regen",
            day.day, day.temp_low, day.temp_high, day.rain
        );
    }

    let advisory = advisory_for(&snapshot, today, &windows);
    println!("\nTipp des Tages: {} - {}", advisory.title, advisory.body);

    let tips = garden_recommendations(&snapshot, today);
    if !tips.is_empty() {
        println!("\nEmpfehlungen:");
        for tip in tips {
            println!("  {}: {}", tip.title, tip.message);
        }
    }

    let stats = store.statistics();
    println!(
        "\nEinträge gesamt: {} (letzte 30 Tage: {})",
        stats.total_entries, stats.entries_last_30_days
    );
    if let Some(days) = stats.days_since_fertilized {
        println!("Zuletzt gedüngt vor {days} Tagen");
    }
    if let Some(days) = stats.days_since_mowed {
        println!("Zuletzt gemäht vor {days} Tagen");
    }

    let scheduler = ReminderScheduler::new(
        store,
        weather,
        Arc::new(TracingNotifier),
        clock,
        windows,
        &config.reminders,
    );
    let monthly = scheduler.start_monthly();
    let daily = scheduler.start_daily_tips();
    let replay = scheduler.replay_entry_reminders();

    tokio::signal::ctrl_c().await?;

    monthly.cancel();
    daily.cancel();
    replay.cancel();
    tracing::info!("Mein Garten stopped");

    Ok(())
}
