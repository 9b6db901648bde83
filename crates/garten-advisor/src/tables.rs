//! Static reference tables: care calendar, fertilizer schedule, dosage
//! defaults and lawn-type profiles. Loaded once, never mutated.

/// One scheduled fertilizing of the "Perfect Green" plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledFertilizing {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Week of that month, 1-4.
    pub week: u32,
    pub fertilizer: &'static str,
    /// Dosage in g/m².
    pub amount: u32,
    pub description: &'static str,
}

pub const FERTILIZER_SCHEDULE: [ScheduledFertilizing; 9] = [
    ScheduledFertilizing { month: 3, week: 3, fertilizer: "ProNatura Frühjahr", amount: 30, description: "Startdüngung für kräftiges Wachstum (wetterabhängig)" },
    ScheduledFertilizing { month: 4, week: 2, fertilizer: "ProNatura Frühjahr", amount: 35, description: "Frühjahrs-Wachstumsförderung (wetterabhängig)" },
    ScheduledFertilizing { month: 5, week: 1, fertilizer: "ProNatura Frühjahr", amount: 40, description: "Hauptdüngung Frühjahr (wetterabhängig)" },
    ScheduledFertilizing { month: 6, week: 2, fertilizer: "ProNatura Herbst", amount: 40, description: "Übergang zur Sommerpflege (wetterabhängig)" },
    ScheduledFertilizing { month: 7, week: 3, fertilizer: "ProNatura Herbst", amount: 40, description: "Sommerdüngung für Hitzeresistenz (wetterabhängig)" },
    ScheduledFertilizing { month: 8, week: 2, fertilizer: "ProNatura Frühjahr", amount: 30, description: "Spätsommer-Stärkung (wetterabhängig)" },
    ScheduledFertilizing { month: 9, week: 1, fertilizer: "ProNatura Frühjahr", amount: 35, description: "Herbstvorbereitung (wetterabhängig)" },
    ScheduledFertilizing { month: 10, week: 1, fertilizer: "ProNatura Herbst", amount: 40, description: "Wintervorbereitung (wetterabhängig)" },
    ScheduledFertilizing { month: 11, week: 1, fertilizer: "ProNatura Herbst", amount: 20, description: "Abschlussdüngung vor Winter (wetterabhängig)" },
];

/// Monthly care plan for the lawn, March through November. The winter
/// months have no plan entry; the lawn rests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyCare {
    pub month: u32,
    pub fertilize: bool,
    pub mow: bool,
    /// Robot mower runtime, e.g. "3-4 Tage".
    pub runtime_per_week: &'static str,
    pub blade_changes_per_month: u32,
    pub water: bool,
    pub aerate: bool,
    pub reseed: bool,
    pub fertilizer: &'static str,
    /// Dosage in g/m².
    pub fertilizer_amount: u32,
}

pub const MONTHLY_LAWN_CARE: [MonthlyCare; 9] = [
    MonthlyCare { month: 3, fertilize: true, mow: true, runtime_per_week: "1-2 Tage", blade_changes_per_month: 1, water: false, aerate: false, reseed: false, fertilizer: "ProNatura Frühjahr", fertilizer_amount: 30 },
    MonthlyCare { month: 4, fertilize: true, mow: true, runtime_per_week: "3-4 Tage", blade_changes_per_month: 2, water: false, aerate: false, reseed: false, fertilizer: "ProNatura Frühjahr", fertilizer_amount: 35 },
    MonthlyCare { month: 5, fertilize: true, mow: true, runtime_per_week: "5-7 Tage", blade_changes_per_month: 2, water: false, aerate: true, reseed: true, fertilizer: "ProNatura Frühjahr", fertilizer_amount: 40 },
    MonthlyCare { month: 6, fertilize: true, mow: true, runtime_per_week: "2-3 Tage", blade_changes_per_month: 2, water: true, aerate: false, reseed: false, fertilizer: "ProNatura Herbst", fertilizer_amount: 40 },
    MonthlyCare { month: 7, fertilize: true, mow: true, runtime_per_week: "2-3 Tage", blade_changes_per_month: 1, water: true, aerate: false, reseed: false, fertilizer: "ProNatura Herbst", fertilizer_amount: 40 },
    MonthlyCare { month: 8, fertilize: true, mow: true, runtime_per_week: "3-4 Tage", blade_changes_per_month: 2, water: true, aerate: false, reseed: false, fertilizer: "ProNatura Frühjahr", fertilizer_amount: 30 },
    MonthlyCare { month: 9, fertilize: true, mow: true, runtime_per_week: "5-7 Tage", blade_changes_per_month: 2, water: false, aerate: true, reseed: false, fertilizer: "ProNatura Frühjahr", fertilizer_amount: 35 },
    MonthlyCare { month: 10, fertilize: true, mow: true, runtime_per_week: "3-5 Tage", blade_changes_per_month: 2, water: false, aerate: false, reseed: false, fertilizer: "ProNatura Herbst", fertilizer_amount: 40 },
    MonthlyCare { month: 11, fertilize: true, mow: true, runtime_per_week: "2-3 Tage", blade_changes_per_month: 1, water: false, aerate: false, reseed: false, fertilizer: "ProNatura Herbst", fertilizer_amount: 20 },
];

/// Care plan for a month, `None` in winter.
pub fn monthly_care(month: u32) -> Option<&'static MonthlyCare> {
    MONTHLY_LAWN_CARE.iter().find(|c| c.month == month)
}

/// Lawn-type profile shown in the settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LawnType {
    /// Settings key, e.g. "sportrasen".
    pub key: &'static str,
    pub name: &'static str,
    pub care_level: &'static str,
    pub water_need: &'static str,
    pub resilience: &'static str,
    pub traits: [&'static str; 3],
}

pub const LAWN_TYPES: [LawnType; 4] = [
    LawnType {
        key: "sportrasen",
        name: "Sportrasen",
        care_level: "mittel",
        water_need: "mittel",
        resilience: "hoch",
        traits: ["Perfekt für Mähroboter", "Mittlere Pflege", "Hohe Belastbarkeit"],
    },
    LawnType {
        key: "trockenrasen",
        name: "Trockenrasen",
        care_level: "gering",
        water_need: "gering",
        resilience: "mittel",
        traits: ["Geringer Wasserbedarf", "Hitzebeständig", "Pflegeleicht"],
    },
    LawnType {
        key: "schattenrasen",
        name: "Schattenrasen",
        care_level: "mittel",
        water_need: "mittel",
        resilience: "mittel",
        traits: ["Hohe Schattenverträglichkeit", "Mittlere Pflege", "Für schattige Bereiche"],
    },
    LawnType {
        key: "supina",
        name: "Supina Premium",
        care_level: "hoch",
        water_need: "hoch",
        resilience: "sehr hoch",
        traits: ["Maximale Belastbarkeit", "Sehr hoher Pflegeaufwand", "Premium-Qualität"],
    },
];

pub fn lawn_type(key: &str) -> Option<&'static LawnType> {
    LAWN_TYPES.iter().find(|t| t.key.eq_ignore_ascii_case(key))
}

/// Default fertilizer rate in g/m² for known plants.
pub fn fertilizer_default(plant: &str) -> Option<f64> {
    let rate = match plant {
        "Rasen" => 25.0,
        "Gemüse" => 65.0,
        "Blumen" => 40.0,
        "Obstbäume" => 125.0,
        "Sträucher" => 50.0,
        "Rosen" => 60.0,
        "Tomaten" => 80.0,
        "Gurken" => 70.0,
        "Kartoffeln" => 90.0,
        _ => return None,
    };
    Some(rate)
}

/// Default seed rate in g/m² for known plants.
pub fn seed_default(plant: &str) -> Option<f64> {
    let rate = match plant {
        "Rasen" => 25.0,
        "Karotten" => 1.0,
        "Radieschen" => 2.0,
        "Salat" => 0.5,
        "Spinat" => 3.0,
        "Bohnen" => 6.0,
        "Erbsen" => 15.0,
        "Petersilie" => 0.5,
        "Basilikum" => 0.3,
        "Schnittlauch" => 1.0,
        _ => return None,
    };
    Some(rate)
}

/// Fixed monthly garden task, fired by the monthly reminder.
pub fn monthly_task(month: u32) -> &'static str {
    match month {
        1 => "Januar: Plane das Gartenjahr, bestelle Samen und überprüfe Gartengeräte",
        2 => "Februar: Bereite Beete vor, schneide Obstbäume und plane neue Pflanzungen",
        3 => "März: Erste Düngung des Rasens, beginne mit der Aussaat, lüfte den Rasen",
        4 => "April: Setze Pflanzen um, beginne regelmäßiges Mähen, bekämpfe Unkraut",
        5 => "Mai: Pflanze Sommerblumen, mulche Beete, gieße regelmäßig",
        6 => "Juni: Zweite Rasendüngung, beschneide Hecken, ernte erste Früchte",
        7 => "Juli: Intensives Gießen, Schädlingskontrolle, regelmäßiges Mähen",
        8 => "August: Ernte und Konservierung, Pflege von Kübelpflanzen",
        9 => "September: Dritte Rasendüngung, Herbstpflanzungen, Kompost anlegen",
        10 => "Oktober: Laub sammeln, Winterschutz vorbereiten, letzte Ernte",
        11 => "November: Gartengeräte winterfest machen, Kübelpflanzen einräumen",
        _ => "Dezember: Garten winterfest machen, Jahresplanung für nächstes Jahr",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_care_plan_covers_march_to_november() {
        for month in 3..=11 {
            assert!(monthly_care(month).is_some(), "month {month}");
        }
        assert!(monthly_care(1).is_none());
        assert!(monthly_care(12).is_none());
    }

    #[test]
    fn test_schedule_amounts_match_care_plan() {
        for scheduled in &FERTILIZER_SCHEDULE {
            let care = monthly_care(scheduled.month).unwrap();
            assert_eq!(care.fertilizer, scheduled.fertilizer);
            assert_eq!(care.fertilizer_amount, scheduled.amount);
        }
    }

    #[test]
    fn test_dosage_defaults() {
        assert_eq!(fertilizer_default("Rasen"), Some(25.0));
        assert_eq!(fertilizer_default("Orchideen"), None);
        assert_eq!(seed_default("Basilikum"), Some(0.3));
        assert_eq!(seed_default("Orchideen"), None);
    }

    #[test]
    fn test_lawn_type_lookup() {
        assert_eq!(lawn_type("sportrasen").unwrap().name, "Sportrasen");
        assert_eq!(lawn_type("SUPINA").unwrap().name, "Supina Premium");
        assert!(lawn_type("golfrasen").is_none());
    }

    #[test]
    fn test_monthly_task_mentions_the_month() {
        assert!(monthly_task(3).starts_with("März"));
        assert!(monthly_task(12).starts_with("Dezember"));
    }
}
