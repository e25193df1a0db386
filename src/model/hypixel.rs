//! Hypixel & Mojang API models and BedWars statistic calculations.
//!
//! The Hypixel player document is loosely structured; every field read here is
//! optional and falls back to zero or `None` when absent.

use serde::Deserialize;

/// Mojang username lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct MojangProfile {
    /// Undashed player UUID.
    pub id: String,
    pub name: String,
}

/// Hypixel `/player` endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct HypixelPlayerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub player: Option<HypixelPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HypixelPlayer {
    pub displayname: Option<String>,
    pub rank: Option<String>,
    #[serde(rename = "monthlyPackageRank")]
    pub monthly_package_rank: Option<String>,
    #[serde(rename = "newPackageRank")]
    pub new_package_rank: Option<String>,
    #[serde(rename = "packageRank")]
    pub package_rank: Option<String>,
    pub achievements: HypixelAchievements,
    pub stats: HypixelStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HypixelAchievements {
    pub bedwars_level: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HypixelStats {
    #[serde(rename = "Bedwars")]
    pub bedwars: RawBedwarsStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBedwarsStats {
    pub wins_bedwars: u64,
    pub losses_bedwars: u64,
    pub kills_bedwars: u64,
    pub deaths_bedwars: u64,
    pub final_kills_bedwars: u64,
    pub final_deaths_bedwars: u64,
    pub beds_broken_bedwars: u64,
    pub beds_lost_bedwars: u64,
}

impl HypixelPlayer {
    /// Display rank of the player.
    ///
    /// Staff ranks win over purchased ranks; `SUPERSTAR` is MVP++. Package ranks
    /// such as `MVP_PLUS` are shown as `MVP+`.
    pub fn display_rank(&self) -> String {
        if let Some(rank) = self.rank.as_deref().filter(|r| *r != "NORMAL") {
            return rank.to_string();
        }
        if self.monthly_package_rank.as_deref() == Some("SUPERSTAR") {
            return "MVP++".to_string();
        }
        self.new_package_rank
            .as_deref()
            .or(self.package_rank.as_deref())
            .filter(|r| !r.is_empty())
            .map(|r| r.replace("_PLUS", "+").replace('_', ""))
            .unwrap_or_else(|| "None".to_string())
    }
}

/// Embed colour for a display rank.
pub fn rank_color(rank: &str) -> u32 {
    match rank {
        "MVP++" => 0xf1c40f,
        "MVP+" => 0x3498db,
        "MVP" => 0x1abc9c,
        "VIP+" => 0x2ecc71,
        "VIP" => 0x1f8b4c,
        "YOUTUBER" => 0xe74c3c,
        "None" => 0x979c9f,
        _ => 0x607d8b,
    }
}

/// BedWars statistics prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BedwarsSummary {
    pub display_name: String,
    pub rank: String,
    pub level: u64,
    pub wins: u64,
    pub losses: u64,
    pub kills: u64,
    pub deaths: u64,
    pub final_kills: u64,
    pub final_deaths: u64,
    pub beds_broken: u64,
    pub beds_lost: u64,
    pub wlr: f64,
    pub kdr: f64,
    pub fkdr: f64,
    pub bblr: f64,
}

impl BedwarsSummary {
    /// Builds the summary, substituting 1 for zero divisors.
    ///
    /// Deaths, final deaths, and beds lost are displayed with the substitution applied;
    /// losses are displayed as reported.
    pub fn from_player(player: &HypixelPlayer, fallback_name: &str) -> Self {
        let raw = &player.stats.bedwars;
        let deaths = raw.deaths_bedwars.max(1);
        let final_deaths = raw.final_deaths_bedwars.max(1);
        let beds_lost = raw.beds_lost_bedwars.max(1);

        Self {
            display_name: player
                .displayname
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            rank: player.display_rank(),
            level: player.achievements.bedwars_level.max(0.0) as u64,
            wins: raw.wins_bedwars,
            losses: raw.losses_bedwars,
            kills: raw.kills_bedwars,
            deaths,
            final_kills: raw.final_kills_bedwars,
            final_deaths,
            beds_broken: raw.beds_broken_bedwars,
            beds_lost,
            wlr: ratio(raw.wins_bedwars, raw.losses_bedwars.max(1)),
            kdr: ratio(raw.kills_bedwars, deaths),
            fkdr: ratio(raw.final_kills_bedwars, final_deaths),
            bblr: ratio(raw.beds_broken_bedwars, beds_lost),
        }
    }

    /// Weighted 0–100 score over the capped ratios and star level.
    pub fn pro_score(&self) -> u64 {
        let score = self.wlr.min(10.0) * 20.0
            + self.fkdr.min(10.0) * 20.0
            + self.kdr.min(10.0) * 10.0
            + self.bblr.min(10.0) * 15.0
            + (self.level.min(500) as f64 / 500.0 * 15.0);

        (score.round() as u64).min(100)
    }
}

/// Ten block progress bar, one filled block per 10 points.
pub fn score_bar(score: u64) -> String {
    let filled = (score / 10) as usize;
    (0..10)
        .map(|i| if i < filled { "🟩" } else { "⬜" })
        .collect()
}

pub fn score_comment(score: u64) -> &'static str {
    match score {
        90.. => "Godlike performance. Truly elite.",
        70..=89 => "High-level player! Hypixel knows your name.",
        50..=69 => "Not bad, you're getting there!",
        _ => "You're learning, keep grinding!",
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    (numerator as f64 / denominator as f64 * 100.0).round() / 100.0
}
