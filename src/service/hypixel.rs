//! Mojang & Hypixel player lookups.

use reqwest::StatusCode;

use crate::{
    error::{command::CommandError, AppError},
    model::hypixel::{BedwarsSummary, HypixelPlayerResponse, MojangProfile},
};

const MOJANG_PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft";
const HYPIXEL_PLAYER_URL: &str = "https://api.hypixel.net/player";

/// Player lookup result ready for the BedWars embed.
#[derive(Debug, Clone)]
pub struct BedwarsLookup {
    /// Undashed UUID, used for the head thumbnail.
    pub uuid: String,
    pub summary: BedwarsSummary,
}

pub struct HypixelService<'a> {
    pub http_client: &'a reqwest::Client,
    pub api_key: Option<&'a str>,
}

impl<'a> HypixelService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Resolves a Minecraft username and fetches its BedWars statistics.
    ///
    /// # Arguments
    /// - `username` - Minecraft username, case-insensitive
    ///
    /// # Returns
    /// - `Ok(BedwarsLookup)` - Player found with stats summary
    /// - `Err(AppError::CommandErr(Unavailable))` - No Hypixel API key configured
    /// - `Err(AppError::NotFound)` - Unknown username or Hypixel returned no player
    /// - `Err(AppError::ReqwestErr)` - Network or decoding failure
    pub async fn bedwars(&self, username: &str) -> Result<BedwarsLookup, AppError> {
        let Some(api_key) = self.api_key else {
            return Err(CommandError::Unavailable(
                "Hypixel statistics are not configured on this bot.".to_string(),
            )
            .into());
        };

        let profile = self.mojang_profile(username).await?;

        let response: HypixelPlayerResponse = self
            .http_client
            .get(HYPIXEL_PLAYER_URL)
            .query(&[("key", api_key), ("uuid", profile.id.as_str())])
            .send()
            .await?
            .json()
            .await?;

        let player = match response {
            HypixelPlayerResponse {
                success: true,
                player: Some(player),
            } => player,
            _ => return Err(AppError::NotFound("Failed to retrieve Hypixel data.".to_string())),
        };

        Ok(BedwarsLookup {
            summary: BedwarsSummary::from_player(&player, &profile.name),
            uuid: profile.id,
        })
    }

    async fn mojang_profile(&self, username: &str) -> Result<MojangProfile, AppError> {
        let url = format!("{}/{}", MOJANG_PROFILE_URL, username.to_lowercase());
        let response = self.http_client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::NotFound(
                "Player not found. Please check the username and try again.".to_string(),
            ));
        }

        Ok(response.json().await?)
    }
}
