//! Armory API client
//!
//! One blocking GET per character, no retries.

use maunts::{realm_slug, CharacterProgress, CharacterRecord, MauntsError, ProgressionSource};
use std::time::Duration;

/// Character API location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    /// Endpoint with an explicit base, e.g. `http://eu.battle.net/api/wow`
    pub fn new(base: &str) -> Self {
        Endpoint {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Battle.net endpoint for a region (`eu`, `us`, `kr`, `tw`)
    pub fn for_region(region: &str) -> Self {
        Self::new(&format!("http://{}.battle.net/api/wow", region))
    }

    pub fn character_url(&self, realm: &str, name: &str) -> String {
        format!(
            "{}/character/{}/{}?fields=progression",
            self.base,
            urlencoding::encode(&realm_slug(realm)),
            urlencoding::encode(name)
        )
    }
}

pub struct ArmoryClient {
    agent: ureq::Agent,
    endpoint: Endpoint,
}

impl ArmoryClient {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        ArmoryClient { agent, endpoint }
    }
}

impl ProgressionSource for ArmoryClient {
    fn fetch(&self, character: &CharacterRecord) -> Result<CharacterProgress, MauntsError> {
        let url = self.endpoint.character_url(&character.realm, &character.name);
        tracing::debug!("GET {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, resp)) => {
                return Err(MauntsError::Network {
                    message: format!("server returned {} {}", code, resp.status_text()),
                    url,
                });
            }
            Err(e) => {
                return Err(MauntsError::Network {
                    message: e.to_string(),
                    url,
                });
            }
        };

        let body = response.into_string().map_err(|e| MauntsError::Network {
            message: format!("failed to read response: {}", e),
            url: url.clone(),
        })?;

        CharacterProgress::from_json(character, &body)
    }
}
