// Authenticated REST surface of the local client.
//
// The client serves HTTPS on loopback with a self-signed certificate and
// HTTP Basic auth (`riot:{token}`), so certificate verification is disabled
// on this client only.

use std::time::Duration;

use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lockfile::LcuCredentials;
use crate::error::{Error, Result};

/// A rune page as stored by the client. Pages the account did not create
/// through us still come back from the list endpoint; `is_default_page`
/// marks the client's own presets, which must never be deleted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePage {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub is_default_page: bool,
  #[serde(default)]
  pub current: bool,
  #[serde(default)]
  pub primary_style_id: i32,
  #[serde(default)]
  pub sub_style_id: i32,
  #[serde(default)]
  pub selected_perk_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePageRequest {
  pub name: String,
  pub primary_style_id: i32,
  pub sub_style_id: i32,
  pub selected_perk_ids: Vec<i32>,
  /// Marks the created page active so the client switches to it immediately.
  pub current: bool,
}

pub struct LcuRestClient {
  http: reqwest::Client,
  base_url: String,
  auth_header: String,
}

impl LcuRestClient {
  pub fn new(creds: &LcuCredentials) -> Result<Self> {
    let http = reqwest::Client::builder()
      .danger_accept_invalid_certs(true)
      .timeout(Duration::from_secs(5))
      .connect_timeout(Duration::from_secs(2))
      .pool_max_idle_per_host(2)
      .build()?;

    let auth = general_purpose::STANDARD.encode(format!("riot:{}", creds.token));

    Ok(LcuRestClient {
      http,
      base_url: format!("https://127.0.0.1:{}", creds.port),
      auth_header: format!("Basic {}", auth),
    })
  }

  async fn get_json(&self, endpoint: &str) -> Result<Value> {
    let resp = self
      .http
      .get(format!("{}{}", self.base_url, endpoint))
      .header("Authorization", &self.auth_header)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::LcuStatus {
        endpoint: endpoint.to_string(),
        status: resp.status(),
      });
    }
    Ok(resp.json::<Value>().await?)
  }

  /// Cheap connectivity probe used right after bootstrap: the credentials in
  /// a stale lockfile parse fine but fail here.
  pub async fn verify(&self) -> Result<()> {
    self.get_json("/lol-summoner/v1/current-summoner").await?;
    Ok(())
  }

  pub async fn current_summoner(&self) -> Result<Value> {
    self.get_json("/lol-summoner/v1/current-summoner").await
  }

  pub async fn gameflow_phase(&self) -> Result<String> {
    let value = self.get_json("/lol-gameflow/v1/gameflow-phase").await?;
    value
      .as_str()
      .map(|s| s.to_string())
      .ok_or_else(|| Error::Payload("gameflow phase is not a string".to_string()))
  }

  pub async fn champ_select_session(&self) -> Result<Value> {
    self.get_json("/lol-champ-select/v1/session").await
  }

  pub async fn rune_pages(&self) -> Result<Vec<RunePage>> {
    let value = self.get_json("/lol-perks/v1/pages").await?;
    Ok(serde_json::from_value(value)?)
  }

  pub async fn current_rune_page(&self) -> Result<RunePage> {
    let value = self.get_json("/lol-perks/v1/currentpage").await?;
    Ok(serde_json::from_value(value)?)
  }

  pub async fn create_rune_page(&self, page: &RunePageRequest) -> Result<RunePage> {
    let endpoint = "/lol-perks/v1/pages";
    let resp = self
      .http
      .post(format!("{}{}", self.base_url, endpoint))
      .header("Authorization", &self.auth_header)
      .json(page)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::LcuStatus {
        endpoint: endpoint.to_string(),
        status: resp.status(),
      });
    }
    Ok(resp.json::<RunePage>().await?)
  }

  pub async fn delete_rune_page(&self, page_id: i64) -> Result<()> {
    let endpoint = format!("/lol-perks/v1/pages/{}", page_id);
    let resp = self
      .http
      .delete(format!("{}{}", self.base_url, endpoint))
      .header("Authorization", &self.auth_header)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::LcuStatus {
        endpoint,
        status: resp.status(),
      });
    }
    Ok(())
  }
}
