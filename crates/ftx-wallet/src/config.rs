/*
[INPUT]:  YAML configuration file and FTX_* environment overrides
[OUTPUT]: Validated wallet configuration and a configured FtxClient
[POS]:    Configuration layer - client and account setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use ftx_adapter::{ClientConfig, FtxClient, http::DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the wallet CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WalletConfig {
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientSection,
    /// API credentials
    #[serde(default)]
    pub account: AccountConfig,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Account credentials configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// Sub-account name, unescaped
    #[serde(default)]
    pub sub_account: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    6
}

impl WalletConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Override credentials from `FTX_API_KEY`, `FTX_API_SECRET`, `FTX_SUBACCOUNT`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("FTX_API_KEY") {
            self.account.api_key = key;
        }
        if let Some(secret) = lookup("FTX_API_SECRET") {
            self.account.api_secret = secret;
        }
        if let Some(sub_account) = lookup("FTX_SUBACCOUNT") {
            self.account.sub_account = Some(sub_account);
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.account.api_key.is_empty() {
            bail!("account.api_key is empty");
        }
        if self.account.api_secret.is_empty() {
            bail!("account.api_secret is empty");
        }
        if self.client.timeout_secs == 0 {
            bail!("client.timeout_secs must be positive");
        }
        Ok(())
    }

    /// Build a client carrying this configuration's credentials
    pub fn build_client(&self) -> anyhow::Result<FtxClient> {
        let timeout = Duration::from_secs(self.client.timeout_secs);
        let mut client = FtxClient::with_config(ClientConfig {
            base_url: self.client.base_url.clone(),
            timeout,
            connect_timeout: timeout,
            ..ClientConfig::default()
        })
        .context("build ftx client")?;

        client.set_auth(self.account.api_key.clone(), self.account.api_secret.clone());
        if let Some(sub_account) = &self.account.sub_account {
            client.set_sub_account(sub_account);
        }
        Ok(client)
    }
}
