use std::{collections::HashMap, fs};

/// Deployment address of the claimable token contract.
const DEFAULT_TOKEN_ADDRESS: &str = "0x1F8b43F7aeD0D1b524Ec5b4930C19098E8D4fbD0";

#[derive(Debug, Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub token_address: String,
    pub wallet_key_env: String,
    pub claim_amount: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".into(),
            token_address: DEFAULT_TOKEN_ADDRESS.into(),
            wallet_key_env: "CLAIM_WALLET_KEY".into(),
            claim_amount: "5".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("claim.toml") {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("CLAIM_RPC_URL") {
        settings.rpc_url = v;
    }
    if let Ok(v) = std::env::var("APP__RPC_URL") {
        settings.rpc_url = v;
    }

    if let Ok(v) = std::env::var("CLAIM_TOKEN_ADDRESS") {
        settings.token_address = v;
    }
    if let Ok(v) = std::env::var("APP__TOKEN_ADDRESS") {
        settings.token_address = v;
    }

    if let Ok(v) = std::env::var("CLAIM_WALLET_KEY_ENV") {
        settings.wallet_key_env = v;
    }

    if let Ok(v) = std::env::var("CLAIM_AMOUNT") {
        settings.claim_amount = v;
    }

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("rpc_url") {
        settings.rpc_url = v.clone();
    }
    if let Some(v) = file_cfg.get("token_address") {
        settings.token_address = v.clone();
    }
    if let Some(v) = file_cfg.get("wallet_key_env") {
        settings.wallet_key_env = v.clone();
    }
    if let Some(v) = file_cfg.get("claim_amount") {
        settings.claim_amount = v.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_fixed_contract() {
        let settings = Settings::default();
        assert_eq!(settings.token_address, DEFAULT_TOKEN_ADDRESS);
        assert_eq!(settings.claim_amount, "5");
        assert_eq!(settings.wallet_key_env, "CLAIM_WALLET_KEY");
    }

    #[test]
    fn file_settings_override_defaults() {
        let mut settings = Settings::default();
        apply_file_settings(
            &mut settings,
            "rpc_url = \"https://rpc.example\"\nclaim_amount = \"2\"\n",
        );
        assert_eq!(settings.rpc_url, "https://rpc.example");
        assert_eq!(settings.claim_amount, "2");
        assert_eq!(settings.token_address, DEFAULT_TOKEN_ADDRESS);
    }

    #[test]
    fn malformed_file_settings_are_ignored() {
        let mut settings = Settings::default();
        apply_file_settings(&mut settings, "rpc_url = [1, 2]");
        assert_eq!(settings.rpc_url, Settings::default().rpc_url);
    }
}
