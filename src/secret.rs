use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;

// The original keeps shared keys in an OS credential vault keyed by a
// service name. Here they live in a toml file under the home directory,
// one entry per account.
const STORE_DIR: &str = ".totp";
const STORE_FILE: &str = "secrets.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Secret {
    pub key: String,
}

impl Secret {
    pub fn new(key: String) -> Self {
        Secret { key }
    }
}

pub trait SecretStoreOperations {
    fn get(&self, account_name: &str) -> Option<&Secret>;
    fn list(&self) -> Vec<String>;
    fn add(&mut self, account_name: String, secret: Secret);
    fn delete(&mut self, account_name: &str) -> Option<Secret>;
    fn save(&self) -> Result<(), StoreError>;
}

pub struct SecretStore {
    secrets: BTreeMap<String, Secret>,
}

fn store_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    let directory = home.join(STORE_DIR);
    fs::create_dir_all(&directory)?;
    Ok(directory.join(STORE_FILE))
}

fn parse(contents: &str) -> Result<BTreeMap<String, Secret>, StoreError> {
    Ok(toml::from_str(contents)?)
}

fn render(secrets: &BTreeMap<String, Secret>) -> Result<String, StoreError> {
    Ok(toml::to_string(secrets)?)
}

impl SecretStore {
    /// Load the store from disk. A missing file is an empty store, not
    /// an error; first use creates it on save.
    pub fn load() -> Result<SecretStore, StoreError> {
        let path = store_path()?;
        if !path.exists() {
            return Ok(SecretStore {
                secrets: BTreeMap::new(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        Ok(SecretStore {
            secrets: parse(&contents)?,
        })
    }
}

impl SecretStoreOperations for SecretStore {
    fn get(&self, account_name: &str) -> Option<&Secret> {
        self.secrets.get(account_name)
    }

    fn list(&self) -> Vec<String> {
        self.secrets.keys().cloned().collect()
    }

    fn add(&mut self, account_name: String, secret: Secret) {
        self.secrets.insert(account_name, secret);
    }

    fn delete(&mut self, account_name: &str) -> Option<Secret> {
        self.secrets.remove(account_name)
    }

    fn save(&self) -> Result<(), StoreError> {
        let contents = render(&self.secrets)?;
        fs::write(store_path()?, contents)?;
        Ok(())
    }
}
