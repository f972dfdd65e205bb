use crate::error::{GalleryError, Result};
use champ_gallery_common::cdn::{
    DEFAULT_DATA_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_LOCALE, DEFAULT_VERSION,
};
use champ_gallery_common::{CdnConfig, EnrichOptions, FailurePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const VERSION_ENV: &str = "DDRAGON_VERSION";
pub const LOCALE_ENV: &str = "DDRAGON_LOCALE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,
    pub locale: String,
    pub data_base_url: String,
    pub image_base_url: String,
    /// スキン取得の同時リクエスト数
    pub enrich_concurrency: usize,
    pub stop_on_first_failure: bool,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.into(),
            locale: DEFAULT_LOCALE.into(),
            data_base_url: DEFAULT_DATA_BASE_URL.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            enrich_concurrency: 1,
            stop_on_first_failure: true,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み。ファイルがなければデフォルト
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("champ-gallery").join("config.json"))
    }

    /// 環境変数で上書き（ファイルより優先）
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(version) = std::env::var(VERSION_ENV) {
            if !version.trim().is_empty() {
                self.version = version.trim().to_string();
            }
        }
        if let Ok(locale) = std::env::var(LOCALE_ENV) {
            if !locale.trim().is_empty() {
                self.locale = locale.trim().to_string();
            }
        }
        self
    }

    pub fn set_version(&mut self, version: String) -> Result<()> {
        if version.trim().is_empty() {
            return Err(GalleryError::Config("バージョンが空です".into()));
        }
        self.version = version.trim().to_string();
        Ok(())
    }

    pub fn set_locale(&mut self, locale: String) -> Result<()> {
        if locale.trim().is_empty() {
            return Err(GalleryError::Config("ロケールが空です".into()));
        }
        self.locale = locale.trim().to_string();
        Ok(())
    }

    pub fn set_concurrency(&mut self, concurrency: usize) -> Result<()> {
        if concurrency == 0 {
            return Err(GalleryError::Config("同時リクエスト数は1以上".into()));
        }
        self.enrich_concurrency = concurrency;
        Ok(())
    }

    pub fn cdn(&self) -> CdnConfig {
        CdnConfig {
            data_base_url: self.data_base_url.clone(),
            image_base_url: self.image_base_url.clone(),
            version: self.version.clone(),
            locale: self.locale.clone(),
        }
    }

    pub fn enrich_options(&self) -> EnrichOptions {
        EnrichOptions {
            concurrency: self.enrich_concurrency.max(1),
            policy: if self.stop_on_first_failure {
                FailurePolicy::StopOnFirstFailure
            } else {
                FailurePolicy::ContinueOnFailure
            },
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
