//! Data Dragon のURLテンプレート

use serde::{Deserialize, Serialize};

pub const DEFAULT_VERSION: &str = "14.11.1";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_DATA_BASE_URL: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/img/champion/loading";

/// 上流エンドポイントの設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnConfig {
    pub data_base_url: String,
    pub image_base_url: String,
    pub version: String,
    pub locale: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            data_base_url: DEFAULT_DATA_BASE_URL.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            version: DEFAULT_VERSION.into(),
            locale: DEFAULT_LOCALE.into(),
        }
    }
}

impl CdnConfig {
    /// 全件カタログのURL
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/{}/data/{}/champion.json",
            self.data_base_url.trim_end_matches('/'),
            self.version,
            self.locale
        )
    }

    /// エントリ個別（スキン付き）のURL
    pub fn detail_url(&self, entry_id: &str) -> String {
        format!(
            "{}/{}/data/{}/champion/{}.json",
            self.data_base_url.trim_end_matches('/'),
            self.version,
            self.locale,
            entry_id
        )
    }

    /// ローディング画像のURL。num=0 がベース画像
    pub fn image_url(&self, entry_id: &str, num: u32) -> String {
        format!(
            "{}/{}_{}.jpg",
            self.image_base_url.trim_end_matches('/'),
            entry_id,
            num
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_url_default() {
        let cdn = CdnConfig::default();
        assert_eq!(
            cdn.catalog_url(),
            "https://ddragon.leagueoflegends.com/cdn/14.11.1/data/en_US/champion.json"
        );
    }

    #[test]
    fn test_detail_url() {
        let cdn = CdnConfig {
            locale: "pt_BR".into(),
            ..Default::default()
        };
        assert_eq!(
            cdn.detail_url("Ahri"),
            "https://ddragon.leagueoflegends.com/cdn/14.11.1/data/pt_BR/champion/Ahri.json"
        );
    }

    #[test]
    fn test_image_url() {
        let cdn = CdnConfig::default();
        assert!(cdn.image_url("Aatrox", 0).ends_with("/loading/Aatrox_0.jpg"));
        assert!(cdn.image_url("Aatrox", 12).ends_with("Aatrox_12.jpg"));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let cdn = CdnConfig {
            data_base_url: "http://localhost:8080/cdn/".into(),
            image_base_url: "http://localhost:8080/img/".into(),
            ..Default::default()
        };
        assert_eq!(
            cdn.catalog_url(),
            "http://localhost:8080/cdn/14.11.1/data/en_US/champion.json"
        );
        assert_eq!(cdn.image_url("Ahri", 1), "http://localhost:8080/img/Ahri_1.jpg");
    }
}
