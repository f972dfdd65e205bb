//! テスト用データ

use crate::cdn::CdnConfig;
use crate::types::{RawEntry, RawInfo};
use serde_json::json;

pub fn raw_entries() -> Vec<RawEntry> {
    vec![
        RawEntry {
            id: "Aatrox".into(),
            name: "Aatrox".into(),
            tags: vec!["Fighter".into(), "Tank".into()],
            info: RawInfo { difficulty: 4 },
        },
        RawEntry {
            id: "Ahri".into(),
            name: "Ahri".into(),
            tags: vec!["Mage".into(), "Assassin".into()],
            info: RawInfo { difficulty: 5 },
        },
    ]
}

pub fn catalog_json() -> String {
    json!({
        "type": "champion",
        "version": "14.11.1",
        "data": {
            "Aatrox": {
                "id": "Aatrox", "key": "266", "name": "Aatrox",
                "tags": ["Fighter", "Tank"],
                "info": {"attack": 8, "defense": 4, "magic": 3, "difficulty": 4}
            },
            "Ahri": {
                "id": "Ahri", "key": "103", "name": "Ahri",
                "tags": ["Mage", "Assassin"],
                "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5}
            }
        }
    })
    .to_string()
}

pub fn aatrox_details_json() -> String {
    json!({
        "data": {
            "Aatrox": {
                "id": "Aatrox",
                "skins": [
                    {"id": "266000", "num": 0, "name": "default", "chromas": false},
                    {"id": "266001", "num": 1, "name": "Justicar Aatrox", "chromas": false}
                ]
            }
        }
    })
    .to_string()
}

pub fn ahri_details_json() -> String {
    json!({
        "data": {
            "Ahri": {
                "id": "Ahri",
                "skins": [
                    {"id": "103000", "num": 0, "name": "default", "chromas": false},
                    {"id": "103001", "num": 1, "name": "Dynasty Ahri", "chromas": false},
                    {"id": "103002", "num": 2, "name": "Midnight Ahri", "chromas": true}
                ]
            }
        }
    })
    .to_string()
}

/// 2件カタログとスキンを登録済みの取得口
pub fn memory_source(cdn: &CdnConfig) -> crate::source::MemorySource {
    crate::source::MemorySource::new()
        .with_body(cdn.catalog_url(), catalog_json())
        .with_body(cdn.detail_url("Aatrox"), aatrox_details_json())
        .with_body(cdn.detail_url("Ahri"), ahri_details_json())
}
