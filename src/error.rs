use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("エントリが見つかりません: {0}")]
    EntryNotFound(String),

    #[error("カタログ取得エラー: {0}")]
    Catalog(#[from] champ_gallery_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
