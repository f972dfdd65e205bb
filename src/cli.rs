use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "champ-gallery")]
#[command(about = "チャンピオンカタログビューア", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを読み込んで一覧表示
    List {
        /// タグで絞り込み（Fighter/Tank/Mage/Assassin/Support/Marksman、All で全件）
        #[arg(short, long, default_value = "All")]
        tag: String,

        /// 名前の部分一致検索
        #[arg(short, long, default_value = "")]
        search: String,

        /// 全スキンを取得して表示
        #[arg(long)]
        skins: bool,

        /// 最下部スクロールを模擬する回数
        #[arg(short, long, default_value = "0")]
        pages: u32,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 1体分のスキンを表示
    Skins {
        /// チャンピオンID（例: Aatrox）
        #[arg(required = true)]
        id: String,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 設定管理
    Config {
        /// Data Dragon バージョンを設定
        #[arg(long)]
        set_version: Option<String>,

        /// ロケールを設定（例: en_US, pt_BR）
        #[arg(long)]
        set_locale: Option<String>,

        /// スキン取得の同時リクエスト数を設定
        #[arg(long)]
        set_concurrency: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
