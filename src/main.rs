use champ_gallery_common::{
    fetch_catalog, fetch_details, map_entry, EnrichTarget, Gallery, OperationReport,
    ScrollMetrics, TagFilter,
};
use champ_gallery_rust::{cli, config, error, http_source, output};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{GalleryError, Result};
use http_source::HttpSource;
use indicatif::{ProgressBar, ProgressStyle};
use output::OutputFormat;
use tracing_subscriber::EnvFilter;

fn initialize_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 最下部に到達したスクロール位置
const BOTTOM_OF_PAGE: ScrollMetrics = ScrollMetrics {
    scroll_top: 0.0,
    viewport_height: 1.0,
    document_height: 1.0,
};

fn warn_failures(report: &OperationReport) {
    if !report.errors.is_empty() {
        eprintln!("⚠ {}件の取得に失敗しました", report.errors.len());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose);
    let config = Config::load()?.with_env_overrides();

    match cli.command {
        Commands::List { tag, search, skins, pages, format } => {
            let source = HttpSource::new(config.timeout())?;
            let mut gallery =
                Gallery::new(source, config.cdn()).with_enrich_options(config.enrich_options());

            let report = gallery.load_initial().await;
            if let Some(e) = report.errors.into_iter().next() {
                return Err(GalleryError::Catalog(e));
            }

            let filter = TagFilter::new(&tag);
            if filter.is_filtering() {
                warn_failures(&gallery.filter_by_tag(filter).await);
            }

            // タグ絞り込み中・スキン表示中は追加読み込みされない
            for _ in 0..pages {
                let report = gallery.on_scroll(&BOTTOM_OF_PAGE).await;
                if !report.triggered {
                    break;
                }
                warn_failures(&report);
            }

            if skins {
                let total = gallery.state().entries().len() as u64;
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::with_template("{spinner} スキン取得中 [{bar:30}] {pos}/{len}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                let report = gallery
                    .set_show_all_details_with(true, |done, _| bar.set_position(done as u64))
                    .await;
                bar.finish_and_clear();
                warn_failures(&report);
            }

            gallery.set_search_text(search);
            let visible = gallery.visible_entries();

            match format {
                OutputFormat::Table => {
                    print!("{}", output::render_table(&visible, skins));
                    println!("\n{}件 / 読み込み済み {}件", visible.len(), gallery.state().entries().len());
                }
                OutputFormat::Json => println!("{}", output::render_json(&visible)?),
            }
        }

        Commands::Skins { id, format } => {
            let source = HttpSource::new(config.timeout())?;
            let cdn = config.cdn();

            let raw = fetch_catalog(&source, &cdn).await?;
            let entry = raw
                .iter()
                .find(|r| r.id == id)
                .or_else(|| {
                    raw.iter()
                        .find(|r| r.id.eq_ignore_ascii_case(&id) || r.name.eq_ignore_ascii_case(&id))
                })
                .map(|r| map_entry(r, &cdn))
                .ok_or_else(|| GalleryError::EntryNotFound(id.clone()))?;

            let target = EnrichTarget {
                id: entry.id.clone(),
                name: entry.name.clone(),
            };
            let details = fetch_details(&source, &cdn, &target).await?;

            match format {
                OutputFormat::Table => {
                    println!("{} ({}件)", entry.name, details.len());
                    for detail in &details {
                        println!("  {}", output::render_detail(detail));
                    }
                }
                OutputFormat::Json => println!("{}", output::render_json(&details)?),
            }
        }

        Commands::Config { set_version, set_locale, set_concurrency, show } => {
            // 環境変数の上書きを保存しないようファイルから読み直す
            let mut config = Config::load()?;
            let mut changed = false;

            if let Some(version) = set_version {
                config.set_version(version)?;
                changed = true;
            }
            if let Some(locale) = set_locale {
                config.set_locale(locale)?;
                changed = true;
            }
            if let Some(concurrency) = set_concurrency {
                config.set_concurrency(concurrency)?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  バージョン: {}", config.version);
                println!("  ロケール: {}", config.locale);
                println!("  データURL: {}", config.data_base_url);
                println!("  画像URL: {}", config.image_base_url);
                println!("  同時リクエスト数: {}", config.enrich_concurrency);
                println!("  失敗時に打ち切り: {}", config.stop_on_first_failure);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
