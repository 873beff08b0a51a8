use clap::Parser;
use portfolio_common::{
    derive_categories, filter_items, CategoryFilter, DateRange, FilterState, RunOutcome, ScriptRunner,
    SiteData,
};
use portfolio_site::{cli, config, content, engine, error, report};
use cli::{Cli, Commands};
use config::Config;
use error::{PortfolioError, Result};
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Index { folder, output } => {
            println!("📝 portfolio - 投稿インデックス生成\n");

            let index = content::build_index(&folder)?;
            println!("✔ {}件の投稿を検出", index.len());

            let output = output.unwrap_or_else(|| config.index_path.clone());
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, index.to_json_pretty()?)?;
            println!("✔ インデックスを保存: {}", output.display());
        }

        Commands::Posts { source, search, category, from, to, preset, json } => {
            let index = content::load_posts(&source, &config)?;

            let range = match preset {
                Some(preset) => preset.range(chrono::Local::now().date_naive()),
                None => DateRange::parse(&from, &to),
            };
            let state = FilterState {
                search,
                category: CategoryFilter::from_label(&category),
                range,
            };
            tracing::debug!(?state, "フィルタ条件");

            let visible = filter_items(&index.posts, &state);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("{} / {}件", visible.len(), index.len());
                for item in visible {
                    println!("\n{}", report::format_post(item).trim_end());
                }
            }
        }

        Commands::Categories { source } => {
            let index = content::load_posts(&source, &config)?;
            for category in derive_categories(&index.posts) {
                let count = index
                    .posts
                    .iter()
                    .filter(|item| category.matches(item))
                    .count();
                println!("{} ({})", category, count);
            }
        }

        Commands::Run { script, python } => {
            println!("🐍 portfolio - スクリプト実行\n");

            if !script.is_file() {
                return Err(PortfolioError::FileNotFound(script.display().to_string()));
            }
            let text = std::fs::read_to_string(&script)?;

            let python = python.unwrap_or_else(|| config.python());
            let mut engine = engine::ProcessEngine::probe(python).await;

            let runner = Rc::new(RefCell::new(ScriptRunner::new()));
            runner.borrow_mut().load_file(text);

            let outcome = portfolio_common::execute(&runner, &mut engine).await?;
            print!("{}", runner.borrow().output());
            println!();

            match outcome {
                RunOutcome::Completed => println!("✅ 完了"),
                RunOutcome::Failed => println!("❌ スクリプトが例外で終了しました"),
                RunOutcome::Detached => {}
            }
        }

        Commands::Site { data } => {
            let path = data.unwrap_or_else(|| config.site_data_path.clone());
            if !path.exists() {
                return Err(PortfolioError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(&path)?;
            let site = SiteData::from_json(&content)
                .map_err(|e| PortfolioError::InvalidSiteData(e.to_string()))?;

            println!("✔ {} は有効です\n", path.display());
            print!("{}", report::format_site_summary(&site));
        }

        Commands::Config { set_python, set_content_dir, show } => {
            let mut config = config;
            let changed = set_python.is_some() || set_content_dir.is_some();

            if let Some(python) = set_python {
                config.python = python;
                println!("✔ インタプリタを設定しました");
            }
            if let Some(dir) = set_content_dir {
                config.content_dir = dir;
                println!("✔ 投稿フォルダを設定しました");
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  投稿フォルダ: {}", config.content_dir.display());
                println!("  インデックス: {}", config.index_path.display());
                println!("  サイトデータ: {}", config.site_data_path.display());
                println!("  インタプリタ: {}", config.python());
            }
        }
    }

    Ok(())
}
