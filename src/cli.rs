use clap::{Parser, Subcommand};
use portfolio_common::DatePreset;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのコンテンツ管理・スクリプト実行ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 投稿の読み込み元
#[derive(clap::Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// 投稿インデックス（posts.json）
    #[arg(long, conflicts_with = "content")]
    pub index: Option<PathBuf>,

    /// Markdown投稿フォルダ
    #[arg(long)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Markdown投稿フォルダから posts.json を生成
    Index {
        /// 投稿フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 設定の index_path）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 投稿を絞り込んで一覧表示
    Posts {
        #[command(flatten)]
        source: SourceArgs,

        /// タイトル・概要の検索文字列（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// カテゴリ（"All" で絞り込みなし）
        #[arg(short, long, default_value = "All")]
        category: String,

        /// 期間の開始日 (YYYY-MM-DD、含む)
        #[arg(long, default_value = "")]
        from: String,

        /// 期間の終了日 (YYYY-MM-DD、含む)
        #[arg(long, default_value = "")]
        to: String,

        /// 期間プリセット (all/30d/7d)。from/to より優先
        #[arg(long)]
        preset: Option<DatePreset>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 選択可能なカテゴリを表示
    Categories {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Pythonスクリプトを実行
    Run {
        /// スクリプトファイル (.py)
        #[arg(required = true)]
        script: PathBuf,

        /// Pythonインタプリタ（デフォルト: 設定 / PORTFOLIO_PYTHON）
        #[arg(long)]
        python: Option<String>,
    },

    /// site.json を検証して概要を表示
    Site {
        /// サイトデータファイル
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// Pythonインタプリタを設定
        #[arg(long)]
        set_python: Option<String>,

        /// 投稿フォルダを設定
        #[arg(long)]
        set_content_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
