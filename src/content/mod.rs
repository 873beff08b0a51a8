pub mod frontmatter;

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::{PortfolioError, Result};
use portfolio_common::{ContentItem, PostIndex};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const POST_EXTENSIONS: &[&str] = &["md", "mdx", "MD", "MDX"];

/// 投稿ファイル
#[derive(Debug, Clone)]
pub struct PostFile {
    pub path: PathBuf,
    pub slug: String,
}

/// フォルダ直下のMarkdown投稿を列挙（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<PostFile>> {
    if !folder.is_dir() {
        return Err(PortfolioError::FolderNotFound(folder.display().to_string()));
    }

    let mut posts = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_post_file(path) {
            continue;
        }

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        posts.push(PostFile {
            path: path.to_path_buf(),
            slug,
        });
    }

    posts.sort_by(|a, b| a.slug.cmp(&b.slug));

    Ok(posts)
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| POST_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
        .unwrap_or(false)
}

/// 1ファイルを読み込んで ContentItem に変換
pub fn read_post(post: &PostFile) -> Result<ContentItem> {
    let text = std::fs::read_to_string(&post.path)?;
    let file = post.path.display().to_string();

    frontmatter::split(&text)
        .and_then(|fm| fm.into_item(&post.slug))
        .map_err(|reason| PortfolioError::FrontMatter { file, reason })
}

/// フォルダから投稿インデックスを作る（新しい順）
pub fn build_index(folder: &Path) -> Result<PostIndex> {
    let files = scan_folder(folder)?;
    tracing::debug!(count = files.len(), folder = %folder.display(), "投稿ファイルを検出");

    let items = files.iter().map(read_post).collect::<Result<Vec<_>>>()?;
    let mut index = PostIndex::new(items)?;
    index.sort_newest_first();
    Ok(index)
}

/// posts.json を読み込む
pub fn load_index(path: &Path) -> Result<PostIndex> {
    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(PostIndex::from_json(&content)?)
}

/// コマンドライン指定 → 設定 の順で読み込み元を決める
///
/// どちらも指定がなければ設定の index_path、なければ content_dir。
pub fn load_posts(source: &SourceArgs, config: &Config) -> Result<PostIndex> {
    if let Some(index) = &source.index {
        return load_index(index);
    }
    if let Some(folder) = &source.content {
        return build_index(folder);
    }
    if config.index_path.exists() {
        tracing::debug!(path = %config.index_path.display(), "設定のインデックスを使用");
        return load_index(&config.index_path);
    }
    build_index(&config.content_dir)
}
