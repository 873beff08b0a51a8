use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フロントマターが不正 ({file}): {reason}")]
    FrontMatter { file: String, reason: String },

    #[error("サイトデータが不正: {0}")]
    InvalidSiteData(String),

    #[error("インタプリタを起動できません: {0}")]
    Interpreter(String),

    #[error("実行できません: {0}")]
    RunRejected(#[from] portfolio_common::RunRejected),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
