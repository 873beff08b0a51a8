//! ローカルのPythonインタプリタで動くスクリプト実行エンジン
//!
//! ソースを標準入力から渡し（`python -u -`）、標準出力を1行ずつ
//! シンクへ流す。終了コードが0以外なら標準エラーを失敗メッセージにする。

use crate::error::{PortfolioError, Result};
use portfolio_common::{ScriptEngine, ScriptFailure};
use std::cell::RefCell;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

pub struct ProcessEngine {
    python: String,
    ready: bool,
    sink: RefCell<Option<Box<dyn FnMut(String)>>>,
}

impl ProcessEngine {
    /// `--version` で起動確認してから生成
    pub async fn probe(python: impl Into<String>) -> Self {
        let python = python.into();
        let ready = match Command::new(&python)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!(python = %python, error = %e, "インタプリタを起動できません");
                false
            }
        };

        tracing::debug!(python = %python, ready, "インタプリタ確認");
        Self {
            python,
            ready,
            sink: RefCell::new(None),
        }
    }

    pub fn python(&self) -> &str {
        &self.python
    }

    fn emit(&self, line: String) {
        if let Some(sink) = self.sink.borrow_mut().as_mut() {
            sink(line);
        }
    }

    async fn run_process(&self, source: &str) -> Result<std::result::Result<(), ScriptFailure>> {
        let mut child = Command::new(&self.python)
            .arg("-u")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PortfolioError::Interpreter(format!("{}: {}", self.python, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PortfolioError::Interpreter("stdin を取得できません".into()))?;
        stdin.write_all(source.as_bytes()).await?;
        drop(stdin);

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PortfolioError::Interpreter("stdout を取得できません".into()))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| PortfolioError::Interpreter("stderr を取得できません".into()))?;

        // stderr は別タスクで読み切る（パイプ詰まり防止）
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            stderr
                .read_to_end(&mut buf)
                .await
                .map(|_| String::from_utf8_lossy(&buf).into_owned())
        });

        // UTF-8 でないバイトが混じっても読み続ける
        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            self.emit(decode_line(&buf));
        }

        let status = child.wait().await?;
        let stderr_text = stderr_task
            .await
            .map_err(|e| PortfolioError::Interpreter(e.to_string()))??;

        if status.success() {
            Ok(Ok(()))
        } else {
            let message = if stderr_text.trim().is_empty() {
                format!("process exited with {}", status)
            } else {
                stderr_text.trim_end().to_string()
            };
            Ok(Err(ScriptFailure::new(message)))
        }
    }
}

/// 1行分のバイト列を文字列に（末尾の改行は落とす）
fn decode_line(bytes: &[u8]) -> String {
    let line = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

impl ScriptEngine for ProcessEngine {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn redirect_stdout(&mut self, sink: Box<dyn FnMut(String)>) {
        *self.sink.borrow_mut() = Some(sink);
    }

    async fn execute(&self, source: &str) -> std::result::Result<(), ScriptFailure> {
        match self.run_process(source).await {
            Ok(result) => result,
            Err(e) => Err(ScriptFailure::new(e.to_string())),
        }
    }
}
