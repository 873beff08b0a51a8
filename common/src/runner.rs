//! スクリプト実行ウィジェットの状態管理
//!
//! 状態遷移: Empty → Loaded → Running → Loaded
//!
//! 実行エンジン（ブラウザではPyodide、CLIではローカルのpython）は
//! `ScriptEngine` トレイトの向こう側にあり、このモジュールは
//! バッファと状態遷移だけを持つ。

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

/// 失敗時に出力へ追記する見出し
pub const TRACEBACK_HEADER: &str = "Traceback:";

/// ソースと出力のペア
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBuffer {
    pub source: String,
    pub output: String,
}

impl ScriptBuffer {
    /// 1行追記（改行付き）
    pub fn append_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn append_failure(&mut self, failure: &ScriptFailure) {
        self.output.push('\n');
        self.output.push_str(TRACEBACK_HEADER);
        self.output.push('\n');
        self.output.push_str(&failure.message);
    }

    pub fn has_source(&self) -> bool {
        !self.source.trim().is_empty()
    }
}

/// 実行状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerState {
    /// ソースなし
    #[default]
    Empty,
    /// ソースあり、待機中
    Loaded,
    /// 実行中
    Running,
}

impl RunnerState {
    pub fn is_idle(&self) -> bool {
        !matches!(self, RunnerState::Running)
    }
}

/// 実行要求が拒否された理由（エラー表示はせず、ボタンを無効化するだけ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunRejected {
    #[error("interpreter is not ready")]
    EngineNotReady,

    #[error("a script is already running")]
    AlreadyRunning,

    #[error("no script loaded")]
    NoSource,

    #[error("runner is no longer mounted")]
    Detached,
}

/// スクリプト実行中の例外
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScriptFailure {
    pub message: String,
}

impl ScriptFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 1回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// 失敗したがトレースを出力に残して復帰済み
    Failed,
    /// 実行中にビューが破棄された
    Detached,
}

/// スクリプト実行ウィジェット1つ分の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptRunner {
    buffer: ScriptBuffer,
    state: RunnerState,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: impl Into<String>) -> Self {
        let mut runner = Self::new();
        runner.edit_source(source);
        runner
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn buffer(&self) -> &ScriptBuffer {
        &self.buffer
    }

    pub fn source(&self) -> &str {
        &self.buffer.source
    }

    pub fn output(&self) -> &str {
        &self.buffer.output
    }

    pub fn is_running(&self) -> bool {
        self.state == RunnerState::Running
    }

    /// 実行ボタンを押せるか
    pub fn can_run(&self, engine_ready: bool) -> bool {
        self.check_run(engine_ready).is_ok()
    }

    /// エディタでの編集（ソースを丸ごと置き換え）
    pub fn edit_source(&mut self, source: impl Into<String>) {
        self.buffer.source = source.into();
        self.sync_idle_state();
    }

    /// アップロードされたファイルの内容で置き換え
    ///
    /// 実行中でなければ古い出力も消す。
    pub fn load_file(&mut self, text: impl Into<String>) {
        self.buffer.source = text.into();
        if !self.is_running() {
            self.buffer.output.clear();
        }
        self.sync_idle_state();
    }

    pub fn clear_output(&mut self) {
        self.buffer.output.clear();
    }

    /// エンジンの標準出力1行分
    pub fn append_output(&mut self, line: &str) {
        self.buffer.append_line(line);
    }

    /// 実行開始。出力をクリアして実行対象のソースを返す
    pub fn begin_run(&mut self, engine_ready: bool) -> Result<String, RunRejected> {
        self.check_run(engine_ready)?;
        self.buffer.output.clear();
        self.state = RunnerState::Running;
        Ok(self.buffer.source.clone())
    }

    /// 実行終了。失敗時はトレースを追記して待機状態へ戻る
    pub fn finish_run(&mut self, result: Result<(), ScriptFailure>) -> RunOutcome {
        self.state = RunnerState::Loaded;
        self.sync_idle_state();
        match result {
            Ok(()) => RunOutcome::Completed,
            Err(failure) => {
                self.buffer.append_failure(&failure);
                RunOutcome::Failed
            }
        }
    }

    fn check_run(&self, engine_ready: bool) -> Result<(), RunRejected> {
        if self.is_running() {
            return Err(RunRejected::AlreadyRunning);
        }
        if !engine_ready {
            return Err(RunRejected::EngineNotReady);
        }
        if !self.buffer.has_source() {
            return Err(RunRejected::NoSource);
        }
        Ok(())
    }

    fn sync_idle_state(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = if self.buffer.has_source() {
            RunnerState::Loaded
        } else {
            RunnerState::Empty
        };
    }
}

/// 外部の実行エンジン
pub trait ScriptEngine {
    /// ロード完了してコードを受け付けられるか
    fn is_ready(&self) -> bool;

    /// 標準出力の送り先を差し替える（1行ごとに呼ばれる）
    fn redirect_stdout(&mut self, sink: Box<dyn FnMut(String)>);

    /// ソースを実行。例外はメッセージ付きで返す
    fn execute(&self, source: &str) -> impl Future<Output = Result<(), ScriptFailure>>;
}

/// ScriptRunner の置き場所
///
/// CLIでは `Rc<RefCell<_>>`、WebではLeptosのシグナル。
/// ビューが破棄されていれば None を返す。
pub trait RunnerCell: Clone + 'static {
    fn with_runner<R>(&self, f: impl FnOnce(&mut ScriptRunner) -> R) -> Option<R>;
}

impl RunnerCell for Rc<RefCell<ScriptRunner>> {
    fn with_runner<R>(&self, f: impl FnOnce(&mut ScriptRunner) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// 1回分の実行を最後まで進める
///
/// 拒否された場合は何も変更しない。await中はセルを借用しないので、
/// 出力の追記や他のイベント処理と交互に進められる。
pub async fn execute<C, E>(cell: &C, engine: &mut E) -> Result<RunOutcome, RunRejected>
where
    C: RunnerCell,
    E: ScriptEngine,
{
    let ready = engine.is_ready();
    let source = cell
        .with_runner(|runner| runner.begin_run(ready))
        .ok_or(RunRejected::Detached)??;

    let sink = cell.clone();
    engine.redirect_stdout(Box::new(move |line: String| {
        sink.with_runner(|runner| runner.append_output(&line));
    }));

    let result = engine.execute(&source).await;

    Ok(cell
        .with_runner(|runner| runner.finish_run(result))
        .unwrap_or(RunOutcome::Detached))
}
