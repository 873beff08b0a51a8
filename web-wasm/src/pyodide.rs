//! ブラウザ内Python（Pyodide）による実行エンジン
//!
//! CDNのローダースクリプトを読み込み、グローバルの `loadPyodide` で
//! インタプリタを初期化する。標準出力は `setStdout({ batched })` で受け取る。

use portfolio_common::{RunnerCell, ScriptEngine, ScriptFailure, ScriptRunner};
use leptos::prelude::{RwSignal, Update};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub const PYODIDE_CDN_URL: &str = "https://cdn.jsdelivr.net/pyodide/v0.23.4/full/pyodide.js";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "loadPyodide", catch)]
    async fn load_pyodide_js() -> Result<JsValue, JsValue>;

    #[derive(Clone)]
    pub type Pyodide;

    #[wasm_bindgen(method, js_name = "setStdout")]
    fn set_stdout(this: &Pyodide, options: &JsValue);

    #[wasm_bindgen(method, js_name = "runPythonAsync", catch)]
    async fn run_python_async(this: &Pyodide, code: &str) -> Result<JsValue, JsValue>;
}

/// Pyodide上の実行エンジン
///
/// インタプリタを受け取るまでは未準備。クローンは同じインタプリタと
/// 出力コールバックを共有する。
#[derive(Clone, Default)]
pub struct PyodideEngine {
    interpreter: Option<Pyodide>,
    stdout: Rc<RefCell<Option<Closure<dyn FnMut(String)>>>>,
}

impl PyodideEngine {
    pub fn attach(&mut self, interpreter: Pyodide) {
        self.interpreter = Some(interpreter);
    }
}

impl ScriptEngine for PyodideEngine {
    fn is_ready(&self) -> bool {
        self.interpreter.is_some()
    }

    fn redirect_stdout(&mut self, sink: Box<dyn FnMut(String)>) {
        let Some(interpreter) = &self.interpreter else {
            return;
        };

        let closure = Closure::wrap(sink);
        let options = js_sys::Object::new();
        if js_sys::Reflect::set(&options, &JsValue::from_str("batched"), closure.as_ref()).is_err() {
            gloo::console::warn!("setStdout のオプションを作れません");
            return;
        }
        interpreter.set_stdout(&options);

        // 前回のコールバックはここで解放される
        *self.stdout.borrow_mut() = Some(closure);
    }

    async fn execute(&self, source: &str) -> Result<(), ScriptFailure> {
        let Some(interpreter) = &self.interpreter else {
            return Err(ScriptFailure::new("Pyodide is not loaded"));
        };

        interpreter
            .run_python_async(source)
            .await
            .map(|_| ())
            .map_err(|e| ScriptFailure::new(error_message(&e)))
    }
}

/// 実行状態をシグナルに置くためのセル
#[derive(Clone, Copy)]
pub struct SignalRunner(pub RwSignal<ScriptRunner>);

impl RunnerCell for SignalRunner {
    fn with_runner<R>(&self, f: impl FnOnce(&mut ScriptRunner) -> R) -> Option<R> {
        // ビューが破棄済みなら None
        self.0.try_update(f)
    }
}

/// ローダーを読み込んでインタプリタを初期化する
///
/// ローダーが既にページにあればスクリプトは追加しない。
pub fn load<F>(on_loaded: F)
where
    F: FnOnce(Result<Pyodide, String>) + 'static,
{
    let init = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_pyodide_js()
                .await
                .map(|value| value.unchecked_into::<Pyodide>())
                .map_err(|e| error_message(&e));
            on_loaded(result);
        });
    };

    let has_loader = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("loadPyodide"))
        .unwrap_or(false);
    if has_loader {
        init();
        return;
    }

    if let Err(e) = inject_loader(init) {
        gloo::console::error!(format!("Pyodide ローダーを追加できません: {}", error_message(&e)));
    }
}

fn inject_loader<F>(on_script_load: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body がありません"))?;

    let script = document.create_element("script")?;
    script.set_attribute("src", PYODIDE_CDN_URL)?;

    let onload = Closure::once_into_js(on_script_load);
    script.add_event_listener_with_callback("load", onload.unchecked_ref())?;

    let onerror = Closure::once_into_js(|| {
        gloo::console::error!(format!("Pyodide の取得に失敗: {}", PYODIDE_CDN_URL));
    });
    script.add_event_listener_with_callback("error", onerror.unchecked_ref())?;

    body.append_child(&script)?;
    Ok(())
}

/// JSの例外からメッセージを取り出す（PythonErrorはトレースバック全体）
fn error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
