//! ブラウザ内Pythonエディタ
//!
//! エディタの内容かアップロードした .py ファイルを Pyodide で実行し、
//! print の出力を下のパネルに追記していく。

use crate::pyodide::{self, PyodideEngine, SignalRunner};
use portfolio_common::{execute, RunOutcome, ScriptRunner};
use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{File, FileReader, HtmlInputElement};

const DEFAULT_SOURCE: &str = "# Write your Python code here\nprint(\"Hello from Pyodide!\")\n";

#[component]
pub fn PythonRunner() -> impl IntoView {
    let runner = RwSignal::new(ScriptRunner::with_source(DEFAULT_SOURCE));
    let engine = StoredValue::new_local(PyodideEngine::default());
    let (engine_ready, set_engine_ready) = signal(false);

    pyodide::load(move |result| match result {
        Ok(interpreter) => {
            engine.try_update_value(|e| e.attach(interpreter));
            set_engine_ready.try_set(true);
            gloo::console::log!("Pyodide loaded");
        }
        Err(message) => gloo::console::error!(format!("Pyodide の読み込みに失敗: {}", message)),
    });

    let on_run = move |_| {
        let Some(mut engine) = engine.try_get_value() else {
            return;
        };
        let cell = SignalRunner(runner);
        wasm_bindgen_futures::spawn_local(async move {
            match execute(&cell, &mut engine).await {
                Ok(RunOutcome::Failed) => gloo::console::warn!("スクリプトが例外で終了"),
                Ok(_) => {}
                Err(rejected) => gloo::console::log!(format!("実行できません: {}", rejected)),
            }
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        read_text(file, move |text| runner.update(|r| r.load_file(text)));
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    let is_running = move || runner.with(|r| r.is_running());

    view! {
        <section class="section python-runner">
            <h2>"Python Runner"</h2>
            <p class="text-muted">
                {move || if engine_ready.get() { "Python is ready." } else { "Loading Python..." }}
            </p>

            <textarea
                class="code-editor"
                spellcheck="false"
                rows="12"
                prop:value=move || runner.with(|r| r.source().to_string())
                on:input=move |ev| runner.update(|r| r.edit_source(event_target_value(&ev)))
            ></textarea>

            <div class="runner-actions">
                <label class="btn btn-secondary">
                    "Upload .py"
                    <input type="file" accept=".py" class="hidden" on:change=on_file_change />
                </label>
                <button
                    class="btn btn-primary"
                    disabled=move || !runner.with(|r| r.can_run(engine_ready.get()))
                    on:click=on_run
                >
                    {move || if is_running() { "Running..." } else { "Run Code" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| runner.update(|r| r.clear_output())>
                    "Clear Output"
                </button>
            </div>

            <pre class="code-output">
                {move || {
                    let output = runner.with(|r| r.output().to_string());
                    if output.is_empty() {
                        view! { <span class="text-muted">"# Ready to execute..."</span> }.into_any()
                    } else {
                        output.into_any()
                    }
                }}
            </pre>
        </section>
    }
}

/// テキストファイルを読み込んでコールバックに渡す
fn read_text<F>(file: File, on_loaded: F)
where
    F: FnOnce(String) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        gloo::console::error!("FileReader を作れません");
        return;
    };

    let reader_clone = reader.clone();
    let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        if let Some(text) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(text);
        }
    });

    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(e) = reader.read_as_text(&file) {
        gloo::console::error!("ファイルを読み込めません", e);
    }
}
