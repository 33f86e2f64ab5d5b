//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod maintenance;
mod vehicle;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::CommandError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use maintenance::*;
pub use vehicle::*;

/// Invoke `command` with serialized `args` and decode the reply.
async fn call<A, T>(command: &'static str, args: Option<&A>) -> Result<T, CommandError>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let js_args = match args {
        Some(args) => serde_wasm_bindgen::to_value(args).map_err(|e| CommandError::Encode {
            command,
            message: e.to_string(),
        })?,
        None => JsValue::NULL,
    };

    let result = invoke(command, js_args).await.map_err(|e| CommandError::Invoke {
        command,
        message: js_error_message(&e),
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| CommandError::Decode {
        command,
        message: e.to_string(),
    })
}

/// Tauri rejects with a plain string; anything else is an exception object.
fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
