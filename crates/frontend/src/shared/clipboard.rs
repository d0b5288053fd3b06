//! Clipboard access through the Web Clipboard API.

use js_sys::Promise;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy `text` to the system clipboard and run `on_copied` once it is there.
///
/// Failures (no window, permission denied) are logged and otherwise ignored.
pub fn copy_text<F>(text: &str, on_copied: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise: Promise = window.navigator().clipboard().write_text(&text);
        match JsFuture::from(promise).await {
            Ok(_) => on_copied(),
            Err(err) => log::warn!("clipboard write failed: {:?}", err),
        }
    });
}
