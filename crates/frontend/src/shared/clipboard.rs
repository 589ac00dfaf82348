//! Clipboard access through the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to clipboard with a callback on success
///
/// Failures (no permission, insecure context) are logged and the callback
/// is not run.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(err) => log::error!("Failed to copy: {:?}", err),
        }
    });
}
