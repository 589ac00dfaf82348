use contracts::shared::catalog::ScrollLockPort;

/// Toggles `overflow: hidden` on `<body>`.
///
/// Unlocking clears the property instead of writing a value, so the
/// stylesheet's own overflow rule comes back.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl ScrollLockPort for BodyScrollLock {
    fn set_locked(&mut self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            log::warn!("body scroll lock: {:?}", err);
        }
    }
}
