/// Read-only "is the viewport narrow" source. Sampled, never subscribed.
pub trait ViewportSignal {
    fn is_narrow(&self) -> bool;
}

impl ViewportSignal for bool {
    fn is_narrow(&self) -> bool {
        *self
    }
}

/// Background scroll suppression owned by the presentation layer.
///
/// A level, not a counter: `set_locked(false)` always releases, however
/// many times `set_locked(true)` was called before.
pub trait ScrollLockPort {
    fn set_locked(&mut self, locked: bool);
}
