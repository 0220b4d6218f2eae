//! An abstraction over the window that carries the capture-block flag.
//!
//! The flag itself lives in the OS window layer; this module only knows how
//! to write it. Keeping the write behind a trait lets tests observe the flag
//! without a real window, the same way `EventProxy` stands in for the event
//! loop.

/// A window-like surface whose contents can be excluded from screenshots
/// and screen-recording streams.
pub trait CaptureSurface {
    /// Sets or clears the platform capture-block flag for this surface.
    ///
    /// Must only be called on the UI-owning thread.
    fn set_capture_protection(&self, enabled: bool);
}

/// The production surface is the tao window. `set_content_protection` maps
/// to `NSWindow.sharingType` on macOS and `SetWindowDisplayAffinity` on
/// Windows; on other platforms tao treats it as a no-op.
impl CaptureSurface for tao::window::Window {
    fn set_capture_protection(&self, enabled: bool) {
        self.set_content_protection(enabled);
    }
}

/// Applies the capture-block flag to the foreground surface, if one exists.
///
/// Absence of a surface is an expected transient state (the toggle can fire
/// during startup or teardown), so it is logged at debug level and swallowed.
/// The request is *not* remembered: a window that appears later starts with
/// the platform default flag.
///
/// Returns `true` if the flag was written.
pub fn apply_capture_protection<S: CaptureSurface>(surface: Option<&S>, enabled: bool) -> bool {
    match surface {
        Some(surface) => {
            surface.set_capture_protection(enabled);
            tracing::info!(
                "Capture protection {}.",
                if enabled { "enabled" } else { "disabled" }
            );
            true
        }
        None => {
            tracing::debug!("No foreground window; dropping capture protection request.");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records every flag write so tests can assert on the final state and
    /// on how often the platform primitive was hit.
    #[derive(Default)]
    struct RecordingSurface {
        flag: Cell<Option<bool>>,
        writes: Cell<usize>,
    }

    impl CaptureSurface for RecordingSurface {
        fn set_capture_protection(&self, enabled: bool) {
            self.flag.set(Some(enabled));
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn applies_flag_when_surface_exists() {
        let surface = RecordingSurface::default();
        assert!(apply_capture_protection(Some(&surface), true));
        assert_eq!(surface.flag.get(), Some(true));

        assert!(apply_capture_protection(Some(&surface), false));
        assert_eq!(surface.flag.get(), Some(false));
        assert_eq!(surface.writes.get(), 2);
    }

    #[test]
    fn absent_surface_is_a_silent_no_op() {
        assert!(!apply_capture_protection::<RecordingSurface>(None, true));
        assert!(!apply_capture_protection::<RecordingSurface>(None, false));
    }

    #[test]
    fn repeated_writes_are_idempotent_on_the_flag() {
        let surface = RecordingSurface::default();
        for _ in 0..3 {
            apply_capture_protection(Some(&surface), true);
        }
        assert_eq!(surface.flag.get(), Some(true));
    }
}
