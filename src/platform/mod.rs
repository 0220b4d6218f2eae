//! Platform-specific integration helpers.
//!
//! Keep OS quirks here to avoid leaking them into the app's core logic.

#[cfg(target_os = "macos")]
pub mod macos;

/// Whether the OS window layer honors the capture-block flag.
///
/// tao routes `set_content_protection` to `NSWindow.sharingType` on macOS and
/// `SetWindowDisplayAffinity` on Windows. On Linux the call is accepted but
/// the compositor keeps capturing, so the UI must not claim protection there.
pub fn capture_block_supported() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_matches_the_compiled_target() {
        #[cfg(any(target_os = "macos", target_os = "windows"))]
        assert!(capture_block_supported());
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        assert!(!capture_block_supported());
    }
}
