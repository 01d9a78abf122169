//! Copying the password to the clipboard.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No password to copy!")]
    EmptyPassword,
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere text can be copied to.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardBackend + ?Sized> ClipboardBackend for Box<T> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// Copies `password` to `backend`.
///
/// # Errors
///
/// Returns `ClipboardError::EmptyPassword` without touching the backend if
/// the password is empty or whitespace only.
pub fn copy_password<B: ClipboardBackend + ?Sized>(
    backend: &mut B,
    password: &SecretString,
) -> Result<(), ClipboardError> {
    let pwd = password.expose_secret();
    if pwd.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("refusing to copy an empty password");
        return Err(ClipboardError::EmptyPassword);
    }

    backend.set_text(pwd)?;

    #[cfg(feature = "tracing")]
    tracing::info!("password copied to clipboard");

    Ok(())
}

/// Checks for an empty password, then opens a backend with `open` and copies
/// the password to it.
///
/// The backend is only opened for a non-empty password, so the empty-password
/// warning wins over a missing clipboard. The backend is returned to let the
/// caller keep it alive.
pub fn copy_password_with<B, F>(open: F, password: &SecretString) -> Result<B, ClipboardError>
where
    B: ClipboardBackend,
    F: FnOnce() -> Result<B, ClipboardError>,
{
    if password.expose_secret().trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("refusing to copy an empty password");
        return Err(ClipboardError::EmptyPassword);
    }

    let mut backend = open()?;
    copy_password(&mut backend, password)?;
    Ok(backend)
}

/// The native system clipboard.
///
/// On X11 and Wayland the copied text is served by this process. A clipboard
/// created with [`SystemClipboard::holding`] blocks in `set_text` until
/// another application takes the selection over or the hold expires, so a
/// short-lived process still leaves the text behind.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    hold: Option<std::time::Duration>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner, hold: None })
    }

    /// A clipboard whose writes stay served for up to `hold`.
    pub fn holding(hold: std::time::Duration) -> Result<Self, ClipboardError> {
        let mut clipboard = Self::new()?;
        clipboard.hold = Some(hold);
        Ok(clipboard)
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        {
            if let Some(hold) = self.hold {
                use arboard::SetExtLinux;

                #[cfg(feature = "tracing")]
                tracing::debug!("serving clipboard for up to {:?}", hold);
                return self
                    .inner
                    .set()
                    .wait_until(std::time::Instant::now() + hold)
                    .text(text)
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()));
            }
        }

        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl ClipboardBackend for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn test_copy_empty_password_never_writes() {
        let mut clipboard = MemoryClipboard::default();
        let pwd = SecretString::new("".to_string().into());

        let result = copy_password(&mut clipboard, &pwd);

        assert_eq!(result, Err(ClipboardError::EmptyPassword));
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_copy_whitespace_password_never_writes() {
        let mut clipboard = MemoryClipboard::default();
        let pwd = SecretString::new("  \t ".to_string().into());

        assert_eq!(
            copy_password(&mut clipboard, &pwd),
            Err(ClipboardError::EmptyPassword)
        );
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_copy_password_writes_once() {
        let mut clipboard = MemoryClipboard::default();
        let pwd = SecretString::new(" Secret1! ".to_string().into());

        assert_eq!(copy_password(&mut clipboard, &pwd), Ok(()));
        assert_eq!(clipboard.writes, vec![" Secret1! ".to_string()]);
    }

    #[test]
    fn test_copy_backend_failure() {
        let pwd = SecretString::new("Secret1!".to_string().into());
        let result = copy_password(&mut BrokenClipboard, &pwd);
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }

    #[test]
    fn test_copy_through_boxed_backend() {
        let mut boxed: Box<dyn ClipboardBackend> = Box::new(BrokenClipboard);
        let pwd = SecretString::new("Secret1!".to_string().into());
        assert!(copy_password(&mut boxed, &pwd).is_err());
    }

    #[test]
    fn test_copy_with_empty_password_never_opens_backend() {
        for empty in ["", "   "] {
            let pwd = SecretString::new(empty.to_string().into());
            let mut opened = false;

            let result = copy_password_with(
                || -> Result<MemoryClipboard, ClipboardError> {
                    opened = true;
                    Err(ClipboardError::Unavailable("no display".to_string()))
                },
                &pwd,
            );

            assert!(matches!(result, Err(ClipboardError::EmptyPassword)));
            assert!(!opened);
        }
    }

    #[test]
    fn test_copy_with_unavailable_backend() {
        let pwd = SecretString::new("Secret1!".to_string().into());
        let result = copy_password_with(
            || -> Result<MemoryClipboard, ClipboardError> {
                Err(ClipboardError::Unavailable("no display".to_string()))
            },
            &pwd,
        );
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }

    #[test]
    fn test_copy_with_returns_written_backend() {
        let pwd = SecretString::new("Secret1!".to_string().into());
        let clipboard = copy_password_with(|| Ok(MemoryClipboard::default()), &pwd)
            .expect("copy should succeed");
        assert_eq!(clipboard.writes, vec!["Secret1!".to_string()]);
    }

    #[test]
    fn test_empty_password_message() {
        assert_eq!(ClipboardError::EmptyPassword.to_string(), "No password to copy!");
    }
}
