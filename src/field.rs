//! Password entry model: current content plus visibility.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::score_password;
use crate::types::StrengthScore;

const MASK: char = '*';

/// The password being edited. Starts empty and masked.
#[derive(Debug)]
pub struct PasswordField {
    password: SecretString,
    visible: bool,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PasswordField {
    pub fn new(visible: bool) -> Self {
        Self {
            password: SecretString::new("".into()),
            visible,
        }
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Replaces the whole content.
    pub fn set(&mut self, password: &str) {
        self.password = SecretString::new(password.into());
    }

    pub fn clear(&mut self) {
        self.set("");
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and returns the new state.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Text to render: the password itself, or one `*` per character.
    pub fn display(&self) -> String {
        let pwd = self.password.expose_secret();
        if self.visible {
            pwd.to_string()
        } else {
            std::iter::repeat_n(MASK, pwd.chars().count()).collect()
        }
    }

    /// Button glyph: an eye while hidden, a covered face while shown.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.visible { "🙈" } else { "👁" }
    }

    pub fn evaluate(&self) -> StrengthScore {
        score_password(self.password.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_starts_empty_and_masked() {
        let field = PasswordField::default();
        assert!(field.is_empty());
        assert!(!field.is_visible());
        assert_eq!(field.display(), "");
        assert_eq!(field.toggle_glyph(), "👁");
        assert_eq!(field.evaluate().value(), 0);
    }

    #[test]
    fn test_field_masks_per_character() {
        let mut field = PasswordField::default();
        field.set("päss");
        assert_eq!(field.display(), "****");
    }

    #[test]
    fn test_toggle_reveals_and_hides() {
        let mut field = PasswordField::default();
        field.set("Secret1!");

        assert!(field.toggle_visibility());
        assert_eq!(field.display(), "Secret1!");
        assert_eq!(field.toggle_glyph(), "🙈");

        assert!(!field.toggle_visibility());
        assert_eq!(field.display(), "********");
    }

    #[test]
    fn test_set_and_clear_rescore() {
        let mut field = PasswordField::new(true);
        field.set("Aa1!aaaaaa");
        assert_eq!(field.evaluate().value(), 6);

        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.evaluate().value(), 0);
        assert!(field.is_visible());
    }
}
