//! Customer details entered during checkout.

/// Customer contact details collected on the checkout details step.
///
/// Ephemeral: never persisted, and reset whenever the checkout surface
/// closes. `name`, `email`, and `phone` must be non-blank for an order to be
/// submitted; `telegram` is optional. The core performs presence checks only,
/// no format validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub telegram: String,
}

impl CustomerInfo {
    /// Whether all required fields are non-blank (surrounding whitespace
    /// ignored).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    /// Clear all fields back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerInfo {
        CustomerInfo {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            phone: "+855 12 345 678".to_owned(),
            telegram: String::new(),
        }
    }

    #[test]
    fn test_complete_without_telegram() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_blank_name_is_incomplete() {
        let mut info = filled();
        info.name = String::new();
        assert!(!info.is_complete());
    }

    #[test]
    fn test_whitespace_only_field_is_incomplete() {
        let mut info = filled();
        info.phone = "   ".to_owned();
        assert!(!info.is_complete());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut info = filled();
        info.reset();
        assert_eq!(info, CustomerInfo::default());
    }
}
