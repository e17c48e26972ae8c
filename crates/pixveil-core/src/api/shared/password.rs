use std::fmt::{self, Debug, Formatter};

/// Optional password that seeds the scrambling of the secret image.
///
/// An empty password is the same as no password at all, both mean no scrambling.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password(Option<String>);

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password.filter(|p| !p.is_empty()))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Some(password).into()
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        password.to_string().into()
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}
