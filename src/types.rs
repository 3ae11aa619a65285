use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Perros,
    Gatos,
    Aves,
    Otros,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Perros,
        Category::Gatos,
        Category::Aves,
        Category::Otros,
    ];

    /// Token written into the hidden form field.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Perros => "perros",
            Category::Gatos => "gatos",
            Category::Aves => "aves",
            Category::Otros => "otros",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cat| cat.token() == token)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Perros => "🐕 Perros",
            Category::Gatos => "🐈 Gatos",
            Category::Aves => "🐦 Aves",
            Category::Otros => "🐾 Otros",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetReport {
    pub name: String,
    pub location: String,
    pub contact: String,
    pub category: Category,
}

impl PetReport {
    pub fn new(name: &str, location: &str, contact: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            contact: contact.to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Success,
    Error,
    Info,
}

impl AlertKind {
    /// Suffix for the `alert-*` class on the rendered notice.
    pub fn tag(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(id: u64, message: String, kind: AlertKind) -> Self {
        Self { id, message, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_token_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_token(cat.token()), Some(cat));
        }
        assert_eq!(Category::from_token("peces"), None);
    }

    #[test]
    fn alert_kind_default_is_success() {
        assert_eq!(AlertKind::default().tag(), "success");
    }
}
