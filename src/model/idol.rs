use std::fmt;
use std::hash::{Hash, Hasher};

/// The nominated subject: a `(group, name)` pair such as `("Red Velvet", "Irene")`.
///
/// Equality and hashing are case-insensitive on both fields, so
/// `("red velvet", "IRENE")` and `("Red Velvet", "Irene")` are the same idol.
/// The original casing is preserved for display.
#[derive(Clone, Debug)]
pub struct Idol {
    pub group: String,
    pub name: String,
}

impl Idol {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Lowercase `(group, name)` pair used for identity and persistence keys.
    pub fn key(&self) -> (String, String) {
        (self.group.to_lowercase(), self.name.to_lowercase())
    }

    /// The `"group name"` concatenation fed to the fuzzy matcher.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.group, self.name)
    }
}

impl PartialEq for Idol {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Idol {}

impl Hash for Idol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Idol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.group, self.name)
    }
}

impl From<&entity::nomination::Model> for Idol {
    fn from(model: &entity::nomination::Model) -> Self {
        Self::new(model.idol_group.clone(), model.idol_name.clone())
    }
}

impl From<&entity::botw_winner::Model> for Idol {
    fn from(model: &entity::botw_winner::Model) -> Self {
        Self::new(model.idol_group.clone(), model.idol_name.clone())
    }
}

impl From<&entity::idol::Model> for Idol {
    fn from(model: &entity::idol::Model) -> Self {
        Self::new(model.group_name.clone(), model.name.clone())
    }
}
