//! Entity descriptors supplied by the game model.
//!
//! These are read-only views of the domain: the resolver never mutates them
//! and only reads the handful of fields that qualify an image lookup.

/// What the resolver knows about a unit: its template name and, if it is a
/// declared replacement for another unit type, the replaced template name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitProfile {
    pub name: String,
    pub replaces: Option<String>,
}

impl UnitProfile {
    /// Create a unit profile with no replacement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replaces: None,
        }
    }

    /// Declare this unit a replacement for another unit type.
    pub fn replacing(mut self, replaces: impl Into<String>) -> Self {
        self.replaces = Some(replaces.into());
        self
    }
}

/// What the resolver knows about a civilization: its faction name, its
/// current era, and an optional chosen visual style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivProfile {
    pub name: String,
    pub era: String,
    style: Option<String>,
}

impl CivProfile {
    /// Create a civilization profile with no distinct style.
    pub fn new(name: impl Into<String>, era: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            era: era.into(),
            style: None,
        }
    }

    /// Set a chosen visual style distinct from the faction name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// The display style: the chosen visual identity, or the faction name
    /// if none is set.
    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults_to_faction_name() {
        let civ = CivProfile::new("Greece", "Classical era");
        assert_eq!(civ.style(), "Greece");
    }

    #[test]
    fn test_explicit_style_wins() {
        let civ = CivProfile::new("Greece", "Classical era").with_style("Hellenic");
        assert_eq!(civ.style(), "Hellenic");
    }

    #[test]
    fn test_unit_replacement() {
        let unit = UnitProfile::new("Musketman").replacing("Warrior");
        assert_eq!(unit.replaces.as_deref(), Some("Warrior"));

        let plain = UnitProfile::new("Warrior");
        assert_eq!(plain.replaces, None);
    }
}
