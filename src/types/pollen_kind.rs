/// Broad kind of allergen a category name refers to. Only used to pick an emoji.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PollenKind {
    Tree,
    Grass,
    Ragweed,
    Mold,
    /// Dust and dander.
    Dust,
    Other,
}

impl PollenKind {
    /// Classifies a category name by substring, first match wins.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("tree") {
            PollenKind::Tree
        } else if lower.contains("grass") {
            PollenKind::Grass
        } else if lower.contains("ragweed") {
            PollenKind::Ragweed
        } else if lower.contains("mold") {
            PollenKind::Mold
        } else if lower.contains("dust") || lower.contains("dander") {
            PollenKind::Dust
        } else {
            PollenKind::Other
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PollenKind::Tree => "🌳",
            PollenKind::Grass => "🌱",
            PollenKind::Ragweed => "🌾",
            PollenKind::Mold => "🍄",
            PollenKind::Dust => "💨",
            PollenKind::Other => "🌿",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PollenKind;

    #[test]
    fn test_from_name() {
        assert_eq!(PollenKind::from_name("Tree Pollen"), PollenKind::Tree);
        assert_eq!(PollenKind::from_name("Grass Pollen"), PollenKind::Grass);
        assert_eq!(PollenKind::from_name("Ragweed Pollen"), PollenKind::Ragweed);
        assert_eq!(PollenKind::from_name("Mold"), PollenKind::Mold);
        assert_eq!(PollenKind::from_name("Dust & Dander"), PollenKind::Dust);
        assert_eq!(PollenKind::from_name("Pet Dander"), PollenKind::Dust);
        assert_eq!(PollenKind::from_name("Weed Pollen"), PollenKind::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // "tree" is checked before "grass"
        assert_eq!(PollenKind::from_name("Tree and Grass"), PollenKind::Tree);
    }

    #[test]
    fn test_emoji() {
        assert_eq!(PollenKind::Mold.emoji(), "🍄");
        assert_eq!(PollenKind::Other.emoji(), "🌿");
    }
}
