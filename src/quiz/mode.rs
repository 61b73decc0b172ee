//! The five game modes offered on the menu.

/// A quiz game mode. Closed set; the menu lists them in `ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    FindIt,
    Counting,
    Colors,
    Shapes,
    Math,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::FindIt,
        GameMode::Counting,
        GameMode::Colors,
        GameMode::Shapes,
        GameMode::Math,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::FindIt => 0,
            Self::Counting => 1,
            Self::Colors => 2,
            Self::Shapes => 3,
            Self::Math => 4,
        }
    }

    /// Short identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FindIt => "findit",
            Self::Counting => "counting",
            Self::Colors => "colors",
            Self::Shapes => "shapes",
            Self::Math => "math",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FindIt => "Find It!",
            Self::Counting => "Counting Fun",
            Self::Colors => "Color Quiz",
            Self::Shapes => "Shape Match",
            Self::Math => "Math Fun",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::FindIt => "🔍",
            Self::Counting => "🔢",
            Self::Colors => "🎨",
            Self::Shapes => "🔷",
            Self::Math => "➕",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::FindIt => "Tap the right emoji!",
            Self::Counting => "How many can you count?",
            Self::Colors => "What color is this?",
            Self::Shapes => "What shape is this?",
            Self::Math => "Add & subtract!",
        }
    }

    /// Curated modes draw from a fixed pool; the rest are generated.
    pub fn is_curated(&self) -> bool {
        matches!(self, Self::FindIt | Self::Colors | Self::Shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        for (i, mode) in GameMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(GameMode::from_index(i), Some(*mode));
        }
        assert_eq!(GameMode::from_index(5), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(GameMode::FindIt.title(), "Find It!");
        assert_eq!(GameMode::Counting.title(), "Counting Fun");
        assert_eq!(GameMode::Math.title(), "Math Fun");
    }

    #[test]
    fn test_curated_modes() {
        assert!(GameMode::FindIt.is_curated());
        assert!(GameMode::Colors.is_curated());
        assert!(GameMode::Shapes.is_curated());
        assert!(!GameMode::Counting.is_curated());
        assert!(!GameMode::Math.is_curated());
    }
}
