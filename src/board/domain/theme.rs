//! Colour themes and their default column layouts.

use super::{Column, ParseColorThemeError};
use serde::{Deserialize, Serialize};

/// Visual theme of a board. Each theme implies a default column layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    /// Generic personal task flow.
    #[default]
    Purple,
    /// Task flow with an on-hold stage.
    Blue,
    /// Software delivery pipeline.
    Green,
    /// Creative production pipeline.
    Orange,
    /// Purchasing pipeline.
    Red,
    /// Household chores.
    Pink,
    /// Fitness goals.
    Teal,
}

impl ColorTheme {
    /// Every theme, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Purple,
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Pink,
        Self::Teal,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Teal => "teal",
        }
    }

    /// Returns the `(id, name)` pairs of the theme's default columns.
    #[must_use]
    pub const fn default_column_entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Purple => &[
                ("todo", "To Do"),
                ("inprogress", "In Progress"),
                ("underreview", "Under Review"),
                ("finished", "Finished"),
            ],
            Self::Blue => &[
                ("todo", "To Do"),
                ("inprogress", "In Progress"),
                ("onhold", "On Hold"),
                ("completed", "Completed"),
            ],
            Self::Green => &[
                ("backlog", "Backlog"),
                ("development", "Development"),
                ("testing", "Testing"),
                ("deployed", "Deployed"),
            ],
            Self::Orange => &[
                ("ideas", "Ideas"),
                ("sketching", "Sketching"),
                ("creating", "Creating"),
                ("published", "Published"),
            ],
            Self::Red => &[
                ("need", "Need"),
                ("researching", "Researching"),
                ("cart", "Cart"),
                ("purchased", "Purchased"),
            ],
            Self::Pink => &[
                ("shopping", "Shopping"),
                ("cooking", "Cooking"),
                ("cleaning", "Cleaning"),
                ("done", "Done"),
            ],
            Self::Teal => &[
                ("goals", "Goals"),
                ("training", "Training"),
                ("recovery", "Recovery"),
                ("achieved", "Achieved"),
            ],
        }
    }

    /// Returns the theme's default column layout.
    #[must_use]
    pub fn default_columns(self) -> Vec<Column> {
        Column::layout(self.default_column_entries())
    }
}

impl TryFrom<&str> for ColorTheme {
    type Error = ParseColorThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == normalized)
            .ok_or_else(|| ParseColorThemeError(value.to_owned()))
    }
}
