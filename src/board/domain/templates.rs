//! Shared template boards seeded into every installation.

use super::{Column, ColorTheme};

/// Static description of a template board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTemplate {
    /// Template display name.
    pub name: &'static str,
    /// Template colour theme.
    pub theme: ColorTheme,
    /// `(id, name)` pairs of the template's columns.
    pub columns: &'static [(&'static str, &'static str)],
}

impl BoardTemplate {
    /// Returns the template's column layout.
    #[must_use]
    pub fn column_layout(&self) -> Vec<Column> {
        Column::layout(self.columns)
    }
}

/// Templates created when the store holds none.
///
/// Template columns do not always match the theme defaults: "Personal Tasks"
/// is purple but carries the on-hold flow.
pub const TEMPLATE_BOARDS: [BoardTemplate; 7] = [
    BoardTemplate {
        name: "Personal Tasks",
        theme: ColorTheme::Purple,
        columns: &[
            ("todo", "To Do"),
            ("inprogress", "In Progress"),
            ("onhold", "On Hold"),
            ("completed", "Completed"),
        ],
    },
    BoardTemplate {
        name: "Work Projects",
        theme: ColorTheme::Green,
        columns: &[
            ("backlog", "Backlog"),
            ("development", "Development"),
            ("testing", "Testing"),
            ("deployed", "Deployed"),
        ],
    },
    BoardTemplate {
        name: "Creative Ideas",
        theme: ColorTheme::Orange,
        columns: &[
            ("ideas", "Ideas"),
            ("sketching", "Sketching"),
            ("creating", "Creating"),
            ("published", "Published"),
        ],
    },
    BoardTemplate {
        name: "Study Goals",
        theme: ColorTheme::Blue,
        columns: &[
            ("todo", "To Do"),
            ("inprogress", "In Progress"),
            ("underreview", "Under Review"),
            ("finished", "Finished"),
        ],
    },
    BoardTemplate {
        name: "Home & Family",
        theme: ColorTheme::Pink,
        columns: &[
            ("shopping", "Shopping"),
            ("cooking", "Cooking"),
            ("cleaning", "Cleaning"),
            ("done", "Done"),
        ],
    },
    BoardTemplate {
        name: "Health & Fitness",
        theme: ColorTheme::Teal,
        columns: &[
            ("goals", "Goals"),
            ("training", "Training"),
            ("recovery", "Recovery"),
            ("achieved", "Achieved"),
        ],
    },
    BoardTemplate {
        name: "Shopping Lists",
        theme: ColorTheme::Red,
        columns: &[
            ("need", "Need"),
            ("researching", "Researching"),
            ("cart", "Cart"),
            ("purchased", "Purchased"),
        ],
    },
];
