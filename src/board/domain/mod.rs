//! Domain model for boards and column catalogs.

mod board;
mod column;
mod error;
mod ids;
mod stats;
mod templates;
mod theme;

pub use board::{Board, PersistedBoardData};
pub use column::Column;
pub use error::{BoardDomainError, ParseColorThemeError};
pub use ids::{BoardId, ColumnId};
pub use stats::{BoardStats, ColumnStats};
pub use templates::{BoardTemplate, TEMPLATE_BOARDS};
pub use theme::ColorTheme;
