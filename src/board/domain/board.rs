//! Board aggregate root.

use super::{BoardDomainError, BoardId, BoardTemplate, ColorTheme, Column};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Board aggregate root.
///
/// Template boards have no owner and are readable by every user; user boards
/// are visible to their owner only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    name: String,
    color_theme: ColorTheme,
    columns: Vec<Column>,
    is_template: bool,
    last_accessed: DateTime<Utc>,
    access_count: u64,
    #[serde(rename = "userId")]
    owner: Option<UserId>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted name.
    pub name: String,
    /// Persisted colour theme.
    pub color_theme: ColorTheme,
    /// Persisted column catalog.
    pub columns: Vec<Column>,
    /// Whether the board is a shared template.
    pub is_template: bool,
    /// Persisted last-access timestamp.
    pub last_accessed: DateTime<Utc>,
    /// Persisted access counter.
    pub access_count: u64,
    /// Owning user, absent for templates.
    pub owner: Option<UserId>,
}

fn validated_name(name: &str) -> Result<String, BoardDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyBoardName);
    }
    Ok(trimmed.to_owned())
}

impl Board {
    /// Creates a user board with the default columns of `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] when `name` is blank.
    pub fn new_for_user(
        name: &str,
        theme: ColorTheme,
        owner: UserId,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id: BoardId::new(),
            name: validated_name(name)?,
            color_theme: theme,
            columns: theme.default_columns(),
            is_template: false,
            last_accessed: clock.utc(),
            access_count: 0,
            owner: Some(owner),
        })
    }

    /// Creates an ownerless template board from a static template.
    #[must_use]
    pub fn new_template(template: &BoardTemplate, clock: &impl Clock) -> Self {
        Self {
            id: BoardId::new(),
            name: template.name.to_owned(),
            color_theme: template.theme,
            columns: template.column_layout(),
            is_template: true,
            last_accessed: clock.utc(),
            access_count: 0,
            owner: None,
        }
    }

    /// Creates a user board copying the name, theme and columns of `self`.
    #[must_use]
    pub fn instantiate_for(&self, owner: UserId, clock: &impl Clock) -> Self {
        Self {
            id: BoardId::new(),
            name: self.name.clone(),
            color_theme: self.color_theme,
            columns: self.columns.clone(),
            is_template: false,
            last_accessed: clock.utc(),
            access_count: 0,
            owner: Some(owner),
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            color_theme: data.color_theme,
            columns: data.columns,
            is_template: data.is_template,
            last_accessed: data.last_accessed,
            access_count: data.access_count,
            owner: data.owner,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the colour theme.
    #[must_use]
    pub const fn color_theme(&self) -> ColorTheme {
        self.color_theme
    }

    /// Returns the column catalog in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns `true` for shared template boards.
    #[must_use]
    pub const fn is_template(&self) -> bool {
        self.is_template
    }

    /// Returns the last-access timestamp.
    #[must_use]
    pub const fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    /// Returns how many times the board has been opened.
    #[must_use]
    pub const fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Returns the owning user, absent for templates.
    #[must_use]
    pub const fn owner(&self) -> Option<&UserId> {
        self.owner.as_ref()
    }

    /// Returns `true` when `user` owns this board.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner.as_ref() == Some(user)
    }

    /// Returns `true` when `user` may read this board.
    #[must_use]
    pub fn is_visible_to(&self, user: &UserId) -> bool {
        self.is_template || self.is_owned_by(user)
    }

    /// Renames the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] when `name` is blank.
    pub fn rename(&mut self, name: &str) -> Result<(), BoardDomainError> {
        self.name = validated_name(name)?;
        Ok(())
    }

    /// Records that the board has been opened.
    pub fn record_access(&mut self, at: DateTime<Utc>) {
        self.last_accessed = at;
        self.access_count = self.access_count.saturating_add(1);
    }
}
