use crate::domain::user::User;
use crate::error::DashboardError;
use std::cmp::Ordering;
use std::str::FromStr;

/// Columns of the user directory that can be sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortField {
    #[default]
    Name,
    Email,
    Role,
    Status,
    LastLogin,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for UserSortField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            "status" => Ok(Self::Status),
            "last-login" | "last_login" | "lastlogin" => Ok(Self::LastLogin),
            _ => Err(DashboardError::InvalidSortField(s.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(DashboardError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Current sort of the directory table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: UserSortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: UserSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: re-selecting the field flips the direction, a new field
    /// starts ascending
    pub fn select(self, field: UserSortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}

/// Keeps users whose name, email or role contains `search`, ignoring case
///
/// An empty search keeps everyone.
pub fn filter_users<'a>(users: &'a [User], search: &str) -> Vec<&'a User> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| user.matches_lowercase(&needle))
        .collect()
}

/// Sorts users in-place; ties keep their input order
pub fn sort_users(users: &mut [User], state: SortState) {
    users.sort_by(|a, b| {
        let cmp = match state.field {
            UserSortField::Name => compare_text(&a.name, &b.name),
            UserSortField::Email => compare_text(&a.email, &b.email),
            UserSortField::Role => compare_text(&a.role, &b.role),
            UserSortField::Status => compare_text(&a.status, &b.status),
            UserSortField::LastLogin => a.last_login.cmp(&b.last_login),
        };

        match state.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Rows of the directory table for the given search box and sort
///
/// # Arguments
/// * `users` - Every row of the directory
/// * `search` - Search box contents, matched against name, email and role
/// * `state` - Column and direction the table is sorted by
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use dashboard_core::domain::sorting::{
///     filter_and_sort_users, SortDirection, SortState, UserSortField,
/// };
/// use dashboard_core::User;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let users = vec![
///     User::new(1, "John Doe", "john@example.com", day).with_role("Admin"),
///     User::new(2, "Jane Smith", "jane@example.com", day),
///     User::new(3, "Tom Brown", "tom@example.com", day).with_role("Admin"),
/// ];
///
/// let state = SortState::new(UserSortField::Name, SortDirection::Descending);
/// let rows = filter_and_sort_users(&users, "admin", state);
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].name, "Tom Brown");
/// assert_eq!(rows[1].name, "John Doe");
/// ```
pub fn filter_and_sort_users(users: &[User], search: &str, state: SortState) -> Vec<User> {
    let mut rows: Vec<User> = filter_users(users, search).into_iter().cloned().collect();
    sort_users(&mut rows, state);
    rows
}

/// Case-insensitive, with lowercase ahead of uppercase when the letters tie
/// ("apple" < "Apple" < "banana")
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .unwrap_or(Ordering::Equal)
        })
}
