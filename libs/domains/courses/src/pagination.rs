//! Keyset page assembly.
//!
//! Queries fetch `limit + 1` rows ordered by `(timestamp DESC, id DESC)`
//! strictly below the incoming cursor; [`build_page`] trims the extra row
//! and derives the navigation tokens. Nothing here talks to the database.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cursor::{self, Cursor};
use crate::error::{CourseError, CourseResult};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Sort key of a pageable row
pub trait PageKey {
    fn page_timestamp(&self) -> DateTime<Utc>;
    fn page_id(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub next_cursor: Option<String>,
    /// First row of this page. Not a reliable backward boundary: paging
    /// "before" it needs the opposite ordering, which no query offers.
    pub previous_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

fn cursor_of<T: PageKey>(row: &T) -> String {
    cursor::encode(row.page_timestamp(), &row.page_id())
}

pub fn build_page<T: PageKey>(mut rows: Vec<T>, limit: usize, has_incoming_cursor: bool) -> Page<T> {
    let has_next_page = rows.len() > limit;
    rows.truncate(limit);

    let next_cursor = if has_next_page {
        rows.last().map(cursor_of)
    } else {
        None
    };
    let previous_cursor = rows.first().map(cursor_of);

    Page {
        items: rows,
        page_info: PageInfo {
            has_next_page,
            has_previous_page: has_incoming_cursor,
            next_cursor,
            previous_cursor,
        },
    }
}

/// Exclusive `(timestamp, id)` bound of a keyset scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyset {
    pub timestamp: DateTime<Utc>,
    pub id: Uuid,
}

impl TryFrom<Cursor> for Keyset {
    type Error = CourseError;

    fn try_from(cursor: Cursor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: cursor.uuid()?,
            timestamp: cursor.timestamp,
        })
    }
}

/// Validated paging arguments of a list call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub after: Option<Keyset>,
    pub limit: u32,
}

impl PageRequest {
    /// `limit == 0` selects [`DEFAULT_LIMIT`]; anything above [`MAX_LIMIT`]
    /// is rejected. A blank cursor counts as no cursor.
    pub fn new(cursor: Option<&str>, limit: u32) -> CourseResult<Self> {
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            n if n > MAX_LIMIT => {
                return Err(CourseError::Validation(format!(
                    "limit must be between 1 and {MAX_LIMIT}, got {n}"
                )));
            }
            n => n,
        };

        let after = match cursor.map(str::trim) {
            None | Some("") => None,
            Some(token) => Some(Keyset::try_from(cursor::decode(token)?)?),
        };

        Ok(Self { after, limit })
    }

    pub fn first(limit: u32) -> Self {
        Self { after: None, limit }
    }

    /// Rows to fetch: one more than the page size, to detect a next page.
    pub fn fetch_size(&self) -> i64 {
        i64::from(self.limit) + 1
    }

    pub fn has_cursor(&self) -> bool {
        self.after.is_some()
    }

    pub fn build<T: PageKey>(&self, rows: Vec<T>) -> Page<T> {
        build_page(rows, self.limit as usize, self.has_cursor())
    }
}
