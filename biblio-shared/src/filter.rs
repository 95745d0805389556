//! Client-side search and filtering over in-memory snapshots
//!
//! Every listing page keeps the unfiltered collection it fetched and
//! recomputes the visible subset from it on each keystroke. A record
//! matches when any of its configured fields contains the query,
//! case-insensitively.

use crate::{Book, Borrowing, BorrowingStatus, User};

/// The fields a record type exposes to the search box
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Searchable for Book {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.author]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> [&str; 2] {
        [&self.username, &self.email]
    }
}

impl Searchable for Borrowing {
    fn search_fields(&self) -> [&str; 2] {
        [&self.user, &self.book]
    }
}

pub fn matches(record: &impl Searchable, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
}

/// The visible subset for a query. An empty or whitespace query yields the
/// full snapshot, never a previously filtered result.
pub fn filter_by_query<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| matches(*r, query))
        .cloned()
        .collect()
}

/// The status dropdown on the manage-borrowings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BorrowingStatus),
}

impl StatusFilter {
    /// Parses the value of the filter control; anything unknown selects all
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => Self::Only(BorrowingStatus::Active),
            "overdue" => Self::Only(BorrowingStatus::Overdue),
            "returned" => Self::Only(BorrowingStatus::Returned),
            _ => Self::All,
        }
    }

    pub fn accepts(&self, borrowing: &Borrowing) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => borrowing.status == *status,
        }
    }
}

/// Status filter and search query compose by conjunction
pub fn filter_borrowings(
    records: &[Borrowing],
    query: &str,
    status: StatusFilter,
) -> Vec<Borrowing> {
    records
        .iter()
        .filter(|b| status.accepts(b) && matches(*b, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str) -> Book {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            ..Book::default()
        }
    }

    fn borrowing(id: i64, user: &str, book: &str, status: BorrowingStatus) -> Borrowing {
        Borrowing {
            id,
            book_id: 0,
            title: String::new(),
            user: user.into(),
            book: book.into(),
            borrowed_at: String::new(),
            due_at: String::new(),
            returned_at: String::new(),
            status,
        }
    }

    #[test]
    fn matches_title_prefix_case_insensitively() {
        let shelf = vec![
            book(1, "Dune", "Herbert"),
            book(2, "Foundation", "Asimov"),
        ];

        let hits = filter_by_query(&shelf, "du");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn matches_author_when_title_does_not() {
        let shelf = vec![
            book(1, "Dune", "Herbert"),
            book(2, "Foundation", "Asimov"),
        ];

        // "a" hits both titles ("Foundation") and authors; narrow to a
        // query only the author field contains
        let hits = filter_by_query(&shelf, "asim");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let shelf = vec![book(1, "Dune", "Herbert")];
        assert_eq!(filter_by_query(&shelf, "  DUNE  ").len(), 1);
    }

    #[test]
    fn empty_query_returns_full_snapshot() {
        let shelf = vec![
            book(1, "Dune", "Herbert"),
            book(2, "Foundation", "Asimov"),
        ];
        assert_eq!(filter_by_query(&shelf, "").len(), 2);
        assert_eq!(filter_by_query(&shelf, "   ").len(), 2);
    }

    #[test]
    fn users_match_on_username_or_email() {
        let users = vec![
            User {
                id: 1,
                username: "ada".into(),
                email: "ada@lovelace.org".into(),
                ..User::default()
            },
            User {
                id: 2,
                username: "grace".into(),
                email: "grace@navy.mil".into(),
                ..User::default()
            },
        ];

        assert_eq!(filter_by_query(&users, "navy")[0].id, 2);
        assert_eq!(filter_by_query(&users, "ADA")[0].id, 1);
    }

    #[test]
    fn status_filter_composes_with_query() {
        let records = vec![
            borrowing(1, "ada", "Dune", BorrowingStatus::Active),
            borrowing(2, "ada", "Foundation", BorrowingStatus::Returned),
            borrowing(3, "grace", "Dune", BorrowingStatus::Overdue),
        ];

        let only_overdue = filter_borrowings(&records, "", StatusFilter::from_value("overdue"));
        assert_eq!(only_overdue.len(), 1);
        assert_eq!(only_overdue[0].id, 3);

        let ada_active = filter_borrowings(&records, "ada", StatusFilter::from_value("active"));
        assert_eq!(ada_active.len(), 1);
        assert_eq!(ada_active[0].id, 1);

        let unknown_value = filter_borrowings(&records, "dune", StatusFilter::from_value("bogus"));
        assert_eq!(unknown_value.len(), 2);
    }
}
