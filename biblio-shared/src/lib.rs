//! Types and functions shared by the page components and the API services

pub mod dates;
pub mod filter;
pub mod pager;
pub mod urls;

use serde::{Deserialize, Serialize};

/// How long a toast notification stays on screen, in milliseconds
pub const TOAST_DURATION_MS: u64 = 3000;

/// Books per page on the browse listing; must match the server default
pub const BOOKS_PER_PAGE: u32 = 8;

/// A book record as the backend serves it
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_copies: u32,
    #[serde(default)]
    pub book_img: String,
}

impl Book {
    /// Availability is derived, never stored
    pub fn available(&self) -> bool {
        self.total_copies > 0
    }

    pub fn cover_url(&self) -> String {
        format!("{}/{}", urls::BOOK_COVER_BASE_URL, self.book_img)
    }
}

/// One page of the paginated browse listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookPage {
    #[serde(default)]
    pub books: Vec<Book>,
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

impl Default for BookPage {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            current_page: 1,
            items_per_page: BOOKS_PER_PAGE,
            total_items: 0,
            total_pages: 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub date_joined: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// The status the backend assigns to a borrowing. It is the sole
/// discriminator for which table a record appears in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BorrowingStatus {
    Active,
    Overdue,
    Returned,
}

impl core::fmt::Display for BorrowingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Overdue => write!(f, "overdue"),
            Self::Returned => write!(f, "returned"),
        }
    }
}

/// A borrowing record. The profile variant fills `book_id`/`title`, the
/// admin listing fills `user`/`book`; the unused fields default to empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Borrowing {
    pub id: i64,
    #[serde(default)]
    pub book_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub borrowed_at: String,
    #[serde(default)]
    pub due_at: String,
    #[serde(default)]
    pub returned_at: String,
    pub status: BorrowingStatus,
}

impl Borrowing {
    /// Active and overdue borrowings are open; returned ones are history
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            BorrowingStatus::Active | BorrowingStatus::Overdue
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    BorrowBook,
    ReturnBook,
    Register,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    pub activity_type: ActivityType,
    pub username: String,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub title: String,
}

/// Everything the profile page needs in one aggregate
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Profile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub joined_date: String,
    #[serde(default)]
    pub all_borrowings: Vec<Borrowing>,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

impl Profile {
    pub fn active_borrowings(&self) -> Vec<Borrowing> {
        self.all_borrowings
            .iter()
            .filter(|b| b.is_open())
            .cloned()
            .collect()
    }

    pub fn borrowing_history(&self) -> Vec<Borrowing> {
        self.all_borrowings
            .iter()
            .filter(|b| b.status == BorrowingStatus::Returned)
            .cloned()
            .collect()
    }
}

/// The session token the backend derives server-side; opaque to us apart
/// from the admin flag and the user id
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct AuthToken {
    pub user_id: i64,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// A user-facing message as the backend sends it with every mutation reply
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ApiMessage {
    #[serde(rename = "type", default)]
    pub severity: Severity,
    pub msg: String,
}

impl ApiMessage {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            msg: msg.into(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            msg: msg.into(),
        }
    }
}

/// What every create/update/delete/borrow/return call resolves to: the HTTP
/// status for the caller to branch on, plus the server's message for the
/// toast layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub status: u16,
    pub message: ApiMessage,
}

impl MutationOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, 200 | 201)
    }

    pub fn unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn conflict(&self) -> bool {
        self.status == 409
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowing_status_uses_wire_spelling() {
        let b: Borrowing = serde_json::from_str(
            r#"{"id": 3, "book_id": 9, "title": "Dune", "status": "overdue"}"#,
        )
        .unwrap();
        assert_eq!(b.status, BorrowingStatus::Overdue);
        assert!(b.is_open());
        assert_eq!(b.user, "");
    }

    #[test]
    fn activity_type_uses_wire_spelling() {
        let a: Activity = serde_json::from_str(
            r#"{"activity_type": "BORROW_BOOK", "username": "ada", "book_title": "Dune", "created_at": ""}"#,
        )
        .unwrap();
        assert_eq!(a.activity_type, ActivityType::BorrowBook);
    }

    #[test]
    fn profile_partitions_by_status() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "username": "ada",
                "email": "ada@example.com",
                "all_borrowings": [
                    {"id": 1, "status": "active"},
                    {"id": 2, "status": "overdue"},
                    {"id": 3, "status": "returned"}
                ],
                "favorites": []
            }"#,
        )
        .unwrap();

        let active: Vec<i64> = profile.active_borrowings().iter().map(|b| b.id).collect();
        let history: Vec<i64> = profile.borrowing_history().iter().map(|b| b.id).collect();
        assert_eq!(active, vec![1, 2]);
        assert_eq!(history, vec![3]);
    }

    #[test]
    fn availability_is_derived_from_copies() {
        let mut book = Book {
            total_copies: 2,
            ..Book::default()
        };
        assert!(book.available());
        book.total_copies = 0;
        assert!(!book.available());
    }

    #[test]
    fn api_message_reads_type_field() {
        let m: ApiMessage =
            serde_json::from_str(r#"{"type": "error", "msg": "Book already borrowed"}"#).unwrap();
        assert_eq!(m.severity, Severity::Error);
        assert_eq!(m.msg, "Book already borrowed");
    }

    #[test]
    fn empty_book_page_is_page_one_of_one() {
        let page = BookPage::default();
        assert!(page.books.is_empty());
        assert_eq!((page.current_page, page.total_pages), (1, 1));
    }

    #[test]
    fn mutation_outcome_branches_on_status() {
        let ok = MutationOutcome {
            status: 201,
            message: ApiMessage::success("created"),
        };
        assert!(ok.succeeded());
        let dup = MutationOutcome {
            status: 409,
            message: ApiMessage::error("duplicate"),
        };
        assert!(!dup.succeeded());
        assert!(dup.conflict());
    }
}
