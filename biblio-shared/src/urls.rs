//! Endpoint URLs for the backend API
//!
//! for consistency, all endpoint paths in this module always start with a /

/// Origin and prefix every API request is made against
pub const API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Base url for static content served by the backend
pub const STATIC_BASE_URL: &str = "/static";
/// Book cover images under the backend's static tree
pub const BOOK_COVER_BASE_URL: &str = "/static/assets/books";
/// Where the backend starts its Google OAuth flow
pub const GOOGLE_OAUTH_URL: &str = "/api/user/create/google";

pub const AUTH_STATE: &str = "/auth/state";
pub const AUTH_ME: &str = "/auth/me";
pub const AUTH_SIGNUP: &str = "/auth/signup";
pub const AUTH_SIGNIN: &str = "/auth/signin";
pub const AUTH_SIGNOUT: &str = "/auth/signout";

pub const BOOKS_ALL: &str = "/books/all";
pub const BOOKS_ADMIN: &str = "/books/admin";
pub const BOOKS_CREATE: &str = "/books/create";

pub fn book(id: i64) -> String {
    format!("/books/{id}")
}

pub const BORROWINGS_BORROW: &str = "/borrowings/borrow";
pub const BORROWINGS_ALL: &str = "/borrowings/all";

pub fn borrowing_return(id: i64) -> String {
    format!("/borrowings/return/{id}")
}

pub const USER_PROFILE: &str = "/user/profile";
pub const USER_ALL: &str = "/user/all";
pub const USER_UPDATE: &str = "/user/update";
pub const USER_UPDATE_PASSWORD: &str = "/user/update/password";
pub const USER_CREATE_WITH_ADMIN: &str = "/user/create-with-admin";

pub fn user(id: i64) -> String {
    format!("/user/{id}")
}

pub fn user_delete(id: i64) -> String {
    format!("/user/delete/{id}")
}

pub fn user_update_with_admin(id: i64) -> String {
    format!("/user/update-with-admin/{id}")
}

pub const ACTIVITIES_ALL: &str = "/activities/all";
pub const ACTIVITIES_RECENT: &str = "/activities/recent";
pub const ACTIVITIES_LIMIT: &str = "/activities/limit";

pub fn activity(id: i64) -> String {
    format!("/activities/{id}")
}

pub const FAVORITES_CREATE: &str = "/favorites/create";
pub const FAVORITES_ALL: &str = "/favorites/all";
pub const FAVORITES_USER: &str = "/favorites/user";
pub const FAVORITES_DELETE: &str = "/favorites/delete";
