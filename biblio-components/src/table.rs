//! Table plumbing shared by the admin pages and the profile tables

use leptos::prelude::*;

use crate::icons::BookIcon;

/// Placeholder row inserted when a table renders with no data
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="empty-row">
            <td colspan=colspan>
                <div class="empty-state flex flex-col items-center gap-2 py-10 text-gray-400">
                    <BookIcon inner_class="h-10 w-10" />
                    <p>{message}</p>
                </div>
            </td>
        </tr>
    }
}

/// Placeholder block for grid-style listings
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state-wrapper flex flex-col items-center gap-2 py-16 text-gray-400">
            <BookIcon inner_class="h-12 w-12" />
            <p>{message}</p>
        </div>
    }
}
