//! Rendering activity records into feed lines

use biblio_shared::{dates, Activity, ActivityType};
use leptos::either::EitherOf3;
use leptos::prelude::*;

/// The plain-text reading of an activity, used for tooltips
pub fn activity_text(activity: &Activity) -> String {
    match activity.activity_type {
        ActivityType::BorrowBook => {
            format!("{} borrowed {}", activity.username, activity.book_title)
        }
        ActivityType::ReturnBook => {
            format!("{} returned {}", activity.username, activity.book_title)
        }
        ActivityType::Register => format!("{} has signed up", activity.username),
    }
}

#[component]
pub fn ActivityLine(activity: Activity, now_ms: f64) -> impl IntoView {
    let when = dates::relative_from_ms(&activity.created_at, now_ms);
    let title = activity_text(&activity);

    let message = match activity.activity_type {
        ActivityType::BorrowBook => EitherOf3::A(view! {
            <p>
                <span class="user font-medium">{activity.username.clone()}</span>
                " borrowed "
                <span class="book italic">{activity.book_title.clone()}</span>
            </p>
        }),
        ActivityType::ReturnBook => EitherOf3::B(view! {
            <p>
                <span class="user font-medium">{activity.username.clone()}</span>
                " returned "
                <span class="book italic">{activity.book_title.clone()}</span>
            </p>
        }),
        ActivityType::Register => EitherOf3::C(view! {
            <p>
                <span class="user font-medium">{activity.username.clone()}</span>
                " has signed up"
            </p>
        }),
    };

    view! {
        <li class="recent-activity-list-item flex items-center justify-between border-b border-gray-100 py-2 last:border-b-0" title=title>
            {message}
            <span class="activity-date text-xs text-gray-400">{when}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(kind: ActivityType) -> Activity {
        Activity {
            activity_type: kind,
            username: "ada".into(),
            book_title: "Dune".into(),
            created_at: "2025-08-05T10:00:00Z".into(),
        }
    }

    #[test]
    fn message_follows_activity_type() {
        assert_eq!(
            activity_text(&activity(ActivityType::BorrowBook)),
            "ada borrowed Dune"
        );
        assert_eq!(
            activity_text(&activity(ActivityType::ReturnBook)),
            "ada returned Dune"
        );
        assert_eq!(
            activity_text(&activity(ActivityType::Register)),
            "ada has signed up"
        );
    }
}
