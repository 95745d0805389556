//! The full activity log

use biblio_components::activity::ActivityLine;
use leptos::prelude::*;

use crate::api::activities;

#[component]
pub fn AllActivityPage() -> impl IntoView {
    let activities = LocalResource::new(activities::load_all);
    let now_ms = web_sys::js_sys::Date::now();

    view! {
        <div class="mx-auto max-w-3xl px-6 py-8">
            <h1 class="mb-6 text-2xl font-bold">"All activity"</h1>

            <Transition fallback=|| view! { <p>"Loading activity..."</p> }>
                {move || {
                    activities
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                leptos::either::Either::Left(
                                    view! { <p id="all-activity">"No activities found."</p> },
                                )
                            } else {
                                leptos::either::Either::Right(
                                    view! {
                                        <ul
                                            id="all-activity"
                                            class="rounded-lg border border-gray-200 bg-white p-4"
                                        >
                                            {list
                                                .into_iter()
                                                .map(|activity| {
                                                    view! { <ActivityLine activity=activity now_ms=now_ms /> }
                                                })
                                                .collect_view()}
                                        </ul>
                                    },
                                )
                            }
                        })
                }}
            </Transition>
        </div>
    }
}
