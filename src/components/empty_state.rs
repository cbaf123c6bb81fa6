use leptos::prelude::*;

/// Placeholder shown while the list has no items
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">"+"</div>
            <h3>"Start your list"</h3>
            <p>"Add your first item below to get organized and stay on top of your tasks."</p>
        </div>
    }
}
