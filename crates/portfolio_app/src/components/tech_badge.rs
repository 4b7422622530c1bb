use leptos::prelude::*;

/// A single technology tag.
#[component]
pub fn TechBadge(
    /// Label of the technology
    name: String,
) -> impl IntoView {
    view! { <span class="badge">{name}</span> }
}
