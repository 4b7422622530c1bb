use leptos::prelude::*;
use portfolio_common::Project;

use crate::components::TechBadge;

/// One project card: conditional image, title, description, a badge per
/// technology, optional category and external link, and a like counter.
///
/// The like counter is the only state here and it is strictly local to
/// this card instance: it never touches the fetch state or the backend,
/// and it resets when the card is unmounted.
#[component]
pub fn ProjectCard(
    /// The project record to display
    project: Project,
) -> impl IntoView {
    let likes = RwSignal::new(0u32);

    let Project {
        title,
        description,
        image,
        link,
        category,
        technologies,
        ..
    } = project;

    let alt = title.clone();

    view! {
        <div class="project-card">
            {image.map(|src| view! { <img src=src alt=alt width="200" /> })}

            <h2>{title}</h2>
            <p>{description}</p>
            {category.map(|name| view! { <span class="category">{name}</span> })}

            <div class="tech-stack">
                {technologies
                    .into_iter()
                    .map(|tech| view! { <TechBadge name=tech /> })
                    .collect_view()}
            </div>

            {link.map(|href| {
                view! {
                    <a class="project-link" href=href target="_blank" rel="noreferrer">
                        "View project"
                    </a>
                }
            })}

            <button class="btn-like" on:click=move |_| likes.update(|n| *n += 1)>
                "❤️ " {move || likes.get()} " Likes"
            </button>
        </div>
    }
}
