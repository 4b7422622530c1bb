use leptos::prelude::*;

/// Page chrome shared by every non-loading view: header, content slot,
/// footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-container">
            <header>
                <h1>"My Portfolio"</h1>
            </header>

            <main>{children()}</main>

            <footer>
                <hr />
                <p>"© 2025"</p>
            </footer>
        </div>
    }
}
