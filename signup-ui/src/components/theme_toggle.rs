//! Theme toggle component

use leptos::*;

use crate::state::AppContext;

/// Button that switches between light and dark mode.
///
/// The glyph shows the mode a click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let theme = ctx.theme;

    let on_click = move |_| {
        ctx.toggle_theme();
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            title=move || theme.get().toggle_title()
            on:click=on_click
        >
            {move || theme.get().toggle_glyph()}
        </button>
    }
}
