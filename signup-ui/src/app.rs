//! App Root Component
//!
//! Page layout and the application context provider.

use leptos::*;

use crate::components::{ActivityList, SignupForm, ThemeToggle};
use crate::state::provide_app_context;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Applies the stored theme before anything renders
    let ctx = provide_app_context();
    ctx.load_activities();

    view! {
        <header>
            <div class="header-content">
                <div>
                    <h1>"Mergington High School"</h1>
                    <h2>"Extracurricular Activities"</h2>
                </div>
                <ThemeToggle />
            </div>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
            </section>
        </main>

        <footer>
            <p>"Mergington High School"</p>
        </footer>
    }
}
