//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use triage::Shell;
use triage::roster::{Employee, default_roster};

use crate::pages::{login::LoginPage, triage::TriagePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Static roster shared by every page.
#[derive(Clone, Debug)]
pub struct Roster(pub Vec<Employee>);

/// Root application component.
///
/// Provides the operator shell and the roster as contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(Shell::default());
    provide_context(shell);
    provide_context(Roster(default_roster()));

    view! {
        <Stylesheet id="leptos" href="/pkg/inbox-triage.css"/>
        <Title text="Inbox Triage"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=TriagePage/>
            </Routes>
        </Router>
    }
}
