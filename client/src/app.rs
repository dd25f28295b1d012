//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage, index::IndexPage, login::LoginPage, my_tasks::MyTasksPage, not_found::NotFoundPage,
    profile::ProfilePage, project_detail::ProjectDetailPage, project_form::ProjectFormPage, signup::SignupPage,
    task_form::TaskFormPage,
};
use crate::state::session::AppSession;

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

/// Root application component.
///
/// Owns the session store, resolves it from storage once mounted in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::browser();
    provide_context(session.clone());

    // Effects only run after hydration, so the server render and the first
    // client render both see `Loading`.
    Effect::new(move || {
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/projectpulse.css"/>
        <Title text="ProjectPulse"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("my-tasks")
                    view=|| view! { <ProtectedRoute><MyTasksPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("create-project")
                    view=|| view! { <ProtectedRoute><ProjectFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("edit-project"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><ProjectFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("project"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><ProjectDetailPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("project"), ParamSegment("id"), StaticSegment("create-task"))
                    view=|| view! { <ProtectedRoute><TaskFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(
                        StaticSegment("project"),
                        ParamSegment("id"),
                        StaticSegment("edit-task"),
                        ParamSegment("task_id"),
                    )
                    view=|| view! { <ProtectedRoute><TaskFormPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
