use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::contact::ContactPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::materials::MaterialsPage;
use crate::components::posts::PostsPage;
use crate::components::psychiatrists::PsychiatristsPage;
use crate::components::register::RegisterPage;
use crate::components::sessions::SessionsPage;
use crate::components::verify_email::VerifyEmailPage;
use crate::state::SessionStore;

#[component]
pub fn App() -> impl IntoView {
    let store = SessionStore::new();
    store.restore();
    provide_context(store);

    view! {
        <Router>
            <main class="page">
                <Routes fallback=|| "Not Found">
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/verify/:token") view=VerifyEmailPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/posts") view=PostsPage />
                    <Route path=path!("/materials") view=MaterialsPage />
                    <Route path=path!("/psychiatrists") view=PsychiatristsPage />
                    <Route path=path!("/sessions") view=SessionsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}
