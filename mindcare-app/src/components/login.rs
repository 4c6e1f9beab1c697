use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use mindcare_core::routes;

use crate::api;
use crate::state::SessionStore;

#[component]
pub(crate) fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        loading.set(true);

        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(response) => match store.establish(response.token) {
                    Ok(()) => {
                        loading.set(false);
                        navigate(routes::DASHBOARD, NavigateOptions::default());
                        return;
                    }
                    Err(message) => error.set(Some(message)),
                },
                Err(err) => error.set(Some(err.user_message("Login failed"))),
            }
            loading.set(false);
        });
    };

    view! {
        <section class="auth-card">
            <h2>"Welcome Back"</h2>
            <p class="auth-subtitle">"Sign in to continue your journey"</p>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Enter your email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Enter your password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>"Continue"</button>
            </form>

            <p class="auth-footer">
                "New to our platform? "
                <a href=routes::REGISTER>"Register now"</a>
            </p>
        </section>
    }
}
