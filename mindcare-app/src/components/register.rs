use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use mindcare_core::models::RegisterRequest;
use mindcare_core::routes;

use crate::api;

#[component]
pub(crate) fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let as_psychiatrist = RwSignal::new(false);
    let specialization = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        loading.set(true);

        // Поля психиатра уходят на сервер только при установленном флажке.
        let payload = RegisterRequest {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            is_psychiatrist: as_psychiatrist.get(),
            specialization: as_psychiatrist.get().then(|| specialization.get()),
            contact: as_psychiatrist.get().then(|| contact.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&payload).await {
                Ok(_) => {
                    loading.set(false);
                    navigate(routes::LOGIN, NavigateOptions::default());
                    return;
                }
                Err(err) => error.set(Some(err.user_message("Registration failed"))),
            }
            loading.set(false);
        });
    };

    view! {
        <section class="auth-card">
            <h2>"Create Account"</h2>
            <p class="auth-subtitle">"Join our community today"</p>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Full Name"
                    required=true
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email Address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || as_psychiatrist.get()
                        on:change=move |ev| as_psychiatrist.set(event_target_checked(&ev))
                    />
                    "Register as Psychiatrist"
                </label>

                <Show when=move || as_psychiatrist.get()>
                    <input
                        type="text"
                        placeholder="Specialization"
                        required=true
                        prop:value=move || specialization.get()
                        on:input=move |ev| specialization.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Contact Information"
                        required=true
                        prop:value=move || contact.get()
                        on:input=move |ev| contact.set(event_target_value(&ev))
                    />
                </Show>

                <button type="submit" disabled=move || loading.get()>"Register"</button>
            </form>

            <p class="auth-footer">
                "Already have an account? "
                <a href=routes::LOGIN>"Sign in"</a>
            </p>
        </section>
    }
}
