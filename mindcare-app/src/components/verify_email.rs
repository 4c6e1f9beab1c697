use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use mindcare_core::routes;

use crate::api;

/// Сколько держать на экране ответ сервера перед уходом на вход.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub(crate) fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let message = RwSignal::new("Verifying your email...".to_string());

    let token = params.get_untracked().get("token").unwrap_or_default();
    spawn_local(async move {
        if token.is_empty() {
            message.set("Verification failed".to_string());
            return;
        }
        match api::verify_email(&token).await {
            Ok(response) => {
                message.set(response.message);
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigate(routes::LOGIN, NavigateOptions::default());
            }
            Err(err) => message.set(err.user_message("Verification failed")),
        }
    });

    view! {
        <section class="auth-card">
            <h2>"Email Verification"</h2>
            <p>{move || message.get()}</p>
        </section>
    }
}
