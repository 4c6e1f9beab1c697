use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use mindcare_core::routes;

use crate::state::SessionStore;

/// Оборачивает закрытые страницы: без сессии уводит на вход
/// и не рендерит содержимое.
#[component]
pub(crate) fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !store.is_authenticated() {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || store.is_authenticated()>
            {children()}
        </Show>
    }
}
