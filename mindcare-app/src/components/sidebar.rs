use leptos::prelude::*;
use leptos_router::hooks::use_location;

use mindcare_core::routes;

use crate::components::confirm_dialog::ConfirmDialog;

#[component]
pub(crate) fn Sidebar(
    #[prop(into)] full_name: Signal<String>,
    #[prop(into)] is_psychiatrist: Signal<bool>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let show_logout_dialog = RwSignal::new(false);

    let initial = move || {
        full_name
            .get()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "U".to_string())
    };
    let display_name = move || {
        let name = full_name.get();
        if name.is_empty() { "User".to_string() } else { name }
    };
    let status = move || {
        if is_psychiatrist.get() { "Psychiatrist" } else { "Premium Member" }
    };

    view! {
        <aside class="sidebar">
            <a class="sidebar-brand" href=routes::HOME>"MindCare Hub"</a>

            <nav class="sidebar-nav">
                {routes::NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.to
                                class="nav-link"
                                class:active=move || routes::is_active(&pathname.get(), item.to)
                            >
                                <span class="nav-icon">{item.icon}</span>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-user">
                <div class="avatar">{initial}</div>
                <div>
                    <div class="user-name">{display_name}</div>
                    <div class="user-status">{status}</div>
                </div>
            </div>

            <button class="logout-button" on:click=move |_| show_logout_dialog.set(true)>
                "Logout"
            </button>

            <Show when=move || show_logout_dialog.get()>
                <ConfirmDialog
                    title="See You Soon!"
                    message="Are you sure you want to logout? Your mental health journey is important to us."
                    confirm_label="Logout"
                    cancel_label="Stay"
                    on_confirm=Callback::new(move |_| {
                        show_logout_dialog.set(false);
                        on_logout.run(());
                    })
                    on_cancel=Callback::new(move |_| show_logout_dialog.set(false))
                />
            </Show>
        </aside>
    }
}
