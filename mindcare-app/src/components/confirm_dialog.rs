use leptos::prelude::*;

/// Модальный диалог подтверждения. Открытием управляет родитель
/// через `Show`, здесь только разметка и две кнопки.
#[component]
pub(crate) fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    cancel_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h3>{title}</h3>
                <p>{message}</p>
                <div class="dialog-actions">
                    <button class="secondary" on:click=move |_| on_cancel.run(())>
                        {cancel_label}
                    </button>
                    <button on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
