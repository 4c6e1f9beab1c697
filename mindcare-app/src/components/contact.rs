use leptos::prelude::*;

use mindcare_core::routes;

use crate::components::guard::RequireSession;

#[component]
pub(crate) fn ContactPage() -> impl IntoView {
    view! {
        <RequireSession>
            <section class="page-panel contact-page">
                <a class="back-link" href=routes::DASHBOARD>"Back to Dashboard"</a>
                <h2>"Contact Us"</h2>
                <p>"We are here to support you on your mental health journey."</p>

                <div class="contact-card">
                    <p>
                        <strong>"Email:"</strong>
                        " support@mindcarehub.com"
                    </p>
                    <p>
                        <strong>"Phone:"</strong>
                        " +1 (800) 555-0199"
                    </p>
                    <p>
                        <strong>"Hours:"</strong>
                        " Monday to Friday, 9 AM to 6 PM"
                    </p>
                </div>

                <p class="contact-note">
                    "If you are experiencing a crisis, please reach out to your local emergency services immediately."
                </p>
            </section>
        </RequireSession>
    }
}
