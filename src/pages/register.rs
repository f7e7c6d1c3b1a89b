//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_transport;
use crate::net::types::RegisterRequest;
use crate::router::routes::LOGIN_PATH;
use crate::state::session::use_session;

/// Trim the text fields and require every field.
fn build_register_request(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let (first_name, last_name, email) = (first_name.trim(), last_name.trim(), email.trim());
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let session = use_session();
    let transport = use_transport();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_register_request(&first_name.get(), &last_name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let transport = transport.clone();
            leptos::task::spawn_local(async move {
                if let Err(failure) = session.register(&transport, &request).await {
                    error.set(Some(failure.message));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, &transport, request);
        }
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                {field("First name", "text", first_name)}
                {field("Last name", "text", last_name)}
                {field("you@example.com", "email", email)}
                {field("Password", "password", password)}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? " <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
