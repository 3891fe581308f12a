//! Registration page creating a new student account.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::types::RegisterRequest;

/// Raw form values as typed by the visitor.
#[derive(Clone, Debug, Default)]
struct RegistrationInput {
    name: String,
    roll_number: String,
    email: String,
    phone: String,
    branch: String,
    school: String,
    password: String,
    confirm_password: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Validate the form and shape it into the registration payload.
fn validate_registration(input: &RegistrationInput) -> Result<RegisterRequest, &'static str> {
    let name = input.name.trim();
    let roll_number = input.roll_number.trim();
    let password = input.password.trim();
    if name.is_empty() || roll_number.is_empty() || password.is_empty() {
        return Err("Name, roll number and password are required.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != input.confirm_password.trim() {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        roll_number: roll_number.to_owned(),
        password: password.to_owned(),
        branch: optional(&input.branch),
        school: optional(&input.school),
        email: optional(&input.email),
        phone: optional(&input.phone),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let input = RwSignal::new(RegistrationInput::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(&input.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth::register(&request).await {
                    Ok(_) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
            busy.set(false);
        }
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           read: fn(&RegistrationInput) -> &String,
                           write: fn(&mut RegistrationInput, String)| {
        view! {
            <label class="auth-field">
                <span>{label}</span>
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || input.with(|v| read(v).clone())
                    on:input=move |ev| input.update(|v| write(v, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the Lost & Found portal"</p>
                <form class="auth-form" on:submit=on_submit>
                    {text_field("Name", "text", |v| &v.name, |v, s| v.name = s)}
                    {text_field("Roll number", "text", |v| &v.roll_number, |v, s| v.roll_number = s)}
                    {text_field("Email", "email", |v| &v.email, |v, s| v.email = s)}
                    {text_field("Phone", "tel", |v| &v.phone, |v, s| v.phone = s)}
                    {text_field("Branch", "text", |v| &v.branch, |v, s| v.branch = s)}
                    {text_field("School", "text", |v| &v.school, |v, s| v.school = s)}
                    {text_field("Password", "password", |v| &v.password, |v, s| v.password = s)}
                    {text_field(
                        "Confirm password",
                        "password",
                        |v| &v.confirm_password,
                        |v, s| v.confirm_password = s,
                    )}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
