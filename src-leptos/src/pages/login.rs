//! Sign-in and registration

use crate::app::AppState;
use grocer_types::{Credentials, Registration};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

#[component]
pub fn Login() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::SignIn);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let staff_code = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);

        let auth = state.auth.clone();
        let state = state.clone();
        let navigate = navigate.clone();
        let current_mode = mode.get_untracked();
        spawn_local(async move {
            let outcome = match current_mode {
                Mode::SignIn => auth
                    .login(&Credentials::new(email.get_untracked().trim(), password.get_untracked()))
                    .await
                    .map(|_| true),
                Mode::Register => {
                    let registration = Registration {
                        full_name: full_name.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                        staff_code: staff_code.get_untracked().trim().to_string(),
                        ..Default::default()
                    };
                    auth.register(&registration).await.map(|token| token.is_some())
                },
            };
            busy.try_set(false);

            match outcome {
                Ok(true) => {
                    state.notify("Welcome!");
                    navigate("/products", Default::default());
                },
                Ok(false) => {
                    // Registered, but the server wants a separate login
                    mode.set(Mode::SignIn);
                    password.set(String::new());
                    state.notify("Account created. Please sign in.");
                },
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                },
            }
        });
    };

    let toggle_mode = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        mode.update(|m| *m = if *m == Mode::SignIn { Mode::Register } else { Mode::SignIn });
    };

    view! {
        <Title text=move || if mode.get() == Mode::SignIn { "Sign in" } else { "Create account" } />
        <section class="page login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>{move || if mode.get() == Mode::SignIn { "Sign in" } else { "Create account" }}</h1>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <Show when=move || mode.get() == Mode::Register>
                    <label class="form-group">
                        "Full name"
                        <input
                            class="form-input"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="form-group">
                    "Email"
                    <input
                        type="email"
                        class="form-input"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-group">
                    "Password"
                    <input
                        type="password"
                        class="form-input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || mode.get() == Mode::Register>
                    <label class="form-group">
                        "Staff code (optional)"
                        <input
                            class="form-input"
                            prop:value=move || staff_code.get()
                            on:input=move |ev| staff_code.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <button type="submit" class="btn btn--primary btn--full-width" disabled=move || busy.get()>
                    {move || match (busy.get(), mode.get()) {
                        (true, _) => "Please wait...",
                        (false, Mode::SignIn) => "Sign in",
                        (false, Mode::Register) => "Create account",
                    }}
                </button>
            </form>

            <button type="button" class="btn btn--link" on:click=toggle_mode>
                {move || if mode.get() == Mode::SignIn { "New here? Create an account" } else { "Already registered? Sign in" }}
            </button>
        </section>
    }
}
