use std::collections::HashMap;

use shared::api::LoginRequest;
use validator::Validate;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::field_message;
use crate::router::Route;
use crate::services::api::ApiService;
use crate::session::use_session;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context");
    let username = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let loading = use_state(|| false);
    let field_errors = use_state(HashMap::<String, String>::new);
    let notice = use_state(|| None::<String>);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            remember.set(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let remember = remember.clone();
        let loading = loading.clone();
        let field_errors = field_errors.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };

            if let Err(errors) = request.validate() {
                let mut messages = HashMap::new();
                for field in ["username", "password"] {
                    if let Some(message) = field_message(&errors, field) {
                        messages.insert(field.to_string(), message);
                    }
                }
                field_errors.set(messages);
                return;
            }

            field_errors.set(HashMap::new());
            notice.set(None);
            loading.set(true);

            let session = session.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let remember = *remember;
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::login(&request).await {
                    Ok(token) => {
                        session.login(&token, remember);
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        tracing::error!(%err, "login failed");
                        notice.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ "Welcome Back" }</h1>
                <p class="subtitle">{ "Login to your account" }</p>

                if let Some(message) = &*notice {
                    <p class="notice">{ message }</p>
                }

                <form {onsubmit}>
                    <div class="form-field">
                        <label for="username">{ "Username" }</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Enter your username"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                        if let Some(message) = field_errors.get("username") {
                            <p class="field-error">{ message }</p>
                        }
                    </div>

                    <div class="form-field">
                        <label for="password">{ "Password" }</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                        if let Some(message) = field_errors.get("password") {
                            <p class="field-error">{ message }</p>
                        }
                    </div>

                    <div class="form-field checkbox">
                        <input
                            id="remember-me"
                            type="checkbox"
                            checked={*remember}
                            onchange={on_remember}
                        />
                        <label for="remember-me">{ "Remember Me" }</label>
                    </div>

                    <button type="submit" disabled={*loading}>
                        if *loading {
                            { "Logging in..." }
                        } else {
                            { "Login" }
                        }
                    </button>
                </form>

                <p class="footer">
                    { "Don't have an account? " }
                    <Link<Route> to={Route::Register}>{ "Register here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}
