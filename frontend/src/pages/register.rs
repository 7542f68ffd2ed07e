use std::collections::HashMap;

use shared::api::{parse_shop_names, RegisterRequest};
use validator::Validate;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::field_message;
use crate::router::Route;
use crate::services::api::ApiService;

#[function_component(Register)]
pub fn register() -> Html {
    let navigator = use_navigator().expect("router context");
    let username = use_state(String::new);
    let password = use_state(String::new);
    let shops = use_state(String::new);
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
    let on_shops = {
        let shops = shops.clone();
        Callback::from(move |e: InputEvent| {
            shops.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let shops = shops.clone();
        let loading = loading.clone();
        let field_errors = field_errors.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = RegisterRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                shops: parse_shop_names(&shops),
                role: "user".to_string(),
            };

            if let Err(errors) = request.validate() {
                let mut messages = HashMap::new();
                for field in ["username", "password", "shops"] {
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

            let navigator = navigator.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::register(&request).await {
                    Ok(()) => {
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        tracing::error!(%err, "registration failed");
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
                <h1>{ "Create Account" }</h1>
                <p class="subtitle">{ "Join us and start managing your shops today" }</p>

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
                        <label for="shops">{ "Shops" }</label>
                        <input
                            id="shops"
                            type="text"
                            placeholder="Enter shop names, separated by commas"
                            value={(*shops).clone()}
                            oninput={on_shops}
                        />
                        if let Some(message) = field_errors.get("shops") {
                            <p class="field-error">{ message }</p>
                        }
                    </div>

                    <div class="form-field">
                        <label for="password">{ "Password" }</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Create a strong password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                        if let Some(message) = field_errors.get("password") {
                            <p class="field-error">{ message }</p>
                        }
                    </div>

                    <button type="submit" disabled={*loading}>
                        if *loading {
                            { "Creating account..." }
                        } else {
                            { "Create Account" }
                        }
                    </button>
                </form>

                <p class="footer">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Login here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}
