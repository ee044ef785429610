use yew::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use log::info;

use crate::config;
use crate::i18n::{strings, Locale};

#[derive(Serialize)]
struct SubscribeRequest {
    email: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Sending,
    Subscribed,
    Error(String),
}

/// Email capture form. Fire-and-forget against the backend; nothing else
/// on the page waits for it.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);
    let email = use_state(String::new);
    let status = use_state(|| Status::Idle);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        let invalid_msg = text.newsletter_invalid.to_string();
        let failed_msg = text.newsletter_failed.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() {
                status.set(Status::Error(invalid_msg.clone()));
                return;
            }
            status.set(Status::Sending);
            let email = email.clone();
            let status = status.clone();
            let failed_msg = failed_msg.clone();
            spawn_local(async move {
                let request = Request::post(&format!("{}/api/subscribe", config::get_backend_url()))
                    .json(&SubscribeRequest { email: address.clone() });
                let response = match request {
                    Ok(request) => request.send().await,
                    Err(_) => {
                        status.set(Status::Error(failed_msg.clone()));
                        return;
                    }
                };
                match response {
                    Ok(response) if response.ok() => {
                        info!("subscribed {}", address);
                        email.set(String::new());
                        status.set(Status::Subscribed);
                    }
                    Ok(response) => {
                        let message = response
                            .json::<ErrorResponse>()
                            .await
                            .map(|body| body.error)
                            .unwrap_or(failed_msg.clone());
                        status.set(Status::Error(message));
                    }
                    Err(_) => {
                        status.set(Status::Error(failed_msg.clone()));
                    }
                }
            });
        })
    };

    html! {
        <div class="newsletter">
            <h2>{ text.newsletter_heading }</h2>
            <p>{ text.newsletter_blurb }</p>
            {
                if *status == Status::Subscribed {
                    html! { <p class="newsletter-done">{ text.newsletter_done }</p> }
                } else {
                    html! {
                        <form class="newsletter-form" {onsubmit}>
                            <input
                                type="email"
                                placeholder={text.newsletter_placeholder}
                                value={(*email).clone()}
                                {oninput}
                                disabled={*status == Status::Sending}
                            />
                            <button type="submit" disabled={*status == Status::Sending}>
                                {
                                    if *status == Status::Sending {
                                        text.newsletter_sending
                                    } else {
                                        text.newsletter_button
                                    }
                                }
                            </button>
                        </form>
                    }
                }
            }
            {
                if let Status::Error(ref message) = *status {
                    html! { <p class="newsletter-error">{ message.clone() }</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .newsletter {
                    max-width: 540px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    text-align: center;
                }
                .newsletter h2 {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }
                .newsletter p {
                    color: #8a7f74;
                    margin-bottom: 1.5rem;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: center;
                }
                .newsletter-form input {
                    flex: 1;
                    max-width: 300px;
                    padding: 0.75rem 1rem;
                    border: 1px solid #e0d6c8;
                    border-radius: 8px;
                    font-size: 1rem;
                }
                .newsletter-form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: #e8833a;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .newsletter-form button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .newsletter-done {
                    color: #4a7c59;
                    font-weight: 600;
                }
                .newsletter-error {
                    color: #b3553a;
                    margin-top: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
