use yew::prelude::*;

use crate::content::social::CHANNELS;
use crate::i18n::{strings, Locale};

#[function_component(Social)]
pub fn social() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="social-page">
            <section class="social-hero">
                <h1>{ text.nav_social }</h1>
                <p>{"Where the sunrise shows up between letters."}</p>
            </section>
            <section class="social-grid">
                { for CHANNELS.iter().map(|channel| html! {
                    <a class="social-card" href={channel.url} target="_blank" rel="noopener noreferrer">
                        <span class="social-icon">{ channel.icon }</span>
                        <h2>{ channel.platform }</h2>
                        <span class="social-handle">{ channel.handle }</span>
                        <p>{ channel.blurb }</p>
                    </a>
                }) }
            </section>
            <style>
                {r#"
                .social-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .social-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .social-hero h1 {
                    font-size: 2.8rem;
                    margin-bottom: 1rem;
                }
                .social-hero p {
                    color: #6f6357;
                }
                .social-grid {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .social-card {
                    background: #fff;
                    border: 1px solid #eee3d4;
                    border-radius: 12px;
                    padding: 2rem;
                    text-decoration: none;
                    color: inherit;
                    transition: transform 0.25s ease, border-color 0.25s ease;
                }
                .social-card:hover {
                    transform: translateY(-4px);
                    border-color: #e8833a;
                }
                .social-icon {
                    font-size: 2rem;
                }
                .social-card h2 {
                    margin: 0.75rem 0 0.25rem;
                    font-size: 1.3rem;
                }
                .social-handle {
                    color: #e8833a;
                    font-size: 0.95rem;
                }
                .social-card p {
                    color: #6f6357;
                    margin-top: 0.75rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
