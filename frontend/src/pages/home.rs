use yew::prelude::*;
use yew_router::components::Link;

use crate::components::newsletter::NewsletterForm;
use crate::content::blog;
use crate::i18n::{strings, Locale};
use crate::story::viewer::ZoneStory;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);

    // Scroll to top only on initial mount
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
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{ text.hero_title }</h1>
                    <p class="hero-subtitle">{ text.hero_subtitle }</p>
                    <Link<Route> to={Route::Blog} classes="hero-cta">
                        { text.hero_cta }
                    </Link<Route>>
                </div>
            </header>

            <ZoneStory />

            <section class="recent-posts">
                <h2>{ text.recent_posts_heading }</h2>
                <div class="recent-posts-grid">
                    { for blog::recent(3).iter().map(|post| html! {
                        <div class="post-preview">
                            <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                <h3>{ post.title }</h3>
                                <p>{ post.excerpt }</p>
                                <span class="post-date">{ post.formatted_date() }</span>
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-newsletter">
                <NewsletterForm />
            </section>

            <style>
                {r#"
                .home-page {
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(to bottom, #ffe3c2 0%, #fdf8f1 100%);
                }
                .hero-content {
                    max-width: 640px;
                    padding: 2rem;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    line-height: 1.15;
                    margin-bottom: 1.25rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #6f6357;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 10px;
                    background: #e8833a;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hero-cta:hover {
                    background: #d97428;
                }
                .recent-posts {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .recent-posts h2 {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .recent-posts-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .post-preview {
                    background: #fff;
                    border: 1px solid #eee3d4;
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: transform 0.25s ease, border-color 0.25s ease;
                }
                .post-preview:hover {
                    transform: translateY(-4px);
                    border-color: #e8833a;
                }
                .post-preview a {
                    text-decoration: none;
                    color: inherit;
                }
                .post-preview h3 {
                    margin-bottom: 0.75rem;
                }
                .post-preview p {
                    color: #6f6357;
                    margin-bottom: 1rem;
                }
                .post-date {
                    color: #a39584;
                    font-size: 0.9rem;
                }
                .home-newsletter {
                    border-top: 1px solid #eee3d4;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
