use yew::prelude::*;
use yew_router::components::Link;

use crate::content::blog::POSTS;
use crate::i18n::{strings, Locale};
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
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
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{ text.nav_blog }</h1>
                <p>{"Notes on slow mornings, small rituals and the first hour of the day."}</p>
            </section>
            <section class="blog-list-section">
                { for POSTS.iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <h2>{ post.title }</h2>
                            <p>{ post.excerpt }</p>
                            <span class="blog-meta">
                                { post.formatted_date() }
                                { " · " }
                                { format!("{} min", post.reading_minutes) }
                            </span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .blog-list-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .blog-list-hero p {
                    color: #6f6357;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .blog-list-section {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-post-preview {
                    background: #fff;
                    border: 1px solid #eee3d4;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: #e8833a;
                    transform: translateY(-4px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                    padding: 1.75rem;
                }
                .blog-post-preview h2 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .blog-post-preview p {
                    color: #6f6357;
                    margin-bottom: 1rem;
                }
                .blog-meta {
                    color: #a39584;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .blog-list-hero {
                        padding: 4rem 1rem 1rem;
                    }
                    .blog-list-hero h1 {
                        font-size: 2.3rem;
                    }
                    .blog-list-section {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
