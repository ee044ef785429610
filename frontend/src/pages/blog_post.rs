use yew::prelude::*;
use yew_router::components::Link;

use crate::content::blog;
use crate::i18n::{strings, Locale};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);

    // Scroll to top when navigating between posts
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let content = match blog::find(&props.slug) {
        Some(post) => html! {
            <article class="blog-article">
                <h1>{ post.title }</h1>
                <span class="blog-meta">
                    { post.formatted_date() }
                    { " · " }
                    { format!("{} min", post.reading_minutes) }
                </span>
                { for post.body.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </article>
        },
        None => html! {
            <div class="blog-missing">
                <h1>{"That page drifted off"}</h1>
                <p>{"We couldn't find this journal entry. It may have been renamed or never existed."}</p>
                <Link<Route> to={Route::Blog} classes="back-link">{ text.nav_blog }</Link<Route>>
            </div>
        },
    };

    html! {
        <div class="blog-post-page">
            { content }
            <div class="blog-back">
                <Link<Route> to={Route::Blog} classes="back-link">{"← "}{ text.nav_blog }</Link<Route>>
            </div>
            <style>
                {r#"
                .blog-post-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .blog-article {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 4rem 2rem 2rem;
                }
                .blog-article h1 {
                    font-size: 2.4rem;
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }
                .blog-article .blog-meta {
                    display: block;
                    color: #a39584;
                    margin-bottom: 2rem;
                }
                .blog-article p {
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                    font-size: 1.05rem;
                }
                .blog-missing {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 6rem 2rem 2rem;
                    text-align: center;
                }
                .blog-missing h1 {
                    margin-bottom: 1rem;
                }
                .blog-missing p {
                    color: #6f6357;
                    margin-bottom: 2rem;
                }
                .blog-back {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .back-link {
                    color: #e8833a;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
