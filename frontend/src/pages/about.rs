use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
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
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About Daily Sunrise"}</h1>
                <p>{"A small publication about the first hour of the day."}</p>
            </section>
            <section class="about-body">
                <p>{"Daily Sunrise started as a group chat between three friends who kept sending each \
                     other photos of their breakfast tables. The chat became a shared note, the note \
                     became a letter, and the letter now reaches readers in forty countries every \
                     Sunday morning."}</p>
                <p>{"We write about mornings because they are the one part of the day that still \
                     belongs to you. Before the inbox, before the meetings, before the feed, there is \
                     an hour that nobody has claimed yet. We think that hour deserves better defaults."}</p>
                <p>{"We are not scientists, monks or productivity coaches. We are people who burn the \
                     toast sometimes. Everything we publish has been tried in an ordinary kitchen, on \
                     an ordinary weekday, by someone who did not sleep brilliantly the night before."}</p>
                <p>{"The letter is free and will stay free. No sponsorships dressed up as advice, no \
                     affiliate links to sunrise lamps. If we recommend something, it is because one of \
                     us actually uses it."}</p>
            </section>
            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    padding-top: 74px;
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .about-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .about-hero h1 {
                    font-size: 2.8rem;
                    margin-bottom: 1rem;
                }
                .about-hero p {
                    color: #6f6357;
                    font-size: 1.2rem;
                }
                .about-body {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                }
                .about-body p {
                    line-height: 1.75;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
