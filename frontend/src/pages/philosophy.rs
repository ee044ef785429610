use yew::prelude::*;

struct Principle {
    title: &'static str,
    body: &'static str,
}

static PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Mornings are built the night before",
        body: "The first hour of the day is downstream of the last one. We treat evenings as part of the morning practice, not a separate subject.",
    },
    Principle {
        title: "Small beats impressive",
        body: "A ritual you keep on your worst week is worth ten you keep on your best. Everything we suggest fits inside five minutes before it asks for more.",
    },
    Principle {
        title: "Light before screens",
        body: "Daylight first, headlines later. The sky has been setting human clocks for rather longer than the lock screen has.",
    },
    Principle {
        title: "Defaults over discipline",
        body: "Willpower at 6:30am is a scarce resource. We would rather rearrange the kitchen than rely on character.",
    },
    Principle {
        title: "Slow is a speed, not a failure",
        body: "An unhurried breakfast is not time lost from the day. It is usually where the day's best thinking quietly happens.",
    },
];

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
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
        <div class="philosophy-page">
            <section class="philosophy-hero">
                <h1>{"What we believe about mornings"}</h1>
                <p>{"Five principles behind everything we publish."}</p>
            </section>
            <section class="principles">
                { for PRINCIPLES.iter().enumerate().map(|(i, principle)| html! {
                    <div class="principle">
                        <span class="principle-number">{ format!("{:02}", i + 1) }</span>
                        <div>
                            <h2>{ principle.title }</h2>
                            <p>{ principle.body }</p>
                        </div>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .philosophy-page {
                    min-height: 100vh;
                    padding-top: 74px;
                    background: #fdf8f1;
                    color: #2d2822;
                }
                .philosophy-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .philosophy-hero h1 {
                    font-size: 2.6rem;
                    margin-bottom: 1rem;
                }
                .philosophy-hero p {
                    color: #6f6357;
                    font-size: 1.15rem;
                }
                .principles {
                    max-width: 680px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                }
                .principle {
                    display: flex;
                    gap: 1.5rem;
                    padding: 2rem 0;
                    border-bottom: 1px solid #eee3d4;
                }
                .principle:last-child {
                    border-bottom: none;
                }
                .principle-number {
                    font-size: 1.5rem;
                    color: #e8833a;
                    font-weight: 700;
                }
                .principle h2 {
                    font-size: 1.35rem;
                    margin-bottom: 0.5rem;
                }
                .principle p {
                    color: #6f6357;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}
