use yew::prelude::*;

const LEGAL_CSS: &str = r#"
.legal-page {
    padding-top: 74px;
    min-height: 100vh;
    background: #fdf8f1;
    color: #2d2822;
}
.legal-content {
    max-width: 680px;
    margin: 0 auto;
    padding: 4rem 2rem;
}
.legal-content h1 {
    font-size: 2.4rem;
    margin-bottom: 0.5rem;
}
.legal-updated {
    color: #a39584;
    display: block;
    margin-bottom: 2.5rem;
}
.legal-content h2 {
    font-size: 1.4rem;
    margin: 2rem 0 0.75rem;
}
.legal-content p {
    line-height: 1.75;
    margin-bottom: 1rem;
    color: #4a4239;
}
"#;

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
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
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Terms of Use"}</h1>
                <span class="legal-updated">{"Last updated: June 2025"}</span>

                <h2>{"1. The site"}</h2>
                <p>{"Daily Sunrise publishes editorial content about morning routines and related \
                     lifestyle topics. The content is provided for general information and \
                     inspiration only; it is not medical, psychological or financial advice."}</p>

                <h2>{"2. The newsletter"}</h2>
                <p>{"Subscribing to the newsletter is free. By subscribing you agree to receive one \
                     email from us roughly once a week. Every email contains an unsubscribe link, \
                     and unsubscribing takes effect immediately."}</p>

                <h2>{"3. Your content"}</h2>
                <p>{"If you reply to a letter or send us a photo, you keep ownership of what you \
                     send. You grant us permission to quote or feature it in a future letter unless \
                     you ask us not to."}</p>

                <h2>{"4. Our content"}</h2>
                <p>{"Articles, illustrations and photographs on this site belong to Daily Sunrise or \
                     their credited creators. You may share excerpts with attribution; please don't \
                     republish whole pieces without asking."}</p>

                <h2>{"5. Changes"}</h2>
                <p>{"We may update these terms as the site evolves. Material changes will be \
                     announced in the newsletter before they take effect."}</p>
            </div>
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
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
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Privacy Policy"}</h1>
                <span class="legal-updated">{"Last updated: June 2025"}</span>

                <h2>{"What we collect"}</h2>
                <p>{"If you subscribe to the newsletter we store your email address. That is the \
                     only personal data the site collects. We do not run third-party analytics, \
                     advertising pixels or tracking cookies."}</p>

                <h2>{"How we use it"}</h2>
                <p>{"Your address is used to send you the letter and for nothing else. We do not \
                     sell, rent or share subscriber lists with anyone."}</p>

                <h2>{"Where it lives"}</h2>
                <p>{"Subscriber addresses are held by our email delivery provider and are deleted \
                     from their systems when you unsubscribe."}</p>

                <h2>{"Your rights"}</h2>
                <p>{"You can unsubscribe at any time using the link in any letter, and you can email \
                     us to ask what information we hold about you or to have it deleted. We answer \
                     those emails personally, usually within a few days."}</p>

                <h2>{"Questions"}</h2>
                <p>{"Write to hello@dailysunrise.example and a human will reply."}</p>
            </div>
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}
