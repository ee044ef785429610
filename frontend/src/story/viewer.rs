use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::i18n::{strings, zone_copy, Locale};
use crate::story::scroll::{ScrollSample, ZONE_COUNT};
use crate::story::zones::{Emphasis, Zone};

/// The scroll story: a 500vh container with a sticky viewport-sized stage.
/// While the container is pinned, scroll position selects one of the five
/// zones; the tree illustration and the overlay both follow that index.
#[function_component(ZoneStory)]
pub fn zone_story() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let active = use_state_eq(|| 0usize);
    let container_ref = use_node_ref();

    {
        let active = active.clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    // Container not mounted yet: keep the last index.
                    let Some(container) = container_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let rect = container.get_bounding_client_rect();
                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let sample = ScrollSample {
                        container_top: rect.top(),
                        container_height: rect.height(),
                        viewport_height,
                    };
                    // Degenerate geometry maps to None and is skipped.
                    if let Some(index) = sample.active_index() {
                        active.set(index);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so the index is right before the first scroll
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let text = strings(locale);

    html! {
        <section class="zone-story" ref={container_ref}>
            <div class="zone-story-sticky">
                <h2 class="zone-story-heading">{ text.story_heading }</h2>
                <div class="zone-story-stage">
                    { tree_illustration(*active) }
                    { narrative_overlay(locale, *active) }
                </div>
                <span class="zone-story-hint">{ text.story_hint }{" ↓"}</span>
            </div>
            <style>
                {r#"
                .zone-story {
                    /* 5 zones x 100vh: each zone owns one viewport of scroll */
                    height: 500vh;
                    position: relative;
                    background: linear-gradient(to bottom, #1a1a2e 0%, #3d2c4f 60%, #c96f4a 100%);
                }
                .zone-story-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .zone-story-heading {
                    color: #ffe8d1;
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }
                .zone-story-stage {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    max-width: 900px;
                    padding: 0 2rem;
                }
                .zone-story-hint {
                    position: absolute;
                    bottom: 1.5rem;
                    color: rgba(255, 232, 209, 0.6);
                    font-size: 0.9rem;
                }
                .story-tree {
                    width: 260px;
                    height: 340px;
                    flex-shrink: 0;
                }
                .story-zone {
                    fill: none;
                    stroke: #ffd9a0;
                    stroke-linecap: round;
                    transition: opacity 0.4s ease, stroke-width 0.4s ease;
                }
                .story-zone.past {
                    opacity: 0.45;
                    stroke-width: 2;
                }
                .story-zone.current {
                    opacity: 1;
                    stroke-width: 3.5;
                    animation: zone-pulse 2.4s ease-in-out infinite;
                }
                .story-zone.future {
                    opacity: 0.15;
                    stroke-width: 1.5;
                }
                @keyframes zone-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.7; }
                }
                .story-overlay {
                    color: #fff6ec;
                    max-width: 420px;
                }
                .story-overlay-card {
                    animation: overlay-enter 0.45s ease both;
                }
                @keyframes overlay-enter {
                    from { opacity: 0; transform: translateY(14px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .story-overlay h3 {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }
                .story-overlay p {
                    color: rgba(255, 246, 236, 0.85);
                    line-height: 1.6;
                }
                .story-progress {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .story-marker {
                    width: 10px;
                    height: 10px;
                    border-radius: 5px;
                    background: rgba(255, 217, 160, 0.35);
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .story-marker.active {
                    width: 28px;
                    background: #ffd9a0;
                }
                .story-progress-label {
                    margin-left: 0.75rem;
                    color: rgba(255, 246, 236, 0.7);
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .zone-story-stage {
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .story-tree {
                        width: 180px;
                        height: 240px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// One `<g>` per zone over a fixed path table. Emphasis is purely a class
/// swap between the three tiers; the paths themselves never change.
fn tree_illustration(active: usize) -> Html {
    html! {
        <svg class="story-tree" viewBox="0 0 240 320" xmlns="http://www.w3.org/2000/svg">
            <circle cx="120" cy="70" r="34" class={zone_class(Zone::Crown, active)} />
            <g class={zone_class(Zone::Roots, active)}>
                <path d="M120 250 C 100 265, 80 268, 58 282" />
                <path d="M120 250 C 118 270, 110 284, 96 296" />
                <path d="M120 250 C 124 272, 134 286, 150 294" />
                <path d="M120 250 C 140 263, 162 267, 184 278" />
            </g>
            <g class={zone_class(Zone::Trunk, active)}>
                <path d="M120 250 C 116 220, 118 190, 120 160" />
                <path d="M112 248 C 110 224, 112 200, 115 178" />
                <path d="M128 248 C 129 226, 127 202, 125 180" />
            </g>
            <g class={zone_class(Zone::Branches, active)}>
                <path d="M120 160 C 100 146, 82 140, 64 128" />
                <path d="M120 160 C 138 144, 156 138, 176 130" />
                <path d="M119 170 C 104 162, 92 158, 78 150" />
                <path d="M121 170 C 138 160, 150 156, 164 152" />
            </g>
            <g class={zone_class(Zone::Leaves, active)}>
                <circle cx="64" cy="124" r="16" />
                <circle cx="92" cy="106" r="20" />
                <circle cx="124" cy="98" r="22" />
                <circle cx="156" cy="108" r="19" />
                <circle cx="180" cy="128" r="14" />
            </g>
            <line x1="24" y1="250" x2="216" y2="250" class={zone_class(Zone::Roots, active)} />
        </svg>
    }
}

fn zone_class(zone: Zone, active: usize) -> Classes {
    let tier = Emphasis::for_zone(zone.index(), active);
    classes!("story-zone", tier.css_class())
}

fn progress_label(active: usize) -> String {
    format!("{} / {}", active + 1, ZONE_COUNT)
}

/// Title, description and the discrete progress indicator for the active
/// zone. Re-keyed on index change so the enter animation replays. An index
/// without catalog copy renders nothing for that frame.
fn narrative_overlay(locale: Locale, active: usize) -> Html {
    let copy = match Zone::from_index(active) {
        Some(zone) => zone_copy(locale, zone),
        None => return html! {},
    };
    html! {
        <div class="story-overlay">
            <div class="story-overlay-card" key={active.to_string()}>
                <h3>{ copy.title }</h3>
                <p>{ copy.description }</p>
            </div>
            <div class="story-progress">
                { for (0..ZONE_COUNT).map(|i| html! {
                    <span class={classes!("story-marker", (i == active).then_some("active"))}></span>
                }) }
                <span class="story-progress-label">{ progress_label(active) }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::scroll::ScrollSample;

    // Walks the full 500vh scenario: 800px viewport, 4000px container,
    // so total scrollable range is 3200px.
    #[test]
    fn test_scroll_through_the_whole_story() {
        let at = |scrolled: f64| ScrollSample {
            container_top: -scrolled,
            container_height: 4000.0,
            viewport_height: 800.0,
        };

        let expectations = [
            (0.0, Zone::Roots, "1 / 5"),
            (1600.0, Zone::Branches, "3 / 5"),
            (3200.0, Zone::Crown, "5 / 5"),
        ];
        for (scrolled, zone, label) in expectations {
            let index = at(scrolled).active_index().unwrap();
            assert_eq!(Zone::from_index(index), Some(zone));
            assert_eq!(progress_label(index), label);
            let copy = zone_copy(Locale::En, zone);
            assert!(!copy.title.is_empty());
        }
    }

    #[test]
    fn test_zone_class_tiers() {
        assert!(zone_class(Zone::Roots, 2).contains("past"));
        assert!(zone_class(Zone::Branches, 2).contains("current"));
        assert!(zone_class(Zone::Crown, 2).contains("future"));
    }
}
