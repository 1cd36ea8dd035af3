use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;
use yew::prelude::*;
use yew_hooks::prelude::use_mount;

use crate::config;
use crate::error::DomError;
use crate::view::browser::document;

/// Adds the reviews platform script to the page unless it's already there.
fn load_reviews_script() -> Result<(), DomError> {
    let document = document()?;
    let selector = format!("script[src=\"{}\"]", config::REVIEWS_SCRIPT_URL);
    if document.query_selector(&selector)?.is_some() {
        return Ok(());
    }
    let script = document
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| DomError::Js("created element is not a script".to_string()))?;
    script.set_src(config::REVIEWS_SCRIPT_URL);
    script.set_async(true);
    let body = document.body().ok_or(DomError::NoBody)?;
    body.append_child(&script)?;
    Ok(())
}

#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    use_mount(|| {
        if let Err(err) = load_reviews_script() {
            debug!("reviews widget not loaded: {}", err);
        }
    });

    html! {
        <section class="section section-soft">
            <div class="container">
                <h2 class="section-title">{"What Our Customers Say"}</h2>
                <div class="google-reviews-outer">
                    // Two copies so the vertical marquee loops without a gap.
                    <div class="google-reviews-inner">
                        <div class={config::REVIEWS_APP_CLASS} data-elfsight-app-lazy=""></div>
                        <div class={config::REVIEWS_APP_CLASS} data-elfsight-app-lazy=""></div>
                    </div>
                    <div class="google-reviews-fade google-reviews-fade-top"></div>
                    <div class="google-reviews-fade google-reviews-fade-bottom"></div>
                </div>
            </div>
            <style>
                {r#"
                    .google-reviews-outer {
                        position: relative;
                        max-height: 520px;
                        overflow: hidden;
                    }
                    .google-reviews-inner {
                        animation: reviewsScroll 45s linear infinite;
                    }
                    .google-reviews-fade {
                        position: absolute;
                        left: 0;
                        right: 0;
                        height: 60px;
                        pointer-events: none;
                    }
                    .google-reviews-fade-top {
                        top: 0;
                        background: linear-gradient(to bottom, #fff7ef, transparent);
                    }
                    .google-reviews-fade-bottom {
                        bottom: 0;
                        background: linear-gradient(to top, #fff7ef, transparent);
                    }
                    @keyframes reviewsScroll {
                        from { transform: translateY(0); }
                        to { transform: translateY(-50%); }
                    }
                "#}
            </style>
        </section>
    }
}
