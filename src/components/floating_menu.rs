use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::components::presence::use_presence;
use crate::menu::{ItemLayout, MenuAction, MenuState, OVERLAY_FADE_MS};
use crate::nav::NavTarget;
use crate::services::PageServices;

#[derive(Properties, PartialEq)]
pub struct FloatingMenuProps {
    pub items: &'static [NavTarget],
    pub on_select: Callback<&'static str>,
}

/// Round hamburger button that fans out one button per nav target.
#[function_component(FloatingMenu)]
pub fn floating_menu(props: &FloatingMenuProps) -> Html {
    let state = use_state(MenuState::default);
    let services = use_context::<PageServices>();

    let dispatch = {
        let state = state.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |action: MenuAction| {
            let transition = state.apply(action);
            state.set(transition.state);
            if let Some(region_id) = transition.navigate_to {
                on_select.emit(region_id);
            }
        })
    };

    let toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(MenuAction::Toggle))
    };

    let dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(MenuAction::Dismiss))
    };

    let is_open = state.is_open();
    let overlay = use_presence(is_open, OVERLAY_FADE_MS);

    html! {
        <>
            {
                if overlay.is_mounted() {
                    html! {
                        <div
                            class={classes!("mobile-overlay", overlay.css_class())}
                            style={format!("--overlay-fade: {}ms", OVERLAY_FADE_MS)}
                            onclick={dismiss}
                        ></div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="mobile-circle-nav">
                <button
                    class={classes!("circle-btn-main", is_open.then(|| "open"))}
                    onclick={toggle}
                    aria-label="Toggle navigation"
                    aria-expanded={is_open.to_string()}
                >
                    <span class="burger"></span>
                </button>
                {
                    if is_open {
                        props.items.iter().enumerate().map(|(index, item)| {
                            let onclick = {
                                let dispatch = dispatch.clone();
                                let services = services.clone();
                                let item = *item;
                                Callback::from(move |_: MouseEvent| {
                                    if let Some(services) = &services {
                                        services.track(&AnalyticsEvent::nav_click(&format!("mobile_{}", item.label)));
                                    }
                                    dispatch.emit(MenuAction::Select(item.id));
                                })
                            };
                            html! {
                                <button
                                    key={item.id}
                                    class="circle-btn circle-btn-item"
                                    style={ItemLayout::for_index(index).style()}
                                    {onclick}
                                >
                                    <span class="circle-label">{item.label}</span>
                                    <span class="circle-icon" aria-hidden="true">{item.icon.glyph()}</span>
                                </button>
                            }
                        }).collect::<Html>()
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .mobile-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 10, 10, 0.35);
                        backdrop-filter: blur(6px);
                        z-index: 40;
                        animation: overlayIn var(--overlay-fade) ease-out forwards;
                    }
                    .mobile-overlay.exiting {
                        animation: overlayOut var(--overlay-fade) ease-in forwards;
                        pointer-events: none;
                    }
                    .mobile-circle-nav {
                        position: fixed;
                        top: 16px;
                        right: 16px;
                        z-index: 50;
                        display: none;
                    }
                    .circle-btn-main {
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: #ff7a00;
                        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.25);
                        cursor: pointer;
                        position: relative;
                        z-index: 2;
                    }
                    .burger,
                    .burger::before,
                    .burger::after {
                        display: block;
                        width: 18px;
                        height: 2px;
                        background: white;
                        margin: 0 auto;
                        position: relative;
                        transition: transform 0.2s ease-out;
                    }
                    .burger::before,
                    .burger::after {
                        content: "";
                        position: absolute;
                    }
                    .burger::before { top: -6px; }
                    .burger::after { top: 6px; }
                    .circle-btn-main.open .burger { background: transparent; }
                    .circle-btn-main.open .burger::before { transform: translateY(6px) rotate(45deg); }
                    .circle-btn-main.open .burger::after { transform: translateY(-6px) rotate(-45deg); }
                    .circle-btn-item {
                        position: absolute;
                        top: 0;
                        right: 0;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 0 14px;
                        border: none;
                        border-radius: 20px;
                        background: white;
                        color: #222;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                        opacity: 0;
                        cursor: pointer;
                        animation-name: circleItemIn;
                        animation-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
                        animation-fill-mode: forwards;
                    }
                    .circle-label { font-size: 0.9rem; white-space: nowrap; }
                    @keyframes circleItemIn {
                        from { transform: translateY(0) scale(0.9); opacity: 0; }
                        to { transform: translateY(var(--item-offset)) scale(1); opacity: 1; }
                    }
                    @keyframes overlayIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes overlayOut {
                        from { opacity: 1; }
                        to { opacity: 0; }
                    }
                    @media (max-width: 768px) {
                        .mobile-circle-nav { display: block; }
                    }
                "#}
            </style>
        </>
    }
}
