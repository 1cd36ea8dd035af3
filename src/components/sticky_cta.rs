use yew::prelude::*;

use crate::components::presence::use_presence;
use crate::config;
use crate::services::PageServices;
use crate::sticky_cta::TRANSITION_MS;

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    pub visible: bool,
}

/// Bottom WhatsApp bar. Slides in and out instead of popping; if `visible`
/// flips mid-animation the latest value wins.
#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let presence = use_presence(props.visible, TRANSITION_MS);
    let services = use_context::<PageServices>();

    if !presence.is_mounted() {
        return html! {};
    }

    let onclick = match services {
        Some(services) => services.whatsapp_click("sticky_whatsapp_mobile"),
        None => Callback::noop(),
    };

    html! {
        <>
            <a
                href={config::whatsapp_url(None)}
                target="_blank"
                rel="noopener noreferrer"
                class={classes!("whatsapp-sticky", presence.css_class())}
                {onclick}
            >
                {"WhatsApp for Today’s Best Deal"}
            </a>
            <style>
                {format!(r#"
                    .whatsapp-sticky {{
                        position: fixed;
                        left: 16px;
                        right: 16px;
                        bottom: 16px;
                        z-index: 30;
                        padding: 14px 18px;
                        border-radius: 999px;
                        background: #25d366;
                        color: white;
                        font-weight: 600;
                        text-align: center;
                        text-decoration: none;
                        box-shadow: 0 10px 24px rgba(0, 0, 0, 0.25);
                    }}
                    .whatsapp-sticky.entering {{
                        animation: stickyIn {ms}ms ease-out forwards;
                    }}
                    .whatsapp-sticky.exiting {{
                        animation: stickyOut {ms}ms ease-out forwards;
                        pointer-events: none;
                    }}
                    @keyframes stickyIn {{
                        from {{ transform: translateY(80px); opacity: 0; }}
                        to {{ transform: translateY(0); opacity: 1; }}
                    }}
                    @keyframes stickyOut {{
                        from {{ transform: translateY(0); opacity: 1; }}
                        to {{ transform: translateY(80px); opacity: 0; }}
                    }}
                    @media (min-width: 769px) {{
                        .whatsapp-sticky {{ display: none; }}
                    }}
                "#, ms = TRANSITION_MS)}
            </style>
        </>
    }
}
