use yew::prelude::*;

use crate::config;
use crate::nav::NAV_TARGETS;
use crate::services::PageServices;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub services: PageServices,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let services = &props.services;

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#hero" class="logo-wrap" onclick={services.nav_click("hero", "nav_logo")}>
                    <img src="/images/Shop-Logo.png" alt={config::SHOP_NAME} class="logo-img" />
                </a>
                <nav class="nav">
                    <ul class="nav-links nav-links-desktop">
                        {
                            NAV_TARGETS.iter().map(|item| html! {
                                <li key={item.id}>
                                    <a
                                        href={format!("#{}", item.id)}
                                        onclick={services.nav_click(item.id, &format!("nav_{}", item.id))}
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </nav>
                <a
                    href={config::whatsapp_url(None)}
                    class="btn btn-small btn-primary header-whatsapp"
                    target="_blank"
                    rel="noopener"
                    onclick={services.whatsapp_click("header_whatsapp")}
                >
                    {"WhatsApp Now"}
                </a>
            </div>
        </header>
    }
}
