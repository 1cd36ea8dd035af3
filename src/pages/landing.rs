use chrono::Datelike;
use log::debug;
use yew::prelude::*;

use crate::components::floating_menu::FloatingMenu;
use crate::components::header::SiteHeader;
use crate::components::reviews::ReviewsSection;
use crate::components::sticky_cta::StickyCta;
use crate::config;
use crate::nav::NAV_TARGETS;
use crate::sections::SectionViewNotifier;
use crate::services::PageServices;
use crate::sticky_cta::StickyCtaController;

struct DealCategory {
    class: &'static str,
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    specs: &'static str,
    price: &'static str,
    tag: &'static str,
    button: &'static str,
    message: &'static str,
    event_label: &'static str,
}

const DEALS: &[DealCategory] = &[
    DealCategory {
        class: "gaming",
        image: "/images/Dell-Gaming.jpg",
        alt: "Gaming Laptops – graphics & workstation",
        title: "Gaming Laptops",
        specs: "Graphic Laptops & Workstations · High performance for Gaming, Design & Video Editing.",
        price: "From ₹35,000+",
        tag: "Best for Gaming & Graphics",
        button: "Check Gaming Stock on WhatsApp",
        message: "Hi, I'm interested in Gaming Laptops (graphics laptop, workstation). Please share today's best options.",
        event_label: "category_gaming_laptops",
    },
    DealCategory {
        class: "student",
        image: "/images/HP-R5.jpg",
        alt: "Home and Student Laptops – 10K to 20K range",
        title: "Home / Student Laptops",
        specs: "10K–20K Budget Range · Ideal for Online Classes, Coding Practice, Office Work & Beginners.",
        price: "From ₹10,000 – ₹20,000",
        tag: "Best Value Picks",
        button: "Check Student Options on WhatsApp",
        message: "Hi, I'm looking for Home / Student Laptops (10K–20K range, coding / starter laptops). Please share what's available today.",
        event_label: "category_home_student_laptops",
    },
    DealCategory {
        class: "desktop",
        image: "/images/Lenovo-yoga.jpg",
        alt: "Home and Business Desktops – heavy work & gaming",
        title: "Home / Business Desktops",
        specs: "Heavy Work Desktops · Coding Desktops · Gaming Desktops. Assembled and Branded Options.",
        price: "Custom builds on budget",
        tag: "For office & hardcore use",
        button: "Check Desktop Options on WhatsApp",
        message: "Hi, I'm interested in Home / Business Desktops (heavy work, coding or gaming desktops). Please share your best options.",
        event_label: "category_home_business_desktops",
    },
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("✓", "Tested & Certified", "Each laptop passes full hardware and performance checks before sale."),
    ("✓", "Clear Warranty", "Warranty on every system sold so you can buy with confidence."),
    ("₹", "Best Value in Kochi", "Branded laptops at used prices with honest configuration details."),
    ("⚙", "Fast Local Support", "Service center in Kochi and WhatsApp support for quick help."),
];

const INCLUDES: &[&str] = &[
    "Genuine Windows installed and activated",
    "Essential apps pre-loaded (browsers, PDF, office tools)",
    "Full internal cleaning & hardware health check",
    "Shop warranty and after-sales support",
    "Help with setup, data transfer & basic training",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let services = use_context::<PageServices>().unwrap_or_else(PageServices::browser);
    let sticky_visible = use_state(|| false);

    // Sections exist once the first render is committed, so observers are
    // registered here rather than during render.
    {
        let services = services.clone();
        let setter = sticky_visible.setter();
        use_effect_with_deps(
            move |_| {
                let notifier = SectionViewNotifier::start(&services.observer, services.analytics.clone());
                let controller = StickyCtaController::start(&services.observer, move |visible| {
                    setter.set(visible);
                });
                debug!(
                    "tracking sections {:?}, sticky cta watching: {} ({:?})",
                    notifier.pending(),
                    controller.is_watching(),
                    controller.state()
                );
                move || {
                    controller.stop();
                    notifier.disconnect();
                }
            },
            (),
        );
    }

    let on_menu_select = {
        let navigator = services.navigator.clone();
        Callback::from(move |region_id: &'static str| {
            navigator.navigate_to(region_id);
        })
    };

    html! {
        <>
            <SiteHeader services={services.clone()} />
            <FloatingMenu items={NAV_TARGETS} on_select={on_menu_select} />

            <main>
                <section id="hero" class="section hero">
                    <div class="container hero-grid">
                        <div class="hero-text rise-in">
                            <h1>
                                {"Get a Better Laptop for Less"}
                                <span class="hero-highlight">{"in Kochi"}</span>
                            </h1>
                            <p class="hero-subtitle">
                                {"Branded used laptops with warranty, plus expert repairs and upgrades — fully tested, cleaned and ready to use."}
                            </p>
                            <div class="hero-actions rise-in delay-1">
                                <a
                                    href="#laptops"
                                    class="btn btn-primary btn-glow"
                                    onclick={services.nav_click("laptops", "hero_view_laptops")}
                                >
                                    {"View Laptops"}
                                </a>
                                <a
                                    href={config::whatsapp_url(None)}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-outline btn-glow-outline"
                                    onclick={services.whatsapp_click("hero_whatsapp_best_deal")}
                                >
                                    {"WhatsApp for Best Deal"}
                                </a>
                            </div>
                            <div class="hero-badges rise-in delay-2">
                                <span>{"✔ Warranty on every laptop"}</span>
                                <span>{"✔ Fully tested hardware"}</span>
                                <span>{"✔ Local service & support"}</span>
                            </div>
                        </div>
                        <div class="hero-image-wrap slide-in">
                            <img
                                src="/images/Shop-pic.jpg"
                                alt="Inside Orange Systemz used laptop store in Kochi"
                                class="hero-image"
                            />
                        </div>
                    </div>
                </section>

                <section id="services" class="section">
                    <div class="container">
                        <h2 class="section-title">{"What We Offer"}</h2>
                        <div class="cards-3">
                            <div class="card">
                                <div class="card-accent"></div>
                                <h3>{"Refurbished Laptops"}</h3>
                                <p>{"Branded used laptops for students, home and office. Fully tested with warranty."}</p>
                                <a href="#laptops" class="card-link" onclick={services.nav_click("laptops", "services_view_laptops")}>
                                    {"View laptops →"}
                                </a>
                            </div>
                            <div class="card">
                                <div class="card-accent"></div>
                                <h3>{"Laptop & Desktop Service"}</h3>
                                <p>{"Repairs, upgrades, OS installation, cleaning and data backup at fair prices."}</p>
                                <a href="#contact" class="card-link" onclick={services.nav_click("contact", "services_book_service")}>
                                    {"Book a service →"}
                                </a>
                            </div>
                            <div class="card">
                                <div class="card-accent"></div>
                                <h3>{"Bulk & Office Setup"}</h3>
                                <p>{"Systems for offices, institutes and shops with ongoing maintenance support."}</p>
                                <a href="#contact" class="card-link" onclick={services.nav_click("contact", "services_contact_sales")}>
                                    {"Contact sales →"}
                                </a>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="section section-muted">
                    <div class="container">
                        <h2 class="section-title">{"Why Choose Orange Systemz?"}</h2>
                        <div class="features-grid">
                            {
                                FEATURES.iter().map(|(icon, title, body)| html! {
                                    <div class="feature">
                                        <div class="feature-icon">{*icon}</div>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <section id="laptops" class="section section-soft">
                    <div class="container">
                        <h2 class="section-title">{"Today’s Top Deals"}</h2>
                        <div class="products-grid">
                            {
                                DEALS.iter().map(|deal| html! {
                                    <article class={classes!("product-card", deal.class)}>
                                        <img src={deal.image} alt={deal.alt} class="product-image" loading="lazy" />
                                        <div class="product-body">
                                            <h3>{deal.title}</h3>
                                            <p class="product-specs">{deal.specs}</p>
                                            <p class="product-price">{deal.price}</p>
                                            <span class="product-tag">{deal.tag}</span>
                                            <a
                                                href={config::whatsapp_url(Some(deal.message))}
                                                class="btn btn-primary btn-full btn-whatsapp"
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                onclick={services.whatsapp_click(deal.event_label)}
                                            >
                                                {deal.button}
                                            </a>
                                        </div>
                                    </article>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <section class="section section-muted">
                    <div class="container">
                        <h2 class="section-title">{"Every Laptop Includes"}</h2>
                        <p class="section-subtitle small-center">
                            {"We don’t just sell “as-is” systems. Every laptop is refreshed, tested and ready to plug in and start working from day one."}
                        </p>
                        <div class="warranty-grid">
                            {
                                INCLUDES.iter().map(|line| html! {
                                    <div>
                                        <span class="warranty-icon">{"✔"}</span>
                                        {*line}
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="container about-grid">
                        <div class="about-text">
                            <p class="section-label">{"About Us"}</p>
                            <h2 class="section-title">{"Kochi’s Trusted Used Laptop Store"}</h2>
                            <p>
                                {"Orange Systemz is a Kochi-based store focused on used and refurbished laptops and desktops. We help students, home users and offices get reliable systems within their budget."}
                            </p>
                            <p>
                                {"Every system is tested, cleaned and backed by warranty. Visit our shop or message us on WhatsApp to know today’s stock."}
                            </p>
                            <ul class="about-list">
                                <li>{"Physical store with live demo systems"}</li>
                                <li>{"Transparent configurations and pricing"}</li>
                                <li>{"On-site and in-store service support"}</li>
                            </ul>
                        </div>
                        <div class="about-media">
                            <div class="map-embed">
                                <iframe
                                    title="Orange Systemz Location"
                                    src={config::MAP_EMBED_URL}
                                    width="100%"
                                    height="100%"
                                    style="border: 0;"
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </section>

                <ReviewsSection />

                <section id="contact" class="section">
                    <div class="container final-cta">
                        <div class="final-cta-text">
                            <h2 class="section-title">{"Ready for Your Next Laptop?"}</h2>
                            <p>
                                {"Tell us your budget and use case. We’ll suggest the best options available in stock right now."}
                            </p>
                            <div class="hero-actions">
                                <a
                                    href="#laptops"
                                    class="btn btn-primary btn-glow"
                                    onclick={services.nav_click("laptops", "contact_view_available_laptops")}
                                >
                                    {"View Available Laptops"}
                                </a>
                                <a
                                    href={config::whatsapp_url(None)}
                                    class="btn btn-outline btn-glow-outline"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    onclick={services.whatsapp_click("contact_whatsapp_now")}
                                >
                                    {"WhatsApp Us Now"}
                                </a>
                            </div>
                        </div>
                        <div class="contact-block">
                            <h3>{"Contact & Visit"}</h3>
                            <p><strong>{config::SHOP_NAME}</strong></p>
                            <p>
                                {config::ADDRESS_LINES[0]}
                                <br />
                                {config::ADDRESS_LINES[1]}
                            </p>
                            <p><strong>{"Phone: "}</strong>{config::PHONE_DISPLAY}</p>
                            <p><strong>{"Email: "}</strong>{config::EMAIL}</p>
                            <p><strong>{"Hours: "}</strong>{config::HOURS}</p>
                        </div>
                    </div>
                </section>
            </main>

            <StickyCta visible={*sticky_visible} />

            <footer class="site-footer">
                <div class="container footer-inner">
                    <p>{format!("© {} {}. All rights reserved.", chrono::Local::now().year(), config::SHOP_NAME)}</p>
                    <p class="footer-credit">{"Designed by RJ"}</p>
                </div>
            </footer>

            <style>
                {r#"
                    .rise-in {
                        opacity: 0;
                        animation: riseIn 0.7s ease-out forwards;
                    }
                    .rise-in.delay-1 { animation-delay: 0.2s; }
                    .rise-in.delay-2 { animation-delay: 0.4s; }
                    .slide-in {
                        opacity: 0;
                        animation: slideIn 0.8s ease-out forwards;
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateX(60px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    html { scroll-behavior: smooth; }
                    .btn-glow { transition: transform 0.15s ease-out; }
                    .btn-glow:hover { transform: translateY(-2px) scale(1.03); }
                    .btn-glow:active { transform: scale(0.97); }
                    @media (max-width: 768px) {
                        .nav-links-desktop { display: none; }
                    }
                "#}
            </style>
        </>
    }
}
