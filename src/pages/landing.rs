use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::window;

use crate::effects::{hero_glow, parallax, reveal, ripple, smooth_scroll, status};
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "◎",
        title: "Precision Tuning",
        body: "Per-game profiles tuned by people who actually play the game.",
    },
    Feature {
        icon: "⚡",
        title: "Lightweight Client",
        body: "A single small launcher. No background services, no bloat.",
    },
    Feature {
        icon: "⟳",
        title: "Fast Updates",
        body: "Patched within hours of every game update.",
    },
    Feature {
        icon: "✦",
        title: "Active Community",
        body: "Configs, guides and support from thousands of members.",
    },
];

struct Product {
    name: &'static str,
    operational: bool,
    note: &'static str,
}

const PRODUCTS: [Product; 4] = [
    Product { name: "Windows 11 Client", operational: true, note: "Updated 2m ago" },
    Product { name: "Windows 10 Client", operational: true, note: "Updated 1m ago" },
    Product { name: "Linux (Proton)", operational: false, note: "In development" },
    Product { name: "Steam Deck", operational: false, note: "In development" },
];

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        overflow-x: hidden;
    }
    .hero {
        position: relative;
        min-height: 90vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        z-index: 1;
    }
    .logo-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 420px;
        height: 420px;
        transform: translate(-50%, -50%);
        background: radial-gradient(circle, rgba(255, 51, 51, 0.25), transparent 65%);
        filter: blur(40px);
        pointer-events: none;
    }
    .fade-in {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .fade-in.visible {
        opacity: 1;
        transform: none;
    }
    .features-grid, .status-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .status-badge.operational { color: #3ddc84; }
    .status-badge.coming-soon { color: #f5a623; }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let handles = window().and_then(|window| {
                    let document = window.document()?;
                    Some((
                        smooth_scroll::install(&window, &document),
                        reveal::install(&document),
                        parallax::install(&window, &document),
                        hero_glow::install(&window, &document),
                        status::install(&document),
                        ripple::install(&document),
                    ))
                });
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}{parallax::BACKDROP_CSS}{ripple::RIPPLE_KEYFRAMES}</style>
            <div class="bg-glow"></div>
            <div class="hex-grid"></div>

            <header class="hero">
                <div class="logo-glow"></div>
                <h1 class="hero-title">{"deepsense"}</h1>
                <p class="hero-subtitle">{"Tuned, tested and ready in five minutes."}</p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Setup} classes="btn-primary">
                        {"Get Started"}
                    </Link<Route>>
                    <a href="#features" class="btn-secondary">{"Learn More"}</a>
                </div>
            </header>

            <section id="features" class="features">
                <div class="section-header">
                    <h2>{"Why deepsense"}</h2>
                    <p>{"Everything you need, nothing you don't."}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{feature.icon}</span>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="status" class="status">
                <div class="section-header">
                    <h2>{"Product Status"}</h2>
                    <p>{"Live state of every supported platform."}</p>
                </div>
                <div class="status-grid">
                    { for PRODUCTS.iter().map(|product| {
                        let (badge_class, badge_text) = if product.operational {
                            ("status-badge operational", "Operational")
                        } else {
                            ("status-badge coming-soon", "Coming Soon")
                        };
                        html! {
                            <div class="status-card">
                                <h3>{product.name}</h3>
                                <span class={badge_class}>{badge_text}</span>
                                <p class="last-update">{product.note}</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Ready?"}</h2>
                <Link<Route> to={Route::Setup} classes="btn-primary">
                    {"Start Setup"}
                </Link<Route>>
                <p class="disclaimer">
                    <a href="#status">{"Check product status"}</a>
                </p>
            </section>
        </div>
    }
}
