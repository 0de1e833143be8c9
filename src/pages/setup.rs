use yew::prelude::*;
use web_sys::window;

use crate::dom::registry::{StageIds, ROOT_SECTION_ID};
use crate::dom::wiring;
use crate::effects::{parallax, ripple};
use crate::wizard::stage::{stage_prefix, Branch, Catalog, StageDescriptor, StageId};

const SETUP_CSS: &str = r#"
    .setup-page {
        min-height: 100vh;
        padding: 8rem 2rem 4rem;
        position: relative;
    }
    .setup-section, .setup-steps {
        flex-direction: column;
        align-items: center;
        gap: 2rem;
        max-width: 900px;
        margin: 0 auto;
    }
    .setup-section { display: flex; }
    .setup-steps { display: none; }
    .setup-cards {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        width: 100%;
    }
    .setup-card {
        cursor: pointer;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
        transition: border-color 0.3s ease, transform 0.3s ease;
    }
    .setup-card:hover { transform: translateY(-4px); }
    .setup-card.selected { border-color: #ff3333; }
    .stage-card, .stage-points, .steps-actions {
        animation: stageIn 0.5s ease both;
    }
    .stage-points { animation-delay: 0.1s; }
    .steps-actions {
        animation-delay: 0.2s;
        display: flex;
        gap: 1rem;
    }
    @keyframes stageIn {
        from { opacity: 0; transform: translateY(16px); }
        to { opacity: 1; transform: none; }
    }
    .modal-overlay {
        position: fixed;
        inset: 0;
        display: none;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.7);
        backdrop-filter: blur(6px);
        z-index: 100;
    }
    .modal-overlay.active { display: flex; }
    .modal {
        position: relative;
        max-width: 480px;
        width: 90%;
        background: #141414;
        border: 1px solid rgba(255, 51, 51, 0.3);
        border-radius: 16px;
        padding: 2rem;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #888;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .modal-checkbox {
        display: flex;
        gap: 0.75rem;
        align-items: center;
        margin: 1.5rem 0;
    }
    .modal-actions {
        display: flex;
        justify-content: flex-end;
        gap: 1rem;
    }
    .modal-actions button:disabled {
        opacity: 0.4;
        cursor: not-allowed;
    }
"#;

fn branch_card(branch: &Branch) -> Html {
    html! {
        <div class="setup-card" data-os={branch.id.key()}>
            <h3>{branch.label.clone()}</h3>
            <p>{branch.description.clone()}</p>
            <button class="setup-select">{"Select"}</button>
        </div>
    }
}

fn stage_section(branch: &Branch, index: usize, stage: &StageDescriptor) -> Html {
    let id = StageId::new(branch.id, index);
    let ids = StageIds::from_prefix(&stage_prefix(id.branch, &stage.slug));
    let back_label = if index == 0 { "Change OS" } else { "Back" };
    let continue_label = if branch.is_terminal(index) { "Finish" } else { "Continue" };

    html! {
        <section id={ids.section.clone()} class="setup-steps">
            <div class="stage-card">
                <span class="step-index">
                    {format!("{} · Step {} of {}", branch.label, index + 1, branch.len())}
                </span>
                <h2>{stage.title.clone()}</h2>
                <p>{stage.summary.clone()}</p>
            </div>
            <ol class="stage-points">
                { for stage.points.iter().map(|point| html! { <li>{point.clone()}</li> }) }
            </ol>
            <div class="steps-actions">
                <button id={ids.back_button.clone()} class="btn-secondary">{back_label}</button>
                <button id={ids.open_button.clone()} class="btn-primary">{"I'm Done"}</button>
            </div>

            <div id={ids.modal.clone()} class="modal-overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <button id={ids.close_button.clone()} class="modal-close" aria-label="Close">{"×"}</button>
                    <h3>{stage.modal_title.clone()}</h3>
                    <p>{stage.modal_body.clone()}</p>
                    <label class="modal-checkbox">
                        <input type="checkbox" id={ids.checkbox.clone()} />
                        <span>{stage.acknowledgment.clone()}</span>
                    </label>
                    <div class="modal-actions">
                        <button id={ids.go_back_button.clone()} class="btn-secondary">{"Go Back"}</button>
                        <button id={ids.continue_button.clone()} class="btn-primary" disabled=true>
                            {continue_label}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Setup)]
pub fn setup() -> Html {
    let catalog = use_memo(|_| Catalog::bundled(), ());

    {
        use_effect_with_deps(
            move |catalog| {
                let handles = window().and_then(|window| {
                    let document = window.document()?;
                    Some((
                        wiring::mount(&window, &document, Catalog::clone(catalog)),
                        ripple::install(&document),
                        parallax::install(&window, &document),
                    ))
                });
                move || drop(handles)
            },
            catalog.clone(),
        );
    }

    html! {
        <div class="setup-page">
            <style>{SETUP_CSS}{parallax::BACKDROP_CSS}{ripple::RIPPLE_KEYFRAMES}</style>
            <div class="bg-glow"></div>

            <section id={ROOT_SECTION_ID} class="setup-section">
                <div class="section-header">
                    <h1>{"Choose Your System"}</h1>
                    <p>{"Pick the Windows version you're running. The steps differ slightly."}</p>
                </div>
                <div class="setup-cards">
                    { for catalog.branches().iter().map(branch_card) }
                </div>
            </section>

            { for catalog.branches().iter().flat_map(|branch| {
                branch
                    .stages
                    .iter()
                    .enumerate()
                    .map(move |(index, stage)| stage_section(branch, index, stage))
            }) }
        </div>
    }
}
