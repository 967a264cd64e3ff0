//! Application shell: tab bar, active panel and the view epoch.

use leptos::*;

use estante_client::{ApiClient, DEFAULT_API_URL};

use crate::state::{Tab, ViewEpoch};
use crate::tabs::{CreateTab, DeleteTab, EditTab, ListTab, ReserveTab, ReturnTab};

/// Backend base URL. WASM has no process environment, so the override is
/// resolved at compile time.
fn api_url() -> &'static str {
    option_env!("ESTANTE_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new(api_url()));

    let active = create_rw_signal(Tab::List);
    let epoch = create_rw_signal(ViewEpoch::default());
    provide_context(epoch);

    // Switching tabs invalidates whatever the previous view still has in
    // flight; the new panel component refetches on mount.
    let select = move |tab: Tab| {
        epoch.update(|e| e.advance());
        active.set(tab);
    };

    view! {
        <div class="app">
            <header>
                <h1>"Estante"</h1>
            </header>
            <nav id="buttons">
                {Tab::ALL
                    .iter()
                    .copied()
                    .map(|tab| {
                        view! {
                            <button
                                id=tab.button_id()
                                class:active=move || active.get() == tab
                                on:click=move |_| select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main>
                {move || {
                    let tab = active.get();
                    view! {
                        <section id=tab.panel_id() class="tab active">
                            {match tab {
                                Tab::List => view! { <ListTab/> }.into_view(),
                                Tab::Create => view! { <CreateTab/> }.into_view(),
                                Tab::Edit => view! { <EditTab/> }.into_view(),
                                Tab::Delete => view! { <DeleteTab/> }.into_view(),
                                Tab::Reserve => view! { <ReserveTab/> }.into_view(),
                                Tab::Return => view! { <ReturnTab/> }.into_view(),
                            }}
                        </section>
                    }
                }}
            </main>
        </div>
    }
}
