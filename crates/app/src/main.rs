use std::sync::Arc;

use dioxus::prelude::*;
use shared_types::{FormConfig, FormSettings, RequisitionCatalog};

mod pages;
use pages::PurchaseOrderPage;

/// Read-only collaborators injected into the purchase order page.
#[derive(Clone)]
pub struct FormContext {
    pub catalog: Arc<dyn RequisitionCatalog>,
    pub settings: FormSettings,
}

impl FormContext {
    /// Build the context from the bundled `config.toml`, falling back to
    /// defaults (an empty catalog) when it cannot be parsed.
    pub fn from_builtin_config() -> Self {
        let config = FormConfig::builtin().unwrap_or_else(|err| {
            tracing::error!(%err, "bundled form configuration is invalid; using defaults");
            FormConfig::default()
        });
        tracing::info!(
            clients = config.clients.len(),
            max_budget = config.form.max_budget,
            "loaded purchase order form configuration"
        );
        Self {
            catalog: Arc::new(config.catalog()),
            settings: config.form,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[app] Failed to initialize logger: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(FormContext::from_builtin_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "app-shell",
            PurchaseOrderPage {}
        }
    }
}
