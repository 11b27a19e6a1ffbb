use std::collections::BTreeMap;

use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table::DEFAULT_PAGE_SIZE;
use crate::forms::{self, FieldRule};
use crate::hooks::use_api_simple;
use crate::models::Product;
use crate::styles::combinations::*;

/// Create/edit form for a product. `id` is `None` for the create flow;
/// with an id the form prefills from the provider before editing.
///
/// Validation runs on submit against the declarative product rules;
/// violations render inline under their fields and block the save.
#[component]
pub fn ProductForm(id: ReadOnlySignal<Option<u32>>) -> Element {
    let navigator = use_navigator();
    let mut values = use_signal(forms::default_values);
    let mut errors = use_signal(BTreeMap::<&'static str, String>::new);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let state = use_api_simple::<Product>();

    // Prefill fetch for the edit flow
    use_effect(move || {
        let mut loading = state.loading.clone();
        let mut data = state.data.clone();
        match id() {
            Some(id) => {
                spawn(async move {
                    loading.set(true);
                    let client = ApiClient::new();
                    data.set(Some(client.get_product(id).await));
                    loading.set(false);
                });
            }
            None => loading.set(false),
        }
    });

    // Copy the fetched product into the form once it arrives
    use_effect(move || {
        if let Some(Ok(product)) = state.data.read().as_ref() {
            values.set(forms::product_to_values(product));
        }
    });

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();

        let current = values.read().clone();
        let found = forms::validate(&current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(BTreeMap::new());
        save_error.set(None);
        saving.set(true);

        let editing = id();
        let fetched = state.data.read().as_ref().and_then(|r| r.as_ref().ok().cloned());
        spawn(async move {
            let mut product = forms::values_to_product(&current, editing.unwrap_or(0));
            // The form has no thumbnail field; keep the stored one on edit.
            if let Some(original) = fetched {
                product.thumbnail = original.thumbnail;
            }

            let client = ApiClient::new();
            let result = match editing {
                Some(_) => client.update_product(&product).await,
                None => client.create_product(&product).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved product {} ({})", saved.id, saved.title);
                    navigator.push(Route::ProductsPage { page: 0, size: DEFAULT_PAGE_SIZE });
                }
                Err(err) => {
                    log::warn!("failed to save product: {err}");
                    save_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let editing = id().is_some();
    let title = if editing { "Edit Product" } else { "Add Product" };

    rsx! {
        PageContainer {
            PageHeader {
                title: title.to_string(),
                subtitle: Some("All fields are required".to_string()),
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: Some("Loading product...".to_string()) }
                }
            } else {
                if let Some(message) = save_error.read().as_ref() {
                    ErrorState { error: message.clone(), title: Some("Save failed".to_string()) }
                }

                Card {
                    title: "Product Information",
                    form {
                        novalidate: true,
                        onsubmit: on_submit,
                        div {
                            class: "grid grid-cols-1 lg:grid-cols-2 gap-x-6 gap-y-4",
                            for rule in forms::PRODUCT_RULES {
                                FieldInput {
                                    rule: *rule,
                                    value: values.read().get(rule.path).cloned().unwrap_or_default(),
                                    error: errors.read().get(rule.path).cloned(),
                                    on_input: move |(path, text)| {
                                        values.write().insert(path, text);
                                    },
                                }
                            }
                        }
                        div {
                            class: "flex justify-end gap-3 mt-6",
                            Link {
                                to: Route::ProductsPage { page: 0, size: DEFAULT_PAGE_SIZE },
                                class: BUTTON_SECONDARY,
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: BUTTON_PRIMARY,
                                disabled: *saving.read(),
                                if *saving.read() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    rule: FieldRule,
    value: String,
    error: Option<String>,
    on_input: EventHandler<(&'static str, String)>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div {
            class: "space-y-1",
            label { class: FIELD_LABEL, "{rule.label}" }
            input {
                r#type: if rule.constraint.is_numeric() { "number" } else { "text" },
                step: if rule.constraint.is_numeric() { "any" },
                class: if invalid { INPUT_INVALID } else { INPUT },
                value: "{value}",
                oninput: move |ev| on_input.call((rule.path, ev.value())),
            }
            if let Some(message) = error {
                p { class: FIELD_ERROR, "{message}" }
            }
        }
    }
}
