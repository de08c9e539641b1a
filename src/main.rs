//! GigMarket web entry point
//!
//! Wires the server-rendered marketplace pages: one initialization pass
//! registers every page behavior, then the page runs on DOM events alone.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        Document, Element, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
        Window,
    };

    use gigmarket_web::api;
    use gigmarket_web::consts::*;
    use gigmarket_web::debounce::Debouncer;
    use gigmarket_web::draft::{Autosave, DraftPayload};
    use gigmarket_web::format;
    use gigmarket_web::rating::RatingState;
    use gigmarket_web::storage::LocalStore;
    use gigmarket_web::widgets;

    // JS bindings for the Bootstrap widgets the page templates already load
    #[wasm_bindgen(inline_js = "
        export function init_tooltip(el) {
            if (typeof bootstrap !== 'undefined') new bootstrap.Tooltip(el);
        }

        export function init_popover(el) {
            if (typeof bootstrap !== 'undefined') new bootstrap.Popover(el);
        }

        export function close_alert(el) {
            if (typeof bootstrap !== 'undefined') {
                bootstrap.Alert.getOrCreateInstance(el).close();
            }
        }
    ")]
    extern "C" {
        fn init_tooltip(el: &Element);
        fn init_popover(el: &Element);
        fn close_alert(el: &Element);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("GigMarket page glue starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        setup_auth_forms(&document);
        load_projects(&document);
        setup_bootstrap_widgets(&document);
        setup_alert_auto_hide(&window, &document);
        setup_validated_forms(&document);
        setup_smooth_scroll(&document);
        setup_file_previews(&document);
        setup_search(&window, &document);
        setup_price_slider(&document);
        setup_copy_buttons(&window, &document);
        setup_load_more(&window, &document);
        setup_rating_widgets(&document);
        setup_autosave_forms(&window, &document);

        log::info!("GigMarket page glue ready");
    }

    /// Run `f` over every element matching `selector`.
    fn for_each_element(document: &Document, selector: &str, mut f: impl FnMut(&Element)) {
        let Ok(nodes) = document.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                f(&el);
            }
        }
    }

    /// One-shot timer. The closure leaks via `forget`, matching the page
    /// lifetime of every listener here.
    fn set_timeout(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
        let closure = Closure::once(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok();
        closure.forget();
        id
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    // === Auth forms ===

    fn setup_auth_forms(document: &Document) {
        wire_auth_form(document, "register-form", api::REGISTER_URL, "Registration");
        wire_auth_form(document, "login-form", api::LOGIN_URL, "Login");
    }

    /// Intercept a form submit, POST its fields, alert on the outcome, and
    /// go home on success. No retry on any failure.
    fn wire_auth_form(
        document: &Document,
        dom_id: &str,
        endpoint: &'static str,
        action: &'static str,
    ) {
        let Some(form) = document
            .get_element_by_id(dom_id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let form_src = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            let Ok(data) = FormData::new_with_form(&form_src) else {
                return;
            };
            spawn_local(async move {
                match api::post_form(endpoint, &data).await {
                    Ok(response) if response.success => {
                        alert(&format!("{action} successful!"));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Ok(response) => {
                        alert(&format!("{action} failed: {}", response.error_message()));
                    }
                    Err(err) => {
                        log::error!("{action} request failed: {err:?}");
                        alert(&format!("{action} failed: could not reach the server"));
                    }
                }
            });
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // === Project listings ===

    /// Fetch the open-project listings and render them into
    /// #projects-container, replacing whatever was there.
    fn load_projects(document: &Document) {
        let Some(container) = document.get_element_by_id("projects-container") else {
            return;
        };
        spawn_local(async move {
            let body = match api::get_text(api::PROJECTS_URL).await {
                Ok(body) => body,
                Err(err) => {
                    log::error!("Error loading projects: {err:?}");
                    return;
                }
            };
            let list = match api::parse_project_list(&body) {
                Ok(list) => list,
                Err(err) => {
                    log::error!("Error loading projects: {err}");
                    return;
                }
            };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            container.set_inner_html("");
            for project in &list.projects {
                if let Ok(card) = project_card(&document, project) {
                    let _ = container.append_child(&card);
                }
            }
            log::info!("Loaded {} projects", list.projects.len());
        });
    }

    /// Build one listing card: title, description, detail link.
    fn project_card(document: &Document, project: &api::Project) -> Result<Element, JsValue> {
        let card = document.create_element("div")?;
        card.set_class_name("project");

        let title = document.create_element("h3")?;
        title.set_text_content(Some(&project.title));
        let description = document.create_element("p")?;
        description.set_text_content(Some(&project.description));
        let link = document.create_element("a")?;
        link.set_attribute("href", &project.detail_url())?;
        link.set_text_content(Some("View Details"));

        card.append_child(&title)?;
        card.append_child(&description)?;
        card.append_child(&link)?;
        Ok(card)
    }

    // === Widget bootstrap ===

    fn setup_bootstrap_widgets(document: &Document) {
        for_each_element(document, r#"[data-bs-toggle="tooltip"]"#, |el| {
            init_tooltip(el);
        });
        for_each_element(document, r#"[data-bs-toggle="popover"]"#, |el| {
            init_popover(el);
        });
    }

    /// Dismiss server-rendered alerts a few seconds after load.
    fn setup_alert_auto_hide(window: &Window, document: &Document) {
        let document = document.clone();
        set_timeout(window, ALERT_AUTO_HIDE_MS, move || {
            for_each_element(&document, ".alert", |el| {
                close_alert(el);
            });
        });
    }

    /// Browser-validation gate for .needs-validation forms.
    fn setup_validated_forms(document: &Document) {
        for_each_element(document, ".needs-validation", |el| {
            let Some(form) = el.dyn_ref::<HtmlFormElement>().cloned() else {
                return;
            };
            let form_src = form.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                if !form_src.check_validity() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                let _ = form_src.class_list().add_1("was-validated");
            });
            let _ =
                form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
            closure.forget();
        });
    }

    /// In-page anchor links scroll smoothly to their target.
    fn setup_smooth_scroll(document: &Document) {
        for_each_element(document, r##"a[href^="#"]"##, |anchor| {
            let anchor_src = anchor.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                event.prevent_default();
                let Some(href) = anchor_src.get_attribute("href") else {
                    return;
                };
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                // A bare "#" href is not a valid selector; Err covers it
                if let Ok(Some(target)) = document.query_selector(&href) {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    options.set_block(web_sys::ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            });
            let _ =
                anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        });
    }

    /// Mirror a chosen file's name into the input's sibling .file-preview.
    fn setup_file_previews(document: &Document) {
        for_each_element(document, r#"input[type="file"]"#, |el| {
            let Some(input) = el.dyn_ref::<HtmlInputElement>().cloned() else {
                return;
            };
            let input_src = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                let Some(file) = input_src.files().and_then(|files| files.get(0)) else {
                    return;
                };
                let Some(parent) = input_src.parent_element() else {
                    return;
                };
                if let Ok(Some(preview)) = parent.query_selector(".file-preview") {
                    preview.set_text_content(Some(&file.name()));
                }
            });
            let _ =
                input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        });
    }

    /// Debounced search box. The search endpoint is not wired up yet; the
    /// debounce and minimum-length gate are, and matching queries are logged.
    fn setup_search(window: &Window, document: &Document) {
        let Ok(Some(form)) = document.query_selector("#search-form") else {
            return;
        };
        let Some(input) = form
            .query_selector(r#"input[type="search"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let debounce = Rc::new(RefCell::new(Debouncer::new()));
        let input_src = input.clone();
        let window = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let ticket = debounce.borrow_mut().arm();
            let debounce = debounce.clone();
            let input = input_src.clone();
            set_timeout(&window, SEARCH_DEBOUNCE_MS, move || {
                if !debounce.borrow_mut().try_fire(ticket) {
                    return;
                }
                let query = input.value();
                if widgets::should_search(&query) {
                    log::info!("Searching for: {query}");
                }
            });
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Mirror the price slider's value into #price-display as naira.
    fn setup_price_slider(document: &Document) {
        let Some(slider) = document
            .get_element_by_id("price-range")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let slider_src = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Ok(Some(display)) = document.query_selector("#price-display") {
                let value = slider_src.value().parse::<i64>().unwrap_or(0);
                display.set_text_content(Some(&format::format_naira_whole(value)));
            }
        });
        let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Copy a target element's text and flip the button label while copied.
    fn setup_copy_buttons(window: &Window, document: &Document) {
        for_each_element(document, ".copy-btn", |btn| {
            let btn_src = btn.clone();
            let window = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                let Some(target_sel) = btn_src.get_attribute("data-target") else {
                    return;
                };
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Ok(Some(target)) = document.query_selector(&target_sel) else {
                    return;
                };
                let text = target
                    .text_content()
                    .filter(|t| !t.is_empty())
                    .or_else(|| target.dyn_ref::<HtmlInputElement>().map(|i| i.value()))
                    .unwrap_or_default();
                let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
                    return;
                };

                let btn = btn_src.clone();
                let window = window.clone();
                spawn_local(async move {
                    if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                        btn.set_inner_html(widgets::copy_button_label(true));
                        let btn = btn.clone();
                        set_timeout(&window, COPY_RESET_MS, move || {
                            btn.set_inner_html(widgets::copy_button_label(false));
                        });
                    } else {
                        log::warn!("Clipboard write failed");
                    }
                });
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        });
    }

    /// Load-more stub: guard against double trigger, spinner while loading.
    fn setup_load_more(window: &Window, document: &Document) {
        let Some(btn) = document.get_element_by_id("load-more-btn") else {
            return;
        };

        let guard = Rc::new(RefCell::new(widgets::LoadGuard::new()));
        let btn_src = btn.clone();
        let window = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            if !guard.borrow_mut().begin() {
                return;
            }
            btn_src.set_inner_html(widgets::load_more_label(true));

            let guard = guard.clone();
            let btn = btn_src.clone();
            // TODO: fetch the next listings page once the backend exposes
            // offset paging on /projects/
            set_timeout(&window, LOAD_MORE_DELAY_MS, move || {
                guard.borrow_mut().finish();
                btn.set_inner_html(widgets::load_more_label(false));
            });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // === Rating stars ===

    fn setup_rating_widgets(document: &Document) {
        for_each_element(document, ".rating-stars", |container| {
            let Ok(stars) = container.query_selector_all(".star") else {
                return;
            };
            let state = Rc::new(RefCell::new(RatingState::new()));

            for index in 0..stars.length() {
                let Some(star) = stars.item(index).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };

                // Click selects and persists the rating to the hidden input
                {
                    let state = state.clone();
                    let container = container.clone();
                    let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                        let rating = state.borrow_mut().select(index as u8);
                        if let Some(hidden) = container
                            .query_selector(r#"input[type="hidden"]"#)
                            .ok()
                            .flatten()
                            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                        {
                            hidden.set_value(&rating.to_string());
                        }
                        paint_stars(&container, &state.borrow());
                    });
                    let _ = star
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                    closure.forget();
                }

                // Hover previews the fill
                {
                    let state = state.clone();
                    let container = container.clone();
                    let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                        state.borrow_mut().hover(index as u8);
                        paint_stars(&container, &state.borrow());
                    });
                    let _ = star.add_event_listener_with_callback(
                        "mouseenter",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure.forget();
                }
            }

            // Leaving the widget clears the preview, not the selection
            {
                let state = state.clone();
                let container_src = container.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                    state.borrow_mut().clear_hover();
                    paint_stars(&container_src, &state.borrow());
                });
                let _ = container.add_event_listener_with_callback(
                    "mouseleave",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        });
    }

    /// Apply active/hover classes per the widget state.
    fn paint_stars(container: &Element, state: &RatingState) {
        let Ok(stars) = container.query_selector_all(".star") else {
            return;
        };
        for i in 0..stars.length() {
            let Some(star) = stars.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let classes = star.class_list();
            let _ = if state.is_active(i as u8) {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
            let _ = if state.is_hovered(i as u8) {
                classes.add_1("hover")
            } else {
                classes.remove_1("hover")
            };
        }
    }

    // === Draft autosave ===

    /// Draft autosave for .auto-save-form forms, identified by data-form-id.
    /// Degrades to a no-op when LocalStorage is unavailable.
    fn setup_autosave_forms(window: &Window, document: &Document) {
        for_each_element(document, ".auto-save-form", |el| {
            let Some(form) = el.dyn_ref::<HtmlFormElement>().cloned() else {
                return;
            };
            let Some(form_id) = form.get_attribute("data-form-id") else {
                return;
            };
            let Some(store) = LocalStore::open() else {
                log::warn!("LocalStorage unavailable; draft autosave disabled for {form_id}");
                return;
            };
            let autosave = Rc::new(RefCell::new(Autosave::new(form_id, store)));

            restore_draft(&form, &autosave.borrow());

            // Debounced save on input
            {
                let autosave = autosave.clone();
                let form = form.clone();
                let window = window.clone();
                let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                    // Supersede the pending save: cancel its timer and
                    // invalidate its ticket
                    if let Some(id) = timer.take() {
                        window.clear_timeout_with_handle(id);
                    }
                    let ticket = autosave.borrow_mut().arm();

                    let autosave = autosave.clone();
                    let form = form.clone();
                    let indicator_window = window.clone();
                    let id = set_timeout(&window, AUTOSAVE_DEBOUNCE_MS, move || {
                        if !autosave.borrow_mut().try_fire(ticket) {
                            return;
                        }
                        let payload = form_payload(&form);
                        match autosave.borrow_mut().save(&payload) {
                            Ok(()) => show_save_indicator(&indicator_window),
                            Err(err) => log::warn!("Draft save failed: {err}"),
                        }
                    });
                    timer.set(id);
                });
                let _ =
                    form.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Clear the draft on submit, whether or not the server accepts it
            {
                let autosave = autosave.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                    autosave.borrow_mut().clear();
                });
                let _ = form
                    .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        });
    }

    /// Apply a stored draft to the form. Only names present in both the
    /// payload and the current field set are touched.
    fn restore_draft(form: &HtmlFormElement, autosave: &Autosave<LocalStore>) {
        let Some(payload) = autosave.restore() else {
            return;
        };
        for (name, value) in payload.iter() {
            let selector = format!(r#"[name="{name}"]"#);
            if let Ok(Some(field)) = form.query_selector(&selector) {
                set_field_value(&field, value);
            }
        }
        log::info!(
            "Restored draft for {} ({} fields)",
            autosave.form_id(),
            payload.len()
        );
    }

    /// Set the value on whichever form control this is.
    fn set_field_value(field: &Element, value: &str) {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = field.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = field.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    /// Snapshot the form's current field values. Last value wins for
    /// duplicate names, matching FormData iteration order; file parts have
    /// no string form and snapshot as empty.
    fn form_payload(form: &HtmlFormElement) -> DraftPayload {
        let mut entries: Vec<(String, String)> = Vec::new();
        if let Ok(data) = FormData::new_with_form(form) {
            for item in data.entries().into_iter().flatten() {
                let pair = js_sys::Array::from(&item);
                let key = pair.get(0).as_string().unwrap_or_default();
                let value = pair.get(1).as_string().unwrap_or_default();
                if !key.is_empty() {
                    entries.push((key, value));
                }
            }
        }
        DraftPayload::from_entries(entries)
    }

    /// Flash the #save-indicator badge for a bounded time.
    fn show_save_indicator(window: &Window) {
        let Some(document) = window.document() else {
            return;
        };
        let Some(indicator) = document.get_element_by_id("save-indicator") else {
            return;
        };
        indicator.set_text_content(Some("Draft saved"));
        let _ = indicator.class_list().add_1("show");

        set_timeout(window, SAVE_INDICATOR_MS, move || {
            let _ = indicator.class_list().remove_1("show");
        });
    }

    // === Notifications ===

    /// Build and show a floating dismissible notification, auto-removed
    /// after a few seconds.
    pub fn show_notification(message: &str, kind: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Ok(el) = document.create_element("div") else {
            return;
        };
        el.set_class_name(&format!(
            "alert alert-{kind} alert-dismissible fade show position-fixed"
        ));
        if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
            let style = html_el.style();
            let _ = style.set_property("top", "20px");
            let _ = style.set_property("right", "20px");
            let _ = style.set_property("z-index", "9999");
            let _ = style.set_property("min-width", "300px");
        }
        el.set_text_content(Some(message));

        if let Ok(close) = document.create_element("button") {
            let _ = close.set_attribute("type", "button");
            close.set_class_name("btn-close");
            let _ = close.set_attribute("data-bs-dismiss", "alert");
            let _ = el.append_child(&close);
        }

        if let Some(body) = document.body() {
            let _ = body.append_child(&el);
        }

        set_timeout(&window, NOTIFICATION_MS, move || {
            el.remove();
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

// Page-script exports, matching the globals the templates already call

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: &str) {
    wasm_app::show_notification(message, kind);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    gigmarket_web::format::format_naira(amount)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(timestamp_ms: f64) -> String {
    gigmarket_web::format::format_date(timestamp_ms)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = timeAgo)]
pub fn time_ago(timestamp_ms: f64) -> String {
    gigmarket_web::format::time_ago(js_sys::Date::now(), timestamp_ms)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("GigMarket web glue (native) starting...");
    log::info!("This crate targets the browser - build with `trunk serve` for the web version");

    println!("\nRunning draft round-trip check...");
    check_draft_round_trip();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_draft_round_trip() {
    use gigmarket_web::draft::{Autosave, DraftPayload, draft_key};
    use gigmarket_web::storage::MemoryStore;

    let mut autosave = Autosave::new("contact-1", MemoryStore::new());
    let payload = DraftPayload::from_entries([
        ("name".to_string(), "Ada".to_string()),
        ("email".to_string(), "a@b.com".to_string()),
    ]);

    autosave.save(&payload).expect("save should succeed");
    assert_eq!(autosave.restore(), Some(payload));
    assert_eq!(autosave.key(), draft_key("contact-1"));

    autosave.clear();
    assert_eq!(autosave.restore(), None);

    println!("✓ Draft round-trip check passed!");
}
