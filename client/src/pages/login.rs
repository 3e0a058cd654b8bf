//! Branded login page: sign-in, password recovery and the support panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! All behavior lives in `PageController`. This component renders its
//! element model (classes, texts, values) reactively and forwards browser
//! events to it. Submissions the controller accepts are carried out here,
//! because timers and HTTP only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A layout the controller rejects renders a short notice instead of the
//! form. Failed POSTs complete the flow as a failure; the request module
//! logs the cause.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::page::layout::ids;
use crate::page::{ClickTarget, Dispatch, Field, Flow, Key, Outcome, PageController, Submission};

/// Support request topics; the empty value keeps the field unanswered.
const SUPPORT_TOPICS: &[(&str, &str)] = &[
    ("", "Choose a topic"),
    ("access", "I can't access my account"),
    ("billing", "Billing and subscriptions"),
    ("other", "Something else"),
];

/// Form control rendered inside a field group.
#[derive(Clone, Copy)]
pub enum Control {
    /// `<input>` of the given `type`.
    Input(&'static str),
    Select(&'static [(&'static str, &'static str)]),
    Textarea,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_else(PageConfig::load);
    match PageController::with_default_layout(config) {
        Ok(mut controller) => {
            controller.initialise();
            let page = RwSignal::new(controller);
            view! { <LoginView page/> }.into_any()
        }
        Err(e) => {
            log::error!("login page layout rejected: {e}");
            view! { <p class="login-error">"The sign-in page could not be loaded."</p> }.into_any()
        }
    }
}

#[component]
fn LoginView(page: RwSignal<PageController>) -> impl IntoView {
    let escape = window_event_listener(leptos::ev::keyup, move |ev| {
        let key = Key::from_name(&ev.key());
        page.update(|p| p.on_document_keyup(key));
    });
    on_cleanup(move || escape.remove());

    #[cfg(feature = "hydrate")]
    {
        let focus = Memo::new(move |_| {
            page.with(|p| (p.document().focus_seq(), p.document().focused().map(str::to_owned)))
        });
        Effect::new(move || {
            if let (_, Some(id)) = focus.get() {
                focus_element(&id);
            }
        });
    }

    view! {
        <div class="login-page">
            <div id=ids::APP class=class_of(page, ids::APP)>
                <section class="flipper__front">
                    <h1>"Sign in"</h1>
                    <FieldGroup page field=Field::LoginUsername label="Username" control=Control::Input("text")/>
                    <FieldGroup page field=Field::LoginPassword label="Password" control=Control::Input("password")/>
                    <label class="login-keep-in">
                        <input id=ids::LOGIN_KEEP_IN type="checkbox"/>
                        "Keep me logged in"
                    </label>
                    <ActionLink page target=ClickTarget::ForgotPassword/>
                    <ActionButton page target=ClickTarget::LogIn/>
                </section>
                <section class="flipper__back">
                    <h1>"Forgot your password?"</h1>
                    <FieldGroup page field=Field::RecoveryEmail label="E-mail" control=Control::Input("email")/>
                    <ActionButton page target=ClickTarget::SendPassword/>
                    <ActionLink page target=ClickTarget::CancelPasswordRecovery/>
                </section>
            </div>
            <ActionLink page target=ClickTarget::SupportTrigger/>
            <div id=ids::SUPPORT class=class_of(page, ids::SUPPORT)>
                <div class="modal__dialog">
                    <h2>"Contact support"</h2>
                    <FieldGroup page field=Field::SupportName label="Name" control=Control::Input("text")/>
                    <FieldGroup page field=Field::SupportEmail label="E-mail" control=Control::Input("email")/>
                    <FieldGroup page field=Field::SupportType label="Topic" control=Control::Select(SUPPORT_TOPICS)/>
                    <FieldGroup page field=Field::SupportDetails label="Details" control=Control::Textarea/>
                    <ActionButton page target=ClickTarget::SupportSend/>
                    <ActionButton page target=ClickTarget::SupportClose/>
                </div>
            </div>
        </div>
    }
}

/// One validated input group: label, control and message slot.
#[component]
fn FieldGroup(page: RwSignal<PageController>, field: Field, label: &'static str, control: Control) -> impl IntoView {
    let container = field.container_id();
    let control_id = field.control_id();
    let message_id = ids::message_of(container);
    let message = {
        let message_id = message_id.clone();
        move || page.with(|p| p.document().text(&message_id).to_owned())
    };

    let value = move || page.with(|p| p.document().value(control_id).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        page.update(|p| p.set_value(field, &value));
    };
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        page.update(|p| p.set_value(field, &value));
        run(page, move |p| p.on_change(field));
    };
    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        let value = event_target_value(&ev);
        let key = Key::from_name(&ev.key());
        page.update(|p| p.set_value(field, &value));
        run(page, move |p| p.on_keyup(field, key));
    };
    let on_blur = move |_: leptos::ev::FocusEvent| run(page, move |p| p.on_blur(field));

    let input = match control {
        Control::Input(kind) => view! {
            <input
                id=control_id
                type=kind
                class=class_of(page, control_id)
                prop:value=value
                on:input=on_input
                on:change=on_change
                on:keyup=on_keyup
                on:blur=on_blur
            />
        }
        .into_any(),
        Control::Select(options) => view! {
            <select
                id=control_id
                class=class_of(page, control_id)
                on:change=on_change
                on:keyup=on_keyup
                on:blur=on_blur
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Control::Textarea => view! {
            <textarea
                id=control_id
                class=class_of(page, control_id)
                prop:value=value
                on:input=on_input
                on:change=on_change
                on:keyup=on_keyup
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div id=container class=class_of(page, container)>
            <label for=control_id>{label}</label>
            {input}
            <span id=message_id.clone() class=class_of(page, &message_id)>{message}</span>
        </div>
    }
}

#[component]
fn ActionButton(page: RwSignal<PageController>, target: ClickTarget) -> impl IntoView {
    let id = target.element_id();
    view! {
        <button id=id type="button" class=class_of(page, id) on:click=move |_| run(page, move |p| p.on_click(target))>
            {text_of(page, id)}
        </button>
    }
}

#[component]
fn ActionLink(page: RwSignal<PageController>, target: ClickTarget) -> impl IntoView {
    let id = target.element_id();
    view! {
        <a
            id=id
            href="#"
            class=class_of(page, id)
            on:click=move |ev| {
                ev.prevent_default();
                run(page, move |p| p.on_click(target));
            }
        >
            {text_of(page, id)}
        </a>
    }
}

fn class_of(page: RwSignal<PageController>, id: &str) -> impl Fn() -> String + Send + Sync + 'static + use<> {
    let id = id.to_owned();
    move || page.with(|p| p.document().class_attr(&id))
}

fn text_of(page: RwSignal<PageController>, id: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    move || page.with(|p| p.document().text(id).to_owned())
}

/// Apply `handler` to the controller and carry out any submission it accepts.
fn run(page: RwSignal<PageController>, handler: impl FnOnce(&mut PageController) -> Option<Submission>) {
    if let Some(Some(submission)) = page.try_update(handler) {
        dispatch(page, submission);
    }
}

fn dispatch(page: RwSignal<PageController>, submission: Submission) {
    let Submission { flow, dispatch } = submission;
    log::debug!("submitting {flow:?}");
    match dispatch {
        Dispatch::Delay { ms } => simulate(page, flow, ms),
        Dispatch::Post { method, url, payload } => crate::net::request::send_with(
            method,
            url,
            payload,
            move |body| page.update(|p| p.complete(flow, Outcome::Success(Some(body)))),
            move || page.update(|p| p.complete(flow, Outcome::Failure)),
        ),
    }
}

#[cfg(feature = "hydrate")]
fn simulate(page: RwSignal<PageController>, flow: Flow, ms: u32) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
        let outcome = crate::page::submit::simulated_outcome(flow, js_sys::Math::random());
        page.update(|p| p.complete(flow, outcome));
    });
}

#[cfg(not(feature = "hydrate"))]
fn simulate(_page: RwSignal<PageController>, flow: Flow, ms: u32) {
    log::debug!("skipping simulated {flow:?} submission ({ms} ms) outside the browser");
}

#[cfg(feature = "hydrate")]
fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}
