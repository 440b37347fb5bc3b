//! Contact page: validated message form with a simulated hand-off.

use folio_core::contact::{
    ContactForm, FAILED_MESSAGE, Field, FieldErrors, SENT_MESSAGE, SubmitState,
};
use folio_core::notification::NotificationKind;
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::utils::send_message;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, contact) = ctx
        .content
        .with_value(|c| (c.owner.clone(), c.contact.clone()));

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submit_state = RwSignal::new(SubmitState::Idle);
    let focused = RwSignal::new(None::<Field>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submit_state.get_untracked().is_sending() {
            return;
        }

        let snapshot = form.get_untracked();
        if let Err(found) = snapshot.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        submit_state.set(SubmitState::Sending);

        spawn_local(async move {
            match send_message(snapshot).await {
                Ok(()) => {
                    ctx.notify(NotificationKind::Success, SENT_MESSAGE);
                    let _ = form.try_set(ContactForm::default());
                }
                Err(e) => {
                    warn!("contact message not sent: {e}");
                    ctx.notify(NotificationKind::Error, FAILED_MESSAGE);
                }
            }
            let _ = submit_state.try_set(SubmitState::Idle);
        });
    };

    let subjects = contact
        .subjects
        .into_iter()
        .map(|s| view! { <option value=s.value>{s.label}</option> })
        .collect_view();

    let links = owner
        .links
        .into_iter()
        .map(|link| view! {
            <a class=css::link href=link.url target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
        })
        .collect_view();
    let mailto = format!("mailto:{}", owner.email);

    view! {
        <section class="section page">
            <h1 class="page-title">"Get in Touch"</h1>
            <div class=css::layout>
                <Reveal class=css::info>
                    <p>{contact.intro}</p>
                    <a class=css::email href=mailto>{owner.email}</a>
                    <div class=css::links>{links}</div>
                </Reveal>

                <Reveal index=1>
                    <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                        <FormField field=Field::Name label="Name" errors=errors focused=focused>
                            <input
                                id=Field::Name.id()
                                name=Field::Name.id()
                                type="text"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| edit(form, errors, Field::Name, event_target_value(&ev))
                                on:focus=move |_| focused.set(Some(Field::Name))
                                on:blur=move |_| focused.set(None)
                            />
                        </FormField>
                        <FormField field=Field::Email label="Email" errors=errors focused=focused>
                            <input
                                id=Field::Email.id()
                                name=Field::Email.id()
                                type="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| edit(form, errors, Field::Email, event_target_value(&ev))
                                on:focus=move |_| focused.set(Some(Field::Email))
                                on:blur=move |_| focused.set(None)
                            />
                        </FormField>
                        <FormField field=Field::Subject label="Subject" errors=errors focused=focused>
                            <select
                                id=Field::Subject.id()
                                name=Field::Subject.id()
                                prop:value=move || form.with(|f| f.subject.clone())
                                on:change=move |ev| edit(form, errors, Field::Subject, event_target_value(&ev))
                                on:focus=move |_| focused.set(Some(Field::Subject))
                                on:blur=move |_| focused.set(None)
                            >
                                <option value="">"Select a subject"</option>
                                {subjects}
                            </select>
                        </FormField>
                        <FormField field=Field::Message label="Message" errors=errors focused=focused>
                            <textarea
                                id=Field::Message.id()
                                name=Field::Message.id()
                                rows="6"
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| edit(form, errors, Field::Message, event_target_value(&ev))
                                on:focus=move |_| focused.set(Some(Field::Message))
                                on:blur=move |_| focused.set(None)
                            ></textarea>
                        </FormField>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submit_state.get().is_sending()
                        >
                            <span>{move || submit_state.get().label()}</span>
                            {move || {
                                if submit_state.get().is_sending() {
                                    view! { <span class=css::spinner></span> }.into_any()
                                } else {
                                    view! { <Icon icon=ic::SEND /> }.into_any()
                                }
                            }}
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

/// Stores a field edit and clears that field's error.
fn edit(form: RwSignal<ContactForm>, errors: RwSignal<FieldErrors>, field: Field, value: String) {
    form.update(|f| f.set(field, value));
    if errors.with_untracked(|e| e.get(field).is_some()) {
        errors.update(|e| e.clear(field));
    }
}

/// Label, control and inline error for one form field.
#[component]
fn FormField(
    field: Field,
    label: &'static str,
    errors: RwSignal<FieldErrors>,
    focused: RwSignal<Option<Field>>,
    children: Children,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field));

    view! {
        <div
            class=css::field
            class:focused=move || focused.get() == Some(field)
            class:error=move || error().is_some()
        >
            <label for=field.id()>{label}</label>
            {children()}
            {move || error().map(|e| view! { <span class="error-message">{e.to_string()}</span> })}
        </div>
    }
}
