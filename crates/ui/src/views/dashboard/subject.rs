use dioxus::prelude::*;
use portal_core::model::curriculum::{SECTIONS, assignment_key};
use portal_core::model::{AssignmentKey, NoteKey, Section, SectionItem, SectionKind};
use services::assignment_service::submitted_caption;
use services::{AssistantAction, CancellationToken, SubmissionControls};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AssistantState, SubjectHeaderVm, assistant_state_from_result, map_section_tabs};

/// `initial_tab` indexes `SECTIONS`; the page opens on Modules by default.
#[component]
pub fn SubjectDetailPage(
    subject: String,
    on_back: EventHandler<()>,
    #[props(default)] initial_tab: usize,
) -> Element {
    let header = SubjectHeaderVm::for_subject(&subject);
    let mut active_tab = use_signal(|| initial_tab);
    let tabs = map_section_tabs(active_tab());
    let section: &'static Section = SECTIONS.get(active_tab()).unwrap_or(&SECTIONS[0]);

    rsx! {
        div { class: "page subject-detail",
            h2 { class: "subject-title", style: "background-color: {header.accent}", "{header.title}" }
            div { class: "tabs",
                for tab in tabs {
                    button {
                        key: "{tab.index}",
                        class: if tab.active { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| active_tab.set(tab.index),
                        "{tab.title}"
                    }
                }
            }
            div { class: "section-items",
                for item in section.items {
                    ItemCard {
                        key: "{subject}-{section.title}-{item.title}",
                        subject: subject.clone(),
                        section,
                        item,
                    }
                }
            }
            button {
                class: "back",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back to Class"
            }
        }
    }
}

#[component]
fn ItemCard(subject: String, section: &'static Section, item: &'static SectionItem) -> Element {
    let (start, end) = section.gradient;
    let note_key = section.note_key(item);
    let submission_key = (section.kind == SectionKind::Assignments)
        .then(|| assignment_key(&subject, item));

    rsx! {
        article {
            class: "item-card",
            style: "border-image: linear-gradient(90deg, {start}, {end}) 1",
            h4 { "{item.title}" }
            p { class: "item-body", "{item.body}" }
            if section.kind == SectionKind::Modules {
                AssistantPanel { text: item.body }
            }
            NoteEditor { note_key }
            if let Some(submission_key) = submission_key {
                SubmissionRow { submission_key }
            }
        }
    }
}

#[component]
fn NoteEditor(note_key: NoteKey) -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();
    let mut text = use_signal(String::new);
    let mut save_error = use_signal(|| None::<ViewError>);

    let resource = {
        let notes = notes.clone();
        let note_key = note_key.clone();
        use_resource(move || {
            let notes = notes.clone();
            let note_key = note_key.clone();
            async move { notes.note(&note_key).await.map_err(ViewError::from) }
        })
    };

    use_effect(move || {
        if let Some(Ok(stored)) = resource.value().read().as_ref() {
            text.set(stored.clone());
        }
    });

    let on_input = move |evt: FormEvent| {
        let value = evt.value();
        text.set(value.clone());
        let notes = notes.clone();
        let note_key = note_key.clone();
        spawn(async move {
            match notes.save_note(&note_key, &value).await {
                Ok(()) => save_error.set(None),
                Err(err) => save_error.set(Some(ViewError::from(err))),
            }
        });
    };

    rsx! {
        textarea {
            class: "note",
            placeholder: "Private comment...",
            value: "{text}",
            oninput: on_input,
        }
        if let Some(err) = save_error() {
            p { class: "save-hint", "{err.message()}" }
        }
    }
}

#[component]
fn SubmissionRow(submission_key: AssignmentKey) -> Element {
    let ctx = use_context::<AppContext>();
    let assignments = ctx.assignments();
    let picker = ctx.file_picker();
    let opener = ctx.file_opener();
    let mut choosing = use_signal(|| false);
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = {
        let assignments = assignments.clone();
        let submission_key = submission_key.clone();
        use_resource(move || {
            let assignments = assignments.clone();
            let submission_key = submission_key.clone();
            async move {
                assignments
                    .submission(&submission_key)
                    .await
                    .map_err(ViewError::from)
            }
        })
    };
    let submitted = match view_state_from_resource(&resource) {
        ViewState::Ready(path) => path,
        _ => None,
    };
    let controls = SubmissionControls::for_state(submitted.is_some());

    let on_upload = {
        let assignments = assignments.clone();
        let submission_key = submission_key.clone();
        move |_: MouseEvent| {
            let Some(path) = picker.pick_file("Upload Assignment") else {
                return;
            };
            let path = path.to_string_lossy().into_owned();
            let assignments = assignments.clone();
            let submission_key = submission_key.clone();
            spawn(async move {
                let result = assignments.submit(&submission_key, &path).await;
                action_error.set(result.err().map(ViewError::from));
                resource.restart();
            });
        }
    };

    let on_unsubmit = move |_: MouseEvent| {
        let assignments = assignments.clone();
        let submission_key = submission_key.clone();
        choosing.set(false);
        spawn(async move {
            let result = assignments.unsubmit(&submission_key).await;
            action_error.set(result.err().map(ViewError::from));
            resource.restart();
        });
    };

    rsx! {
        div { class: "submission",
            button {
                class: "upload",
                r#type: "button",
                disabled: !controls.upload_enabled,
                onclick: on_upload,
                "{controls.upload_label}"
            }
            button {
                class: "view-work",
                r#type: "button",
                disabled: !controls.view_enabled,
                onclick: move |_| choosing.set(true),
                "View Your Work"
            }
            if let Some(err) = action_error() {
                p { class: "save-hint", "{err.message()}" }
            }
            if let Some(path) = submitted.filter(|_| choosing()) {
                div { class: "submission-dialog",
                    p { "{submitted_caption(&path)}" }
                    p { "What do you want to do?" }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            opener.open_path(&path);
                            choosing.set(false);
                        },
                        "Open File"
                    }
                    button { class: "danger", r#type: "button", onclick: on_unsubmit, "Unsubmit" }
                    button {
                        r#type: "button",
                        onclick: move |_| choosing.set(false),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn AssistantPanel(text: &'static str) -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();
    let enabled = assistant.enabled();
    let mut open = use_signal(|| false);
    let mut selection = use_signal(|| text.to_string());
    let mut action = use_signal(|| AssistantAction::Explain);
    let mut state = use_signal(AssistantState::default);
    let mut in_flight = use_signal(|| None::<CancellationToken>);
    let mut generation = use_signal(|| 0u64);

    let on_ask = move |_: MouseEvent| {
        let prompt_text = selection();
        if prompt_text.trim().is_empty() {
            return;
        }
        let token = CancellationToken::new();
        let request = generation() + 1;
        generation.set(request);
        in_flight.set(Some(token.clone()));
        state.set(AssistantState::Loading);
        let assistant = assistant.clone();
        let chosen = action();
        spawn(async move {
            let result = assistant.run(chosen, &prompt_text, &token).await;
            // A newer request or a cancel owns the panel now.
            if generation() == request {
                state.set(assistant_state_from_result(result));
                in_flight.set(None);
            }
        });
    };

    let on_cancel = move |_: MouseEvent| {
        if let Some(token) = in_flight.write().take() {
            token.cancel();
        }
        generation.set(generation() + 1);
        state.set(AssistantState::Idle);
    };

    let current = state();
    rsx! {
        div { class: "assistant",
            button {
                class: "ask-ai",
                r#type: "button",
                disabled: !enabled,
                title: if !enabled { "Set STUDYSYNC_AI_API_KEY to enable the assistant." },
                onclick: move |_| open.toggle(),
                "Ask AI"
            }
            if open() {
                div { class: "assistant-panel",
                    textarea {
                        class: "selection",
                        value: "{selection}",
                        oninput: move |evt: FormEvent| selection.set(evt.value()),
                    }
                    select {
                        value: "{action}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            if let Some(found) = AssistantAction::ALL
                                .into_iter()
                                .find(|candidate| candidate.label() == value)
                            {
                                action.set(found);
                            }
                        },
                        for choice in AssistantAction::ALL {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                    if current.is_loading() {
                        p { class: "assistant-wait", "Please wait while AI is processing..." }
                        button { r#type: "button", onclick: on_cancel, "Cancel" }
                    } else {
                        button {
                            class: "primary",
                            r#type: "button",
                            disabled: selection.read().trim().is_empty(),
                            onclick: on_ask,
                            "Send"
                        }
                    }
                    match current {
                        AssistantState::Ready(reply) => rsx! {
                            pre { class: "assistant-reply", "{reply}" }
                        },
                        AssistantState::Failed(message) => rsx! {
                            p { class: "form-error", "{message}" }
                        },
                        AssistantState::Idle | AssistantState::Loading => rsx! {},
                    }
                }
            }
        }
    }
}
