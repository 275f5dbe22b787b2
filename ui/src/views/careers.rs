//! Careers: the openings list and the job application form. Submitting an
//! application is a labeled stub: the payload is logged and acknowledged,
//! the real submission backend is an external collaborator.

use dioxus::prelude::*;
use serde::Serialize;

use crate::components::PageHero;
use crate::content::jobs::{JobOpening, OPENINGS};
use crate::core::browser;
use crate::core::lang::{use_lang, Lang};
use crate::nav::Page;
use crate::t;

const RESUME_INPUT_ID: &str = "application-resume";

#[derive(Debug, Serialize)]
struct ApplicationPayload {
    job_id: u32,
    full_name: String,
    email: String,
    phone: String,
    address: String,
    experience: String,
    education: String,
    links: String,
    cover_letter: String,
    references: String,
}

#[component]
pub fn CareersView() -> Element {
    let lang = use_lang();
    let selected_job = use_signal(|| Option::<u32>::None);

    let selected = selected_job().and_then(|id| OPENINGS.iter().find(|j| j.id == id));

    rsx! {
        PageHero { page: Page::Careers }

        section { class: "page page-careers",
            if OPENINGS.is_empty() {
                div { class: "page-careers__empty", "data-reveal": "",
                    p { {t!("careers-empty")} }
                }
            } else {
                div { class: "page-careers__list",
                    for job in OPENINGS.iter() {
                        {job_card(job, lang, selected_job)}
                    }
                }
            }

            if let Some(job) = selected {
                ApplicationForm { job: *job, selected_job }
            }
        }
    }
}

fn job_card(
    job: &'static JobOpening,
    lang: Lang,
    mut selected_job: Signal<Option<u32>>,
) -> Element {
    let job_id = job.id;

    rsx! {
        article { class: "job-card", "data-reveal": "",
            div { class: "job-card__header",
                h3 { class: "job-card__title", {job.title.resolve(lang)} }
                span { class: "job-card__department", {job.department} }
            }
            dl { class: "job-card__facts",
                div { class: "fact",
                    dt { {t!("careers-location")} }
                    dd { {job.location.resolve(lang)} }
                }
                div { class: "fact",
                    dt { {t!("careers-type")} }
                    dd { {job.job_type.resolve(lang)} }
                }
                div { class: "fact",
                    dt { {t!("careers-experience")} }
                    dd { {job.experience.resolve(lang)} }
                }
                div { class: "fact",
                    dt { {t!("careers-salary")} }
                    dd { {job.salary} }
                }
            }
            p { class: "job-card__description", {job.description.resolve(lang)} }
            h4 { {t!("careers-requirements")} }
            ul { class: "job-card__requirements",
                for requirement in job.requirements.iter() {
                    li { {requirement.resolve(lang)} }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| selected_job.set(Some(job_id)),
                {t!("careers-apply")}
            }
        }
    }
}

#[component]
fn ApplicationForm(job: JobOpening, selected_job: Signal<Option<u32>>) -> Element {
    let lang = use_lang();
    let mut selected_job = selected_job;

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut education = use_signal(String::new);
    let mut links = use_signal(String::new);
    let mut cover_letter = use_signal(String::new);
    let mut references = use_signal(String::new);

    let job_id = job.id;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = ApplicationPayload {
            job_id,
            full_name: full_name(),
            email: email(),
            phone: phone(),
            address: address(),
            experience: experience(),
            education: education(),
            links: links(),
            cover_letter: cover_letter(),
            references: references(),
        };
        // Stub submission: log and acknowledge, no network call.
        match serde_json::to_string(&payload) {
            Ok(json) => browser::log(&format!("[careers] application submitted: {json}")),
            Err(err) => browser::log(&format!("[careers] failed to serialise application: {err}")),
        }
        browser::acknowledge(&t!("apply-ack"));

        full_name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        address.set(String::new());
        experience.set(String::new());
        education.set(String::new());
        links.set(String::new());
        cover_letter.set(String::new());
        references.set(String::new());
        browser::reset_input(RESUME_INPUT_ID);
        selected_job.set(None);
    };

    rsx! {
        div { class: "application-form",
            div { class: "application-form__header",
                h3 {
                    {t!("apply-heading")}
                    " — "
                    {job.title.resolve(lang)}
                }
                button {
                    r#type: "button",
                    class: "application-form__close",
                    aria_label: t!("apply-cancel"),
                    onclick: move |_| selected_job.set(None),
                    "×"
                }
            }

            form { class: "application-form__body", onsubmit: on_submit,
                label {
                    {t!("form-name")}
                    input {
                        r#type: "text",
                        required: true,
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                }
                label {
                    {t!("form-email")}
                    input {
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    {t!("form-phone")}
                    input {
                        r#type: "tel",
                        required: true,
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                }
                label {
                    {t!("apply-address")}
                    input {
                        r#type: "text",
                        value: "{address}",
                        oninput: move |evt| address.set(evt.value()),
                    }
                }
                label {
                    {t!("apply-experience")}
                    select {
                        value: "{experience}",
                        oninput: move |evt| experience.set(evt.value()),
                        option { value: "", disabled: true, selected: experience().is_empty(), "—" }
                        option { value: "0-2", "0–2" }
                        option { value: "3-5", "3–5" }
                        option { value: "6-10", "6–10" }
                        option { value: "10+", "10+" }
                    }
                }
                label {
                    {t!("apply-education")}
                    input {
                        r#type: "text",
                        value: "{education}",
                        oninput: move |evt| education.set(evt.value()),
                    }
                }
                label {
                    {t!("apply-links")}
                    input {
                        r#type: "url",
                        value: "{links}",
                        oninput: move |evt| links.set(evt.value()),
                    }
                }
                label {
                    {t!("apply-resume")}
                    input {
                        id: RESUME_INPUT_ID,
                        r#type: "file",
                        accept: ".pdf,.doc,.docx",
                    }
                }
                label {
                    {t!("apply-cover-letter")}
                    textarea {
                        rows: 5,
                        value: "{cover_letter}",
                        oninput: move |evt| cover_letter.set(evt.value()),
                    }
                }
                label {
                    {t!("apply-references")}
                    textarea {
                        rows: 3,
                        value: "{references}",
                        oninput: move |evt| references.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary",
                    {t!("careers-submit")}
                }
            }
        }
    }
}
