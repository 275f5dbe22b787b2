//! Contact page: office details plus the contact form. Submission is a
//! labeled stub: acknowledgment dialog, fields cleared, no network call.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::core::browser;
use crate::core::lang::{bi, use_lang};
use crate::nav::Page;
use crate::t;

#[component]
pub fn ContactView() -> Element {
    let lang = use_lang();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut message = use_signal(String::new);

    let office_heading = bi("Head office", "المكتب الرئيسي");
    let office_lines = [
        bi("P.O. Box 941082, Amman 11194, Jordan", "ص.ب. ٩٤١٠٨٢، عمان ١١١٩٤، الأردن"),
        bi("+962 6 580 0000", "+٩٦٢ ٦ ٥٨٠ ٠٠٠٠"),
        bi("info@shamslevant.example", "info@shamslevant.example"),
    ];

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Stub submission: acknowledge and clear; the backend is external.
        browser::acknowledge(&t!("contact-ack"));
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        department.set(String::new());
        message.set(String::new());
    };

    rsx! {
        PageHero { page: Page::Contact }

        section { class: "page page-contact",
            div { class: "page-contact__layout",
                aside { class: "page-contact__info", "data-reveal": "",
                    h3 { {office_heading.resolve(lang)} }
                    ul {
                        for line in office_lines.iter() {
                            li { {line.resolve(lang)} }
                        }
                    }
                }

                form { class: "page-contact__form", "data-reveal": "", onsubmit: on_submit,
                    label {
                        {t!("form-name")}
                        input {
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
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
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    label {
                        {t!("form-department")}
                        select {
                            required: true,
                            value: "{department}",
                            oninput: move |evt| department.set(evt.value()),
                            option { value: "", disabled: true, selected: department().is_empty(), "—" }
                            option { value: "general", {t!("contact-dept-general")} }
                            option { value: "procurement", {t!("contact-dept-procurement")} }
                            option { value: "media", {t!("contact-dept-media")} }
                            option { value: "careers", {t!("contact-dept-careers")} }
                        }
                    }
                    label {
                        {t!("form-message")}
                        textarea {
                            rows: 6,
                            required: true,
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        {t!("form-submit")}
                    }
                }
            }
        }
    }
}
