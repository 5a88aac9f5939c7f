use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: Option<String>,
    placeholder: Option<String>,
    inputmode: Option<String>,
    value: String,
    has_text_right: Option<bool>,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label { label { class: "label", "{label}" } }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if has_text_right.unwrap_or_default() { "has-text-right" },
                    disabled: is_disabled.unwrap_or_default(),
                    r#type: "text",
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

#[component]
pub fn TextareaField(
    label: String,
    placeholder: Option<String>,
    value: String,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                textarea {
                    class: "textarea",
                    rows: 3,
                    disabled: is_disabled.unwrap_or_default(),
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

#[component]
pub fn ButtonSelectField<T: Clone + PartialEq + 'static>(
    label: String,
    options: Vec<ButtonSelectOption<T>>,
    selected: T,
    is_disabled: Option<bool>,
    onclick: EventHandler<(MouseEvent, T)>,
) -> Element {
    let is_disabled = is_disabled.unwrap_or_default();
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "field has-addons",
                for option in options {
                    div {
                        class: "control",
                        button {
                            class: "button",
                            class: if option.value == selected { "is-link" },
                            disabled: is_disabled,
                            onclick: {
                                let value = option.value.clone();
                                move |event| {
                                    let value = value.clone();
                                    onclick((event, value));
                                }
                            },
                            {option.text}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ButtonSelectOption<T> {
    pub text: String,
    pub value: T,
}

#[component]
pub fn ToggleTags<T: Clone + PartialEq + 'static>(
    label: String,
    tags: Vec<ToggleTag<T>>,
    is_disabled: Option<bool>,
    onclick: EventHandler<T>,
) -> Element {
    let is_disabled = is_disabled.unwrap_or_default();
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "tags are-medium",
                for tag in tags {
                    span {
                        class: "tag",
                        class: if !is_disabled { "is-hoverable" },
                        class: if tag.is_active { "is-link" },
                        onclick: {
                            let value = tag.value.clone();
                            move |_| {
                                if !is_disabled {
                                    onclick(value.clone());
                                }
                            }
                        },
                        "{tag.text}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToggleTag<T> {
    pub text: String,
    pub value: T,
    pub is_active: bool,
}
