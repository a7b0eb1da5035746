use dioxus::prelude::*;

/// Native `<select>` for filters such as page size and sort field.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] label: String,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                value: value,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
