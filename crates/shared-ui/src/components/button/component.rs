use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn data_style(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a busy label and blocks clicks while a request is in flight.
    #[props(default = false)]
    pub busy: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "btn", None, false),
        Attribute::new("data-style", props.variant.data_style(), None, false),
        Attribute::new("aria-busy", if props.busy { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let blocked = props.disabled || props.busy;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: blocked,
            onclick: move |evt| {
                if blocked {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.busy {
                span { class: "btn-spinner", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}
