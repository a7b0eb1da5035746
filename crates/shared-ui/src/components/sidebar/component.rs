use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the navigation drawer is expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides the sidebar state to the layout below it.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-layout",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// Navigation drawer. On narrow viewports a backdrop closes it.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let open = state().open;

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside { class: "sidebar", "data-state": if open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// A titled block of menu entries, e.g. "Maintenance".
#[component]
pub fn SidebarSection(title: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-section",
            div { class: "sidebar-section-title", "{title}" }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// One menu entry. Wrap it in a router `Link` for navigation or give it an
/// `onclick` for actions such as logout.
#[component]
pub fn SidebarItem(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "sidebar-item",
            button {
                r#type: "button",
                class: "sidebar-item-button",
                "data-active": if active { "true" } else { "false" },
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

/// Content column next to the drawer.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

/// Toggle button for the drawer.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            r#type: "button",
            class: "sidebar-trigger",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            {children}
        }
    }
}
