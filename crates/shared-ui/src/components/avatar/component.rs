use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Round badge showing a user's or membership's initials.
#[component]
pub fn InitialsAvatar(initials: String) -> Element {
    rsx! {
        Avatar {
            AvatarFallback { "{initials}" }
        }
    }
}
