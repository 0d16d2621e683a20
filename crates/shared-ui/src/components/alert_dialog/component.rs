use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-title", None, false));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-description",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-actions", None, false));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-action", None, false));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

/// A blocking notice with a single acknowledge button.
///
/// Stays open until the user dismisses it; `on_dismiss` fires on the button
/// and on any other close request from the dialog.
#[component]
pub fn AlertNotice(
    open: bool,
    title: String,
    message: String,
    #[props(default = "OK".to_string())] acknowledge_label: String,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_dismiss.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| on_dismiss.call(()),
                        "{acknowledge_label}"
                    }
                }
            }
        }
    }
}
