use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Modal yes/no confirmation built on the alert-dialog primitive.
///
/// `open` is owned by the caller; both buttons close the dialog and only
/// the confirm button fires `on_confirm`.
#[component]
pub fn ConfirmDialog(
    open: Signal<bool>,
    title: String,
    description: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ConfirmRoot {
            open: open(),
            on_open_change: move |value: bool| open.set(value),
            ConfirmContent {
                prim::AlertDialogTitle { class: "confirm-dialog-title", "{title}" }
                prim::AlertDialogDescription { class: "confirm-dialog-description", "{description}" }
                prim::AlertDialogActions { class: "confirm-dialog-actions",
                    prim::AlertDialogCancel { class: "confirm-dialog-cancel", "Cancel" }
                    prim::AlertDialogAction {
                        class: "confirm-dialog-action",
                        on_click: move |_: MouseEvent| {
                            open.set(false);
                            on_confirm.call(());
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn ConfirmRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "confirm-dialog-overlay",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
fn ConfirmContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("confirm-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}
