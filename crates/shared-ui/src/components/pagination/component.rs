use dioxus::prelude::*;
use shared_types::PageControls;

use crate::components::button::{Button, ButtonVariant};

/// Page-number pagination with Previous/Next buttons.
///
/// Both buttons are always rendered; the disabled state comes from
/// `controls`, so an empty listing shows "Page 1 of 0" with both disabled.
#[component]
pub fn Pagination(
    controls: PageControls,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let PageControls {
        page, total_pages, ..
    } = controls;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: controls.prev_disabled(),
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            span { class: "pagination-info", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: controls.next_disabled(),
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
