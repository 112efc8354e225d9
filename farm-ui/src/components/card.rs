//! Card surface and primary button shared by every dashboard section.

use dioxus::prelude::*;

const CARD_STYLE: &str = "padding: 16px; border-radius: 8px; border: 1px solid #e5e7eb; background: #ffffff;";
const BUTTON_STYLE: &str = "padding: 8px 16px; border-radius: 6px; border: none; background: #3b82f6; color: #ffffff; cursor: pointer;";

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Span two grid columns (quick actions card)
    #[props(default = false)]
    pub wide: bool,
    /// Extra inline style appended to the card style
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

/// White bordered box.
#[component]
pub fn Card(props: CardProps) -> Element {
    let span = if props.wide { " grid-column: span 2;" } else { "" };
    let style = format!("{}{} {}", CARD_STYLE, span, props.style);

    rsx! {
        div {
            class: "card",
            style: "{style}",
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

/// Blue primary action button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        button {
            r#type: "button",
            style: BUTTON_STYLE,
            onclick: move |evt| onclick.call(evt),
            {props.children}
        }
    }
}
