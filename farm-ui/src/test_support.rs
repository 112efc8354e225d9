//! Headless rendering for component tests.

use dioxus::prelude::*;

/// Build the virtual DOM once and render it to HTML.
pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
