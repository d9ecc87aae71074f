use crate::model::Direction;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    /// Empty when nothing is selected.
    pub directions: Vec<Direction>,
    pub on_move: Callback<Direction>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let buttons = props.directions.iter().map(|&dir| {
        let cb = props.on_move.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(dir));
        html! { <button key={dir.label()} class="btn" {onclick}>{ dir.label() }</button> }
    });
    html! {<div id="controls" class="controls" style="display:flex; gap:6px; min-height:36px;">
        { for buttons }
    </div>}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::model::{DIAGONAL_MOVES, ORTHOGONAL_MOVES};
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(directions: &[Direction], on_move: Callback<Direction>) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        yew::Renderer::<ControlsPanel>::with_root_and_props(
            root.clone(),
            ControlsPanelProps {
                directions: directions.to_vec(),
                on_move,
            },
        )
        .render();
        root
    }

    fn labels(root: &web_sys::Element) -> Vec<String> {
        let buttons = root.get_elements_by_class_name("btn");
        (0..buttons.length())
            .filter_map(|i| buttons.item(i))
            .filter_map(|b| b.text_content())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn diagonal_buttons_emit_their_direction() {
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let on_move = {
            let pressed = pressed.clone();
            Callback::from(move |d: Direction| pressed.borrow_mut().push(d))
        };
        let root = mount(DIAGONAL_MOVES, on_move);
        TimeoutFuture::new(0).await;
        assert_eq!(labels(&root), ["FL", "FR", "BL", "BR"]);

        let first = root
            .get_elements_by_class_name("btn")
            .item(0)
            .expect("first button")
            .dyn_into::<web_sys::HtmlElement>()
            .expect("button is an html element");
        first.click();
        assert_eq!(*pressed.borrow(), [Direction::ForwardLeft]);
    }

    #[wasm_bindgen_test]
    async fn orthogonal_and_empty_panels() {
        let root = mount(ORTHOGONAL_MOVES, Callback::noop());
        TimeoutFuture::new(0).await;
        assert_eq!(labels(&root), ["L", "R", "F", "B"]);

        let root = mount(&[], Callback::noop());
        TimeoutFuture::new(0).await;
        assert!(labels(&root).is_empty());
    }
}
