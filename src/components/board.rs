use crate::view::{BoardView, CellView};
use yew::prelude::*;

const CELL_PX: u32 = 60;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub board: BoardView,
    pub on_select: Callback<(usize, usize)>,
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let style = format!(
        "display:grid; grid-template-columns:repeat({}, {}px); gap:2px;",
        props.board.columns.max(1),
        CELL_PX
    );
    html! {
        <div id="board" class="board" {style}>
            { for props.board.cells().map(|cell| render_cell(cell, &props.on_select)) }
        </div>
    }
}

fn render_cell(cell: &CellView, on_select: &Callback<(usize, usize)>) -> Html {
    // no handler at all on cells the mover does not own
    let onclick = cell.clickable.then(|| {
        let cb = on_select.clone();
        let pos = (cell.row, cell.col);
        Callback::from(move |_: MouseEvent| cb.emit(pos))
    });
    html! {
        <div
            key={format!("{}-{}", cell.row, cell.col)}
            class={classes!(cell.classes())}
            data-row={cell.row.to_string()}
            data-col={cell.col.to_string()}
            style={cell.placement_style()}
            {onclick}
        >
            { cell.label().to_string() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::model::tests::sample_game;
    use crate::model::{ClientAction, ClientState};
    use crate::view::board_view;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use yew::Reducible;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(board: BoardView, on_select: Callback<(usize, usize)>) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        yew::Renderer::<Board>::with_root_and_props(root.clone(), BoardProps { board, on_select })
            .render();
        root
    }

    #[wasm_bindgen_test]
    async fn only_own_pieces_take_clicks() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let on_select = {
            let clicked = clicked.clone();
            Callback::from(move |pos: (usize, usize)| clicked.borrow_mut().push(pos))
        };
        let state = ClientState {
            game: sample_game(),
            ..Default::default()
        };
        let root = mount(board_view(&state), on_select);
        TimeoutFuture::new(0).await;

        let cells = root.get_elements_by_class_name("cell");
        assert_eq!(cells.length(), 4);
        for i in 0..cells.length() {
            cells
                .item(i)
                .expect("cell")
                .dyn_into::<web_sys::HtmlElement>()
                .expect("cell is an html element")
                .click();
        }
        assert_eq!(*clicked.borrow(), [(0, 0)]);
    }

    #[wasm_bindgen_test]
    async fn selected_cell_is_highlighted() {
        let state = Rc::new(ClientState {
            game: sample_game(),
            ..Default::default()
        })
        .reduce(ClientAction::Select { row: 0, col: 0 });
        let root = mount(board_view(&state), Callback::noop());
        TimeoutFuture::new(0).await;

        let selected = root.get_elements_by_class_name("selected");
        assert_eq!(selected.length(), 1);
        let cell = selected.item(0).expect("selected cell");
        assert_eq!(cell.get_attribute("data-row").as_deref(), Some("0"));
        assert_eq!(cell.text_content().as_deref(), Some("H2"));
        assert!(cell.class_list().contains("P1"));
        assert_eq!(
            cell.get_attribute("style").as_deref(),
            Some("grid-row:1; grid-column:1;")
        );
    }
}
