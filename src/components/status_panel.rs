use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub text: String,
    #[prop_or(false)]
    pub finished: bool,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let color = if props.finished { "#d4af37" } else { "#c9d1d9" };
    html! {
        <div id="status" class="status" style={format!("font-size:18px; font-weight:600; margin:8px 0; color:{};", color)}>
            { props.text.clone() }
        </div>
    }
}
