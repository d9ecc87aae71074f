use crate::model::ConnectionState;
use crate::view::connection_notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectionBannerProps {
    pub connection: ConnectionState,
}

#[function_component]
pub fn ConnectionBanner(props: &ConnectionBannerProps) -> Html {
    let Some(text) = connection_notice(props.connection) else {
        return html! {};
    };
    let border = match props.connection {
        ConnectionState::Connecting => "#30363d",
        _ => "#f85149",
    };
    html! {
        <div id="connection" class="connection-banner" style={format!("background:rgba(0,0,0,0.85); border:1px solid {}; border-radius:8px; padding:6px 12px; margin-bottom:8px; font-size:13px;", border)}>
            { text }
        </div>
    }
}
