use crate::util::numbered_entries;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPanelProps {
    pub title: AttrValue,
    pub list_id: AttrValue,
    pub entries: Vec<String>,
}

// Whole list is rebuilt on each render, numbered from 1
#[function_component]
pub fn HistoryPanel(props: &HistoryPanelProps) -> Html {
    html! {<div class="history-panel" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px;">
        <h3 style="margin:0 0 6px 0; font-size:15px;">{ props.title.clone() }</h3>
        <ul id={props.list_id.clone()} style="margin:0; padding-left:4px; list-style:none; font-size:13px;">
            { for numbered_entries(&props.entries).into_iter().map(|line| html!{ <li>{ line }</li> }) }
        </ul>
    </div>}
}
