use super::{
    board::Board, connection_banner::ConnectionBanner, controls_panel::ControlsPanel,
    history_panel::HistoryPanel, status_panel::StatusPanel,
};
use crate::config::ClientConfig;
use crate::connection::GameConnection;
use crate::error::ClientError;
use crate::model::{ClientAction, ClientState, ConnectionState, Direction};
use crate::protocol::{MoveRequest, ServerMessage};
use crate::util::notify_blocking;
use crate::view::{board_view, status_text};
use tracing::{debug, error, info};
use yew::prelude::*;

/// The one dispatch point for server traffic. Snapshots become reducer
/// actions, rejections go to `notify`, anything else is dropped.
pub fn handle_server_message(
    msg: ServerMessage,
    apply: impl FnOnce(ClientAction),
    notify: impl FnOnce(&str),
) {
    match msg {
        ServerMessage::Init { data } | ServerMessage::Update { data } => {
            debug!(
                current_player = %data.current_player,
                moves = data.move_history.len(),
                "applying snapshot"
            );
            apply(ClientAction::ApplySnapshot(data));
        }
        ServerMessage::Invalid { message } => {
            info!(%message, "move rejected by server");
            notify(&message);
        }
        ServerMessage::Other => debug!("ignoring server message of unknown type"),
    }
}

/// Sends the move for the current selection and returns the action that
/// clears it. The selection is cleared whether or not the send went through.
pub fn submit_move(
    state: &ClientState,
    direction: Direction,
    send: impl FnOnce(&MoveRequest) -> Result<(), ClientError>,
) -> Option<ClientAction> {
    let req = state.move_request(direction)?;
    match send(&req) {
        Ok(()) => info!(player = %req.player, character = %req.character, %direction, "move sent"),
        Err(err) => error!(error = %err, "failed to send move"),
    }
    Some(ClientAction::ClearSelection)
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(ClientState::default);
    let connection = use_mut_ref(|| None::<GameConnection>);

    // Open the socket once; dropping it on unmount closes it
    {
        let state = state.clone();
        let connection = connection.clone();
        use_effect_with((), move |_| {
            let config = ClientConfig::load();
            let on_message = {
                let state = state.clone();
                move |msg: ServerMessage| {
                    handle_server_message(
                        msg,
                        |action| state.dispatch(action),
                        |text| {
                            if let Err(err) = notify_blocking(text) {
                                error!(error = %err, "could not show rejection");
                            }
                        },
                    )
                }
            };
            let on_state = {
                let state = state.clone();
                move |c: ConnectionState| state.dispatch(ClientAction::SetConnection(c))
            };
            match GameConnection::open(&config.server_url, on_message, on_state) {
                Ok(conn) => *connection.borrow_mut() = Some(conn),
                Err(err) => {
                    error!(error = %err, "could not open game server socket");
                    state.dispatch(ClientAction::SetConnection(ConnectionState::Failed));
                }
            }
            move || {
                connection.borrow_mut().take();
            }
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |(row, col): (usize, usize)| {
            state.dispatch(ClientAction::Select { row, col })
        })
    };

    let on_move = {
        let state = state.clone();
        let connection = connection.clone();
        Callback::from(move |direction: Direction| {
            let action = submit_move(&state, direction, |req| {
                match connection.borrow().as_ref() {
                    Some(conn) => conn.send(req).map_err(|err| {
                        debug!(url = conn.url(), "send failed");
                        err
                    }),
                    None => Err(ClientError::NotConnected),
                }
            });
            if let Some(action) = action {
                state.dispatch(action);
            }
        })
    };

    html! {
        <div id="app">
            <ConnectionBanner connection={state.connection} />
            <StatusPanel text={status_text(&state.game)} finished={state.game.winner.is_some()} />
            <div class="play-area">
                <Board board={board_view(&state)} on_select={on_select} />
                <ControlsPanel directions={state.available_moves().to_vec()} on_move={on_move} />
            </div>
            <div class="lists">
                <HistoryPanel title="Move History" list_id="history-list" entries={state.game.move_history.clone()} />
                <HistoryPanel title="Captured" list_id="captured-list" entries={state.game.captured_history.clone()} />
            </div>
        </div>
    }
}
