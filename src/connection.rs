//! Single WebSocket to the game server, built on web-sys.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::error::ClientError;
use crate::model::ConnectionState;
use crate::protocol::{MoveRequest, ServerMessage, decode_server_message, encode_move};

/// Event handlers must stay alive as long as the socket can fire them.
struct SocketClosures {
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onopen: Closure<dyn FnMut(Event)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

pub struct GameConnection {
    url: String,
    ws: WebSocket,
    _closures: SocketClosures,
}

impl GameConnection {
    /// Opens the socket. Decoded messages go to `on_message` in arrival order;
    /// frames that fail to decode are logged and dropped.
    pub fn open<M, S>(url: &str, on_message: M, on_state: S) -> Result<Self, ClientError>
    where
        M: FnMut(ServerMessage) + 'static,
        S: FnMut(ConnectionState) + 'static,
    {
        let ws = WebSocket::new(url).map_err(|e| ClientError::Connect {
            url: url.to_string(),
            reason: format!("{e:?}"),
        })?;

        let mut on_message = on_message;
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |e: MessageEvent| {
            let Ok(text) = e.data().dyn_into::<js_sys::JsString>() else {
                warn!("ignoring non-text frame from server");
                return;
            };
            match decode_server_message(&String::from(text)) {
                Ok(msg) => on_message(msg),
                Err(err) => warn!(error = %err, "dropping malformed server message"),
            }
        });
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let on_state = Rc::new(RefCell::new(on_state));
        let errored = Rc::new(Cell::new(false));

        let cb = Rc::clone(&on_state);
        let open_url = url.to_string();
        let onopen = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            info!(url = %open_url, "connected to game server");
            (&mut *cb.borrow_mut())(ConnectionState::Open);
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));

        let cb = Rc::clone(&on_state);
        let close_errored = Rc::clone(&errored);
        let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |e: CloseEvent| {
            info!(code = e.code(), reason = %e.reason(), "game server connection closed");
            (&mut *cb.borrow_mut())(state_after_close(close_errored.get()));
        });
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        let cb = Rc::clone(&on_state);
        let onerror = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            error!("game server socket error");
            errored.set(true);
            (&mut *cb.borrow_mut())(ConnectionState::Failed);
        });
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        debug!(url, "opening game server socket");
        Ok(Self {
            url: url.to_string(),
            ws,
            _closures: SocketClosures {
                _onmessage: onmessage,
                _onopen: onopen,
                _onclose: onclose,
                _onerror: onerror,
            },
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fire-and-forget; the outcome arrives later as `update` or `invalid`.
    pub fn send(&self, req: &MoveRequest) -> Result<(), ClientError> {
        if self.ws.ready_state() != WebSocket::OPEN {
            return Err(ClientError::NotConnected);
        }
        let json = encode_move(req)?;
        self.ws
            .send_with_str(&json)
            .map_err(|e| ClientError::Send(format!("{e:?}")))
    }
}

/// Browsers fire `close` right after `error`; the error must stay visible.
fn state_after_close(errored: bool) -> ConnectionState {
    if errored {
        ConnectionState::Failed
    } else {
        ConnectionState::Closed
    }
}

impl Drop for GameConnection {
    fn drop(&mut self) {
        self.ws.set_onmessage(None);
        self.ws.set_onopen(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
        let _ = self.ws.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_after_error_stays_failed() {
        assert_eq!(state_after_close(true), ConnectionState::Failed);
        assert_eq!(state_after_close(false), ConnectionState::Closed);
    }
}
