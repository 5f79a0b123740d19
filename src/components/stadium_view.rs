use crate::draw;
use crate::state::messages::{NetworkRequest, NetworkResponse};
use crate::state::view_state::{StateHolder, Subscriber, ViewState};
use crate::ui::html::Node;
use log::debug;

/// Fetches the stadium structure once per instance and renders it.
///
/// The view never talks to the network itself: `on_attach` hands back the single request to
/// issue, and the caller feeds the outcome to `on_response`.
pub struct StadiumView {
    holder: StateHolder,
    attached: bool,
}

impl StadiumView {
    pub fn new(subscriber: Subscriber) -> Self {
        Self { holder: StateHolder::new(subscriber), attached: false }
    }

    /// Lifecycle hook. Fires once per instance; only the first call yields a request.
    pub fn on_attach(&mut self) -> Option<NetworkRequest> {
        if self.attached {
            debug!("stadium view already attached");
            return None;
        }
        self.attached = true;
        self.holder.begin_loading();
        Some(NetworkRequest::LoadStructure)
    }

    pub fn on_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::StructureLoaded { structure } => self.holder.succeed(structure),
            NetworkResponse::Error { message } => self.holder.fail(message),
        }
    }

    pub fn state(&self) -> &ViewState {
        self.holder.state()
    }

    pub fn is_settled(&self) -> bool {
        self.holder.is_settled()
    }

    pub fn render(&self) -> Node {
        draw::draw(self.holder.state())
    }
}
