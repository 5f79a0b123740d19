use log::{debug, warn};
use stadium_api::StadiumStructure;

/// The three cells the view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    /// Message of the failure that settled the view, shown verbatim.
    pub error: Option<String>,
    pub data: Option<StadiumStructure>,
}

pub type Subscriber = Box<dyn FnMut(&ViewState) + Send>;

/// Owns the view state and notifies one render subscriber on every transition.
pub struct StateHolder {
    state: ViewState,
    settled: bool,
    subscriber: Subscriber,
}

impl StateHolder {
    pub fn new(subscriber: Subscriber) -> Self {
        Self { state: ViewState::default(), settled: false, subscriber }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// True once a fetch has completed or failed.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// mount → loading
    pub fn begin_loading(&mut self) {
        self.state = ViewState { loading: true, error: None, data: None };
        debug!("view state: loading");
        self.notify();
    }

    /// loading → data. `None` settles on the "no data" branch.
    pub fn succeed(&mut self, data: Option<StadiumStructure>) {
        if !self.state.loading {
            warn!("ignoring structure delivered while not loading");
            return;
        }
        self.state.data = data;
        self.state.loading = false;
        self.settled = true;
        debug!("view state: loaded (has data: {})", self.state.data.is_some());
        self.notify();
    }

    /// loading → error
    pub fn fail(&mut self, message: String) {
        if !self.state.loading {
            warn!("ignoring failure delivered while not loading: {message}");
            return;
        }
        self.state.error = Some(message);
        self.state.loading = false;
        self.settled = true;
        debug!("view state: failed");
        self.notify();
    }

    fn notify(&mut self) {
        (self.subscriber)(&self.state);
    }
}
