//! Shared handler state

use std::sync::Arc;

use crate::application::{CallResponseService, CallStatusDispatcher, OutboundCallService};
use crate::domain::call_record::CallRecordStore;
use crate::domain::telephony::{Caller, Notifier};

/// Application state
///
/// Holds only stateless services around injected capabilities; cloning is
/// cheap and requests never coordinate through it.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<CallStatusDispatcher>,
    pub responses: Arc<CallResponseService>,
    pub outbound_calls: Arc<OutboundCallService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CallRecordStore>,
        notifier: Arc<dyn Notifier>,
        caller: Arc<dyn Caller>,
    ) -> Self {
        Self {
            dispatcher: Arc::new(CallStatusDispatcher::new(notifier)),
            responses: Arc::new(CallResponseService::new(store)),
            outbound_calls: Arc::new(OutboundCallService::new(caller)),
        }
    }
}
