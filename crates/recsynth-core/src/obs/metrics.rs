use crate::model::MethodKind;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, thread-local counters for synthesis work.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) records: BTreeMap<String, RecordCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub records_started: u64,
    pub records_finished: u64,
    pub records_failed: u64,

    pub components: u64,
    pub copies: u64,
    pub to_strings: u64,
    pub hash_codes: u64,
    pub equals: u64,
}

impl EventOps {
    pub(crate) const fn method_slot(&mut self, kind: MethodKind) -> &mut u64 {
        match kind {
            MethodKind::Component => &mut self.components,
            MethodKind::Copy => &mut self.copies,
            MethodKind::ToString => &mut self.to_strings,
            MethodKind::HashCode => &mut self.hash_codes,
            MethodKind::Equals => &mut self.equals,
        }
    }
}

///
/// RecordCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordCounters {
    pub runs: u64,
    pub methods: u64,
    pub failures: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub records: BTreeMap<String, RecordCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|cell| f(&mut cell.borrow_mut()))
}

pub(crate) fn report() -> EventReport {
    EVENT_STATE.with(|cell| {
        let state = cell.borrow();

        EventReport {
            ops: state.ops.clone(),
            records: state.records.clone(),
        }
    })
}

pub(crate) fn reset() {
    with_state_mut(|m| *m = EventState::default());
}
