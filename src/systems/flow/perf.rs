use std::cell::RefCell;

/// Per-thread tallies of what the sweep did since the last `take`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowCounters {
    /// Wet, unsettled cells that ran the directional procedures
    pub cells_scanned: u64,
    /// Wet cells skipped because they were settled
    pub cells_skipped_settled: u64,
    /// Non-zero face flows recorded into the diff buffer
    pub flows: u64,
    /// Cells that crossed the settle threshold
    pub cells_settled: u64,
}

thread_local! {
    static PERF_FLOW: RefCell<FlowCounters> = RefCell::new(FlowCounters::default());
}

pub fn reset_flow_counters() {
    PERF_FLOW.with(|c| *c.borrow_mut() = FlowCounters::default());
}

pub fn take_flow_counters() -> FlowCounters {
    PERF_FLOW.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

#[inline]
pub(super) fn record(update: impl FnOnce(&mut FlowCounters)) {
    PERF_FLOW.with(|c| update(&mut c.borrow_mut()));
}
