use crate::app::SliceTooltip;
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub is_loading: RwSignal<bool>,
    pub bill_count: RwSignal<usize>,
    pub mp_count: RwSignal<usize>,
    pub party_count: RwSignal<usize>,
    pub logs: RwSignal<Vec<String>>,
    pub log_paused: RwSignal<bool>,
    pub tooltip_data: RwSignal<Option<SliceTooltip>>,
    pub tooltip_visible: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        is_loading: create_rw_signal(true),
        bill_count: create_rw_signal(0),
        mp_count: create_rw_signal(0),
        party_count: create_rw_signal(0),
        logs: create_rw_signal(Vec::new()),
        log_paused: create_rw_signal(false),
        tooltip_data: create_rw_signal(None),
        tooltip_visible: create_rw_signal(false),
    })
}

global_signals! {
    pub is_loading_signal => is_loading: bool,
    pub bill_count_signal => bill_count: usize,
    pub mp_count_signal => mp_count: usize,
    pub party_count_signal => party_count: usize,
    pub logs_signal => logs: Vec<String>,
    pub log_paused_signal => log_paused: bool,
    pub tooltip_data_signal => tooltip_data: Option<SliceTooltip>,
    pub tooltip_visible_signal => tooltip_visible: bool,
}
