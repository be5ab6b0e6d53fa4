use leptos::html::Canvas;
use leptos::*;

use crate::application::{DashboardSnapshot, LoadDashboardUseCase, LoadState};
use crate::domain::chart::{PieLayoutService, PieSlice};
use crate::domain::legislature::{Bill, MemberOfParliament};
use crate::domain::logging::{LogComponent, LogEntry, Logger, get_logger, get_time_provider};
use crate::global_state::{
    bill_count_signal, is_loading_signal, log_paused_signal, logs_signal, mp_count_signal,
    party_count_signal, tooltip_data_signal, tooltip_visible_signal,
};
use crate::infrastructure::http::ParliamentRestClient;
use crate::infrastructure::rendering::PieChartRenderer;
use crate::infrastructure::services::ConsoleLogger;
use crate::time_utils::format_introduced_date;

const PARTY_CANVAS_ID: &str = "party-chart";
const CHART_SIZE: u32 = 420;

/// 🎯 Данные для tooltip над сегментом диаграммы
#[derive(Clone, Debug, PartialEq)]
pub struct SliceTooltip {
    pub party: String,
    pub count: usize,
    pub percent: f64,
    pub x: f64,
    pub y: f64,
    pub formatted_text: String,
}

impl SliceTooltip {
    pub fn new(slice: &PieSlice, x: f64, y: f64) -> Self {
        let formatted_text =
            format!("{}\n{} seats ({:.1}%)", slice.label, slice.count, slice.percent());

        Self {
            party: slice.label.clone(),
            count: slice.count,
            percent: slice.percent(),
            x,
            y,
            formatted_text,
        }
    }
}

/// 🌉 Bridge logger: feeds the on-page debug console and delegates to the
/// browser console
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        let formatted =
            format!("[{}] {} {}: {}", timestamp, entry.level, entry.component, entry.message);

        if !log_paused_signal().get_untracked() {
            logs_signal().update(|log_lines| {
                log_lines.push(formatted);
                // Ограничиваем до 100 логов
                while log_lines.len() > 100 {
                    log_lines.remove(0);
                }
            });
        }

        self.console.log(entry);
    }
}

/// 🍁 Главный компонент Parliament Dashboard на Leptos
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .parliament-dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #2b1216 0%, #5c1f27 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .stat-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .stat-item {
                text-align: center;
            }

            .stat-value {
                font-size: 24px;
                font-weight: 700;
                color: #f1b2b8;
                font-family: 'Courier New', monospace;
            }

            .stat-label {
                font-size: 12px;
                color: #c9a0a4;
                margin-top: 5px;
            }

            .loading {
                text-align: center;
                font-size: 18px;
                padding: 60px 0;
            }

            .load-error {
                text-align: center;
                background: rgba(0, 0, 0, 0.4);
                border: 1px solid #a33;
                border-radius: 10px;
                padding: 30px;
            }

            .chart-section {
                display: flex;
                justify-content: center;
                align-items: flex-start;
                gap: 30px;
                margin-bottom: 30px;
                flex-wrap: wrap;
            }

            .chart-wrapper {
                position: relative;
                display: inline-block;
            }

            .tooltip {
                position: absolute;
                background: rgba(0, 0, 0, 0.9);
                color: white;
                padding: 8px 12px;
                border-radius: 6px;
                font-size: 12px;
                font-family: 'Courier New', monospace;
                white-space: pre-line;
                pointer-events: none;
                z-index: 1000;
                border: 1px solid #73454a;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                line-height: 1.4;
                transform: translate(10px, -100%);
            }

            .tally-list {
                background: rgba(0, 0, 0, 0.3);
                border-radius: 10px;
                padding: 15px 20px;
                min-width: 260px;
            }

            .tally-line {
                display: flex;
                align-items: center;
                gap: 10px;
                margin: 6px 0;
                font-size: 14px;
            }

            .tally-swatch {
                display: inline-block;
                width: 14px;
                height: 14px;
                border-radius: 3px;
            }

            .tally-party {
                flex: 1;
            }

            .section-title {
                margin: 25px 0 10px;
            }

            .bills-list, .mp-list {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 15px;
            }

            .bill-item, .mp-item {
                background: rgba(255, 255, 255, 0.08);
                border: 1px solid rgba(255, 255, 255, 0.15);
                border-radius: 10px;
                padding: 15px;
            }

            .bill-item h3, .mp-item h3 {
                margin: 0 0 8px;
                font-size: 16px;
            }

            .bill-item p, .mp-item p {
                margin: 4px 0;
                font-size: 13px;
                color: #e4cfd1;
            }

            .bill-item a, .mp-item a {
                color: #f1b2b8;
            }

            .mp-item img {
                width: 72px;
                height: 90px;
                object-fit: cover;
                border-radius: 6px;
                float: right;
                margin-left: 10px;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #73454a;
                margin-top: 30px;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #f1b2b8;
                font-weight: bold;
            }

            .debug-btn {
                background: #73454a;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-btn:hover {
                background: #83555a;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }
            "#}
        </style>
        <div class="parliament-dashboard">
            <Header />
            <Dashboard />
            <DebugConsole />
        </div>
    }
}

/// 📊 Заголовок со счетчиками коллекций
#[component]
fn Header() -> impl IntoView {
    let is_loading = is_loading_signal();
    let bill_count = bill_count_signal();
    let mp_count = mp_count_signal();
    let party_count = party_count_signal();

    view! {
        <div class="header">
            <h1>"🍁 Parliament Dashboard"</h1>
            <p>"Bills and Members of Parliament • Leptos + Canvas"</p>

            <div class="stat-info">
                <div class="stat-item">
                    <div class="stat-value">{move || bill_count.get().to_string()}</div>
                    <div class="stat-label">"Bills"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value">{move || mp_count.get().to_string()}</div>
                    <div class="stat-label">"MPs"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value">{move || party_count.get().to_string()}</div>
                    <div class="stat-label">"Parties"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value">
                        {move || if is_loading.get() { "⏳ LOADING" } else { "🟢 SETTLED" }}
                    </div>
                    <div class="stat-label">"Status"</div>
                </div>
            </div>
        </div>
    }
}

/// 🗂️ Загрузка данных и выбор представления по состоянию
#[component]
fn Dashboard() -> impl IntoView {
    let (state, set_state) = create_signal(LoadState::Loading);

    // Single load per view lifetime: both fetches joined, one transition
    spawn_local(async move {
        let use_case = LoadDashboardUseCase::new(ParliamentRestClient::new());
        let settled = use_case.settle().await;

        if let LoadState::Ready(snapshot) = &settled {
            bill_count_signal().set(snapshot.bills.len());
            mp_count_signal().set(snapshot.mps.len());
            party_count_signal().set(snapshot.tally.party_count());
        }
        is_loading_signal().set(false);

        set_state.set(settled);
    });

    view! {
        {move || match state.get() {
            LoadState::Loading => {
                view! { <div class="loading">"Loading parliamentary data..."</div> }.into_view()
            }
            LoadState::Failed(message) => {
                view! {
                    <div class="load-error">
                        <h1>"Error: " {message}</h1>
                        <p>"Could not load parliamentary data. Please ensure the data API is running on http://localhost:1500"</p>
                    </div>
                }
                .into_view()
            }
            LoadState::Ready(snapshot) => view! { <ReadyView snapshot/> }.into_view(),
        }}
    }
}

/// Композиция успешного состояния: диаграмма + списки
#[component]
fn ReadyView(snapshot: DashboardSnapshot) -> impl IntoView {
    let slices = PieLayoutService::new().layout(&snapshot.tally);

    view! {
        <div class="chart-section">
            <ChartContainer slices=slices.clone()/>
            <TallyList slices=slices/>
        </div>
        <h2 class="section-title">"📜 Bills"</h2>
        <BillList bills=snapshot.bills/>
        <h2 class="section-title">"🏛️ Members of Parliament"</h2>
        <MpList mps=snapshot.mps/>
    }
}

/// 🥧 Контейнер круговой диаграммы с canvas-рендерингом
#[component]
fn ChartContainer(slices: Vec<PieSlice>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    // Рендерим после монтирования canvas
    let slices_for_render = slices.clone();
    create_effect(move |_| {
        if canvas_ref.get().is_some() {
            let renderer = PieChartRenderer::new(PARTY_CANVAS_ID, CHART_SIZE, CHART_SIZE);
            if let Err(e) = renderer.render(&slices_for_render) {
                get_logger().error(
                    LogComponent::Presentation("ChartContainer"),
                    &format!("❌ Chart render failed: {:?}", e),
                );
            }
        }
    });

    // 🎯 Mouse events для tooltip
    let slices_for_hover = slices.clone();
    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let renderer = PieChartRenderer::new(PARTY_CANVAS_ID, CHART_SIZE, CHART_SIZE);
        let (cx, cy) = renderer.center();
        let mouse_x = event.offset_x() as f64;
        let mouse_y = event.offset_y() as f64;
        let dx = mouse_x - cx;
        let dy = mouse_y - cy;

        if (dx * dx + dy * dy).sqrt() <= renderer.radius() {
            let angle = dy.atan2(dx);
            if let Some(slice) = PieLayoutService::new().slice_at(&slices_for_hover, angle) {
                tooltip_data_signal().set(Some(SliceTooltip::new(slice, mouse_x, mouse_y)));
                tooltip_visible_signal().set(true);
                return;
            }
        }

        tooltip_visible_signal().set(false);
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| {
        tooltip_visible_signal().set(false);
    };

    view! {
        <div class="chart-wrapper">
            <canvas
                id=PARTY_CANVAS_ID
                node_ref=canvas_ref
                width=CHART_SIZE
                height=CHART_SIZE
                style="border: 2px solid #73454a; border-radius: 10px; background: #2c3e50; cursor: crosshair;"
                on:mousemove=handle_mouse_move
                on:mouseleave=handle_mouse_leave
            />
            <ChartTooltip />
        </div>
    }
}

/// 🎯 Tooltip над сегментом диаграммы
#[component]
fn ChartTooltip() -> impl IntoView {
    let tooltip_visible = tooltip_visible_signal();
    let tooltip_data = tooltip_data_signal();

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip_visible.get() { "block" } else { "none" }
            style:left=move || {
                tooltip_data.with(|data| match data {
                    Some(tooltip) => format!("{}px", tooltip.x),
                    None => "0px".to_string(),
                })
            }
            style:top=move || {
                tooltip_data.with(|data| match data {
                    Some(tooltip) => format!("{}px", tooltip.y),
                    None => "0px".to_string(),
                })
            }
        >
            {move || {
                tooltip_data.with(|data| match data {
                    Some(tooltip) => tooltip.formatted_text.clone(),
                    None => String::new(),
                })
            }}
        </div>
    }
}

/// Список партий с местами и цветовыми метками
#[component]
fn TallyList(slices: Vec<PieSlice>) -> impl IntoView {
    view! {
        <div class="tally-list">
            <For
                each=move || slices.clone()
                key=|slice| slice.label.clone()
                children=move |slice| {
                    let swatch_style = format!("background: {}", slice.color.to_css());
                    let seats = format!("{} seats ({:.1}%)", slice.count, slice.percent());
                    view! {
                        <div class="tally-line">
                            <span class="tally-swatch" style=swatch_style></span>
                            <span class="tally-party">{slice.label.clone()}</span>
                            <span class="tally-count">{seats}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// 📜 Список законопроектов
#[component]
fn BillList(bills: Vec<Bill>) -> impl IntoView {
    view! {
        <div class="bills-list">
            <For
                each=move || bills.clone()
                key=|bill| bill.legisinfo_id
                children=move |bill| {
                    let heading = bill.heading();
                    let introduced = format_introduced_date(&bill.introduced);
                    view! {
                        <div class="bill-item">
                            <h3>{heading}</h3>
                            <p>"Session: " {bill.session.clone()}</p>
                            <p>"Introduced: " {introduced}</p>
                            <p>
                                <a href=bill.url.clone() target="_blank" rel="noopener noreferrer">
                                    "View Bill (Legisinfo)"
                                </a>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// 🏛️ Список депутатов
#[component]
fn MpList(mps: Vec<MemberOfParliament>) -> impl IntoView {
    view! {
        <div class="mp-list">
            <For
                each=move || mps.clone()
                key=|mp| mp.name.clone()
                children=move |mp| {
                    let affiliation = format!("{} - {}", mp.party_name(), mp.riding_label());
                    view! {
                        <div class="mp-item">
                            <img src=mp.image.clone() alt=mp.name.clone()/>
                            <h3>{mp.name.clone()}</h3>
                            <p>{affiliation}</p>
                            <p>
                                <a href=mp.url.clone() target="_blank" rel="noopener noreferrer">
                                    "View Profile"
                                </a>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// 🐛 Отладочная консоль с bridge к domain::logging
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = logs_signal();
    let is_paused = log_paused_signal();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <button
                    on:click=move |_| {
                        is_paused.update(|p| *p = !*p);
                        if is_paused.get() {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🛑 Logging paused"
                            );
                        } else {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "▶️ Logging resumed"
                            );
                        }
                    }
                    class="debug-btn"
                >
                    {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button
                    on:click=move |_| {
                        logs.set(Vec::new());
                        get_logger().info(
                            LogComponent::Presentation("DebugConsole"),
                            "🗑️ Log history cleared"
                        );
                    }
                    class="debug-btn"
                >
                    "🗑️ Clear"
                </button>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}
