use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::market_data::MarketData;
use crate::domain::entities::tags::{unique_sectors, CapLevel, StockTag};
use crate::domain::entities::transaction::{unique_statuses, TransactionData};
use crate::domain::grid::filter::{MatchRule, ALL_SENTINEL};
use crate::domain::grid::metrics::percent_change;
use crate::domain::grid::pagination::DEFAULT_PAGE_SIZE;
use crate::domain::grid::window::{visible_pages, MAX_VISIBLE_PAGES};
use crate::infra::export::csv::{default_export_file_name, export_csv_file};
use crate::infra::seed::{market_data_rows, stock_tag_rows, transaction_rows};
use crate::infra::seed::{SeedMarketData, SeedStockTags, SeedTransactions};
use crate::ui::format::{
    change_color, format_amount, format_change, format_change_percentage, format_market_cap,
    format_price, format_ratio_or_placeholder, format_volume,
};
use crate::ui::nav::{PageKind, APP_NAME, NAVIGATION_ITEMS};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::provider::DatasetProvider;
use crate::usecase::services::grid_session::GridSession;

fn card_style() -> &'static str {
    "background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 16px; margin-bottom: 16px;"
}

fn table_header_cell_style() -> &'static str {
    "border-bottom: 1px solid #e2e8f0; padding: 8px 10px; background: #f8fafc; text-align: left; white-space: nowrap;"
}

fn table_cell_style() -> &'static str {
    "border-bottom: 1px solid #f1f5f9; padding: 8px 10px; white-space: nowrap;"
}

fn primary_button_style() -> &'static str {
    "background: #2563eb; color: #fff; border: none; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
}

fn outline_button_style() -> &'static str {
    "background: #fff; color: #334155; border: 1px solid #cbd5e1; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
}

fn page_button_style(active: bool) -> &'static str {
    if active {
        "background: #2563eb; color: #fff; border: 1px solid #2563eb; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "background: #fff; color: #334155; border: 1px solid #cbd5e1; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}

fn input_style() -> &'static str {
    "border: 1px solid #cbd5e1; border-radius: 6px; padding: 6px 10px; width: 100%; box-sizing: border-box;"
}

pub fn status_badge_style(status: &str) -> &'static str {
    match status {
        "强制平仓" => "background: #fee2e2; color: #b91c1c; border: 1px solid #fecaca; padding: 2px 8px; border-radius: 9999px;",
        "止盈" => "background: #dcfce7; color: #15803d; border: 1px solid #bbf7d0; padding: 2px 8px; border-radius: 9999px;",
        "止损" => "background: #ffedd5; color: #c2410c; border: 1px solid #fed7aa; padding: 2px 8px; border-radius: 9999px;",
        _ => "background: #f1f5f9; color: #334155; border: 1px solid #e2e8f0; padding: 2px 8px; border-radius: 9999px;",
    }
}

pub fn cap_badge_style(level: CapLevel) -> &'static str {
    match level {
        CapLevel::Large => "background: #dbeafe; color: #1d4ed8; border: 1px solid #bfdbfe; padding: 2px 8px; border-radius: 9999px;",
        CapLevel::Mid => "background: #dcfce7; color: #15803d; border: 1px solid #bbf7d0; padding: 2px 8px; border-radius: 9999px;",
        CapLevel::Small => "background: #fef9c3; color: #a16207; border: 1px solid #fde68a; padding: 2px 8px; border-radius: 9999px;",
    }
}

#[component]
pub fn App() -> Element {
    let state = AppState::new();
    let mut active_page = state.active_page;
    let status = state.status;

    rsx! {
        div {
            style: "display: flex; height: 100vh; font-family: sans-serif; color: #0f172a; background: #f1f5f9;",
            aside {
                style: "width: 220px; background: #0f172a; color: #e2e8f0; display: flex; flex-direction: column; padding: 16px 0;",
                div {
                    style: "padding: 0 16px 16px 16px; font-weight: bold; border-bottom: 1px solid #1e293b;",
                    "{APP_NAME}"
                }
                nav {
                    style: "display: flex; flex-direction: column; gap: 4px; padding: 12px 8px;",
                    for item in NAVIGATION_ITEMS {
                        button {
                            key: "{item.label()}",
                            style: if active_page() == item {
                                "text-align: left; background: #2563eb; color: #fff; border: none; padding: 8px 12px; border-radius: 6px; cursor: pointer;"
                            } else {
                                "text-align: left; background: transparent; color: #cbd5e1; border: none; padding: 8px 12px; border-radius: 6px; cursor: pointer;"
                            },
                            onclick: move |_| {
                                *active_page.write() = item;
                            },
                            "{item.label()}"
                        }
                    }
                }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                header {
                    style: "background: #fff; border-bottom: 1px solid #e2e8f0; padding: 10px 20px; display: flex; justify-content: space-between;",
                    span { "{active_page().label()}" }
                    span { style: "color: #64748b;", "{status}" }
                }
                main {
                    style: "flex: 1; overflow: auto; padding: 20px;",
                    {match active_page() {
                        PageKind::Dashboard => rsx! { DashboardPage {} },
                        PageKind::MarketData => rsx! { MarketDataPage { status } },
                        PageKind::TransactionData => rsx! { TransactionDataPage {} },
                        PageKind::LongTermTags => rsx! { LongTermTagsPage {} },
                        PageKind::Settings => rsx! { SettingsPage {} },
                    }}
                }
            }
        }
    }
}

#[component]
fn PaginationBar(
    current_page: i64,
    total_pages: i64,
    total_items: i64,
    page_size: i64,
    on_page_change: EventHandler<i64>,
) -> Element {
    let start_index = if total_items == 0 {
        0
    } else {
        (current_page - 1) * page_size + 1
    };
    let end_index = (current_page * page_size).min(total_items);
    let pages = visible_pages(current_page, total_pages, MAX_VISIBLE_PAGES);

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
            span {
                style: "color: #64748b;",
                "显示 {start_index} 到 {end_index} 条，共 {total_items} 条记录"
            }
            div {
                style: "display: flex; gap: 6px; align-items: center;",
                button {
                    style: outline_button_style(),
                    disabled: current_page <= 1,
                    onclick: move |_| on_page_change.call(current_page - 1),
                    "上一页"
                }
                for page in pages {
                    button {
                        key: "{page}",
                        style: page_button_style(page == current_page),
                        onclick: move |_| on_page_change.call(page),
                        "{page}"
                    }
                }
                button {
                    style: outline_button_style(),
                    disabled: current_page >= total_pages,
                    onclick: move |_| on_page_change.call(current_page + 1),
                    "下一页"
                }
            }
        }
    }
}

struct MarketRowView {
    id: i64,
    thscode: String,
    trade_date: String,
    open: String,
    close: String,
    high: String,
    low: String,
    volume: String,
    amount: String,
    change_amount: String,
    change_amount_color: &'static str,
    change_ratio: String,
    change_ratio_color: &'static str,
    turnover_ratio: String,
    pre_close: String,
    create_time: String,
    update_time: String,
}

impl MarketRowView {
    fn from_record(row: &MarketData) -> Self {
        Self {
            id: row.id,
            thscode: row.thscode.clone(),
            trade_date: row.trade_date.clone(),
            open: format_price(row.open),
            close: format_price(row.close),
            high: format_price(row.high),
            low: format_price(row.low),
            volume: format_volume(row.volume),
            amount: format_amount(row.amount),
            change_amount: format_change(row.change_amount),
            change_amount_color: change_color(row.change_amount),
            change_ratio: format_change_percentage(row.change_ratio),
            change_ratio_color: change_color(row.change_ratio),
            turnover_ratio: format!("{}%", format_price(row.turnover_ratio)),
            pre_close: format_price(row.pre_close),
            create_time: row.create_time.clone(),
            update_time: row.update_time.clone(),
        }
    }
}

#[component]
fn MarketDataPage(mut status: Signal<String>) -> Element {
    let mut session = use_signal(|| {
        let provider: Arc<dyn DatasetProvider<MarketData>> = Arc::new(SeedMarketData);
        GridSession::new(provider, DEFAULT_PAGE_SIZE)
    });

    let view = {
        let guard = session.read();
        match guard.as_ref() {
            Ok(grid) => Ok((
                grid.current_rows().iter().map(MarketRowView::from_record).collect::<Vec<_>>(),
                grid.current_page(),
                grid.total_pages(),
                grid.total_items(),
                grid.page_size(),
                grid.pending_value("thscode"),
                grid.pending_value("trade_date"),
            )),
            Err(err) => Err(err.to_string()),
        }
    };
    let (rows, current_page, total_pages, total_items, page_size, code_pending, date_pending) =
        match view {
            Ok(view) => view,
            Err(message) => {
                return rsx! {
                    div { style: card_style(), "数据网格初始化失败：{message}" }
                };
            }
        };

    rsx! {
        div {
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                div {
                    h1 { style: "margin: 0; font-size: 20px;", "市场行情基础数据" }
                    p { style: "margin: 4px 0 0 0; color: #64748b;", "查看和管理市场行情基础数据表" }
                }
                button {
                    style: primary_button_style(),
                    onclick: move |_| {
                        let rows: Vec<MarketData> = {
                            let guard = session.read();
                            match guard.as_ref() {
                                Ok(grid) => grid.filtered().to_vec(),
                                Err(_) => return,
                            }
                        };
                        if rows.is_empty() {
                            *status.write() = "没有可导出的数据".to_string();
                            return;
                        }

                        let Some(path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name(default_export_file_name("market-data"))
                            .save_file()
                        else {
                            *status.write() = "已取消导出".to_string();
                            return;
                        };

                        match export_csv_file(&path, &rows) {
                            Ok(()) => {
                                *status.write() =
                                    format!("已导出 {} 条记录：{}", rows.len(), path.display());
                            }
                            Err(err) => {
                                *status.write() = format!("导出失败：{err}");
                            }
                        }
                    },
                    "导出 CSV 数据"
                }
            }

            div {
                style: card_style(),
                h2 { style: "margin: 0 0 12px 0; font-size: 15px;", "筛选条件" }
                div {
                    style: "display: flex; gap: 12px; align-items: flex-end;",
                    div {
                        style: "flex: 1;",
                        label { style: "display: block; color: #64748b; margin-bottom: 6px;", "股票代码" }
                        input {
                            style: input_style(),
                            placeholder: "请输入股票代码，如：000001.SZ",
                            value: "{code_pending}",
                            oninput: move |event| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_criteria_edit("thscode", MatchRule::Contains(event.value()));
                                }
                            },
                        }
                    }
                    div {
                        style: "flex: 1;",
                        label { style: "display: block; color: #64748b; margin-bottom: 6px;", "交易日期" }
                        input {
                            style: input_style(),
                            r#type: "date",
                            value: "{date_pending}",
                            oninput: move |event| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_criteria_edit("trade_date", MatchRule::Equals(event.value()));
                                }
                            },
                        }
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            style: primary_button_style(),
                            onclick: move |_| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_commit();
                                }
                            },
                            "查询"
                        }
                        button {
                            style: outline_button_style(),
                            onclick: move |_| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_reset();
                                }
                            },
                            "重置"
                        }
                    }
                }
            }

            div {
                style: card_style(),
                div {
                    style: "overflow-x: auto;",
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th { style: table_header_cell_style(), "ID" }
                                th { style: table_header_cell_style(), "股票代码" }
                                th { style: table_header_cell_style(), "交易日期" }
                                th { style: table_header_cell_style(), "开盘价" }
                                th { style: table_header_cell_style(), "收盘价" }
                                th { style: table_header_cell_style(), "最高价" }
                                th { style: table_header_cell_style(), "最低价" }
                                th { style: table_header_cell_style(), "成交量" }
                                th { style: table_header_cell_style(), "成交额" }
                                th { style: table_header_cell_style(), "涨跌额" }
                                th { style: table_header_cell_style(), "涨跌幅" }
                                th { style: table_header_cell_style(), "换手率" }
                                th { style: table_header_cell_style(), "昨收价" }
                                th { style: table_header_cell_style(), "创建时间" }
                                th { style: table_header_cell_style(), "更新时间" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td {
                                        style: "padding: 24px; text-align: center; color: #64748b;",
                                        colspan: 15,
                                        "暂无数据"
                                    }
                                }
                            } else {
                                for row in rows {
                                    tr {
                                        key: "{row.id}",
                                        td { style: table_cell_style(), "{row.id}" }
                                        td { style: "{table_cell_style()} color: #2563eb;", "{row.thscode}" }
                                        td { style: table_cell_style(), "{row.trade_date}" }
                                        td { style: table_cell_style(), "{row.open}" }
                                        td { style: table_cell_style(), "{row.close}" }
                                        td { style: "{table_cell_style()} color: #dc2626;", "{row.high}" }
                                        td { style: "{table_cell_style()} color: #16a34a;", "{row.low}" }
                                        td { style: table_cell_style(), "{row.volume}" }
                                        td { style: table_cell_style(), "{row.amount}" }
                                        td { style: "{table_cell_style()} color: {row.change_amount_color};", "{row.change_amount}" }
                                        td { style: "{table_cell_style()} color: {row.change_ratio_color};", "{row.change_ratio}" }
                                        td { style: table_cell_style(), "{row.turnover_ratio}" }
                                        td { style: table_cell_style(), "{row.pre_close}" }
                                        td { style: "{table_cell_style()} color: #64748b;", "{row.create_time}" }
                                        td { style: "{table_cell_style()} color: #64748b;", "{row.update_time}" }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginationBar {
                    current_page,
                    total_pages,
                    total_items,
                    page_size,
                    on_page_change: move |page| {
                        if let Ok(grid) = session.write().as_mut() {
                            grid.on_page_requested(page);
                        }
                    },
                }
            }
        }
    }
}

struct TransactionRowView {
    id: i64,
    thscode: String,
    trade_date: String,
    pre_close: String,
    high: String,
    low: String,
    open: String,
    close: String,
    high_pct: String,
    low_pct: String,
    close_pct: String,
    status: String,
    badge_style: &'static str,
    create_time: String,
    update_time: String,
}

impl TransactionRowView {
    fn from_record(row: &TransactionData) -> Self {
        Self {
            id: row.id,
            thscode: row.thscode.clone(),
            trade_date: row.trade_date.clone(),
            pre_close: format_price(row.pre_close),
            high: format_price(row.high),
            low: format_price(row.low),
            open: format_price(row.open),
            close: format_price(row.close),
            high_pct: format_ratio_or_placeholder(percent_change(row.pre_close, row.high)),
            low_pct: format_ratio_or_placeholder(percent_change(row.pre_close, row.low)),
            close_pct: format_ratio_or_placeholder(percent_change(row.pre_close, row.close)),
            status: row.status.clone(),
            badge_style: status_badge_style(&row.status),
            create_time: row.create_time.clone(),
            update_time: row.update_time.clone(),
        }
    }
}

#[component]
fn TransactionDataPage() -> Element {
    let mut session = use_signal(|| {
        let provider: Arc<dyn DatasetProvider<TransactionData>> = Arc::new(SeedTransactions);
        GridSession::new(provider, DEFAULT_PAGE_SIZE)
    });

    let view = {
        let guard = session.read();
        match guard.as_ref() {
            Ok(grid) => {
                let status_pending = {
                    let pending = grid.pending_value("status");
                    if pending.is_empty() {
                        ALL_SENTINEL.to_string()
                    } else {
                        pending
                    }
                };
                Ok((
                    grid.current_rows().iter().map(TransactionRowView::from_record).collect::<Vec<_>>(),
                    grid.current_page(),
                    grid.total_pages(),
                    grid.total_items(),
                    grid.page_size(),
                    grid.pending_value("thscode"),
                    status_pending,
                    unique_statuses(grid.dataset()),
                ))
            }
            Err(err) => Err(err.to_string()),
        }
    };
    let (
        rows,
        current_page,
        total_pages,
        total_items,
        page_size,
        code_pending,
        status_pending,
        statuses,
    ) = match view {
        Ok(view) => view,
        Err(message) => {
            return rsx! {
                div { style: card_style(), "数据网格初始化失败：{message}" }
            };
        }
    };

    rsx! {
        div {
            div {
                style: "margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 20px;", "成交数据" }
                p { style: "margin: 4px 0 0 0; color: #64748b;", "查看并管理股票的成交详情" }
            }

            div {
                style: card_style(),
                h2 { style: "margin: 0 0 4px 0; font-size: 15px;", "查询和筛选" }
                p { style: "margin: 0 0 12px 0; color: #64748b;", "根据股票代码查询，按交易状态筛选" }
                div {
                    style: "display: flex; gap: 12px; align-items: flex-end;",
                    div {
                        style: "flex: 1;",
                        label { style: "display: block; color: #64748b; margin-bottom: 6px;", "股票代码" }
                        input {
                            style: input_style(),
                            placeholder: "请输入股票代码",
                            value: "{code_pending}",
                            oninput: move |event| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_criteria_edit("thscode", MatchRule::Contains(event.value()));
                                }
                            },
                        }
                    }
                    div {
                        style: "flex: 1;",
                        label { style: "display: block; color: #64748b; margin-bottom: 6px;", "模拟交易状态" }
                        select {
                            style: input_style(),
                            value: "{status_pending}",
                            onchange: move |event| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_criteria_edit("status", MatchRule::Equals(event.value()));
                                }
                            },
                            for option_status in statuses {
                                option {
                                    key: "{option_status}",
                                    value: "{option_status}",
                                    if option_status == ALL_SENTINEL {
                                        "全部状态"
                                    } else {
                                        "{option_status}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            style: primary_button_style(),
                            onclick: move |_| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_commit();
                                }
                            },
                            "查询"
                        }
                        button {
                            style: outline_button_style(),
                            onclick: move |_| {
                                if let Ok(grid) = session.write().as_mut() {
                                    grid.on_reset();
                                }
                            },
                            "重置"
                        }
                    }
                }
            }

            div {
                style: card_style(),
                div {
                    style: "overflow-x: auto;",
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th { style: table_header_cell_style(), "ID" }
                                th { style: table_header_cell_style(), "股票代码" }
                                th { style: table_header_cell_style(), "交易日期" }
                                th { style: table_header_cell_style(), "昨收价" }
                                th { style: table_header_cell_style(), "最高价" }
                                th { style: table_header_cell_style(), "最低价" }
                                th { style: table_header_cell_style(), "开盘价" }
                                th { style: table_header_cell_style(), "收盘价" }
                                th { style: table_header_cell_style(), "最高振幅" }
                                th { style: table_header_cell_style(), "最低振幅" }
                                th { style: table_header_cell_style(), "收盘振幅" }
                                th { style: table_header_cell_style(), "模拟交易状态" }
                                th { style: table_header_cell_style(), "创建时间" }
                                th { style: table_header_cell_style(), "更新时间" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td {
                                        style: "padding: 24px; text-align: center; color: #64748b;",
                                        colspan: 14,
                                        "暂无数据"
                                    }
                                }
                            } else {
                                for row in rows {
                                    tr {
                                        key: "{row.id}",
                                        td { style: table_cell_style(), "{row.id}" }
                                        td { style: "{table_cell_style()} color: #2563eb;", "{row.thscode}" }
                                        td { style: table_cell_style(), "{row.trade_date}" }
                                        td { style: table_cell_style(), "{row.pre_close}" }
                                        td { style: "{table_cell_style()} color: #16a34a;", "{row.high}" }
                                        td { style: "{table_cell_style()} color: #dc2626;", "{row.low}" }
                                        td { style: table_cell_style(), "{row.open}" }
                                        td { style: "{table_cell_style()} font-weight: 500;", "{row.close}" }
                                        td { style: table_cell_style(), "{row.high_pct}" }
                                        td { style: table_cell_style(), "{row.low_pct}" }
                                        td { style: table_cell_style(), "{row.close_pct}" }
                                        td {
                                            style: table_cell_style(),
                                            span { style: row.badge_style, "{row.status}" }
                                        }
                                        td { style: "{table_cell_style()} color: #64748b; font-size: 12px;", "{row.create_time}" }
                                        td { style: "{table_cell_style()} color: #64748b; font-size: 12px;", "{row.update_time}" }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginationBar {
                    current_page,
                    total_pages,
                    total_items,
                    page_size,
                    on_page_change: move |page| {
                        if let Ok(grid) = session.write().as_mut() {
                            grid.on_page_requested(page);
                        }
                    },
                }
            }
        }
    }
}

struct TagRowView {
    thscode: String,
    stock_name: String,
    cap_label: &'static str,
    cap_style: &'static str,
    market_cap: String,
    sector: String,
    update_time: String,
}

impl TagRowView {
    fn from_record(row: &StockTag) -> Self {
        Self {
            thscode: row.thscode.clone(),
            stock_name: row.stock_name.clone(),
            cap_label: row.cap_level.label(),
            cap_style: cap_badge_style(row.cap_level),
            market_cap: format_market_cap(row.market_cap),
            sector: row.sector.clone(),
            update_time: row.update_time.clone(),
        }
    }
}

#[component]
fn LongTermTagsPage() -> Element {
    let mut session = use_signal(|| {
        let provider: Arc<dyn DatasetProvider<StockTag>> = Arc::new(SeedStockTags);
        GridSession::new(provider, DEFAULT_PAGE_SIZE)
    });

    let view = {
        let guard = session.read();
        match guard.as_ref() {
            Ok(grid) => {
                let sector_pending = {
                    let pending = grid.pending_value("sector");
                    if pending.is_empty() {
                        ALL_SENTINEL.to_string()
                    } else {
                        pending
                    }
                };
                Ok((
                    grid.current_rows().iter().map(TagRowView::from_record).collect::<Vec<_>>(),
                    grid.current_page(),
                    grid.total_pages(),
                    grid.total_items(),
                    grid.page_size(),
                    sector_pending,
                    unique_sectors(grid.dataset()),
                ))
            }
            Err(err) => Err(err.to_string()),
        }
    };
    let (rows, current_page, total_pages, total_items, page_size, sector_pending, sectors) =
        match view {
            Ok(view) => view,
            Err(message) => {
                return rsx! {
                    div { style: card_style(), "数据网格初始化失败：{message}" }
                };
            }
        };

    rsx! {
        div {
            div {
                style: "margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 20px;", "股票市值板块信息表" }
                p { style: "margin: 4px 0 0 0; color: #64748b;", "展示不同股票的市值、板块等信息" }
            }

            div {
                style: card_style(),
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    label { style: "color: #64748b;", "所属板块：" }
                    select {
                        style: "border: 1px solid #cbd5e1; border-radius: 6px; padding: 6px 10px; width: 200px;",
                        value: "{sector_pending}",
                        onchange: move |event| {
                            if let Ok(grid) = session.write().as_mut() {
                                grid.on_criteria_edit("sector", MatchRule::Equals(event.value()));
                            }
                        },
                        for sector in sectors {
                            option {
                                key: "{sector}",
                                value: "{sector}",
                                if sector == ALL_SENTINEL {
                                    "全部板块"
                                } else {
                                    "{sector}"
                                }
                            }
                        }
                    }
                    button {
                        style: primary_button_style(),
                        onclick: move |_| {
                            if let Ok(grid) = session.write().as_mut() {
                                grid.on_commit();
                            }
                        },
                        "查询"
                    }
                    button {
                        style: outline_button_style(),
                        onclick: move |_| {
                            if let Ok(grid) = session.write().as_mut() {
                                grid.on_reset();
                            }
                        },
                        "重置"
                    }
                }
            }

            div {
                style: card_style(),
                div {
                    style: "overflow-x: auto;",
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th { style: table_header_cell_style(), "股票代码" }
                                th { style: table_header_cell_style(), "股票名称" }
                                th { style: table_header_cell_style(), "市值级别" }
                                th { style: table_header_cell_style(), "总市值" }
                                th { style: table_header_cell_style(), "所属板块" }
                                th { style: table_header_cell_style(), "更新时间" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td {
                                        style: "padding: 24px; text-align: center; color: #64748b;",
                                        colspan: 6,
                                        "暂无数据"
                                    }
                                }
                            } else {
                                for row in rows {
                                    tr {
                                        key: "{row.thscode}",
                                        td { style: "{table_cell_style()} color: #2563eb;", "{row.thscode}" }
                                        td { style: "{table_cell_style()} font-weight: 500;", "{row.stock_name}" }
                                        td {
                                            style: table_cell_style(),
                                            span { style: row.cap_style, "{row.cap_label}" }
                                        }
                                        td { style: table_cell_style(), "{row.market_cap}" }
                                        td { style: table_cell_style(), "{row.sector}" }
                                        td { style: "{table_cell_style()} color: #64748b;", "{row.update_time}" }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginationBar {
                    current_page,
                    total_pages,
                    total_items,
                    page_size,
                    on_page_change: move |page| {
                        if let Ok(grid) = session.write().as_mut() {
                            grid.on_page_requested(page);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    let market_count = market_data_rows().len();
    let transaction_count = transaction_rows().len();
    let tag_count = stock_tag_rows().len();

    rsx! {
        div {
            div {
                style: "margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 20px;", "仪表盘" }
                p { style: "margin: 4px 0 0 0; color: #64748b;", "数据概览" }
            }
            div {
                style: "display: flex; gap: 16px;",
                div {
                    style: card_style(),
                    p { style: "margin: 0; color: #64748b;", "市场行情记录" }
                    p { style: "margin: 8px 0 0 0; font-size: 24px; font-weight: bold;", "{market_count}" }
                }
                div {
                    style: card_style(),
                    p { style: "margin: 0; color: #64748b;", "成交记录" }
                    p { style: "margin: 8px 0 0 0; font-size: 24px; font-weight: bold;", "{transaction_count}" }
                }
                div {
                    style: card_style(),
                    p { style: "margin: 0; color: #64748b;", "长期标签" }
                    p { style: "margin: 8px 0 0 0; font-size: 24px; font-weight: bold;", "{tag_count}" }
                }
            }
        }
    }
}

#[component]
fn SettingsPage() -> Element {
    rsx! {
        div {
            div {
                style: "margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 20px;", "设置" }
                p { style: "margin: 4px 0 0 0; color: #64748b;", "系统配置" }
            }
            div {
                style: card_style(),
                p { style: "margin: 0; color: #64748b;", "当前版本使用内置示例数据，外部数据源接入将在后续版本提供。" }
            }
        }
    }
}
