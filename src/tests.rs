use std::sync::Arc;

use crate::domain::entities::market_data::MarketData;
use crate::domain::entities::transaction::{unique_statuses, TransactionData};
use crate::domain::grid::filter::{FilterCoordinator, MatchRule};
use crate::domain::grid::metrics::{amplitude_ratios, percent_change};
use crate::domain::grid::pagination::{clamp_page, page_slice, total_pages, Paginator};
use crate::domain::grid::window::{visible_pages, MAX_VISIBLE_PAGES};
use crate::domain::grid::GridError;
use crate::infra::export::csv::{write_csv_with_bom, ExportRow, UTF8_BOM};
use crate::infra::seed::{transaction_rows, SeedTransactions};
use crate::ui::format::{
    format_change, format_number_with_commas, format_ratio_or_placeholder,
};
use crate::usecase::ports::provider::DatasetProvider;
use crate::usecase::services::grid_session::GridSession;

fn quote_fixture(id: i64, thscode: &str) -> MarketData {
    MarketData {
        id,
        thscode: thscode.to_string(),
        trade_date: "2024-01-15".to_string(),
        open: 10.0,
        close: 10.5,
        high: 10.8,
        low: 9.9,
        volume: 1_000_000,
        amount: 10_500_000.0,
        change_amount: 0.5,
        change_ratio: 5.0,
        turnover_ratio: 1.2,
        pre_close: 10.0,
        create_time: "2024-01-15 17:30:00".to_string(),
        update_time: "2024-01-15 17:30:00".to_string(),
    }
}

fn trade_fixture(id: i64, thscode: &str, status: &str) -> TransactionData {
    TransactionData {
        id,
        thscode: thscode.to_string(),
        trade_date: "2024-01-15".to_string(),
        pre_close: 10.0,
        high: 10.8,
        low: 9.9,
        open: 10.0,
        close: 10.5,
        status: status.to_string(),
        create_time: "2024-01-15 17:30:00".to_string(),
        update_time: "2024-01-15 17:30:00".to_string(),
    }
}

struct FixtureTrades(Vec<TransactionData>);

impl DatasetProvider<TransactionData> for FixtureTrades {
    fn fetch(&self) -> Vec<TransactionData> {
        self.0.clone()
    }
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(23, 10), 3, "23 rows at size 10 need 3 pages");
    assert_eq!(total_pages(20, 10), 2, "exact multiple needs no extra page");
    assert_eq!(total_pages(1, 10), 1, "a single row still needs a page");
    assert_eq!(total_pages(0, 10), 0, "empty data has zero pages");
    assert_eq!(total_pages(-5, 10), 0, "negative counts clamp to zero pages");
}

#[test]
fn clamp_page_stays_in_bounds() {
    assert_eq!(clamp_page(2, 3), 2, "in-range page passes through");
    assert_eq!(clamp_page(0, 3), 1, "page below 1 clamps to 1");
    assert_eq!(clamp_page(-7, 3), 1, "negative page clamps to 1");
    assert_eq!(clamp_page(99, 3), 3, "page past the end clamps to last");
    assert_eq!(clamp_page(5, 0), 1, "empty data still resolves to page 1");
}

#[test]
fn paginator_rejects_non_positive_page_size() {
    assert!(matches!(
        Paginator::new(0),
        Err(GridError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Paginator::new(-3),
        Err(GridError::InvalidConfiguration(_))
    ));
    assert!(Paginator::new(1).is_ok(), "positive size should be accepted");
}

#[test]
fn page_slice_clips_to_data_bounds() {
    let data: Vec<i64> = (1..=23).collect();

    assert_eq!(page_slice(&data, 1, 10), (1..=10).collect::<Vec<_>>());
    assert_eq!(page_slice(&data, 3, 10), (21..=23).collect::<Vec<_>>());
    assert!(page_slice(&data, 4, 10).is_empty(), "page past end is empty");
    assert!(page_slice(&data, 0, 10).is_empty(), "page 0 yields nothing");
    assert!(
        page_slice::<i64>(&[], 1, 10).is_empty(),
        "empty data yields nothing"
    );
}

#[test]
fn page_slices_concatenate_back_to_the_data() {
    let data: Vec<i64> = (1..=23).collect();

    for page_size in [10, 7] {
        let pages = total_pages(data.len() as i64, page_size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(page_slice(&data, page, page_size));
        }
        assert_eq!(rebuilt, data, "pages of size {page_size} should tile the data");
    }
}

#[test]
fn next_and_prev_clamp_at_the_edges() {
    let mut paginator = Paginator::new(10).expect("should build paginator");

    assert_eq!(paginator.prev_page(23), 1, "prev at page 1 stays at 1");
    assert_eq!(paginator.next_page(23), 2);
    assert_eq!(paginator.next_page(23), 3);
    assert_eq!(paginator.next_page(23), 3, "next at last page stays there");
}

#[test]
fn contains_rule_is_case_insensitive_substring() {
    let rule = MatchRule::Contains("000001".to_string());
    assert!(rule.matches("000001.SZ"));
    assert!(!rule.matches("600519.SH"));

    let rule = MatchRule::Contains("sz".to_string());
    assert!(rule.matches("000001.SZ"), "case should not matter");
}

#[test]
fn equals_rule_requires_exact_match() {
    let rule = MatchRule::Equals("止盈".to_string());
    assert!(rule.matches("止盈"));
    assert!(!rule.matches("止盈中"), "substring is not enough for equals");
}

#[test]
fn sentinel_and_empty_rules_do_not_restrict() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "600519.SH", "止盈"),
    ];
    let mut paginator = Paginator::new(10).expect("should build paginator");
    let mut filters = FilterCoordinator::new();

    filters.edit("status", MatchRule::Equals("all".to_string()));
    filters.edit("thscode", MatchRule::Contains(String::new()));
    filters.commit_and_reset(&mut paginator);

    assert_eq!(
        filters.filtered_view(&rows).len(),
        2,
        "inactive rules should keep every row"
    );
}

#[test]
fn active_criteria_combine_conjunctively() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "000001.SZ", "止盈"),
        trade_fixture(3, "600519.SH", "止盈"),
    ];
    let mut paginator = Paginator::new(10).expect("should build paginator");
    let mut filters = FilterCoordinator::new();

    filters.edit("thscode", MatchRule::Contains("000001".to_string()));
    filters.edit("status", MatchRule::Equals("止盈".to_string()));
    filters.commit_and_reset(&mut paginator);

    let view = filters.filtered_view(&rows);
    assert_eq!(view.len(), 1, "both criteria must hold");
    assert_eq!(view[0].id, 2);
}

#[test]
fn record_missing_a_criterion_field_is_excluded() {
    let rows = vec![trade_fixture(1, "000001.SZ", "持仓中")];
    let mut paginator = Paginator::new(10).expect("should build paginator");
    let mut filters = FilterCoordinator::new();

    filters.edit("sector", MatchRule::Equals("银行".to_string()));
    filters.commit_and_reset(&mut paginator);

    assert!(
        filters.filtered_view(&rows).is_empty(),
        "trades have no sector field, so nothing matches"
    );
}

#[test]
fn pending_edits_apply_only_on_commit() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "600519.SH", "止盈"),
    ];
    let mut paginator = Paginator::new(10).expect("should build paginator");
    let mut filters = FilterCoordinator::new();

    filters.edit("thscode", MatchRule::Contains("000001".to_string()));
    assert_eq!(
        filters.filtered_view(&rows).len(),
        2,
        "pending edit must not affect the view"
    );
    assert_eq!(filters.pending_value("thscode"), "000001");
    assert_eq!(filters.committed_value("thscode"), "");

    filters.commit_and_reset(&mut paginator);
    assert_eq!(filters.filtered_view(&rows).len(), 1);
}

#[test]
fn commit_resets_page_even_when_the_view_is_unchanged() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "000002.SZ", "止盈"),
        trade_fixture(3, "000003.SZ", "止损"),
    ];
    let provider: Arc<dyn DatasetProvider<TransactionData>> = Arc::new(FixtureTrades(rows));
    let mut grid = GridSession::new(provider, 2).expect("should build session");

    grid.on_page_requested(2);
    assert_eq!(grid.current_page(), 2);

    grid.on_commit();
    assert_eq!(grid.current_page(), 1, "commit returns to page 1");
    assert_eq!(grid.total_items(), 3, "view itself is unchanged");

    grid.on_page_requested(2);
    grid.on_commit();
    assert_eq!(
        grid.current_page(),
        1,
        "a repeat commit with identical criteria still resets the page"
    );
}

#[test]
fn reset_clears_pending_and_committed_criteria() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "600519.SH", "止盈"),
    ];
    let provider: Arc<dyn DatasetProvider<TransactionData>> = Arc::new(FixtureTrades(rows));
    let mut grid = GridSession::new(provider, 10).expect("should build session");

    grid.on_criteria_edit("thscode", MatchRule::Contains("000001".to_string()));
    grid.on_commit();
    assert_eq!(grid.total_items(), 1);

    grid.on_reset();
    assert_eq!(grid.total_items(), 2, "reset restores the full dataset");
    assert_eq!(grid.pending_value("thscode"), "", "inputs are cleared too");
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn visible_pages_centers_on_the_current_page() {
    assert_eq!(visible_pages(7, 20, 5), vec![5, 6, 7, 8, 9]);
}

#[test]
fn visible_pages_shifts_at_the_edges() {
    assert_eq!(visible_pages(1, 20, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible_pages(2, 20, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible_pages(20, 20, 5), vec![16, 17, 18, 19, 20]);
    assert_eq!(visible_pages(19, 20, 5), vec![16, 17, 18, 19, 20]);
}

#[test]
fn visible_pages_shows_all_when_they_fit() {
    assert_eq!(visible_pages(3, 4, 5), vec![1, 2, 3, 4]);
    assert_eq!(visible_pages(1, 1, 5), vec![1]);
}

#[test]
fn visible_pages_is_empty_without_pages() {
    assert!(visible_pages(1, 0, MAX_VISIBLE_PAGES).is_empty());
    assert!(visible_pages(1, -2, MAX_VISIBLE_PAGES).is_empty());
}

#[test]
fn percent_change_matches_the_ratio_definition() {
    let change = percent_change(10.0, 11.0).expect("should compute change");
    assert!((change - 0.10).abs() < 1e-9, "expected +10%, got {change}");

    let change = percent_change(10.0, 9.0).expect("should compute change");
    assert!((change + 0.10).abs() < 1e-9, "expected -10%, got {change}");
}

#[test]
fn percent_change_reports_zero_previous_close() {
    assert!(matches!(
        percent_change(0.0, 5.0),
        Err(GridError::DivisionByZero)
    ));
}

#[test]
fn amplitude_ratios_derive_all_three_legs() {
    let ratios = amplitude_ratios(10.0, 10.8, 9.9, 10.5).expect("should compute ratios");
    assert!((ratios.high_pct - 0.08).abs() < 1e-9);
    assert!((ratios.low_pct + 0.01).abs() < 1e-9);
    assert!((ratios.close_pct - 0.05).abs() < 1e-9);

    assert!(
        amplitude_ratios(0.0, 10.8, 9.9, 10.5).is_err(),
        "zero previous close fails the whole row"
    );
}

#[test]
fn ratio_placeholder_renders_dash_on_error() {
    assert_eq!(format_ratio_or_placeholder(percent_change(0.0, 5.0)), "—");
    assert_eq!(
        format_ratio_or_placeholder(percent_change(10.0, 11.0)),
        "+10.00%"
    );
}

#[test]
fn filtered_grid_walkthrough_over_23_trades() {
    let provider: Arc<dyn DatasetProvider<TransactionData>> = Arc::new(SeedTransactions);
    let mut grid = GridSession::new(provider, 10).expect("should build session");

    assert_eq!(grid.total_items(), 23);
    assert_eq!(grid.total_pages(), 3);
    assert_eq!(grid.current_rows().len(), 10);
    assert_eq!(grid.visible_pages(), vec![1, 2, 3]);

    grid.on_page_requested(3);
    assert_eq!(grid.current_page(), 3);
    assert_eq!(grid.current_rows().len(), 3, "last page holds the remainder");

    grid.on_criteria_edit("thscode", MatchRule::Contains("000001".to_string()));
    grid.on_commit();

    assert_eq!(grid.total_items(), 4);
    assert_eq!(grid.total_pages(), 1);
    assert_eq!(grid.current_page(), 1, "commit moved off the stale page 3");
    assert_eq!(grid.current_rows().len(), 4);
    assert_eq!(grid.visible_pages(), vec![1]);

    grid.on_page_requested(2);
    assert_eq!(grid.current_page(), 1, "out-of-range request clamps back");

    grid.on_reset();
    assert_eq!(grid.total_items(), 23);
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn csv_export_starts_with_a_bom_and_quotes_every_field() {
    let rows = vec![quote_fixture(1, "000001.SZ")];
    let mut buffer = Vec::new();

    write_csv_with_bom(&mut buffer, &rows).expect("should export csv");

    assert!(buffer.starts_with(UTF8_BOM), "output must begin with a bom");

    let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec())
        .expect("csv body should be valid utf-8");
    let mut lines = text.lines();
    let header = lines.next().expect("should have a header line");
    assert!(header.starts_with("\"ID\",\"股票代码\""), "got: {header}");

    let row = lines.next().expect("should have a data line");
    assert!(row.starts_with("\"1\",\"000001.SZ\""), "got: {row}");
    for field in row.split(',') {
        assert!(
            field.starts_with('"') && field.ends_with('"'),
            "every field should be quoted, got: {field}"
        );
    }
}

#[test]
fn csv_export_doubles_embedded_quotes() {
    let mut row = quote_fixture(1, "000001.SZ");
    row.trade_date = "2024-01-15 \"复盘\"".to_string();

    let mut buffer = Vec::new();
    write_csv_with_bom(&mut buffer, &[row]).expect("should export csv");

    let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec())
        .expect("csv body should be valid utf-8");
    assert!(
        text.contains("\"2024-01-15 \"\"复盘\"\"\""),
        "embedded quotes should be doubled, got: {text}"
    );
}

#[test]
fn csv_export_covers_the_full_filtered_set() {
    let rows: Vec<MarketData> = (1..=15)
        .map(|id| quote_fixture(id, "000001.SZ"))
        .collect();

    let mut buffer = Vec::new();
    write_csv_with_bom(&mut buffer, &rows).expect("should export csv");

    let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec())
        .expect("csv body should be valid utf-8");
    assert_eq!(
        text.lines().count(),
        16,
        "header plus all filtered rows, not just one page"
    );
}

#[test]
fn export_headers_match_the_row_width() {
    let row = quote_fixture(1, "000001.SZ");
    assert_eq!(MarketData::headers().len(), row.to_row().len());
}

#[test]
fn number_formatting_groups_and_signs() {
    assert_eq!(format_number_with_commas(12345.678, 0), "12,346");
    assert_eq!(format_number_with_commas(-1234.5, 2), "-1,234.50");
    assert_eq!(format_number_with_commas(999.0, 0), "999");
    assert_eq!(format_change(0.5), "+0.50");
    assert_eq!(format_change(-0.5), "-0.50");
}

#[test]
fn unique_statuses_keeps_first_seen_order_behind_the_sentinel() {
    let rows = vec![
        trade_fixture(1, "000001.SZ", "持仓中"),
        trade_fixture(2, "600519.SH", "止盈"),
        trade_fixture(3, "000858.SZ", "持仓中"),
        trade_fixture(4, "300750.SZ", "止损"),
    ];

    assert_eq!(unique_statuses(&rows), vec!["all", "持仓中", "止盈", "止损"]);
}

#[test]
fn seed_trades_match_the_documented_shape() {
    let rows = transaction_rows();

    assert_eq!(rows.len(), 23, "the demo dataset holds 23 trades");
    let matching = rows
        .iter()
        .filter(|row| row.thscode.contains("000001"))
        .count();
    assert_eq!(matching, 4, "four trades belong to 000001.SZ");
    assert!(
        rows.iter().any(|row| row.pre_close == 0.0),
        "one trade exercises the amplitude placeholder"
    );
}

#[test]
fn seed_quotes_keep_change_columns_consistent() {
    for row in crate::infra::seed::market_data_rows() {
        let expected = row.close - row.pre_close;
        assert!(
            (row.change_amount - expected).abs() < 1e-6,
            "change amount should equal close minus previous close for {}",
            row.thscode
        );
    }
}
