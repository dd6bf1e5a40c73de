/// Console table rendering for reconciled rows
use chrono_tz::Tz;

use crate::strategy::{FineReading, HybridReading, ReportRow};

/// Render the reconciled rows as an aligned console table, with coarse-bar
/// start times converted to the given display timezone.
pub fn render(rows: &[ReportRow], tz: Tz) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<16} | {:<8} | {:<17} | {:<7} | {:>7} | {:<11} | {}\n",
        format!("Time ({})", tz.name()),
        "Hybrid",
        "HBuy/HSell Prices",
        "Hourly",
        "HrPrice",
        "PM Buy/Sell",
        "PM Prices"
    ));
    out.push_str(
        "-----------------|----------|-------------------|---------|---------|-------------|-----------\n",
    );

    for row in rows {
        let local = row.coarse_start.with_timezone(&tz);
        out.push_str(&format!(
            "{:<16} | {:<8} | {:<17} | {:<7} | {:>7.2} | {:<11} | {}\n",
            local.format("%Y/%m/%d %H:00"),
            row.hybrid.first_signal.as_str(),
            hybrid_prices(&row.hybrid),
            row.coarse.signal.as_str(),
            row.coarse.close,
            fine_counts(&row.fine),
            fine_prices(&row.fine),
        ));
    }

    out
}

fn hybrid_prices(hybrid: &HybridReading) -> String {
    let buy = match hybrid.min_buy_price {
        Some(p) => format!("B:{:.2}", p),
        None => "B:-".to_string(),
    };
    let sell = match hybrid.max_sell_price {
        Some(p) => format!("S:{:.2}", p),
        None => "S:-".to_string(),
    };
    format!("{}/{}", buy, sell)
}

fn fine_counts(fine: &FineReading) -> String {
    format!("B:{}/S:{}", fine.buy_count, fine.sell_count)
}

fn fine_prices(fine: &FineReading) -> String {
    let buy = match fine.min_buy_price {
        Some(p) => format!("MinB:{:.2}", p),
        None => "MinB:-".to_string(),
    };
    let sell = match fine.max_sell_price {
        Some(p) => format!("MaxS:{:.2}", p),
        None => "MaxS:-".to_string(),
    };
    format!("{}/{}", buy, sell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CoarseReading;
    use crate::types::Signal;
    use chrono::{TimeZone, Utc};

    fn sample_row() -> ReportRow {
        ReportRow {
            coarse_start: Utc.with_ymd_and_hms(2025, 5, 19, 10, 0, 0).unwrap(),
            hybrid: HybridReading {
                first_signal: Signal::Buy,
                buy_count: 2,
                sell_count: 0,
                min_buy_price: Some(101.25),
                max_sell_price: None,
            },
            coarse: CoarseReading {
                signal: Signal::None,
                close: 100.5,
            },
            fine: FineReading {
                buy_count: 1,
                sell_count: 1,
                min_buy_price: Some(101.0),
                max_sell_price: Some(99.5),
            },
        }
    }

    #[test]
    fn test_render_contains_expected_cells() {
        let table = render(&[sample_row()], chrono_tz::UTC);

        assert!(table.contains("Time (UTC)"));
        assert!(table.contains("2025/05/19 10:00"));
        assert!(table.contains("BUY"));
        assert!(table.contains("B:101.25/S:-"));
        assert!(table.contains("100.50"));
        assert!(table.contains("B:1/S:1"));
        assert!(table.contains("MinB:101.00/MaxS:99.50"));
    }

    #[test]
    fn test_render_dashes_for_absent_prices() {
        let mut row = sample_row();
        row.hybrid.min_buy_price = None;
        row.fine.min_buy_price = None;
        row.fine.max_sell_price = None;

        let table = render(&[row], chrono_tz::UTC);
        assert!(table.contains("B:-/S:-"));
        assert!(table.contains("MinB:-/MaxS:-"));
    }

    #[test]
    fn test_render_converts_to_display_timezone() {
        // Tehran is UTC+3:30; 10:00 UTC displays as 13:00 local
        let table = render(&[sample_row()], chrono_tz::Asia::Tehran);
        assert!(table.contains("2025/05/19 13:00"));
    }
}
