//! Handler for `envios rate`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::RateArgs;
use super::output;
use super::session::{origin_label, Session};
use crate::application::desk::Desk;
use crate::application::handoff::to_fixed;
use crate::application::quote::feed::FeedUpdate;
use crate::domain::calculator::{RateBasis, RateBoard};
use crate::domain::currency::Direction;
use crate::domain::quote::ExchangeRate;
use crate::domain::settings::AppSettings;
use crate::domain::transaction::TransactionDraft;
use crate::error::{Error, Result};

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Direction")]
    direction: String,
    #[tabled(rename = "Client rate")]
    rate: String,
}

/// Fetch a fresh quote unless the desk prices from manual rates.
pub async fn refresh_quote(desk: &Desk, settings: &AppSettings) -> Option<FeedUpdate> {
    if settings.is_manual_mode {
        return None;
    }

    let pb = output::spinner(&format!("Fetching quote from {}", desk.provider_name()));
    let update = desk.refresh_quote().await;
    match &update {
        FeedUpdate::Applied { .. } => output::spinner_success(&pb, "Quote updated"),
        FeedUpdate::Failed { reason, .. } => {
            output::spinner_fail(&pb, &format!("Quote unavailable: {reason}"));
        }
        FeedUpdate::Stale { .. } => output::spinner_success(&pb, "Newer quote already in place"),
    }
    Some(update)
}

/// Formatted client rate. A zero base renders as unavailable.
#[must_use]
pub fn format_rate(board: &RateBoard, direction: Direction) -> String {
    if board.is_unavailable() {
        return "unavailable".to_string();
    }
    let dp = match direction {
        Direction::BrlToVes => 2,
        Direction::VesToBrl => 6,
    };
    format!(
        "1 {} = {} {}",
        direction.source().code(),
        to_fixed(board.rate(direction), dp),
        direction.target().code()
    )
}

const fn basis_label(basis: RateBasis) -> &'static str {
    match basis {
        RateBasis::Manual => "manual rates",
        RateBasis::Market => "market quote",
    }
}

/// Print the rate board table.
pub fn print_board(board: &RateBoard) {
    let rows = [Direction::BrlToVes, Direction::VesToBrl].map(|direction| RateRow {
        direction: direction.to_string(),
        rate: format_rate(board, direction),
    });
    output::lines(&Table::new(rows).to_string());
}

/// Print the market pairs behind a quote.
pub fn print_quote(quote: &ExchangeRate) {
    output::section("Market");
    if let Some(bybit) = quote.bybit {
        output::field("Bybit", format!("{} VES / {} BRL", bybit.ves, bybit.brl));
    }
    if let Some(binance) = quote.binance {
        output::field("Binance", format!("{} VES / {} BRL", binance.ves, binance.brl));
    }
    output::field("USD/VES", quote.usd_ves);
    output::field("USD/BRL", quote.usd_brl);
    output::field("Updated", quote.last_updated.format("%Y-%m-%d %H:%M:%S UTC"));
    output::field("Source", &quote.source);
    for source in &quote.grounding_sources {
        output::note(&format!("{} <{}>", source.title, source.uri));
    }
}

/// Execute `rate`.
pub async fn execute(desk: &Desk, session: &Session, args: &RateArgs) -> Result<()> {
    let settings = &session.load.settings;
    refresh_quote(desk, settings).await;

    let board = desk.board(settings);
    let view = desk.quote_view(settings);
    let direction = Direction::from(args.direction);

    let preview = match &args.amount {
        Some(amount) => {
            let draft = TransactionDraft {
                direction,
                amount: amount.clone(),
                ..TransactionDraft::default()
            };
            let Some(source) = draft.source_amount() else {
                return Err(Error::InvalidRequest(format!(
                    "amount '{amount}' is not a number greater than zero"
                )));
            };
            Some((source, draft.preview(board.rate(direction))))
        }
        None => None,
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "rate",
            "settings": origin_label(session.load.origin),
            "board": board,
            "quote": view.quote,
            "warning": view.warning,
            "preview": preview.map(|(amount, receives)| json!({
                "direction": direction,
                "amount": amount,
                "receives": receives,
            })),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Client rates");
    print_board(&board);
    output::field("Basis", basis_label(board.basis));
    output::field("Margin", format!("{}%", board.profit_margin));
    output::field("Settings", origin_label(session.load.origin));

    if let Some(warning) = &view.warning {
        output::warning(warning);
    }
    if board.is_unavailable() {
        output::hint("no usable base rate; try again later or switch to manual rates");
    }
    if !settings.is_manual_mode {
        if let Some(quote) = &view.quote {
            print_quote(quote);
        }
    }

    if let Some((amount, receives)) = preview {
        output::section("Preview");
        output::field(
            "Sends",
            format!("{} {}", direction.source().symbol(), to_fixed(amount, 2)),
        );
        output::field(
            "Receives",
            output::highlight(format!("{} {}", direction.target().symbol(), to_fixed(receives, 2))),
        );
    }

    Ok(())
}
