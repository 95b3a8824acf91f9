//! Handler for `envios send`.

use serde_json::json;

use super::command::SendArgs;
use super::output;
use super::rate::refresh_quote;
use super::session::Session;
use crate::application::desk::Desk;
use crate::application::handoff::{payment_instructions, to_fixed};
use crate::domain::currency::{Currency, Direction};
use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::error::{Error, Result};

fn draft(args: &SendArgs) -> TransactionDraft {
    TransactionDraft {
        direction: Direction::from(args.direction),
        amount: args.amount.clone(),
        beneficiary_name: args.name.clone(),
        beneficiary_id: args.id.clone(),
        bank_name: args.bank.clone(),
    }
}

fn print_summary(tx: &Transaction) {
    let direction = tx.direction();
    output::section("Transfer");
    output::field("Direction", direction);
    output::field(
        "Sends",
        format!("{} {}", direction.source().symbol(), to_fixed(tx.amount_source(), 2)),
    );
    output::field(
        "Receives",
        output::highlight(format!(
            "{} {}",
            direction.target().symbol(),
            to_fixed(tx.amount_target(), 2)
        )),
    );
    output::field("Rate", to_fixed(tx.rate_applied(), 4));

    output::section("Beneficiary");
    output::field("Name", tx.beneficiary_name());
    output::field("ID", tx.beneficiary_id());
    output::field("Bank", tx.bank_name());
}

/// Execute `send`.
///
/// Without `--proof` the transfer is only quoted and the payment details
/// are shown; with it the transfer is handed off to the operator.
pub async fn execute(desk: &Desk, session: &Session, args: &SendArgs) -> Result<()> {
    let settings = &session.load.settings;
    let draft = draft(args);

    let problems = draft.problems();
    if !problems.is_empty() {
        for problem in &problems {
            output::error(&problem.to_string());
        }
        return Err(Error::InvalidRequest(format!(
            "{} field(s) need attention",
            problems.len()
        )));
    }

    refresh_quote(desk, settings).await;
    if let Some(warning) = desk.quote_view(settings).warning {
        output::warning(&warning);
    }

    let board = desk.board(settings);
    if board.is_unavailable() {
        return Err(Error::InvalidRequest(
            "no usable rate right now; try again later".into(),
        ));
    }
    let tx = desk.confirm(settings, &draft).ok_or_else(|| {
        Error::InvalidRequest("transfer could not be confirmed at the current rate".into())
    })?;

    let pays_in_reais = tx.direction().source() == Currency::Brl;

    match args.proof.as_deref() {
        None => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "send",
                    "status": "quoted",
                    "transaction": tx,
                    "paymentInstructions": pays_in_reais.then(|| payment_instructions(settings)),
                }));
                return Ok(());
            }

            print_summary(&tx);
            if pays_in_reais {
                output::section("Payment");
                output::lines(payment_instructions(settings));
            }
            output::hint("attach the transfer receipt with --proof <file> to hand off");
            Ok(())
        }
        Some(proof) => {
            let message = desk.hand_off(&tx, Some(proof))?;

            if output::is_json() {
                output::json_output(json!({
                    "command": "send",
                    "status": "handed_off",
                    "transaction": tx,
                    "message": message,
                }));
                return Ok(());
            }

            print_summary(&tx);
            output::success(&format!("Handed off to +{}", message.recipient));
            output::note(&format!("Attach {} in the chat", proof.display()));
            Ok(())
        }
    }
}
