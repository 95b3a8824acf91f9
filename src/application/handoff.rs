//! Handoff message composition.
//!
//! A confirmed transaction leaves the desk as a chat message to the
//! operator. The text is fixed Spanish copy; amounts use two decimals and the
//! rate four, rounded half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::settings::AppSettings;
use crate::domain::transaction::Transaction;
use crate::port::outbound::handoff::HandoffMessage;

/// Default operator number for chat handoffs.
pub const DEFAULT_PHONE_NUMBER: &str = "584120000000";

/// Shown when the operator has not configured bank details.
pub const MISSING_BANK_DETAILS: &str = "Solicite los datos bancarios por WhatsApp.";

/// Render `value` with exactly `dp` decimals.
#[must_use]
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Build the handoff message for `transaction`.
#[must_use]
pub fn compose(transaction: &Transaction, recipient: &str) -> HandoffMessage {
    let direction = transaction.direction();
    let source = direction.source().symbol();
    let target = direction.target().symbol();

    let body = format!(
        "*SOLICITUD DE ENVÍO*\n\n\
         *Monto enviado:* {source} {sent}\n\
         *Monto a recibir:* {target} {received}\n\
         *Tasa aplicada:* {rate}\n\n\
         *DATOS DEL BENEFICIARIO:*\n\
         👤 Nombre: {name}\n\
         🆔 Cédula: {id}\n\
         🏦 Banco: {bank}\n\n\
         _Envío el comprobante adjunto para verificación inmediata._",
        sent = to_fixed(transaction.amount_source(), 2),
        received = to_fixed(transaction.amount_target(), 2),
        rate = to_fixed(transaction.rate_applied(), 4),
        name = transaction.beneficiary_name(),
        id = transaction.beneficiary_id(),
        bank = transaction.bank_name(),
    );

    HandoffMessage {
        recipient: recipient.to_string(),
        body,
    }
}

/// Where the customer pays before attaching a proof.
#[must_use]
pub fn payment_instructions(settings: &AppSettings) -> &str {
    let details = settings.brazil_bank_details.trim();
    if details.is_empty() {
        MISSING_BANK_DETAILS
    } else {
        settings.brazil_bank_details.as_str()
    }
}
