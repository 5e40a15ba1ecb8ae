//! Seller payment screen renderer.

use shared::format_rupees;

use crate::app::{OtpState, PaymentState};

pub fn render_payment(state: &PaymentState) -> String {
    let mut out = String::new();

    match &state.account {
        Some(account) => {
            out.push_str(&format!(
                "Seller: {} <{}> (id {})\n",
                account.seller.name, account.seller.email, state.seller_id
            ));
            out.push_str(&format!(
                "Payable to seller:       {}\n",
                format_rupees(account.amount_payable_to_seller)
            ));
            out.push_str(&format!(
                "Receivable from seller:  {}\n",
                format_rupees(account.amount_receivable_from_seller)
            ));
        }
        None => {
            out.push_str(&format!("Seller {}: payment data not loaded\n", state.seller_id));
            if let Some(error) = &state.load_error {
                out.push_str(&format!("  {}\n", error));
            }
        }
    }

    let otp = match state.otp_state() {
        OtpState::NotSent => "not sent",
        OtpState::Sent => "sent, awaiting code",
        OtpState::Verified => "verified",
    };
    out.push_str(&format!("OTP: {}\n", otp));

    if let Some(challenge) = &state.challenge {
        out.push_str(&format!(
            "  challenge for {} sent to {}\n",
            format_rupees(challenge.amount),
            challenge.email
        ));
    }
    if let Some(error) = &state.otp_error {
        out.push_str(&format!("  {}\n", error));
    }
    if let Some(hint) = state.pay_amount_hint() {
        out.push_str(&format!("Warning: {}\n", hint));
    }
    if let Some(hint) = state.receive_amount_hint() {
        out.push_str(&format!("Warning: {}\n", hint));
    }
    out
}
