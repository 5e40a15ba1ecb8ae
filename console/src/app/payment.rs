//! # Seller Payment Workflow
//!
//! One [`PaymentWorkflow`] per seller visit. Paying a seller is gated on an
//! email OTP; receiving money from a seller is not.
//!
//! ## Phases
//!
//! ```text
//!            send_otp            server ok              verify_otp ok
//!   Idle ──────────────▶ OtpRequested ──────▶ AwaitingCode ──────────▶ Verified
//!    ▲                        │ server error        │ wrong code            │
//!    │                        ▼                     ▼ (stays)               │
//!    └──────────── Idle ◀─────┘               AwaitingCode                  │
//!    └──────────────────────────── pay ok ──────────────────────────────────┘
//! ```
//!
//! - `receive` runs from any phase and never touches the OTP challenge.
//! - Every network call holds the workflow's busy slot; a second call while one
//!   is outstanding fails with [`AppError::State`] instead of overlapping.
//! - The OTP challenge is bound to the amount it was sent for. Editing the pay
//!   amount afterwards drops it.
//!
//! Balances only change through a server round-trip: every successful action
//! re-fetches the payment data.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{format_rupees, PaymentAccount};

use super::state::Notice;
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;

/// Shown for a zero, negative or non-numeric amount
pub const INVALID_AMOUNT: &str = "Enter valid amount";
/// Shown when the server rejects a code
pub const INVALID_OTP: &str = "Invalid or expired OTP. Please try again.";

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    Idle,
    /// Send-OTP request in flight
    OtpRequested,
    /// Code emailed to the seller, waiting for the admin to enter it
    AwaitingCode,
    /// Code accepted; payout enabled
    Verified,
}

/// OTP challenge state as seen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpState {
    NotSent,
    Sent,
    Verified,
}

impl PaymentPhase {
    pub fn otp_state(&self) -> OtpState {
        match self {
            PaymentPhase::Idle | PaymentPhase::OtpRequested => OtpState::NotSent,
            PaymentPhase::AwaitingCode => OtpState::Sent,
            PaymentPhase::Verified => OtpState::Verified,
        }
    }
}

/// An OTP sent to a seller's email for a specific payout amount
#[derive(Debug, Clone, PartialEq)]
pub struct OtpChallenge {
    pub email: String,
    pub amount: f64,
}

/// Network actions that occupy the busy slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    Refresh,
    SendOtp,
    VerifyOtp,
    Pay,
    Receive,
}

impl PaymentAction {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentAction::Refresh => "Loading payment data",
            PaymentAction::SendOtp => "Sending OTP",
            PaymentAction::VerifyOtp => "Verifying OTP",
            PaymentAction::Pay => "Payment",
            PaymentAction::Receive => "Receipt",
        }
    }
}

/// Payment screen state
#[derive(Debug, Clone)]
pub struct PaymentState {
    pub seller_id: String,
    /// Last balances fetched from the server
    pub account: Option<PaymentAccount>,
    pub phase: PaymentPhase,
    pub challenge: Option<OtpChallenge>,
    pub pay_amount: f64,
    pub receive_amount: f64,
    /// Inline error under the OTP field
    pub otp_error: Option<String>,
    pub load_error: Option<String>,
    pub notices: Vec<Notice>,
    pub busy: Option<PaymentAction>,
}

impl PaymentState {
    fn new(seller_id: String) -> Self {
        Self {
            seller_id,
            account: None,
            phase: PaymentPhase::Idle,
            challenge: None,
            pay_amount: 0.0,
            receive_amount: 0.0,
            otp_error: None,
            load_error: None,
            notices: Vec::new(),
            busy: None,
        }
    }

    pub fn payable(&self) -> f64 {
        self.account.as_ref().map_or(0.0, |a| a.amount_payable_to_seller)
    }

    pub fn receivable(&self) -> f64 {
        self.account.as_ref().map_or(0.0, |a| a.amount_receivable_from_seller)
    }

    pub fn otp_state(&self) -> OtpState {
        self.phase.otp_state()
    }

    /// Payout is enabled only for a verified challenge matching the current amount.
    pub fn can_pay(&self) -> bool {
        self.phase == PaymentPhase::Verified
            && is_valid_amount(self.pay_amount)
            && self
                .challenge
                .as_ref()
                .is_some_and(|challenge| challenge.amount == self.pay_amount)
    }

    /// Advisory range warning for the pay amount.
    pub fn pay_amount_hint(&self) -> Option<String> {
        range_hint(self.pay_amount, self.payable())
    }

    /// Advisory range warning for the receive amount.
    pub fn receive_amount_hint(&self) -> Option<String> {
        range_hint(self.receive_amount, self.receivable())
    }
}

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Amounts are expected in `[1, balance]`; anything else gets a warning but is
/// still submitted.
fn range_hint(amount: f64, balance: f64) -> Option<String> {
    if !is_valid_amount(amount) || (1.0..=balance).contains(&amount) {
        None
    } else {
        Some(format!(
            "Amount {} is outside the expected range {} to {}",
            format_rupees(amount),
            format_rupees(1.0),
            format_rupees(balance)
        ))
    }
}

/// Clears the busy slot on every exit path
struct BusyGuard {
    state: Arc<RwLock<PaymentState>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state.write().busy = None;
    }
}

/// Payment OTP workflow for one seller
pub struct PaymentWorkflow {
    api: Arc<dyn AdminApi>,
    seller_id: String,
    state: Arc<RwLock<PaymentState>>,
}

impl PaymentWorkflow {
    /// Create a workflow without loading balances.
    pub fn new(api: Arc<dyn AdminApi>, seller_id: impl Into<String>) -> Self {
        let seller_id = seller_id.into();
        Self {
            api,
            state: Arc::new(RwLock::new(PaymentState::new(seller_id.clone()))),
            seller_id,
        }
    }

    /// Create a workflow and load the seller's balances.
    pub async fn open(api: Arc<dyn AdminApi>, seller_id: impl Into<String>) -> Result<Self> {
        let workflow = Self::new(api, seller_id);
        workflow.refresh().await?;
        Ok(workflow)
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> PaymentState {
        self.state.read().clone()
    }

    pub fn phase(&self) -> PaymentPhase {
        self.state.read().phase
    }

    pub fn can_pay(&self) -> bool {
        self.state.read().can_pay()
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().notices)
    }

    fn begin(&self, action: PaymentAction) -> Result<BusyGuard> {
        let mut state = self.state.write();
        if let Some(current) = state.busy {
            tracing::debug!(seller_id = %self.seller_id, ?action, ?current, "Payment action rejected: busy");
            return Err(AppError::State(format!("{} already in progress", current.label())));
        }
        state.busy = Some(action);
        Ok(BusyGuard {
            state: self.state.clone(),
        })
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.state.read().busy {
            Some(current) => Err(AppError::State(format!("{} already in progress", current.label()))),
            None => Ok(()),
        }
    }

    /// Re-fetch balances. The receive amount resets to the receivable balance;
    /// the pay amount resets to the payable balance unless an OTP is pending for it.
    pub async fn refresh(&self) -> Result<()> {
        let _busy = self.begin(PaymentAction::Refresh)?;
        self.load_account().await
    }

    /// Fetch balances. The pay amount is kept while a challenge is bound to it.
    async fn load_account(&self) -> Result<()> {
        match self.api.get_payment_data(&self.seller_id).await {
            Ok(account) => {
                let mut state = self.state.write();
                if state.challenge.is_none() {
                    state.pay_amount = account.amount_payable_to_seller;
                }
                state.receive_amount = account.amount_receivable_from_seller;
                state.account = Some(account);
                state.load_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(seller_id = %self.seller_id, error = %e, "Failed to fetch payment data");
                let mut state = self.state.write();
                state.load_error = Some(e.to_string());
                state.notices.push(Notice::error("Failed to fetch payment data"));
                Err(e)
            }
        }
    }

    /// Balance refresh after a successful mutation. The mutation already
    /// succeeded, so a failure here is only recorded.
    async fn reload_after(&self, action: PaymentAction) {
        if let Err(e) = self.load_account().await {
            tracing::warn!(seller_id = %self.seller_id, ?action, error = %e, "Balance refresh failed after action");
        }
    }

    /// Edit the pay amount. A challenge sent for a different amount is dropped.
    pub fn set_pay_amount(&self, amount: f64) -> Result<()> {
        self.ensure_idle()?;
        let mut state = self.state.write();
        let stale = state
            .challenge
            .as_ref()
            .is_some_and(|challenge| challenge.amount != amount);
        if stale {
            tracing::info!(seller_id = %self.seller_id, "Pay amount changed, discarding OTP challenge");
            state.challenge = None;
            state.phase = PaymentPhase::Idle;
            state.otp_error = None;
            state.notices.push(Notice::info("Amount changed. Send a new OTP."));
        }
        state.pay_amount = amount;
        Ok(())
    }

    pub fn set_receive_amount(&self, amount: f64) -> Result<()> {
        self.ensure_idle()?;
        self.state.write().receive_amount = amount;
        Ok(())
    }

    /// Email a one-time code to the seller for the current pay amount.
    pub async fn send_otp(&self) -> Result<()> {
        let _busy = self.begin(PaymentAction::SendOtp)?;

        let (amount, email) = {
            let mut state = self.state.write();
            let amount = state.pay_amount;
            if !is_valid_amount(amount) {
                state.notices.push(Notice::error(INVALID_AMOUNT));
                return Err(AppError::Validation(INVALID_AMOUNT.to_string()));
            }
            let email = match &state.account {
                Some(account) => account.seller.email.clone(),
                None => return Err(AppError::State("Payment data not loaded".to_string())),
            };
            if let Some(hint) = state.pay_amount_hint() {
                tracing::warn!(seller_id = %self.seller_id, amount, "{}", hint);
            }
            state.phase = PaymentPhase::OtpRequested;
            state.challenge = None;
            state.otp_error = None;
            (amount, email)
        };

        tracing::info!(seller_id = %self.seller_id, amount, "Sending payment OTP");
        let result = self.api.send_payment_otp(&self.seller_id, amount).await;

        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.phase = PaymentPhase::AwaitingCode;
                state.challenge = Some(OtpChallenge { email, amount });
                state.notices.push(Notice::success("OTP sent to seller's email"));
                Ok(())
            }
            Err(e) => {
                tracing::error!(seller_id = %self.seller_id, error = %e, "Failed to send OTP");
                state.phase = PaymentPhase::Idle;
                state.notices.push(Notice::error("Failed to send OTP"));
                Err(e)
            }
        }
    }

    /// Check the code the seller received. A rejected code keeps the workflow
    /// waiting for another attempt.
    pub async fn verify_otp(&self, code: &str) -> Result<()> {
        let _busy = self.begin(PaymentAction::VerifyOtp)?;
        let code = code.trim();

        let email = {
            let mut state = self.state.write();
            if state.phase != PaymentPhase::AwaitingCode {
                return Err(AppError::State("Send an OTP first".to_string()));
            }
            if code.is_empty() {
                state.otp_error = Some("Enter the OTP".to_string());
                return Err(AppError::Validation("Enter the OTP".to_string()));
            }
            match &state.challenge {
                Some(challenge) => challenge.email.clone(),
                None => return Err(AppError::State("Send an OTP first".to_string())),
            }
        };

        tracing::info!(seller_id = %self.seller_id, "Verifying payment OTP");
        match self.api.verify_payment_otp(&email, code).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.phase = PaymentPhase::Verified;
                    state.otp_error = None;
                    state.notices.push(Notice::success("OTP verified"));
                }
                self.reload_after(PaymentAction::VerifyOtp).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(seller_id = %self.seller_id, error = %e, "OTP verification failed");
                if !e.is_session_error() {
                    let mut state = self.state.write();
                    state.otp_error = Some(INVALID_OTP.to_string());
                    state.notices.push(Notice::error(INVALID_OTP));
                }
                Err(e)
            }
        }
    }

    /// Pay the verified amount to the seller.
    pub async fn pay(&self) -> Result<()> {
        let _busy = self.begin(PaymentAction::Pay)?;

        let amount = {
            let state = self.state.read();
            if !state.can_pay() {
                return Err(AppError::State("Verify the OTP before paying".to_string()));
            }
            state.pay_amount
        };

        tracing::info!(seller_id = %self.seller_id, amount, "Paying seller");
        match self.api.pay_to_seller(&self.seller_id, amount).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.phase = PaymentPhase::Idle;
                    state.challenge = None;
                    state.otp_error = None;
                    state
                        .notices
                        .push(Notice::success(format!("Paid {} to seller", format_rupees(amount))));
                }
                self.reload_after(PaymentAction::Pay).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(seller_id = %self.seller_id, amount, error = %e, "Payment failed");
                self.state.write().notices.push(Notice::error("Payment failed"));
                Err(e)
            }
        }
    }

    /// Record money collected from the seller. Needs no OTP.
    pub async fn receive(&self) -> Result<()> {
        let _busy = self.begin(PaymentAction::Receive)?;

        let amount = {
            let mut state = self.state.write();
            let amount = state.receive_amount;
            if !is_valid_amount(amount) {
                state.notices.push(Notice::error(INVALID_AMOUNT));
                return Err(AppError::Validation(INVALID_AMOUNT.to_string()));
            }
            if let Some(hint) = state.receive_amount_hint() {
                tracing::warn!(seller_id = %self.seller_id, amount, "{}", hint);
            }
            amount
        };

        tracing::info!(seller_id = %self.seller_id, amount, "Receiving from seller");
        match self.api.receive_from_seller(&self.seller_id, amount).await {
            Ok(()) => {
                self.state
                    .write()
                    .notices
                    .push(Notice::success(format!("Received {} from seller", format_rupees(amount))));
                self.reload_after(PaymentAction::Receive).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(seller_id = %self.seller_id, amount, error = %e, "Receipt failed");
                self.state.write().notices.push(Notice::error("Failed to receive payment"));
                Err(e)
            }
        }
    }

    /// Drop any OTP challenge and restore the pay amount to the full balance.
    pub fn reset(&self) -> Result<()> {
        self.ensure_idle()?;
        let mut state = self.state.write();
        state.phase = PaymentPhase::Idle;
        state.challenge = None;
        state.otp_error = None;
        state.pay_amount = state.payable();
        Ok(())
    }
}
