//! `payments show | pay | receive`.

use tokio::io::AsyncBufRead;

use super::{require, settle};
use crate::app::{App, PaymentWorkflow, Route};
use crate::cli::args::PaymentCommand;
use crate::cli::prompt::Prompt;
use crate::core::error::{AppError, Result};
use crate::ui;
use crate::ui::screens::render_payment;

pub async fn payments<R: AsyncBufRead + Unpin>(
    app: &App,
    prompt: &mut Prompt<R>,
    command: PaymentCommand,
) -> Result<()> {
    let seller_id = match &command {
        PaymentCommand::Show { seller_id }
        | PaymentCommand::Pay { seller_id, .. }
        | PaymentCommand::Receive { seller_id, .. } => seller_id.clone(),
    };
    require(app, Route::SellerPayment(seller_id.clone()))?;

    let workflow = app.payment_workflow(&seller_id);
    let result = async {
        workflow.refresh().await?;
        match command {
            PaymentCommand::Show { .. } => {}
            PaymentCommand::Pay { amount, otp, .. } => pay(&workflow, prompt, amount, otp).await?,
            PaymentCommand::Receive { amount, .. } => {
                if let Some(amount) = amount {
                    workflow.set_receive_amount(amount)?;
                }
                workflow.receive().await?;
            }
        }
        Ok::<(), AppError>(())
    }
    .await;

    print!("{}", render_payment(&workflow.snapshot()));
    settle(app, workflow.drain_notices(), result)
}

/// Send the OTP, read codes until one verifies (or the admin gives up), then pay.
async fn pay<R: AsyncBufRead + Unpin>(
    workflow: &PaymentWorkflow,
    prompt: &mut Prompt<R>,
    amount: Option<f64>,
    otp: Option<String>,
) -> Result<()> {
    if let Some(amount) = amount {
        workflow.set_pay_amount(amount)?;
    }
    if let Some(hint) = workflow.snapshot().pay_amount_hint() {
        eprintln!("Warning: {}", hint);
    }

    workflow.send_otp().await?;
    ui::show_notices(&workflow.drain_notices());

    // A code passed on the command line gets exactly one attempt
    if let Some(code) = otp {
        workflow.verify_otp(&code).await?;
    } else {
        loop {
            let code = prompt.ask("Enter the OTP sent to the seller (blank to cancel):").await?;
            if code.is_empty() {
                workflow.reset()?;
                println!("Payment cancelled.");
                return Ok(());
            }
            match workflow.verify_otp(&code).await {
                Ok(()) => break,
                Err(e) if e.is_session_error() => return Err(e),
                Err(e) => {
                    tracing::debug!(error = %e, "OTP attempt rejected");
                    ui::show_notices(&workflow.drain_notices());
                }
            }
        }
    }

    workflow.pay().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::mock::MockAdminApi;
    use crate::core::session::{MemorySession, SessionStore};

    fn app_with(api: &Arc<MockAdminApi>) -> App {
        let session: Arc<dyn SessionStore> = Arc::new(MemorySession::with_token("stored"));
        App::new(api.clone(), session)
    }

    fn pay_command(otp: Option<&str>) -> PaymentCommand {
        PaymentCommand::Pay {
            seller_id: "7".to_string(),
            amount: None,
            otp: otp.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_wrong_code_then_right_code_pays() {
        let api = Arc::new(MockAdminApi::with_account(500.0, 0.0));
        let app = app_with(&api);
        let mut prompt = Prompt::new(&b"0000\n1234\n"[..]);

        payments(&app, &mut prompt, pay_command(None)).await.unwrap();

        assert_eq!(api.count("send_payment_otp"), 1);
        assert_eq!(api.count("verify_payment_otp"), 2);
        assert_eq!(api.count("pay_to_seller"), 1);
        let payable = api.account.lock().as_ref().map(|a| a.amount_payable_to_seller);
        assert_eq!(payable, Some(0.0));
    }

    #[tokio::test]
    async fn test_blank_code_cancels_without_paying() {
        let api = Arc::new(MockAdminApi::with_account(500.0, 0.0));
        let app = app_with(&api);
        let mut prompt = Prompt::new(&b"\n"[..]);

        payments(&app, &mut prompt, pay_command(None)).await.unwrap();

        assert_eq!(api.count("send_payment_otp"), 1);
        assert_eq!(api.count("verify_payment_otp"), 0);
        assert_eq!(api.count("pay_to_seller"), 0);
    }

    #[tokio::test]
    async fn test_code_from_flag_gets_one_attempt() {
        let api = Arc::new(MockAdminApi::with_account(500.0, 0.0));
        let app = app_with(&api);
        // Would verify if the prompt were consulted
        let mut prompt = Prompt::new(&b"1234\n"[..]);

        let err = payments(&app, &mut prompt, pay_command(Some("0000"))).await.unwrap_err();

        assert!(matches!(err, AppError::Api { status: 400, .. }));
        assert_eq!(api.count("verify_payment_otp"), 1);
        assert_eq!(api.count("pay_to_seller"), 0);
    }

    #[tokio::test]
    async fn test_code_from_flag_pays() {
        let api = Arc::new(MockAdminApi::with_account(500.0, 0.0));
        let app = app_with(&api);
        let mut prompt = Prompt::new(&b""[..]);

        payments(&app, &mut prompt, pay_command(Some("1234"))).await.unwrap();

        assert_eq!(api.count("verify_payment_otp"), 1);
        assert_eq!(api.count("pay_to_seller"), 1);
    }

    #[tokio::test]
    async fn test_session_error_stops_the_code_loop() {
        let api = Arc::new(MockAdminApi::with_account(500.0, 0.0));
        api.reject_session("verify_payment_otp");
        let app = app_with(&api);
        let mut prompt = Prompt::new(&b"0000\n1234\n"[..]);

        let err = payments(&app, &mut prompt, pay_command(None)).await.unwrap_err();

        assert!(err.is_session_error());
        assert_eq!(api.count("verify_payment_otp"), 1);
        assert_eq!(api.count("pay_to_seller"), 0);
    }

    #[tokio::test]
    async fn test_receive_skips_otp() {
        let api = Arc::new(MockAdminApi::with_account(0.0, 120.0));
        let app = app_with(&api);
        let mut prompt = Prompt::new(&b""[..]);

        let command = PaymentCommand::Receive {
            seller_id: "7".to_string(),
            amount: Some(20.0),
        };
        payments(&app, &mut prompt, command).await.unwrap();

        assert_eq!(api.count("send_payment_otp"), 0);
        assert_eq!(api.count("receive_from_seller"), 1);
        let receivable = api.account.lock().as_ref().map(|a| a.amount_receivable_from_seller);
        assert_eq!(receivable, Some(100.0));
    }
}
