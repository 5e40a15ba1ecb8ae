use serde::{Deserialize, Serialize};

use super::sellers::Seller;

/// Outstanding balances between the platform and one seller
/// (`/admin/get-payment-data?sellerId=`).
///
/// Both amounts are non-negative and only change server-side, as a result of
/// a payout or a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
    #[serde(default)]
    pub id: i64,
    pub seller: Seller,
    /// Money owed by the platform to the seller
    pub amount_payable_to_seller: f64,
    /// Money owed by the seller to the platform
    pub amount_receivable_from_seller: f64,
}
