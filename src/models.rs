// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid transaction type '{}', expected 'income' or 'expense'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub org_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category_id: String,
    pub product_id: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Purchase date falls back to the creation timestamp when absent.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.purchase_date.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub org_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub org_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(rename = "_id")]
    pub id: String,
    pub org_id: String,
    pub created_at: DateTime<Utc>,
    pub amount: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. The backend resolves (or implicitly creates) products and
/// categories by name, so the payload carries names rather than ids.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category_name: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
    #[serde(default)]
    pub affected_transactions: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Transaction with denormalized display names attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTransaction {
    #[serde(flatten)]
    pub tx: Transaction,
    pub category_name: String,
    pub product_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryExpense {
    pub category_id: String,
    pub category_name: String,
    pub total: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductExpense {
    pub product_id: String,
    pub product_name: String,
    pub total: Decimal,
    pub percentage: Decimal,
}

/// Period totals recomputed from scratch on every fetch cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    pub wallet_balance: Decimal,
    pub expense_by_category: Vec<CategoryExpense>,
}
