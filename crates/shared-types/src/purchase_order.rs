use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Option sets ─────────────────────────────────────────────────────

/// Order type values in dropdown order.
pub const ORDER_TYPES: &[OrderType] = &[OrderType::Group, OrderType::Individual];

/// Currency values offered everywhere a currency is picked.
pub const CURRENCIES: &[Currency] = &[Currency::Usd, Currency::Inr];

/// Default upper bound for the order budget.
pub const DEFAULT_MAX_BUDGET: f64 = 99999.0;

/// Whether a purchase order covers one talent or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "Individual PO")]
    Individual,
    #[serde(rename = "Group PO")]
    Group,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Individual => "Individual PO",
            OrderType::Group => "Group PO",
        }
    }

    /// Parse a dropdown value; the empty placeholder maps to `None`.
    pub fn from_form_value(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual PO" => Ok(OrderType::Individual),
            "Group PO" => Ok(OrderType::Group),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    /// Parse a dropdown value; the empty placeholder maps to `None`.
    pub fn from_form_value(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "INR" => Ok(Currency::Inr),
            other => Err(format!("unknown currency: {other}")),
        }
    }
}

// ── Form value helpers ──────────────────────────────────────────────

/// Parse an `<input type="date">` value. Empty or malformed input is unset.
pub fn parse_form_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an `<input type="number">` value. Empty or malformed input is unset.
pub fn parse_form_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render an optional date back into an input value.
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Render an optional number back into an input value.
pub fn number_input_value(n: Option<f64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

// ── Records ─────────────────────────────────────────────────────────

/// Who sent the purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceivedFrom {
    pub name: String,
    pub email: String,
}

/// One talent on a requisition's roster, plus the rates entered once selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSelection {
    pub name: String,
    pub is_selected: bool,
    pub contract_duration: String,
    pub bill_rate: Option<f64>,
    pub bill_rate_currency: Option<Currency>,
    #[serde(rename = "standardTimeBR")]
    pub standard_time_br: Option<f64>,
    pub standard_time_currency: Option<Currency>,
    #[serde(rename = "overTimeBR")]
    pub over_time_br: Option<f64>,
    pub over_time_currency: Option<Currency>,
}

impl TalentSelection {
    /// A freshly listed, unselected talent with no rate data.
    pub fn unselected(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Copy of this talent with one field changed.
    pub fn with(&self, update: &TalentUpdate) -> Self {
        let mut next = self.clone();
        match update {
            TalentUpdate::Selected(v) => next.is_selected = *v,
            TalentUpdate::ContractDuration(v) => next.contract_duration = v.clone(),
            TalentUpdate::BillRate(v) => next.bill_rate = *v,
            TalentUpdate::BillRateCurrency(v) => next.bill_rate_currency = *v,
            TalentUpdate::StandardTimeBr(v) => next.standard_time_br = *v,
            TalentUpdate::StandardTimeCurrency(v) => next.standard_time_currency = *v,
            TalentUpdate::OverTimeBr(v) => next.over_time_br = *v,
            TalentUpdate::OverTimeCurrency(v) => next.over_time_currency = *v,
        }
        next
    }
}

/// A requisition added to the order, with its derived id and talent roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionEntry {
    pub job_title: String,
    pub req_id: String,
    pub talents: Vec<TalentSelection>,
}

impl RequisitionEntry {
    pub fn selected_count(&self) -> usize {
        self.talents.iter().filter(|t| t.is_selected).count()
    }
}

/// The purchase order being captured by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub client_name: String,
    pub order_type: Option<OrderType>,
    pub order_no: String,
    pub received_on: Option<NaiveDate>,
    pub received_from: ReceivedFrom,
    pub po_start_date: Option<NaiveDate>,
    pub po_end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub currency: Option<Currency>,
    #[serde(rename = "talentDetails")]
    pub requisitions: Vec<RequisitionEntry>,
}

impl Default for PurchaseOrder {
    /// An empty order always starts with one blank requisition entry.
    fn default() -> Self {
        Self {
            client_name: String::new(),
            order_type: None,
            order_no: String::new(),
            received_on: None,
            received_from: ReceivedFrom::default(),
            po_start_date: None,
            po_end_date: None,
            budget: None,
            currency: None,
            requisitions: vec![RequisitionEntry::default()],
        }
    }
}

/// A change to one order-level field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    ClientName(String),
    OrderType(Option<OrderType>),
    OrderNo(String),
    ReceivedOn(Option<NaiveDate>),
    ReceivedFromName(String),
    ReceivedFromEmail(String),
    PoStartDate(Option<NaiveDate>),
    PoEndDate(Option<NaiveDate>),
    Budget(Option<f64>),
    Currency(Option<Currency>),
}

/// A change to one field of a talent row.
#[derive(Debug, Clone, PartialEq)]
pub enum TalentUpdate {
    Selected(bool),
    ContractDuration(String),
    BillRate(Option<f64>),
    BillRateCurrency(Option<Currency>),
    StandardTimeBr(Option<f64>),
    StandardTimeCurrency(Option<Currency>),
    OverTimeBr(Option<f64>),
    OverTimeCurrency(Option<Currency>),
}

impl PurchaseOrder {
    /// Copy of this order with one field changed.
    pub fn with_field(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::ClientName(v) => next.client_name = v,
            FieldUpdate::OrderType(v) => next.order_type = v,
            FieldUpdate::OrderNo(v) => next.order_no = v,
            FieldUpdate::ReceivedOn(v) => next.received_on = v,
            FieldUpdate::ReceivedFromName(v) => next.received_from.name = v,
            FieldUpdate::ReceivedFromEmail(v) => next.received_from.email = v,
            FieldUpdate::PoStartDate(v) => next.po_start_date = v,
            FieldUpdate::PoEndDate(v) => next.po_end_date = v,
            FieldUpdate::Budget(v) => next.budget = v,
            FieldUpdate::Currency(v) => next.currency = v,
        }
        next
    }

    /// Copy of this order with the entry at `index` replaced.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn with_entry(&self, index: usize, entry: RequisitionEntry) -> Option<Self> {
        if index >= self.requisitions.len() {
            return None;
        }
        let requisitions = self
            .requisitions
            .iter()
            .enumerate()
            .map(|(i, e)| if i == index { entry.clone() } else { e.clone() })
            .collect();
        Some(Self {
            requisitions,
            ..self.clone()
        })
    }

    /// Copy of this order with one more blank requisition entry.
    pub fn with_new_entry(&self) -> Self {
        let mut requisitions = self.requisitions.clone();
        requisitions.push(RequisitionEntry::default());
        Self {
            requisitions,
            ..self.clone()
        }
    }
}
