//! The purchase order form as a state machine.
//!
//! [`PurchaseOrderForm`] owns the order being edited, the errors from the
//! last validation pass and the editing/submitted phase. Every change swaps
//! in a new [`PurchaseOrder`] snapshot instead of editing the current one.

use std::sync::Arc;

use crate::catalog::RequisitionCatalog;
use crate::config::FormSettings;
use crate::error::{AppError, ErrorMap};
use crate::purchase_order::{
    FieldUpdate, PurchaseOrder, RequisitionEntry, TalentSelection, TalentUpdate,
};
use crate::validation::{validate_order, MSG_FIX_ERRORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Terminal until [`PurchaseOrderForm::reset`].
    Submitted,
}

#[derive(Debug, Clone)]
pub struct PurchaseOrderForm {
    catalog: Arc<dyn RequisitionCatalog>,
    settings: FormSettings,
    order: PurchaseOrder,
    errors: ErrorMap,
    phase: FormPhase,
}

impl PurchaseOrderForm {
    pub fn new(catalog: Arc<dyn RequisitionCatalog>, settings: FormSettings) -> Self {
        Self {
            catalog,
            settings,
            order: PurchaseOrder::default(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn order(&self) -> &PurchaseOrder {
        &self.order
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &dyn RequisitionCatalog {
        self.catalog.as_ref()
    }

    /// Client dropdown options.
    pub fn clients(&self) -> Vec<String> {
        self.catalog.clients()
    }

    /// Job titles open under the currently selected client.
    pub fn job_titles(&self) -> Vec<String> {
        self.catalog
            .requisitions(&self.order.client_name)
            .into_iter()
            .map(|r| r.job_title)
            .collect()
    }

    fn editable(&self, action: &str) -> bool {
        if self.is_submitted() {
            tracing::debug!(action, "ignoring edit to a submitted purchase order");
            return false;
        }
        true
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        if !self.editable("set_field") {
            return;
        }
        self.order = self.order.with_field(update);
    }

    /// Restore the empty order, clear errors and return to editing.
    pub fn reset(&mut self) {
        tracing::debug!(phase = ?self.phase, "resetting purchase order form");
        self.order = PurchaseOrder::default();
        self.errors = ErrorMap::new();
        self.phase = FormPhase::Editing;
    }

    /// Store `job_title` on the entry and rebuild its req id and roster.
    ///
    /// A title the current client does not have clears both. Any talent data
    /// already entered on the entry is discarded.
    pub fn select_job_title(&mut self, entry_index: usize, job_title: &str) {
        if !self.editable("select_job_title") {
            return;
        }
        let requisition = self.catalog.find(&self.order.client_name, job_title);
        tracing::debug!(
            entry_index,
            job_title,
            client = %self.order.client_name,
            found = requisition.is_some(),
            "deriving requisition from job title"
        );

        let entry = match requisition {
            Some(req) => RequisitionEntry {
                job_title: job_title.to_string(),
                req_id: req.req_id,
                talents: req.talents.into_iter().map(TalentSelection::unselected).collect(),
            },
            None => RequisitionEntry {
                job_title: job_title.to_string(),
                req_id: String::new(),
                talents: Vec::new(),
            },
        };

        match self.order.with_entry(entry_index, entry) {
            Some(next) => self.order = next,
            None => tracing::warn!(entry_index, "job title selected for missing requisition entry"),
        }
    }

    /// Append a blank requisition entry.
    ///
    /// The UI only offers this for group orders; the operation itself accepts
    /// any order type.
    pub fn add_requisition_entry(&mut self) {
        if !self.editable("add_requisition_entry") {
            return;
        }
        self.order = self.order.with_new_entry();
    }

    /// Change one field of one talent row. Out-of-range indices are ignored.
    pub fn update_talent_field(
        &mut self,
        entry_index: usize,
        talent_index: usize,
        update: TalentUpdate,
    ) {
        if !self.editable("update_talent_field") {
            return;
        }
        let Some(entry) = self.order.requisitions.get(entry_index) else {
            tracing::warn!(entry_index, "talent update for missing requisition entry");
            return;
        };
        let Some(talent) = entry.talents.get(talent_index) else {
            tracing::warn!(entry_index, talent_index, "talent update for missing talent");
            return;
        };

        let talents = entry
            .talents
            .iter()
            .enumerate()
            .map(|(i, t)| if i == talent_index { talent.with(&update) } else { t.clone() })
            .collect();
        let entry = RequisitionEntry {
            talents,
            ..entry.clone()
        };
        if let Some(next) = self.order.with_entry(entry_index, entry) {
            self.order = next;
        }
    }

    /// Run validation and replace the stored errors with the result.
    ///
    /// Returns `true` when the order is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_order(&self.order, self.settings.max_budget);
        self.errors.is_empty()
    }

    /// Validate and, if the order passes, move to [`FormPhase::Submitted`].
    ///
    /// On failure the form stays editable and the returned error carries the
    /// same field errors the form now exposes through [`Self::errors`].
    pub fn submit(&mut self) -> Result<&PurchaseOrder, AppError> {
        if self.is_submitted() {
            return Ok(&self.order);
        }
        if !self.validate() {
            tracing::warn!(error_count = self.errors.len(), "purchase order failed validation");
            return Err(AppError::validation(MSG_FIX_ERRORS, self.errors.clone()));
        }
        tracing::info!(
            order_no = %self.order.order_no,
            client = %self.order.client_name,
            requisitions = self.order.requisitions.len(),
            "purchase order submitted"
        );
        self.phase = FormPhase::Submitted;
        Ok(&self.order)
    }

    /// Pretty-printed JSON of the current order, as shown after submission.
    pub fn submission_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.order)?)
    }
}
