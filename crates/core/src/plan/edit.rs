//! User edits applied to a list of rename plans.

use serde::{Deserialize, Serialize};

use super::types::RenamePlan;

/// An edit submitted against a plan list by a presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanEdit {
    /// Replace the canonical id of the plan at `index` and recompute the
    /// proposed name from it.
    SetCanonicalId { index: usize, id: String },
    /// Override the proposed name of the plan at `index` directly.
    SetProposedName { index: usize, name: String },
}

/// Applies an edit, returning the updated plan list.
///
/// Edits referring to an out-of-range index are ignored.
pub fn apply_edit(plans: &[RenamePlan], edit: PlanEdit) -> Vec<RenamePlan> {
    let mut updated = plans.to_vec();
    match edit {
        PlanEdit::SetCanonicalId { index, id } => {
            if let Some(plan) = updated.get_mut(index) {
                plan.canonical_id = id;
                plan.recompute_proposed();
            }
        }
        PlanEdit::SetProposedName { index, name } => {
            if let Some(plan) = updated.get_mut(index) {
                plan.proposed_name = name;
            }
        }
    }
    updated
}
