use napi::Result as NapiResult;
use napi_derive::napi;

use canrepay_core::input::RawNetWorthFields;
use canrepay_core::{from_json, to_json};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Repayment calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_amortization(input_json: String) -> NapiResult<String> {
    let input: canrepay_core::amortization::LoanInputs =
        from_json(&input_json).map_err(to_napi_error)?;
    let output =
        canrepay_core::amortization::compute_amortization(&input).map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_standard_repayment_plan(input_json: String) -> NapiResult<String> {
    let input: canrepay_core::repayment_plan::StandardPlanInput =
        from_json(&input_json).map_err(to_napi_error)?;
    let output = canrepay_core::repayment_plan::compute_standard_repayment_plan(&input)
        .map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Net worth
// ---------------------------------------------------------------------------

/// Takes the form fields as typed; blank or non-numeric entries count as zero.
#[napi]
pub fn compute_net_worth(fields_json: String) -> NapiResult<String> {
    let fields: RawNetWorthFields = from_json(&fields_json).map_err(to_napi_error)?;
    let output = canrepay_core::net_worth::compute_net_worth(&fields.to_input());
    to_json(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loan tracking and budget
// ---------------------------------------------------------------------------

#[napi]
pub fn summarize_loans(ledger_json: String) -> NapiResult<String> {
    let ledger: canrepay_core::loans::LoanLedger =
        from_json(&ledger_json).map_err(to_napi_error)?;
    let output = canrepay_core::loans::summarize_loans(&ledger);
    to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_total_owed(input_json: String) -> NapiResult<String> {
    let input: canrepay_core::loans::ProjectionInput =
        from_json(&input_json).map_err(to_napi_error)?;
    let output = canrepay_core::loans::project_total_owed(&input).map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_monthly_budget(input_json: String) -> NapiResult<String> {
    let input: canrepay_core::budget::BudgetInput =
        from_json(&input_json).map_err(to_napi_error)?;
    let output = canrepay_core::budget::compute_monthly_budget(&input).map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn default_assumptions() -> NapiResult<String> {
    to_json(&canrepay_core::assumptions::RepaymentAssumptions::default())
        .map_err(to_napi_error)
}
