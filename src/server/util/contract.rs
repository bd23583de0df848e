//! Insurer contract aggregation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    model::report::InsurerTotalDto,
    server::model::db::{ContractModel, InsurerModel},
};

/// Contract count and summed monthly cap per insurer, ordered by insurer name.
///
/// Insurers without contracts are left out, as are contracts whose insurer is unknown.
pub fn insurer_totals(
    insurers: &[InsurerModel],
    contracts: &[ContractModel],
) -> Vec<InsurerTotalDto> {
    let mut by_insurer: HashMap<i32, (u64, f64)> = HashMap::new();
    for contract in contracts {
        let entry = by_insurer.entry(contract.insurer_id).or_default();
        entry.0 += 1;
        entry.1 += contract.monthly_cap;
    }

    let mut totals: Vec<InsurerTotalDto> = insurers
        .iter()
        .filter_map(|insurer| {
            by_insurer
                .get(&insurer.id)
                .map(|&(contract_count, monthly_cap_total)| InsurerTotalDto {
                    name: insurer.name.clone(),
                    contract_count,
                    monthly_cap_total,
                })
        })
        .collect();

    totals.sort_by(|a, b| a.name.cmp(&b.name));
    totals
}

/// Contracts ending on or before `cutoff`, soonest first.
///
/// Contracts that already ended are included.
pub fn contracts_expiring(contracts: &[ContractModel], cutoff: NaiveDate) -> Vec<ContractModel> {
    let mut expiring: Vec<ContractModel> = contracts
        .iter()
        .filter(|contract| contract.end_date <= cutoff)
        .cloned()
        .collect();

    expiring.sort_by_key(|contract| (contract.end_date, contract.id));
    expiring
}
