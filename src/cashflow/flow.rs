//! Flow-diagram input: income decomposition edges and entity fee breakdowns.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ledger::TimeRecord;

use super::metrics::CashflowMetrics;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowNode {
    HourlyFees,
    FixedFees,
    TotalIncome,
    TotalCost,
    TotalProfit,
}

impl fmt::Display for FlowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowNode::HourlyFees => "Hourly Fees",
            FlowNode::FixedFees => "Fixed Fees",
            FlowNode::TotalIncome => "Total Income",
            FlowNode::TotalCost => "Costs",
            FlowNode::TotalProfit => "Profit",
        };
        f.write_str(label)
    }
}

/// One link of the flow diagram.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlowEdge {
    pub source: FlowNode,
    pub target: FlowNode,
    pub value: f64,
}

/// Builds the income-decomposition edges for a period's metrics. Only
/// strictly positive flows are emitted; zero or negative flows are omitted
/// entirely rather than drawn at zero width.
pub fn flow_edges(metrics: &CashflowMetrics) -> Vec<FlowEdge> {
    let mut edges = Vec::new();
    push_edge(
        &mut edges,
        FlowNode::HourlyFees,
        FlowNode::TotalIncome,
        metrics.hourly_fees,
    );
    push_edge(
        &mut edges,
        FlowNode::FixedFees,
        FlowNode::TotalIncome,
        metrics.fixed_fees,
    );
    push_edge(
        &mut edges,
        FlowNode::TotalIncome,
        FlowNode::TotalCost,
        metrics.total_cost,
    );
    push_edge(
        &mut edges,
        FlowNode::TotalIncome,
        FlowNode::TotalProfit,
        metrics.total_profit,
    );
    edges
}

fn push_edge(edges: &mut Vec<FlowEdge>, source: FlowNode, target: FlowNode, value: f64) {
    if value > 0.0 {
        edges.push(FlowEdge {
            source,
            target,
            value,
        });
    }
}

/// Entity dimension for the fee breakdown feeding the diagram's left side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Customer,
    Person,
    PriceModel,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Project => "Project",
            EntityKind::Customer => "Customer",
            EntityKind::Person => "Person",
            EntityKind::PriceModel => "Price Model",
        };
        f.write_str(label)
    }
}

/// Fee subtotal attributed to one entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityFee {
    pub name: String,
    pub fee: f64,
}

/// Groups fees by entity label, keeping only entities with a positive fee
/// total, sorted by fee descending (ties broken by name). Records without a
/// label for the chosen dimension are skipped; the price-model dimension is
/// always labeled.
pub fn entity_fees<'a, I>(records: I, kind: EntityKind) -> Vec<EntityFee>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        let label = match kind {
            EntityKind::Project => record.project.clone(),
            EntityKind::Customer => record.customer.clone(),
            EntityKind::Person => record.person.clone(),
            EntityKind::PriceModel => Some(record.price_model.label().to_string()),
        };
        let Some(label) = label else { continue };
        *totals.entry(label).or_default() += record.fee.unwrap_or_default();
    }
    let mut fees: Vec<EntityFee> = totals
        .into_iter()
        .filter(|(_, fee)| *fee > 0.0)
        .map(|(name, fee)| EntityFee { name, fee })
        .collect();
    fees.sort_by(|a, b| {
        b.fee
            .partial_cmp(&a.fee)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    fees
}

/// Keeps the `top_n` largest entities and folds the tail into a single
/// `"Other (k)"` bucket.
pub fn group_top_entities(fees: Vec<EntityFee>, top_n: usize) -> Vec<EntityFee> {
    if fees.len() <= top_n {
        return fees;
    }
    let mut grouped = fees;
    let tail = grouped.split_off(top_n);
    let other_total: f64 = tail.iter().map(|entry| entry.fee).sum();
    grouped.push(EntityFee {
        name: format!("Other ({})", tail.len()),
        fee: other_total,
    });
    grouped
}
