// src/presentation/view/optimistic.rs
use uuid::Uuid;

use crate::application::dto::{ContractDto, EmployeeDto, TransactionDto};

/// A record that can be matched against its authoritative copy by id.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for TransactionDto {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for ContractDto {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for EmployeeDto {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Where a list sits in the edit lifecycle. `overlay` is the locally
/// proposed record; it never outlives the next authoritative fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Authoritative { records: Vec<T> },
    Optimistic { records: Vec<T>, overlay: T },
    AwaitingRefresh { records: Vec<T>, overlay: T },
}

#[derive(Debug, Clone)]
pub struct OptimisticList<T> {
    state: ListView<T>,
}

impl<T: Keyed + Clone> OptimisticList<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            state: ListView::Authoritative { records },
        }
    }

    pub fn state(&self) -> &ListView<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self.state, ListView::Authoritative { .. })
    }

    /// Last authoritative records, ignoring any overlay.
    pub fn authoritative(&self) -> &[T] {
        match &self.state {
            ListView::Authoritative { records }
            | ListView::Optimistic { records, .. }
            | ListView::AwaitingRefresh { records, .. } => records,
        }
    }

    /// Shows `edited` in place of the record with the same key until the
    /// next refresh. A second proposal replaces the first.
    pub fn propose(&mut self, edited: T) {
        let records = self.take_records();
        self.state = ListView::Optimistic {
            records,
            overlay: edited,
        };
    }

    pub fn mark_response_observed(&mut self) {
        let state = std::mem::replace(
            &mut self.state,
            ListView::Authoritative {
                records: Vec::new(),
            },
        );
        self.state = match state {
            ListView::Optimistic { records, overlay } => {
                ListView::AwaitingRefresh { records, overlay }
            }
            other => other,
        };
    }

    /// Replaces everything with the fetched records. The overlay is dropped
    /// whole, never merged.
    pub fn refresh(&mut self, records: Vec<T>) {
        self.state = ListView::Authoritative { records };
    }

    pub fn discard_overlay(&mut self) {
        let records = self.take_records();
        self.state = ListView::Authoritative { records };
    }

    /// The list as the user should see it right now.
    pub fn rendered(&self) -> Vec<T> {
        match &self.state {
            ListView::Authoritative { records } => records.clone(),
            ListView::Optimistic { records, overlay }
            | ListView::AwaitingRefresh { records, overlay } => records
                .iter()
                .map(|record| {
                    if record.key() == overlay.key() {
                        overlay.clone()
                    } else {
                        record.clone()
                    }
                })
                .collect(),
        }
    }

    fn take_records(&mut self) -> Vec<T> {
        let state = std::mem::replace(
            &mut self.state,
            ListView::Authoritative {
                records: Vec::new(),
            },
        );
        match state {
            ListView::Authoritative { records }
            | ListView::Optimistic { records, .. }
            | ListView::AwaitingRefresh { records, .. } => records,
        }
    }
}
