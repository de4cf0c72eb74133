// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The order status state machine.
//!
//! | From       | Allowed to                         |
//! |------------|------------------------------------|
//! | Pending    | Waiting, Cancelled                 |
//! | Waiting    | InProgress, Processing, Cancelled  |
//! | InProgress | Processing, Ready, Cancelled       |
//! | Processing | Ready, InProgress, Cancelled       |
//! | Ready      | Completed, InProgress              |
//! | Completed  | (terminal)                         |
//! | Cancelled  | Pending (reopen)                   |

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Where an order stands in the wash pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Submitted, not yet queued.
    Pending,
    /// Queued for a bay.
    Waiting,
    /// Being washed.
    InProgress,
    /// Finishing steps (drying, waxing).
    Processing,
    /// Ready for pickup.
    Ready,
    /// Picked up. Terminal.
    Completed,
    /// Called off. Can be reopened.
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Waiting => write!(f, "waiting"),
            OrderStatus::InProgress => write!(f, "in_progress"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl OrderStatus {
    /// Statuses reachable in one step.
    pub fn available_transitions(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pending => &[Waiting, Cancelled],
            Waiting => &[InProgress, Processing, Cancelled],
            InProgress => &[Processing, Ready, Cancelled],
            Processing => &[Ready, InProgress, Cancelled],
            Ready => &[Completed, InProgress],
            Completed => &[],
            Cancelled => &[Pending],
        }
    }

    /// The default forward step, used by "advance" controls.
    pub fn next_status(self) -> Option<OrderStatus> {
        use OrderStatus::*;
        match self {
            Pending => Some(Waiting),
            Waiting => Some(InProgress),
            InProgress | Processing => Some(Ready),
            Ready => Some(Completed),
            Completed | Cancelled => None,
        }
    }

    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self.available_transitions().contains(&to)
    }

    pub fn is_terminal(self) -> bool {
        self.available_transitions().is_empty()
    }

    /// Customer-facing label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Waiting => "Aguardando",
            OrderStatus::InProgress => "Em Andamento",
            OrderStatus::Processing => "Processando",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    /// Tracking progress bar percentage.
    pub fn progress(self) -> u8 {
        match self {
            OrderStatus::Waiting => 25,
            OrderStatus::InProgress | OrderStatus::Processing => 50,
            OrderStatus::Ready => 75,
            OrderStatus::Completed => 100,
            OrderStatus::Pending | OrderStatus::Cancelled => 0,
        }
    }
}

/// Free-function form of [`OrderStatus::available_transitions`].
pub fn available_transitions(current: OrderStatus) -> &'static [OrderStatus] {
    current.available_transitions()
}

/// Free-function form of [`OrderStatus::next_status`].
pub fn next_status(current: OrderStatus) -> Option<OrderStatus> {
    current.next_status()
}
