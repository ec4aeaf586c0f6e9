//! Settlement calculation for the two-person expense split.
//!
//! Every expense is split 50/50 regardless of who paid it, so the transfer
//! that settles both sides is half the payer imbalance.

use shared::{Balance, Profile};

use crate::domain::models::expense::DomainExpense;

/// Reduce the full expense collection into a settlement summary.
///
/// Pure function of its input: summation is commutative, so any ordering of
/// the same expenses yields an identical result. An empty list yields an
/// all-zero balance.
pub fn compute_balance(expenses: &[DomainExpense]) -> Balance {
    let mut hasnaa_paid = 0.0;
    let mut achraf_paid = 0.0;

    for expense in expenses {
        match expense.paid_by {
            Profile::Hasnaa => hasnaa_paid += expense.amount,
            Profile::Achraf => achraf_paid += expense.amount,
        }
    }

    let difference = hasnaa_paid - achraf_paid;

    let (who_owes, amount) = if difference > 0.0 {
        (Some(Profile::Achraf), difference / 2.0)
    } else if difference < 0.0 {
        (Some(Profile::Hasnaa), difference.abs() / 2.0)
    } else {
        (None, 0.0)
    };

    Balance {
        hasnaa_paid,
        achraf_paid,
        difference,
        who_owes,
        amount,
    }
}
