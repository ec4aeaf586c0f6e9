//! Goal feasibility projection.

use chrono::NaiveDate;
use shared::GoalProjection;

use crate::domain::models::goal::DomainGoal;

/// Days per projection month. Remaining time is bucketed into fixed 30-day
/// windows rather than calendar months.
const DAYS_PER_MONTH: f64 = 30.0;

/// Project how feasible a goal is as of `today`.
///
/// `months_left` is floored at one so a past-due deadline still produces a
/// meaningful monthly figure instead of a division by zero. `monthly_needed`
/// goes to zero or negative once the goal is fully funded; callers read that
/// as "goal met". Assumes `target_amount > 0` and `saved_amount >= 0`, both
/// enforced by the goal service before a goal is ever stored.
pub fn project_goal(goal: &DomainGoal, today: NaiveDate) -> GoalProjection {
    let progress_percent = (goal.saved_amount / goal.target_amount * 100.0).round() as u32;

    let days_left = (goal.deadline - today).num_days();
    let months_left = ((days_left as f64 / DAYS_PER_MONTH).ceil() as i64).max(1);

    let monthly_needed = (goal.target_amount - goal.saved_amount) / months_left as f64;

    GoalProjection {
        progress_percent,
        months_left,
        monthly_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GoalPriority;

    fn goal(target: f64, saved: f64, deadline: NaiveDate) -> DomainGoal {
        DomainGoal {
            id: "goal::1".to_string(),
            name: "Summer trip".to_string(),
            target_amount: target,
            saved_amount: saved,
            deadline,
            priority: GoalPriority::ImportantNotUrgent,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_projection_three_months_out() {
        // 90 days away: exactly three 30-day windows
        let g = goal(3000.0, 600.0, date(2025, 4, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        assert_eq!(projection.progress_percent, 20);
        assert_eq!(projection.months_left, 3);
        assert_eq!(projection.monthly_needed, 800.0);
    }

    #[test]
    fn test_partial_month_rounds_up() {
        // 31 days left counts as two months
        let g = goal(1000.0, 0.0, date(2025, 2, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        assert_eq!(projection.months_left, 2);
        assert_eq!(projection.monthly_needed, 500.0);
    }

    #[test]
    fn test_past_deadline_floors_at_one_month() {
        let g = goal(500.0, 100.0, date(2024, 6, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        assert_eq!(projection.months_left, 1);
        assert_eq!(projection.monthly_needed, 400.0);
    }

    #[test]
    fn test_deadline_today_floors_at_one_month() {
        let g = goal(500.0, 0.0, date(2025, 1, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        assert_eq!(projection.months_left, 1);
    }

    #[test]
    fn test_fully_funded_goal() {
        let g = goal(750.0, 750.0, date(2025, 12, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        assert_eq!(projection.progress_percent, 100);
        assert!(projection.monthly_needed <= 0.0);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let g = goal(3.0, 1.0, date(2025, 6, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        // 33.33.. rounds down
        assert_eq!(projection.progress_percent, 33);

        let g = goal(3.0, 2.0, date(2025, 6, 1));
        let projection = project_goal(&g, date(2025, 1, 1));

        // 66.66.. rounds up
        assert_eq!(projection.progress_percent, 67);
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let g = goal(1200.0, 300.0, date(2025, 9, 15));
        let today = date(2025, 2, 1);

        assert_eq!(project_goal(&g, today), project_goal(&g, today));
    }
}
