use shared::{Goal, GoalWithProjection};

use crate::domain::goal_service::ProjectedGoal;
use crate::domain::models::goal::DomainGoal;

pub struct GoalMapper;

impl GoalMapper {
    /// Convert a domain goal to its wire DTO
    pub fn to_dto(domain: DomainGoal) -> Goal {
        Goal {
            id: domain.id,
            name: domain.name,
            target_amount: domain.target_amount,
            saved_amount: domain.saved_amount,
            deadline: domain.deadline.format("%Y-%m-%d").to_string(),
            priority: domain.priority,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    /// Pair the goal DTO with its projection
    pub fn to_with_projection(projected: ProjectedGoal) -> GoalWithProjection {
        GoalWithProjection {
            goal: Self::to_dto(projected.goal),
            projection: projected.projection,
        }
    }

    pub fn to_with_projection_list(projected_goals: Vec<ProjectedGoal>) -> Vec<GoalWithProjection> {
        projected_goals
            .into_iter()
            .map(Self::to_with_projection)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{GoalPriority, GoalProjection};

    fn sample_projected_goal() -> ProjectedGoal {
        ProjectedGoal {
            goal: DomainGoal {
                id: "goal::1700000000000".to_string(),
                name: "New bike".to_string(),
                target_amount: 100.0,
                saved_amount: 40.0,
                deadline: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                priority: GoalPriority::NotImportantUrgent,
                created_at: "2025-01-01T00:00:00Z".to_string(),
                updated_at: "2025-01-01T00:00:00Z".to_string(),
            },
            projection: GoalProjection {
                progress_percent: 40,
                months_left: 9,
                monthly_needed: 6.666666666666667,
            },
        }
    }

    #[test]
    fn test_to_with_projection() {
        let projected = sample_projected_goal();
        let dto = GoalMapper::to_with_projection(projected.clone());

        assert_eq!(dto.goal.id, projected.goal.id);
        assert_eq!(dto.goal.deadline, "2025-12-01");
        assert_eq!(dto.goal.priority, GoalPriority::NotImportantUrgent);
        assert_eq!(dto.projection, projected.projection);
    }
}
