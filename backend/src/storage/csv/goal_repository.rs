//! # CSV Goal Repository
//!
//! File-based goal storage in a single `goals.csv`. Unlike expenses, goals
//! are mutable: updates and deletes rewrite the file through a temp file and
//! an atomic rename, inserts append.

use anyhow::Result;
use async_trait::async_trait;
use csv::{Reader, Writer, WriterBuilder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::str::FromStr;

use super::connection::CsvConnection;
use crate::domain::models::goal::DomainGoal;
use crate::storage::traits::GoalStorage;

const GOALS_HEADER: &str = "id,name,target_amount,saved_amount,deadline,priority,created_at,updated_at\n";

/// CSV record structure for goals
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRecord {
    id: String,
    name: String,
    target_amount: f64,
    saved_amount: f64,
    deadline: String,
    priority: String,
    created_at: String,
    updated_at: String,
}

impl From<DomainGoal> for GoalRecord {
    fn from(goal: DomainGoal) -> Self {
        GoalRecord {
            id: goal.id,
            name: goal.name,
            target_amount: goal.target_amount,
            saved_amount: goal.saved_amount,
            deadline: goal.deadline.format("%Y-%m-%d").to_string(),
            priority: goal.priority.to_string(),
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl TryFrom<GoalRecord> for DomainGoal {
    type Error = anyhow::Error;

    fn try_from(record: GoalRecord) -> Result<Self> {
        let priority = shared::GoalPriority::from_str(&record.priority)
            .map_err(|e| anyhow::anyhow!("Failed to parse goal priority: {}", e))?;
        let deadline = chrono::NaiveDate::parse_from_str(&record.deadline, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Failed to parse goal deadline: {}", e))?;

        Ok(DomainGoal {
            id: record.id,
            name: record.name,
            target_amount: record.target_amount,
            saved_amount: record.saved_amount,
            deadline,
            priority,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// CSV-backed goal repository
#[derive(Clone)]
pub struct GoalRepository {
    connection: CsvConnection,
}

impl GoalRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Create the goals CSV file with its header when missing
    fn ensure_goals_file_exists(&self) -> Result<()> {
        let file_path = self.connection.goals_file_path();

        if !file_path.exists() {
            std::fs::write(&file_path, GOALS_HEADER)?;
            debug!("Created goals CSV file: {:?}", file_path);
        }

        Ok(())
    }

    /// Read every parseable goal from the CSV file
    fn read_goals(&self) -> Result<Vec<DomainGoal>> {
        self.ensure_goals_file_exists()?;

        let file = File::open(self.connection.goals_file_path())?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut goals = Vec::new();

        for result in csv_reader.deserialize::<GoalRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Failed to read goal record: {}. Skipping.", e);
                    continue;
                }
            };

            match DomainGoal::try_from(record) {
                Ok(goal) => goals.push(goal),
                Err(e) => {
                    warn!("Failed to parse goal record: {}. Skipping.", e);
                    continue;
                }
            }
        }

        Ok(goals)
    }

    /// Write the full goal list, replacing the file atomically
    fn write_goals(&self, goals: &[DomainGoal]) -> Result<()> {
        let file_path = self.connection.goals_file_path();
        let temp_file_path = file_path.with_extension("csv.tmp");

        {
            let temp_file = File::create(&temp_file_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(temp_file));

            for goal in goals {
                let record = GoalRecord::from(goal.clone());
                csv_writer.serialize(record)?;
            }

            csv_writer.flush()?;
        }

        std::fs::rename(&temp_file_path, &file_path)?;

        debug!("Wrote {} goals to {:?}", goals.len(), file_path);
        Ok(())
    }
}

#[async_trait]
impl GoalStorage for GoalRepository {
    async fn store_goal(&self, goal: &DomainGoal) -> Result<()> {
        self.ensure_goals_file_exists()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.connection.goals_file_path())?;

        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(file);
        csv_writer.serialize(GoalRecord::from(goal.clone()))?;
        csv_writer.flush()?;

        info!("Stored goal: {}", goal.id);
        Ok(())
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>> {
        let goals = self.read_goals()?;
        Ok(goals.into_iter().find(|g| g.id == goal_id))
    }

    async fn list_goals(&self) -> Result<Vec<DomainGoal>> {
        let mut goals = self.read_goals()?;

        // Soonest deadline first
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline));

        Ok(goals)
    }

    async fn update_goal(&self, goal: &DomainGoal) -> Result<()> {
        let mut goals = self.read_goals()?;

        let position = goals
            .iter()
            .position(|g| g.id == goal.id)
            .ok_or_else(|| anyhow::anyhow!("Goal not found: {}", goal.id))?;

        goals[position] = goal.clone();
        self.write_goals(&goals)?;

        info!("Updated goal: {}", goal.id);
        Ok(())
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let goals = self.read_goals()?;
        let original_len = goals.len();

        let remaining: Vec<DomainGoal> = goals.into_iter().filter(|g| g.id != goal_id).collect();

        if remaining.len() == original_len {
            return Ok(false);
        }

        self.write_goals(&remaining)?;
        info!("Deleted goal: {}", goal_id);
        Ok(true)
    }
}
