use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Housekeeping,
    Maintenance,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housekeeping => "housekeeping",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Housekeeping => "ทำความสะอาด",
            Self::Maintenance => "แจ้งซ่อม",
        }
    }
}

impl std::str::FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "housekeeping" => Ok(Self::Housekeeping),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(format!("unknown task kind '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "รอดำเนินการ",
            Self::InProgress => "กำลังดำเนินการ",
            Self::Completed => "เสร็จสิ้น",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TaskDto {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub kind: TaskKind,
    pub description: String,
    pub price: Option<i32>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct CreateTaskDto {
    /// Required for admins; ignored for room accounts.
    pub room_id: Option<i32>,
    pub kind: TaskKind,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateTaskStatusDto {
    pub status: TaskStatus,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct CompleteTaskDto {
    #[validate(range(min = 0))]
    pub price: i32,
}
