use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct Portfolio {
    pub id: i32,
    pub portfolio_name: String,
    pub description: Option<String>,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct Stock {
    pub id: i32,
    pub stock_symbol: String,
    pub portfolio_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Command {
    Select,
    Insert,
    Update,
    Delete,
}

/// Result envelope returned by every database route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub command: Command,
    pub row_count: usize,
    pub rows: Vec<T>,
}

impl<T> QueryResult<T> {
    pub fn new(command: Command, rows: Vec<T>) -> Self {
        Self {
            command,
            row_count: rows.len(),
            rows,
        }
    }

    pub fn single(command: Command, row: T) -> Self {
        Self::new(command, vec![row])
    }
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub user: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserLookupQuery {
    #[serde(alias = "user")]
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserQuery {
    #[serde(alias = "data")]
    pub user: String,
}

#[derive(Debug, Deserialize)]
pub struct UserScope {
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioFields {
    pub portfolio_name: String,
    pub description: Option<String>,
    pub user_id: i32,
}

/// Query for `POST /portfolio/edit=<id>` and `POST /portfolio/delete=<id>`;
/// the name is only required when editing.
#[derive(Debug, Deserialize)]
pub struct PortfolioActionQuery {
    pub portfolio_name: Option<String>,
    pub description: Option<String>,
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioScope {
    pub portfolio_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateStockQuery {
    pub stock: String,
    pub portfolio_id: i32,
}

/// Write operations addressed as `POST /portfolio/edit=<id>` and
/// `POST /portfolio/delete=<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioAction {
    Edit(i32),
    Delete(i32),
}

impl FromStr for PortfolioAction {
    type Err = String;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let (verb, id) = segment
            .split_once('=')
            .ok_or_else(|| format!("Unknown portfolio action: {}", segment))?;

        let id = id
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("Invalid portfolio id: {}", id))?;

        match verb {
            "edit" => Ok(PortfolioAction::Edit(id)),
            "delete" => Ok(PortfolioAction::Delete(id)),
            other => Err(format!("Unknown portfolio action: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_action_parses_edit_and_delete() {
        assert_eq!("edit=7".parse::<PortfolioAction>(), Ok(PortfolioAction::Edit(7)));
        assert_eq!("delete=12".parse::<PortfolioAction>(), Ok(PortfolioAction::Delete(12)));
    }

    #[test]
    fn portfolio_action_rejects_garbage() {
        assert!("7".parse::<PortfolioAction>().is_err());
        assert!("archive=7".parse::<PortfolioAction>().is_err());
        assert!("edit=abc".parse::<PortfolioAction>().is_err());
        assert!("delete=".parse::<PortfolioAction>().is_err());
    }

    #[test]
    fn query_result_serializes_like_a_driver_result() {
        let result = QueryResult::single(
            Command::Insert,
            User {
                id: 1,
                username: "ada".to_string(),
            },
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["command"], "INSERT");
        assert_eq!(json["rowCount"], 1);
        assert_eq!(json["rows"][0]["username"], "ada");
    }

    #[test]
    fn empty_select_has_zero_row_count() {
        let result: QueryResult<Portfolio> = QueryResult::new(Command::Select, Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["command"], "SELECT");
        assert_eq!(json["rowCount"], 0);
        assert!(json["rows"].as_array().unwrap().is_empty());
    }
}
