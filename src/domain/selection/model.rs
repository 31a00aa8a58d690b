use serde::Serialize;

/// Line count used when the request carries no usable `tail_lines`.
pub const DEFAULT_TAIL_LINES: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceSummary {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodSummary {
    pub name: String,
    /// Pod phase: Pending, Running, Succeeded, Failed or Unknown.
    pub status: String,
}

/// Namespaces of the active cluster plus the context they were read through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOverview {
    pub context: String,
    pub namespaces: Vec<NamespaceSummary>,
}

/// Number of most recent log lines to fetch. Always positive.
///
/// Operator input is never rejected for this field: anything absent,
/// non-numeric, zero or negative becomes [`DEFAULT_TAIL_LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TailLines(i64);

impl TailLines {
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn from_value(value: i64) -> Self {
        if value > 0 {
            Self(value)
        } else {
            Self::default()
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for TailLines {
    fn default() -> Self {
        Self(DEFAULT_TAIL_LINES)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub namespace: String,
    pub pod_name: String,
    pub tail_lines: TailLines,
}

/// Log text plus the query it answers, echoed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogResult {
    pub logs: String,
    pub pod: String,
    pub namespace: String,
    pub tail_lines: TailLines,
}
