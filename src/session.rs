use serde::Deserialize;

/// The caller identity, carried as a query parameter across every page of the
/// session. A visitor is exactly one of the two roles; when both parameters
/// are present on a URL, `tno` decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Student { sno: i64 },
    Teacher { tno: i64 },
}

#[derive(Deserialize)]
pub struct IdentityQuery {
    sno: Option<i64>,
    tno: Option<i64>,
}

impl Identity {
    pub fn from_query(q: IdentityQuery) -> Option<Self> {
        q.tno
            .map(|tno| Identity::Teacher { tno })
            .or(q.sno.map(|sno| Identity::Student { sno }))
    }

    pub fn is_teacher(self) -> bool {
        matches!(self, Identity::Teacher { .. })
    }

    pub fn teacher_number(self) -> Option<i64> {
        match self {
            Identity::Teacher { tno } => Some(tno),
            Identity::Student { .. } => None,
        }
    }

    /// The query-string pair every generated link must carry.
    pub fn query_pair(self) -> (&'static str, i64) {
        match self {
            Identity::Student { sno } => ("sno", sno),
            Identity::Teacher { tno } => ("tno", tno),
        }
    }

    pub fn query(self) -> String {
        let (name, number) = self.query_pair();
        format!("{name}={number}")
    }
}
